//! Interactive recommendation shell.
//!
//! A bare line is treated as a user name; lines starting with '.' are
//! commands (see `.help`).

use colored::Colorize;
use instant::Instant;
use movierec_core::{DataConfig, RecommendParams, SnapshotStore};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::output::{print_recommendations, OutputFormat};
use crate::repl_commands::{handle_command, CommandResult};

/// Session settings, adjustable with REPL commands.
#[derive(Debug, Clone)]
pub struct ReplConfig {
    /// Parameters for each request.
    pub params: RecommendParams,
    /// Output format.
    pub format: OutputFormat,
    /// Print elapsed time after each request.
    pub timing: bool,
    /// Files re-read by `.reload`.
    pub data: DataConfig,
}

const HISTORY_FILE: &str = ".movierec_history";

fn history_path() -> Option<std::path::PathBuf> {
    dirs::home_dir().map(|home| home.join(HISTORY_FILE))
}

/// Runs the REPL until `.quit` or end of input.
pub fn run(store: &SnapshotStore, mut config: ReplConfig) -> anyhow::Result<()> {
    let mut rl = DefaultEditor::new()?;
    let history = history_path();
    if let Some(path) = &history {
        // Missing history on first run is expected
        let _ = rl.load_history(path);
    }

    println!(
        "{} v{} ({} users loaded). Type .help for commands.\n",
        "movierec".bold(),
        env!("CARGO_PKG_VERSION"),
        store.current().dataset().matrix.user_count()
    );

    loop {
        match rl.readline("movierec> ") {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(line);

                if line.starts_with('.') {
                    match handle_command(store, line, &mut config) {
                        CommandResult::Continue => {}
                        CommandResult::Quit => break,
                        CommandResult::Error(msg) => eprintln!("{} {}\n", "Error:".red(), msg),
                    }
                } else {
                    recommend_line(store, line, &config);
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("Use .quit to exit");
            }
            Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        }
    }

    if let Some(path) = &history {
        if let Err(err) = rl.save_history(path) {
            tracing::debug!(error = %err, "Could not save REPL history");
        }
    }
    println!("Bye!");
    Ok(())
}

fn recommend_line(store: &SnapshotStore, name: &str, config: &ReplConfig) {
    let start = Instant::now();
    let snapshot = store.current();
    let result = snapshot
        .recommender()
        .recommend_for_name(name, &config.params);

    match result {
        Ok(recs) => {
            if let Err(err) = print_recommendations(&recs, config.format) {
                eprintln!("{} {}", "Error:".red(), err);
            }
            if config.timing {
                println!("Time: {:.3} ms", start.elapsed().as_secs_f64() * 1000.0);
            }
            println!();
        }
        Err(err) => eprintln!("{} {}\n", "Error:".red(), err),
    }
}
