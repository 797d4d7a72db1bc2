//! REPL command handlers.
//!
//! Each command is implemented as a separate function for maintainability.

use colored::Colorize;
use movierec_core::{SelfSimilarity, SnapshotStore};

use crate::output::{print_users, OutputFormat};
use crate::repl::ReplConfig;

/// Result of a REPL command execution.
#[derive(Debug, PartialEq, Eq)]
pub enum CommandResult {
    Continue,
    Quit,
    Error(String),
}

/// Handle a REPL command (line starting with '.')
pub fn handle_command(store: &SnapshotStore, line: &str, config: &mut ReplConfig) -> CommandResult {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let cmd = parts.first().map(|s| s.to_lowercase()).unwrap_or_default();

    match cmd.as_str() {
        ".quit" | ".exit" | ".q" => CommandResult::Quit,
        ".help" | ".h" => {
            print_help();
            CommandResult::Continue
        }
        ".users" => cmd_users(store, config),
        ".k" => cmd_k(config, &parts),
        ".top" => cmd_top(config, &parts),
        ".self" => cmd_self(config, &parts),
        ".format" => cmd_format(config, &parts),
        ".timing" => cmd_timing(config, &parts),
        ".reload" => cmd_reload(store, config),
        ".info" => cmd_info(store, config),
        ".clear" => cmd_clear(),
        _ => CommandResult::Error(format!("Unknown command: {cmd}")),
    }
}

fn print_help() {
    println!("{}", "Commands:".bold());
    println!("  <name>                   Recommend movies for a user name");
    println!("  .users                   List known user names");
    println!("  .k <n>                   Set number of similar users");
    println!("  .top <n>                 Set number of recommendations");
    println!("  .self include|exclude    Count the user among its neighbours");
    println!("  .format table|json       Set output format");
    println!("  .timing on|off           Show request time");
    println!("  .reload                  Rebuild the model from the data files");
    println!("  .info                    Show model and session settings");
    println!("  .clear                   Clear the screen");
    println!("  .quit                    Exit");
    println!();
}

fn cmd_users(store: &SnapshotStore, config: &ReplConfig) -> CommandResult {
    let snapshot = store.current();
    let names = snapshot.recommender().user_names();
    match print_users(&names, config.format) {
        Ok(()) => {
            println!();
            CommandResult::Continue
        }
        Err(err) => CommandResult::Error(err.to_string()),
    }
}

fn parse_count(parts: &[&str], usage: &str) -> Result<Option<usize>, String> {
    match parts.get(1) {
        None => Ok(None),
        Some(raw) => raw
            .parse::<usize>()
            .map(Some)
            .map_err(|_| format!("Use: {usage}")),
    }
}

fn cmd_k(config: &mut ReplConfig, parts: &[&str]) -> CommandResult {
    match parse_count(parts, ".k <n>") {
        Ok(None) => println!("k = {}", config.params.k),
        Ok(Some(0)) => return CommandResult::Error("k must be at least 1".to_string()),
        Ok(Some(k)) => {
            config.params.k = k;
            println!("k = {k}");
        }
        Err(msg) => return CommandResult::Error(msg),
    }
    println!();
    CommandResult::Continue
}

fn cmd_top(config: &mut ReplConfig, parts: &[&str]) -> CommandResult {
    match parse_count(parts, ".top <n>") {
        Ok(None) => println!("top_n = {}", config.params.top_n),
        Ok(Some(top_n)) => {
            config.params.top_n = top_n;
            println!("top_n = {top_n}");
        }
        Err(msg) => return CommandResult::Error(msg),
    }
    println!();
    CommandResult::Continue
}

fn cmd_self(config: &mut ReplConfig, parts: &[&str]) -> CommandResult {
    if parts.len() < 2 {
        println!("Self-similarity: {:?}", config.params.self_similarity);
    } else {
        config.params.self_similarity = match parts[1].to_lowercase().as_str() {
            "include" | "on" => SelfSimilarity::Include,
            "exclude" | "off" => SelfSimilarity::Exclude,
            _ => return CommandResult::Error("Use: .self include|exclude".to_string()),
        };
        println!("Self-similarity: {:?}", config.params.self_similarity);
    }
    println!();
    CommandResult::Continue
}

fn cmd_format(config: &mut ReplConfig, parts: &[&str]) -> CommandResult {
    if parts.len() < 2 {
        println!("Format is {:?}", config.format);
    } else {
        match parts[1].to_lowercase().as_str() {
            "table" => {
                config.format = OutputFormat::Table;
                println!("Format: table");
            }
            "json" => {
                config.format = OutputFormat::Json;
                println!("Format: json");
            }
            _ => {
                return CommandResult::Error("Use: .format table|json".to_string());
            }
        }
    }
    println!();
    CommandResult::Continue
}

fn cmd_timing(config: &mut ReplConfig, parts: &[&str]) -> CommandResult {
    if parts.len() < 2 {
        println!("Timing is {}", if config.timing { "ON" } else { "OFF" });
    } else {
        match parts[1].to_lowercase().as_str() {
            "on" | "true" | "1" => {
                config.timing = true;
                println!("Timing ON");
            }
            "off" | "false" | "0" => {
                config.timing = false;
                println!("Timing OFF");
            }
            _ => {
                return CommandResult::Error("Use: .timing on|off".to_string());
            }
        }
    }
    println!();
    CommandResult::Continue
}

fn cmd_reload(store: &SnapshotStore, config: &ReplConfig) -> CommandResult {
    match store.reload(&config.data) {
        Ok(version) => {
            let snapshot = store.current();
            println!(
                "Reloaded: snapshot v{} ({} users, {} movies)\n",
                version.to_string().green(),
                snapshot.dataset().matrix.user_count(),
                snapshot.dataset().matrix.item_count()
            );
            CommandResult::Continue
        }
        Err(err) => CommandResult::Error(format!("Reload failed, keeping current model: {err}")),
    }
}

fn cmd_info(store: &SnapshotStore, config: &ReplConfig) -> CommandResult {
    let snapshot = store.current();
    let dataset = snapshot.dataset();
    println!("\n{}", "Model".bold().underline());
    println!("  {} {}", "Snapshot:".cyan(), snapshot.version());
    println!("  {} {}", "Users:".cyan(), dataset.matrix.user_count());
    println!("  {} {}", "Movies:".cyan(), dataset.matrix.item_count());
    println!("  {} {}", "Titles:".cyan(), dataset.catalog.len());
    println!("\n{}", "Session".bold().underline());
    println!("  {} {}", "k:".cyan(), config.params.k);
    println!("  {} {}", "top_n:".cyan(), config.params.top_n);
    println!(
        "  {} {:?}",
        "Self-similarity:".cyan(),
        config.params.self_similarity
    );
    println!("  {} {:?}", "Format:".cyan(), config.format);
    println!();
    CommandResult::Continue
}

fn cmd_clear() -> CommandResult {
    print!("\x1B[2J\x1B[1;1H");
    CommandResult::Continue
}
