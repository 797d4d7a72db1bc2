//! Fuzz target for the headerless ratings reader.
//!
//! Arbitrary bytes must produce either records or a CSV error, never a panic.
//! Records that parse are pivoted to make sure the matrix builder accepts them.
//!
//! # Running
//!
//! ```bash
//! cd fuzz
//! cargo +nightly fuzz run fuzz_ratings_csv
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;
use movierec_core::data::{pivot, read_ratings};

fuzz_target!(|data: &[u8]| {
    if let Ok(records) = read_ratings(data) {
        let _ = pivot(&records);
    }
});
