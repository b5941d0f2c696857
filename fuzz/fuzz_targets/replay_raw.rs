//! Raw-text fuzzer for the statement replay.
//!
//! Feeds arbitrary strings through `parse_ddl_file`. Malformed input may be
//! rejected, but must never panic, and a trailing `drop table` must not change
//! a successful result.

use ddl_replay::testing::run_raw_input_test;
use honggfuzz::fuzz;

fn main() {
    loop {
        fuzz!(|input: String| {
            run_raw_input_test(&input);
        });
    }
}
