//! Differential fuzzer for the statement replay.
//!
//! Generates sequences of well-formed statements, renders them as a DDL
//! script, and checks that replaying the script yields the same table as
//! applying the statements directly to the model.

use ddl_replay::testing::{FuzzStatement, run_differential_test};
use honggfuzz::fuzz;

fn main() {
    loop {
        fuzz!(|statements: Vec<FuzzStatement>| {
            run_differential_test(&statements);
        });
    }
}
