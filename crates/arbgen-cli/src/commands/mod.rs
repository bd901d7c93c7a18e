//! CLI command implementations.

mod check;
mod coverage;
mod generate;

pub use check::{run_check, CheckArgs};
pub use coverage::{run_coverage, CoverageArgs};
pub use generate::{run_generate, GenerateArgs};
