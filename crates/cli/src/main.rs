//! Command-line interface for the Meloy Room directory tools.
//!
//! This binary is a thin entry point; all functionality lives in the
//! `meloy-cli` library crate.

fn main() -> anyhow::Result<()> {
    meloy_cli::run()
}
