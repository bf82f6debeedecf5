//! notestitch CLI entrypoint.
//!
//! Provides a thin wrapper over the `cli` module: parse args, stitch the
//! directory, and exit with appropriate status.
//! For programmatic use, prefer the library API (`notestitch::api`).

mod cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = cli::CliArgs::parse_with_legacy_flags();
    cli::run(args)
}
