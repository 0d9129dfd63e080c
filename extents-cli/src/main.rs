mod count;

use anyhow::Result;
use clap::Command;

use extents_core::ExtentSourceError;

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const BIN_NAME: &str = "extents";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .about("Count how many closed integer extents contain each of a stream of query points.")
        .subcommand_required(true)
        .subcommand(count::cli::create_count_cli())
}

/// Missing or unreadable input sources exit with 1; everything else that
/// goes wrong (malformed integers, failed self-checks) exits with 2.
fn exit_code(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<ExtentSourceError>() {
        Some(ExtentSourceError::FileReadError(_)) => 1,
        _ => 2,
    }
}

fn main() {
    let app = build_parser();
    let matches = app.get_matches();

    let result: Result<()> = match matches.subcommand() {
        //
        // COUNT
        //
        Some((count::cli::COUNT_CMD, matches)) => count::handlers::run_count(matches),

        _ => unreachable!("Subcommand not found"),
    };

    if let Err(err) = result {
        eprintln!("{err:#}");
        std::process::exit(exit_code(&err));
    }
}
