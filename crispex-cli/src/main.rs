mod report;

use std::io::Write;

use clap::Command;
use env_logger::Env;

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const BIN_NAME: &str = "crispex";
    pub const DEFAULT_LOG_LEVEL: &str = "warn";
    pub const FAILURE_EXIT_CODE: i32 = 1;
}

fn build_parser() -> Command {
    let cmd = Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .about("Annotate CRISPR guide-efficiency reports with the exon each guide targets and keep up to five guides per gene that hit its early exons.");

    report::cli::add_report_args(cmd)
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or(consts::DEFAULT_LOG_LEVEL))
        .init();

    let matches = build_parser().get_matches();

    let code = exit_code(report::handlers::run_report(&matches), &mut std::io::stderr());
    if code != 0 {
        std::process::exit(code);
    }
}

///
/// Turn the outcome of a run into a process exit code, writing the error line
/// to `err_out` on failure.
///
fn exit_code<W: Write>(result: anyhow::Result<()>, err_out: &mut W) -> i32 {
    match result {
        Ok(()) => 0,
        Err(err) => {
            let _ = writeln!(err_out, "An error occurred: {}", err);
            consts::FAILURE_EXIT_CODE
        }
    }
}
