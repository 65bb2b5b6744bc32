use clap::{Arg, Command};

pub const INPUT_ARG: &str = "input";
pub const OUTPUT_ARG: &str = "output";

pub fn add_report_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new(INPUT_ARG)
            .long("input")
            .short('i')
            .required(true)
            .value_name("DIR")
            .help("Path to the directory containing one .tsv guide report per gene"),
    )
    .arg(
        Arg::new(OUTPUT_ARG)
            .long("output")
            .short('o')
            .required(true)
            .value_name("FILE")
            .help("Path to the output text file"),
    )
}
