use std::path::Path;

use anyhow::Result;
use clap::ArgMatches;
use log::debug;

use crispex_ensembl::EnsemblClient;
use crispex_report::BatchReportProcessor;

use super::cli::{INPUT_ARG, OUTPUT_ARG};

pub fn run_report(matches: &ArgMatches) -> Result<()> {
    let input = matches
        .get_one::<String>(INPUT_ARG)
        .expect("A path to the report directory is required.");

    let output = matches
        .get_one::<String>(OUTPUT_ARG)
        .expect("A path to the output file is required.");

    let client = EnsemblClient::builder().finish()?;
    debug!("Using Ensembl REST API at {}", client.ensembl_api);

    let summary = BatchReportProcessor::new(client).process(Path::new(input), Path::new(output))?;
    debug!("{}", summary);

    println!(
        "Processed all .tsv files in {} and wrote the output to {}",
        input, output
    );

    Ok(())
}
