use std::fmt::{self, Display};
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info};

use crispex_core::models::{GeneExonSet, GuideRecord};
use crispex_core::utils::gene_name_from_path;
use crispex_ensembl::ExonLocator;

use super::consts::{MAX_GUIDES_PER_GENE, PROGRESS_MESSAGE, PROGRESS_TEMPLATE};
use super::errors::{ProcessError, Result};
use super::files::list_report_files;
use super::writer::ReportWriter;

///
/// Counts collected over one batch run.
///
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Summary {
    /// Report files found in the input directory.
    pub files: usize,
    /// Genes that got a block in the output.
    pub genes_written: usize,
    /// Genes skipped because no exons were found.
    pub genes_skipped: usize,
    /// Guide lines written over all blocks.
    pub guides_kept: usize,
}

impl Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} files, {} genes written, {} genes skipped, {} guides kept",
            self.files, self.genes_written, self.genes_skipped, self.guides_kept
        )
    }
}

enum FileOutcome {
    Skipped,
    Written { kept: usize },
}

///
/// Drives a batch run: one report file per gene, looked up through an
/// [`ExonLocator`], filtered to early-exon guides and appended to a single
/// output report.
///
/// Files are handled one after the other. The first error of any kind stops
/// the run; blocks written before it stay in the output.
///
/// # Examples
///
/// ```rust,no_run
/// use std::path::Path;
/// use crispex_ensembl::EnsemblClient;
/// use crispex_report::BatchReportProcessor;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = EnsemblClient::builder().finish()?;
/// let summary = BatchReportProcessor::new(client)
///     .process(Path::new("reports/"), Path::new("early_exons.txt"))?;
/// println!("{}", summary);
/// # Ok(())
/// # }
/// ```
pub struct BatchReportProcessor<L: ExonLocator> {
    locator: L,
    show_progress: bool,
}

impl<L: ExonLocator> BatchReportProcessor<L> {
    pub fn new(locator: L) -> Self {
        BatchReportProcessor {
            locator,
            show_progress: true,
        }
    }

    /// Draw a progress bar and print skip notices (on by default).
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    pub fn locator(&self) -> &L {
        &self.locator
    }

    ///
    /// Process every report in `input_dir` and write the early-exon guides to
    /// `output`, which is created or truncated.
    ///
    /// # Arguments
    /// - input_dir: directory of `<gene>.tsv` reports
    /// - output: path of the text report to write
    ///
    pub fn process(&self, input_dir: &Path, output: &Path) -> Result<Summary> {
        let reports =
            list_report_files(input_dir).map_err(|source| ProcessError::InputDirectory {
                path: input_dir.to_path_buf(),
                source,
            })?;

        let mut writer = ReportWriter::create(output).map_err(|source| ProcessError::WriteOutput {
            path: output.to_path_buf(),
            source,
        })?;

        let bar = self.progress_bar(reports.len());
        let outcome = self.process_reports(&reports, &mut writer, output, &bar);

        // keep whatever was written for earlier genes, even on failure
        let flushed = writer.flush().map_err(|source| ProcessError::WriteOutput {
            path: output.to_path_buf(),
            source,
        });

        bar.finish_and_clear();

        let summary = outcome?;
        flushed?;

        info!("{}", summary);
        Ok(summary)
    }

    fn progress_bar(&self, len: usize) -> ProgressBar {
        if !self.show_progress {
            return ProgressBar::hidden();
        }

        let bar = ProgressBar::new(len as u64);
        if let Ok(style) = ProgressStyle::with_template(PROGRESS_TEMPLATE) {
            bar.set_style(style.progress_chars("##-"));
        }
        bar.set_message(PROGRESS_MESSAGE);
        bar
    }

    fn process_reports<W: Write>(
        &self,
        reports: &[PathBuf],
        writer: &mut ReportWriter<W>,
        output: &Path,
        bar: &ProgressBar,
    ) -> Result<Summary> {
        let mut summary = Summary {
            files: reports.len(),
            ..Summary::default()
        };

        for report in reports {
            match self.process_report(report, writer, output, bar)? {
                FileOutcome::Skipped => summary.genes_skipped += 1,
                FileOutcome::Written { kept } => {
                    summary.genes_written += 1;
                    summary.guides_kept += kept;
                }
            }
            bar.inc(1);
        }

        Ok(summary)
    }

    fn process_report<W: Write>(
        &self,
        report: &Path,
        writer: &mut ReportWriter<W>,
        output: &Path,
        bar: &ProgressBar,
    ) -> Result<FileOutcome> {
        let gene_name = gene_name_from_path(report)
            .ok_or_else(|| ProcessError::InvalidGeneName(report.to_path_buf()))?;

        let gene = match self.locator.locate_exons(&gene_name)? {
            Some(gene) if !gene.is_empty() => gene,
            _ => {
                let notice = skip_notice(&gene_name, report);
                if self.show_progress {
                    bar.suspend(|| println!("{}", notice));
                }
                debug!("{}", notice);
                return Ok(FileOutcome::Skipped);
            }
        };

        let file = File::open(report).map_err(|source| ProcessError::ReadReport {
            path: report.to_path_buf(),
            source,
        })?;

        let write_err = |source: std::io::Error| ProcessError::WriteOutput {
            path: output.to_path_buf(),
            source,
        };

        writer.write_header(&gene_name).map_err(write_err)?;
        let kept = scan_report(report, BufReader::new(file), &gene, writer, output)?;
        writer.close_block().map_err(write_err)?;

        debug!(
            "{}: {} exons, threshold {}, {} guides kept",
            gene_name,
            gene.len(),
            gene.threshold(),
            kept
        );

        Ok(FileOutcome::Written { kept })
    }
}

///
/// Line printed when a gene has no exons and its report is skipped.
///
pub fn skip_notice(gene_name: &str, report: &Path) -> String {
    let file_name = report
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    format!(
        "No exons found for gene {}. Skipping file {}.",
        gene_name, file_name
    )
}

///
/// Write the early-exon guides of one report and return how many were kept.
///
/// The first line is a header and is discarded. Reading stops as soon as
/// [`MAX_GUIDES_PER_GENE`] guides are kept, so later lines are never parsed.
///
/// # Arguments
/// - report: path of the report, for error messages
/// - reader: the report contents
/// - gene: exons of the report's gene
/// - writer: output report
/// - output: path of the output report, for error messages
///
pub fn scan_report<R: BufRead, W: Write>(
    report: &Path,
    reader: R,
    gene: &GeneExonSet,
    writer: &mut ReportWriter<W>,
    output: &Path,
) -> Result<usize> {
    let threshold = gene.threshold();
    let mut kept = 0;

    // the header is line 1
    for (idx, line) in reader.lines().enumerate().skip(1) {
        let line = line.map_err(|source| ProcessError::ReadReport {
            path: report.to_path_buf(),
            source,
        })?;
        let line = line.trim_end_matches('\r');

        if line.is_empty() {
            continue;
        }

        let record =
            GuideRecord::from_str(line).map_err(|source| ProcessError::MalformedRecord {
                path: report.to_path_buf(),
                line: idx + 1,
                source,
            })?;

        match gene.exon_number(record.position) {
            Some(exon_number) if exon_number <= threshold => {
                writer
                    .write_guide(&record, exon_number)
                    .map_err(|source| ProcessError::WriteOutput {
                        path: output.to_path_buf(),
                        source,
                    })?;
                kept += 1;
            }
            _ => continue,
        }

        if kept == MAX_GUIDES_PER_GENE {
            break;
        }
    }

    Ok(kept)
}

///
/// Run a batch with the given locator, drawing a progress bar.
///
pub fn process<L: ExonLocator>(input_dir: &Path, output: &Path, locator: L) -> Result<Summary> {
    BatchReportProcessor::new(locator).process(input_dir, output)
}
