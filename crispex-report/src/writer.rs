use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crispex_core::models::GuideRecord;

use super::consts::UNDERLINE_CHAR;

///
/// Append-only writer of the plain text report.
///
/// Each gene gets a block: its name, an underline of the same length, one
/// line per kept guide and a closing blank line.
///
pub struct ReportWriter<W: Write> {
    inner: W,
}

impl ReportWriter<BufWriter<File>> {
    ///
    /// Create (or truncate) the report file at `path`.
    ///
    pub fn create<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let file = File::create(path)?;
        Ok(ReportWriter::new(BufWriter::new(file)))
    }
}

impl<W: Write> ReportWriter<W> {
    pub fn new(inner: W) -> Self {
        ReportWriter { inner }
    }

    pub fn write_header(&mut self, gene: &str) -> io::Result<()> {
        let underline: String = std::iter::repeat_n(UNDERLINE_CHAR, gene.chars().count()).collect();
        writeln!(self.inner, "{}", gene)?;
        writeln!(self.inner, "{}", underline)
    }

    pub fn write_guide(&mut self, record: &GuideRecord, exon_number: usize) -> io::Result<()> {
        writeln!(self.inner, "{}", format_guide_line(record, exon_number))
    }

    pub fn close_block(&mut self) -> io::Result<()> {
        writeln!(self.inner)
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

///
/// Render one kept guide, without the trailing newline.
///
pub fn format_guide_line(record: &GuideRecord, exon_number: usize) -> String {
    format!(
        "[{}]  Efficiency Score: [{}]  Exon number: {}",
        record.label, record.score, exon_number
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[fixture]
    fn record() -> GuideRecord {
        GuideRecord {
            chromosome: "7".to_string(),
            position: 3045571,
            label: "GGTACCTGAGCTTAGCGTAG".to_string(),
            score: "0.71".to_string(),
        }
    }

    #[rstest]
    fn test_format_guide_line(record: GuideRecord) {
        assert_eq!(
            format_guide_line(&record, 2),
            "[GGTACCTGAGCTTAGCGTAG]  Efficiency Score: [0.71]  Exon number: 2"
        );
    }

    #[rstest]
    fn test_block_layout(record: GuideRecord) {
        let mut writer = ReportWriter::new(Vec::new());
        writer.write_header("pax6a").unwrap();
        writer.write_guide(&record, 1).unwrap();
        writer.close_block().unwrap();

        let text = String::from_utf8(writer.into_inner()).unwrap();
        assert_eq!(
            text,
            "pax6a\n=====\n[GGTACCTGAGCTTAGCGTAG]  Efficiency Score: [0.71]  Exon number: 1\n\n"
        );
    }

    #[rstest]
    fn test_empty_block() {
        let mut writer = ReportWriter::new(Vec::new());
        writer.write_header("rx3").unwrap();
        writer.close_block().unwrap();

        let text = String::from_utf8(writer.into_inner()).unwrap();
        assert_eq!(text, "rx3\n===\n\n");
    }
}
