//! # Batch report processing for crispex.
//!
//! Turns a directory of per-gene guide-efficiency reports (`<gene>.tsv`) into a
//! single text report listing, for every gene with known exons, up to five
//! guides that hit one of the gene's early exons.
//!
//! Exons come from any [`crispex_ensembl::ExonLocator`]; the early-exon rules
//! live in [`crispex_core::exons`].
pub mod consts;
pub mod errors;
pub mod files;
pub mod processor;
pub mod writer;

// re-exports
pub use errors::ProcessError;
pub use processor::{BatchReportProcessor, Summary, process};
