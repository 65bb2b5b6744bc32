//! # Core models and logic for crispex.
//!
//! This crate holds everything that does not need a network or a progress bar:
//!
//! - [`models::ExonInterval`] and [`models::GeneExonSet`]: the flattened exon structure of a gene
//! - [`models::GuideRecord`]: one data row of a guide-efficiency report
//! - [`exons::classify`] and [`exons::exon_threshold`]: the early-exon filtering rules
//!
//! # Example
//!
//! ```
//! use crispex_core::exons::{classify, exon_threshold};
//! use crispex_core::models::ExonInterval;
//!
//! let exons = vec![ExonInterval::new(10, 20), ExonInterval::new(25, 30)];
//!
//! assert_eq!(classify(&exons, 26), Some(2));
//! assert_eq!(exon_threshold(exons.len()), 1);
//! ```
pub mod consts;
pub mod errors;
pub mod exons;
pub mod models;
pub mod utils;

// re-exports
pub use errors::RecordError;
pub use exons::{classify, exon_threshold};
