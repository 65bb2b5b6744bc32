//! # Exon lookup for crispex.
//!
//! The [`locator::ExonLocator`] trait is the seam between the report processor
//! and the annotation source. [`client::EnsemblClient`] implements it against
//! the Ensembl REST API; [`locator::StaticExonLocator`] answers from memory.
pub mod client;
pub mod consts;
pub mod errors;
pub mod locator;
pub mod response;
pub mod utils;

// re-exports
pub use client::EnsemblClient;
pub use errors::LocatorError;
pub use locator::{ExonLocator, StaticExonLocator};
