use std::cell::RefCell;
use std::collections::HashMap;

use crispex_core::models::{ExonInterval, GeneExonSet};

use super::errors::LocatorError;

///
/// Source of the flattened exon list of a gene.
///
/// Implementations make one lookup per call. Answers are never cached, so a
/// repeated call looks the gene up again; any state an implementation keeps
/// (such as the query log of [`StaticExonLocator`]) plays no part in lookups.
///
pub trait ExonLocator {
    ///
    /// Look up the exons of a gene.
    ///
    /// # Arguments
    /// - gene: gene symbol
    ///
    /// # Returns
    /// - `Ok(None)` when the source does not know the gene
    /// - the exons of all transcripts, in the source's enumeration order
    fn locate_exons(&self, gene: &str) -> Result<Option<GeneExonSet>, LocatorError>;
}

impl<T: ExonLocator + ?Sized> ExonLocator for &T {
    fn locate_exons(&self, gene: &str) -> Result<Option<GeneExonSet>, LocatorError> {
        (**self).locate_exons(gene)
    }
}

#[derive(Debug, Clone)]
enum StaticEntry {
    Exons(Vec<ExonInterval>),
    Failure(u16),
}

///
/// In-memory [`ExonLocator`] answering from a fixed table.
///
/// Genes missing from the table are reported as unknown. Every gene asked for
/// is recorded so callers can check which lookups happened.
///
#[derive(Debug, Default)]
pub struct StaticExonLocator {
    entries: HashMap<String, StaticEntry>,
    queried: RefCell<Vec<String>>,
}

impl StaticExonLocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer lookups of `gene` with `exons`.
    pub fn with_gene(mut self, gene: &str, exons: Vec<ExonInterval>) -> Self {
        self.entries
            .insert(gene.to_string(), StaticEntry::Exons(exons));
        self
    }

    /// Fail lookups of `gene` as if the service answered with `status`.
    pub fn with_failure(mut self, gene: &str, status: u16) -> Self {
        self.entries
            .insert(gene.to_string(), StaticEntry::Failure(status));
        self
    }

    /// Genes looked up so far, in call order.
    pub fn queried(&self) -> Vec<String> {
        self.queried.borrow().clone()
    }
}

impl ExonLocator for StaticExonLocator {
    fn locate_exons(&self, gene: &str) -> Result<Option<GeneExonSet>, LocatorError> {
        self.queried.borrow_mut().push(gene.to_string());

        match self.entries.get(gene) {
            Some(StaticEntry::Exons(exons)) => Ok(Some(GeneExonSet::new(gene, exons.clone()))),
            Some(StaticEntry::Failure(status)) => Err(LocatorError::Remote {
                status: *status,
                url: format!("static://{gene}"),
            }),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[fixture]
    fn locator() -> StaticExonLocator {
        StaticExonLocator::new()
            .with_gene("rx3", vec![ExonInterval::new(1, 100)])
            .with_gene("empty", vec![])
            .with_failure("flaky", 503)
    }

    #[rstest]
    fn test_known_gene(locator: StaticExonLocator) {
        let gene = locator.locate_exons("rx3").unwrap().unwrap();
        assert_eq!(gene.exons, vec![ExonInterval::new(1, 100)]);
    }

    #[rstest]
    fn test_unknown_gene(locator: StaticExonLocator) {
        assert!(locator.locate_exons("RX3").unwrap().is_none());
    }

    #[rstest]
    fn test_empty_gene(locator: StaticExonLocator) {
        assert!(locator.locate_exons("empty").unwrap().unwrap().is_empty());
    }

    #[rstest]
    fn test_failure(locator: StaticExonLocator) {
        let err = locator.locate_exons("flaky").unwrap_err();
        assert!(matches!(err, LocatorError::Remote { status: 503, .. }));
    }

    #[rstest]
    fn test_records_queries_through_reference(locator: StaticExonLocator) {
        let by_ref = &locator;
        by_ref.locate_exons("rx3").unwrap();
        by_ref.locate_exons("missing").unwrap();
        assert_eq!(locator.queried(), vec!["rx3", "missing"]);
    }

    #[rstest]
    fn test_query_log_does_not_change_answers(locator: StaticExonLocator) {
        let first = locator.locate_exons("rx3").unwrap();
        let second = locator.locate_exons("rx3").unwrap();
        assert_eq!(first, second);
        assert!(locator.locate_exons("missing").unwrap().is_none());
        assert!(locator.locate_exons("missing").unwrap().is_none());
        assert_eq!(locator.queried(), vec!["rx3", "rx3", "missing", "missing"]);
    }
}
