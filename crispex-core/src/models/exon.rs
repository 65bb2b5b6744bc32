use std::fmt::{self, Display};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::exons::{classify, exon_threshold};

///
/// One exon of a transcript, 1-based with both ends inclusive.
///
/// `start <= end` is expected but not checked.
///
#[derive(Eq, PartialEq, Hash, Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ExonInterval {
    pub start: u64,
    pub end: u64,
}

impl ExonInterval {
    pub fn new(start: u64, end: u64) -> Self {
        ExonInterval { start, end }
    }

    ///
    /// Whether `position` lies within the exon, ends included.
    ///
    #[inline]
    pub fn contains(&self, position: u64) -> bool {
        self.start <= position && position <= self.end
    }
}

impl Display for ExonInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

///
/// The exons of every transcript of a gene, flattened in the order the
/// annotation source enumerated them (transcripts, then exons).
///
/// The list is neither sorted nor deduplicated, so the same exon can show up
/// once per transcript and intervals may overlap.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneExonSet {
    pub gene: String,
    pub exons: Vec<ExonInterval>,
}

impl GeneExonSet {
    pub fn new(gene: impl Into<String>, exons: Vec<ExonInterval>) -> Self {
        GeneExonSet {
            gene: gene.into(),
            exons,
        }
    }

    pub fn len(&self) -> usize {
        self.exons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exons.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ExonInterval> {
        self.exons.iter()
    }

    ///
    /// 1-based ordinal of the first exon containing `position`.
    ///
    /// Negative positions lie outside every exon.
    ///
    pub fn exon_number(&self, position: i64) -> Option<usize> {
        u64::try_from(position)
            .ok()
            .and_then(|position| classify(&self.exons, position))
    }

    ///
    /// Highest exon ordinal that still counts as an early exon for this gene.
    ///
    pub fn threshold(&self) -> usize {
        exon_threshold(self.len())
    }
}

impl<'a> IntoIterator for &'a GeneExonSet {
    type Item = &'a ExonInterval;
    type IntoIter = std::slice::Iter<'a, ExonInterval>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
