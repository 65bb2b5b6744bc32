//! Early-exon rules: which exon a coordinate falls into, and how many of a
//! gene's exons count as "early".
use crate::consts::ROUND_UP_MAX_EXONS;
use crate::models::ExonInterval;

///
/// Return the 1-based ordinal of the first exon that contains `position`.
///
/// Exons are scanned in the order given. When intervals overlap the earliest
/// one wins, it is never the tightest or the lowest by coordinate.
///
/// # Arguments
/// - exons: the exon list of one gene, in annotation order
/// - position: 1-based genomic coordinate
///
/// # Returns
/// - `None` when no exon contains the position or the list is empty
///
pub fn classify(exons: &[ExonInterval], position: u64) -> Option<usize> {
    exons
        .iter()
        .position(|exon| exon.contains(position))
        .map(|idx| idx + 1)
}

///
/// Cutoff ordinal for early exons given the total exon count.
///
/// Genes with five exons or fewer round half the count up, larger genes round
/// it down. A count of zero yields zero, so no ordinal can pass.
///
pub fn exon_threshold(exon_count: usize) -> usize {
    if exon_count <= ROUND_UP_MAX_EXONS {
        exon_count.div_ceil(2)
    } else {
        exon_count / 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[fixture]
    fn overlapping_exons() -> Vec<ExonInterval> {
        vec![
            ExonInterval::new(10, 20),
            ExonInterval::new(25, 30),
            ExonInterval::new(15, 18),
        ]
    }

    #[rstest]
    #[case(16, Some(1))]
    #[case(26, Some(2))]
    #[case(5, None)]
    #[case(10, Some(1))]
    #[case(30, Some(2))]
    #[case(22, None)]
    fn test_classify(
        overlapping_exons: Vec<ExonInterval>,
        #[case] position: u64,
        #[case] expected: Option<usize>,
    ) {
        assert_eq!(classify(&overlapping_exons, position), expected);
    }

    #[rstest]
    fn test_classify_empty() {
        assert_eq!(classify(&[], 1), None);
    }

    #[rstest]
    fn test_classify_keeps_annotation_order() {
        // not sorted by coordinate: the later interval is listed first
        let exons = vec![ExonInterval::new(500, 600), ExonInterval::new(100, 200)];
        assert_eq!(classify(&exons, 150), Some(2));
        assert_eq!(classify(&exons, 550), Some(1));
    }

    #[rstest]
    #[case(0, 0)]
    #[case(1, 1)]
    #[case(2, 1)]
    #[case(3, 2)]
    #[case(4, 2)]
    #[case(5, 3)]
    #[case(6, 3)]
    #[case(7, 3)]
    #[case(8, 4)]
    #[case(13, 6)]
    fn test_exon_threshold(#[case] exon_count: usize, #[case] expected: usize) {
        assert_eq!(exon_threshold(exon_count), expected);
    }

    #[rstest]
    fn test_exon_threshold_rounding_switches_after_five() {
        for n in 1..=5 {
            assert_eq!(exon_threshold(n), (n as f64 / 2.0).ceil() as usize);
        }
        for n in 6..=40 {
            assert_eq!(exon_threshold(n), n / 2);
        }
    }
}
