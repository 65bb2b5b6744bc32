/// Column separator of guide-efficiency reports.
pub const FIELD_DELIMITER: char = '\t';

/// Prefix stripped from the chromosome part of a coordinate.
pub const CHROMOSOME_PREFIX: &str = "chr";

/// Separator between chromosome and position in a coordinate.
pub const COORDINATE_SEPARATOR: char = ':';

/// Number of trailing characters dropped from the guide field to build its label.
pub const LABEL_SUFFIX_LEN: usize = 3;

/// 1-based index of the coordinate column.
pub const COORDINATE_COLUMN: usize = 3;

/// Exon counts up to this value round the threshold up, above it round down.
pub const ROUND_UP_MAX_EXONS: usize = 5;
