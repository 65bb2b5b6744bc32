use std::num::IntErrorKind;
use std::str::FromStr;

use crate::consts::{CHROMOSOME_PREFIX, COORDINATE_COLUMN, COORDINATE_SEPARATOR};
use crate::errors::RecordError;
use crate::utils::{split_fields, truncate_label};

///
/// One data row of a guide-efficiency report.
///
/// Only the columns the report needs are kept: the guide label (second
/// column, shortened), the target coordinate (third column) and the
/// efficiency score (last column, left as text so it is echoed verbatim).
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuideRecord {
    pub chromosome: String,
    pub position: i64,
    pub label: String,
    pub score: String,
}

impl GuideRecord {
    ///
    /// Build a record from the already split columns of a row.
    ///
    pub fn from_fields(fields: &[&str]) -> Result<Self, RecordError> {
        if fields.len() < COORDINATE_COLUMN {
            return Err(RecordError::MissingColumns {
                expected: COORDINATE_COLUMN,
                found: fields.len(),
            });
        }

        let (chromosome, position) = parse_coordinate(fields[COORDINATE_COLUMN - 1])?;
        let label = truncate_label(fields[1]).to_string();
        // the length check above guarantees a last column
        let score = fields[fields.len() - 1].to_string();

        Ok(GuideRecord {
            chromosome,
            position,
            label,
            score,
        })
    }
}

impl FromStr for GuideRecord {
    type Err = RecordError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let fields = split_fields(line);
        GuideRecord::from_fields(&fields)
    }
}

///
/// Split `chr<chromosome>:<position>` into its chromosome (prefix removed)
/// and integer position.
///
/// Exactly one separator is accepted. The position may carry a sign; integers
/// beyond the `i64` range saturate, they lie outside every exon either way.
///
pub fn parse_coordinate(coordinate: &str) -> Result<(String, i64), RecordError> {
    let mut parts = coordinate.split(COORDINATE_SEPARATOR);
    let (chromosome, position) = match (parts.next(), parts.next(), parts.next()) {
        (Some(chromosome), Some(position), None) => (chromosome, position),
        _ => return Err(RecordError::MalformedCoordinate(coordinate.to_string())),
    };

    let chromosome = chromosome
        .strip_prefix(CHROMOSOME_PREFIX)
        .unwrap_or(chromosome)
        .to_string();

    let position = match position.trim().parse::<i64>() {
        Ok(position) => position,
        Err(err) => match err.kind() {
            IntErrorKind::PosOverflow => i64::MAX,
            IntErrorKind::NegOverflow => i64::MIN,
            _ => return Err(RecordError::InvalidPosition(position.to_string())),
        },
    };

    Ok((chromosome, position))
}
