//! Decoding of the `/lookup/symbol` response.
//!
//! Only the parts needed for exon numbering are modelled; every other field
//! Ensembl sends (ids, biotypes, strands, ...) is ignored by serde.
use serde::Deserialize;
use serde_json::Value;

use crispex_core::models::{ExonInterval, GeneExonSet};

use super::consts::{ERROR_KEY, NOT_FOUND_STATUSES};
use super::errors::LocatorError;

/// Expanded gene lookup.
#[derive(Debug, Deserialize)]
pub struct LookupResponse {
    #[serde(rename = "Transcript", default)]
    pub transcripts: Vec<Transcript>,
}

#[derive(Debug, Deserialize)]
pub struct Transcript {
    #[serde(rename = "Exon", default)]
    pub exons: Vec<ExonInterval>,
}

impl LookupResponse {
    /// Flatten the exons of all transcripts, transcripts first, then exons
    /// within each transcript.
    pub fn into_exons(self) -> Vec<ExonInterval> {
        self.transcripts
            .into_iter()
            .flat_map(|transcript| transcript.exons)
            .collect()
    }
}

///
/// Interpret the status and body of a lookup call.
///
/// A JSON object carrying an `error` key means the symbol is unknown when the
/// status is a success, 400 or 404; Ensembl answers unknown symbols with HTTP
/// 400. Every other non-success status is a remote failure, error payload or
/// not, so rate limiting (429) and server errors abort the run.
///
/// # Arguments
/// - gene: the symbol that was looked up
/// - url: the requested url, for error reporting
/// - status: HTTP status code
/// - body: raw response body
///
/// # Returns
/// - `Ok(None)` for unknown genes, otherwise the flattened exon list
///
pub fn decode_lookup_response(
    gene: &str,
    url: &str,
    status: u16,
    body: &str,
) -> Result<Option<GeneExonSet>, LocatorError> {
    let success = (200..300).contains(&status);

    let value: Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(_) if !success => {
            return Err(LocatorError::Remote {
                status,
                url: url.to_string(),
            });
        }
        Err(source) => {
            return Err(LocatorError::Decode {
                gene: gene.to_string(),
                source,
            });
        }
    };

    if value.get(ERROR_KEY).is_some() && (success || NOT_FOUND_STATUSES.contains(&status)) {
        return Ok(None);
    }

    if !success {
        return Err(LocatorError::Remote {
            status,
            url: url.to_string(),
        });
    }

    let response: LookupResponse =
        serde_json::from_value(value).map_err(|source| LocatorError::Decode {
            gene: gene.to_string(),
            source,
        })?;

    Ok(Some(GeneExonSet::new(gene, response.into_exons())))
}
