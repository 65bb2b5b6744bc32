//! Constants for talking to the Ensembl REST API.
//!
//! This module defines the environment variable name, the default endpoint and
//! the fixed target organism used by the exon lookup.

/// Environment variable name for setting the Ensembl REST endpoint.
///
/// When set, this overrides the default API endpoint (`https://rest.ensembl.org`).
///
/// # Example
///
/// ```bash
/// export ENSEMBL_REST_API=https://grch37.rest.ensembl.org
/// ```
pub const ENSEMBL_API_ENV: &str = "ENSEMBL_REST_API";

/// Default Ensembl REST endpoint.
pub const DEFAULT_ENSEMBL_API: &str = "https://rest.ensembl.org";

/// Target organism of every lookup (zebrafish).
pub const SPECIES: &str = "danio_rerio";

/// Path of the symbol lookup endpoint, relative to the API root.
pub const LOOKUP_SYMBOL_PATH: &str = "lookup/symbol";

/// Query string asking Ensembl to expand transcripts and exons.
pub const EXPAND_QUERY: &str = "expand=1";

/// Content type sent with every request.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Key of the payload Ensembl returns for unknown symbols.
pub const ERROR_KEY: &str = "error";

/// Non-success statuses whose `error` payload means the symbol is unknown.
pub const NOT_FOUND_STATUSES: [u16; 2] = [400, 404];
