use std::env;

use super::consts::{DEFAULT_ENSEMBL_API, ENSEMBL_API_ENV, EXPAND_QUERY, LOOKUP_SYMBOL_PATH};

/// Get default Ensembl api from environment variable
///
/// # Returns
/// - Ensembl REST root for url
pub fn get_default_ensembl_api() -> String {
    env::var(ENSEMBL_API_ENV).unwrap_or_else(|_| DEFAULT_ENSEMBL_API.to_string())
}

/// Build the expanded symbol lookup url for a gene
///
/// # Arguments
/// - api: Ensembl REST root, with or without a trailing slash
/// - species: Ensembl species name
/// - gene: gene symbol, used verbatim
pub fn lookup_url(api: &str, species: &str, gene: &str) -> String {
    format!(
        "{}/{}/{}/{}?{}",
        api.trim_end_matches('/'),
        LOOKUP_SYMBOL_PATH,
        species,
        gene,
        EXPAND_QUERY
    )
}
