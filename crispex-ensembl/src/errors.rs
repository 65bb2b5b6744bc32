use thiserror::Error;

/// Failure to obtain the exons of a gene.
///
/// An unknown gene is not an error: locators report it as `Ok(None)`.
#[derive(Error, Debug)]
pub enum LocatorError {
    #[error("Failed to create the HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Ensembl returned HTTP {status} for {url}")]
    Remote { status: u16, url: String },

    #[error("Can't decode the lookup response for gene {gene}: {source}")]
    Decode {
        gene: String,
        #[source]
        source: serde_json::Error,
    },
}
