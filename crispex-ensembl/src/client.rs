//! Ensembl REST client implementation.
//!
//! This module provides the [`EnsemblClient`] type and its builder, the
//! network backed [`ExonLocator`].

use std::time::Duration;

use log::debug;
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;

use crispex_core::models::GeneExonSet;

use super::consts::{JSON_CONTENT_TYPE, SPECIES};
use super::errors::LocatorError;
use super::locator::ExonLocator;
use super::response::decode_lookup_response;
use super::utils::{get_default_ensembl_api, lookup_url};

/// Builder for constructing an [`EnsemblClient`] with custom configuration.
///
/// # Examples
///
/// ```rust,no_run
/// use crispex_ensembl::client::EnsemblClient;
///
/// # fn main() -> Result<(), crispex_ensembl::errors::LocatorError> {
/// let client = EnsemblClient::builder()
///     .with_ensembl_api("https://rest.ensembl.org".to_string())
///     .finish()?;
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct EnsemblClientBuilder {
    ensembl_api: Option<String>,
}

impl EnsemblClientBuilder {
    /// Creates a new, empty EnsemblClientBuilder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the Ensembl REST root for the EnsemblClient.
    pub fn with_ensembl_api(mut self, api: String) -> Self {
        self.ensembl_api = Some(api);
        self
    }

    /// Consumes the builder and creates an EnsemblClient.
    pub fn finish(self) -> Result<EnsemblClient, LocatorError> {
        let ensembl_api = self.ensembl_api.unwrap_or_else(get_default_ensembl_api);

        // lookups block for as long as Ensembl takes
        let client = Client::builder()
            .timeout(None::<Duration>)
            .build()
            .map_err(LocatorError::Client)?;

        Ok(EnsemblClient {
            ensembl_api,
            client,
        })
    }
}

/// Exon locator backed by the Ensembl `/lookup/symbol` endpoint.
///
/// Every call is a single blocking GET for the zebrafish symbol with
/// `expand=1`. Nothing is cached and failed calls are not retried.
///
/// # Examples
///
/// ```rust,no_run
/// use crispex_ensembl::client::EnsemblClient;
/// use crispex_ensembl::locator::ExonLocator;
///
/// # fn main() -> Result<(), crispex_ensembl::errors::LocatorError> {
/// let client = EnsemblClient::builder().finish()?;
///
/// match client.locate_exons("rx3")? {
///     Some(gene) => println!("rx3 has {} exons", gene.len()),
///     None => println!("rx3 is unknown"),
/// }
/// # Ok(())
/// # }
/// ```
pub struct EnsemblClient {
    /// Ensembl REST root url
    pub ensembl_api: String,
    client: Client,
}

impl EnsemblClient {
    /// Creates a new builder for constructing an [`EnsemblClient`].
    pub fn builder() -> EnsemblClientBuilder {
        EnsemblClientBuilder::default()
    }

    /// Lookup url for a gene on this client's endpoint
    pub fn url_for(&self, gene: &str) -> String {
        lookup_url(&self.ensembl_api, SPECIES, gene)
    }
}

impl ExonLocator for EnsemblClient {
    fn locate_exons(&self, gene: &str) -> Result<Option<GeneExonSet>, LocatorError> {
        let url = self.url_for(gene);
        debug!("Looking up exons of {} at {}", gene, url);

        let response = self
            .client
            .get(&url)
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
            .send()
            .map_err(|source| LocatorError::Request {
                url: url.clone(),
                source,
            })?;

        let status = response.status().as_u16();
        let body = response.text().map_err(|source| LocatorError::Request {
            url: url.clone(),
            source,
        })?;

        let exons = decode_lookup_response(gene, &url, status, &body)?;
        match &exons {
            Some(found) => debug!("{} exons found for {}", found.len(), gene),
            None => debug!("Ensembl does not know {}", gene),
        }

        Ok(exons)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[rstest]
    fn test_builder_uses_given_api() {
        let client = EnsemblClient::builder()
            .with_ensembl_api("http://localhost:3000/".to_string())
            .finish()
            .unwrap();

        assert_eq!(
            client.url_for("pax6a"),
            "http://localhost:3000/lookup/symbol/danio_rerio/pax6a?expand=1"
        );
    }

    #[rstest]
    #[ignore = "needs network access to rest.ensembl.org"]
    fn test_live_lookup() {
        let client = EnsemblClient::builder()
            .with_ensembl_api("https://rest.ensembl.org".to_string())
            .finish()
            .unwrap();

        let gene = client.locate_exons("rx3").unwrap().unwrap();
        assert!(!gene.is_empty());
        assert!(gene.iter().all(|exon| exon.start <= exon.end));

        assert!(
            client
                .locate_exons("definitely_not_a_zebrafish_gene")
                .unwrap()
                .is_none()
        );
    }
}
