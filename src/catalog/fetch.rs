use crate::catalog::models::Listing;
use crate::catalog::CatalogError;
use reqwest::blocking::Client;
use std::time::Duration;

/// Env var naming an HTTP source for the catalog. When unset, the bundled
/// sample catalog is read from disk instead.
pub const PROPERTIES_URL_VAR: &str = "PROPERTIES_URL";

const SAMPLE_CATALOG_PATH: &str = "data/properties.json";

// The upstream default would be no timeout at all; the load must settle.
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

pub struct CatalogClient {
    client: Client,
}

impl CatalogClient {
    pub fn new() -> Result<Self, CatalogError> {
        let client = Client::builder()
            .timeout(FETCH_TIMEOUT)
            .build()
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        Ok(Self { client })
    }

    /// One attempt, one outcome. A reload is a fresh call.
    pub fn fetch(&self, url: &str) -> Result<Vec<Listing>, CatalogError> {
        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(CatalogError::HttpStatus(status.as_u16()));
        }

        let body = resp
            .text()
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        parse_catalog(&body)
    }
}

/// Decode a catalog body. The source must be a JSON array of listings.
pub fn parse_catalog(body: &str) -> Result<Vec<Listing>, CatalogError> {
    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|e| CatalogError::JsonParse(e.to_string()))?;

    let entries = value.as_array().ok_or_else(|| {
        CatalogError::UnexpectedShape("expected a JSON array of listings".to_string())
    })?;

    let listings: Result<Vec<Listing>, _> = entries
        .iter()
        .map(|v| serde_json::from_value(v.clone()))
        .collect();

    listings.map_err(|e| CatalogError::JsonParse(e.to_string()))
}

/// Resolve the configured source and load the whole catalog from it.
pub fn load_catalog() -> Result<Vec<Listing>, CatalogError> {
    match std::env::var(PROPERTIES_URL_VAR) {
        Ok(url) if !url.is_empty() => {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(CatalogError::Config(format!(
                    "{PROPERTIES_URL_VAR} must be an http(s) URL, got {url:?}"
                )));
            }
            let client = CatalogClient::new()?;
            client.fetch(&url)
        }
        _ => {
            let body = std::fs::read_to_string(SAMPLE_CATALOG_PATH)
                .map_err(|e| CatalogError::Io(format!("{SAMPLE_CATALOG_PATH}: {e}")))?;
            parse_catalog(&body)
        }
    }
}
