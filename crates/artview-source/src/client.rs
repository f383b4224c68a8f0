//! HTTP client for the Art Institute of Chicago artworks listing.

use reqwest::Url;
use reqwest::header::{ACCEPT, HeaderMap, HeaderName, HeaderValue, USER_AGENT};

use artview_model::{FetchedPage, PAGE_SIZE, PageIndex};

use crate::config::SourceSettings;
use crate::error::{Result, SourceError};
use crate::source::PageDataSource;
use crate::wire::parse_artworks_response;

/// User agent string for API requests.
const USER_AGENT_VALUE: &str = concat!("artview/", env!("CARGO_PKG_VERSION"));

/// The API asks clients to identify themselves with this header.
const AIC_USER_AGENT: &str = "aic-user-agent";

/// Client for the `/artworks` listing endpoint.
///
/// Cheap to clone: the underlying `reqwest::Client` shares its connection pool.
#[derive(Debug, Clone)]
pub struct ArticClient {
    client: reqwest::Client,
    artworks_url: Url,
    fields: String,
    page_size: usize,
}

impl ArticClient {
    /// Create a client from source settings.
    pub fn new(settings: &SourceSettings) -> Result<Self> {
        let artworks_url = artworks_url(&settings.base_url)?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));
        headers.insert(
            HeaderName::from_static(AIC_USER_AGENT),
            HeaderValue::from_static(USER_AGENT_VALUE),
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(settings.timeout())
            .build()
            .map_err(|e| SourceError::ClientBuild(e.to_string()))?;

        Ok(Self {
            client,
            artworks_url,
            fields: settings.fields_param(),
            page_size: PAGE_SIZE,
        })
    }

    /// Number of records requested per page.
    #[must_use]
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// URL requested for a page.
    ///
    /// This is where the 0-based [`PageIndex`] becomes the API's 1-based
    /// `page` parameter.
    #[must_use]
    pub fn page_url(&self, page: PageIndex) -> Url {
        let mut url = self.artworks_url.clone();
        url.query_pairs_mut()
            .append_pair("page", &page.api_page().to_string())
            .append_pair("limit", &self.page_size.to_string());
        if !self.fields.is_empty() {
            url.query_pairs_mut().append_pair("fields", &self.fields);
        }
        url
    }
}

impl PageDataSource for ArticClient {
    async fn fetch_page(&self, page: PageIndex) -> Result<FetchedPage> {
        let url = self.page_url(page);
        tracing::debug!("Fetching artworks from {}", url);

        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.bytes().await?;
        let fetched = parse_artworks_response(&body)?;

        tracing::debug!(
            page = page.get(),
            records = fetched.len(),
            total = fetched.total_count,
            "Fetched page"
        );
        Ok(fetched)
    }
}

/// Join the configured base URL with the listing endpoint.
fn artworks_url(base_url: &str) -> Result<Url> {
    let joined = format!("{}/artworks", base_url.trim_end_matches('/'));
    Url::parse(&joined).map_err(|e| SourceError::InvalidBaseUrl {
        url: base_url.to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_url_is_one_based() {
        let client = ArticClient::new(&SourceSettings::default()).unwrap();
        let url = client.page_url(PageIndex::FIRST);

        assert_eq!(url.path(), "/api/v1/artworks");
        let query = url.query().unwrap_or_default();
        assert!(query.starts_with("page=1&limit=12&fields="));
    }

    #[test]
    fn test_trailing_slash_base_url() {
        let settings = SourceSettings::with_base_url("https://example.org/api/");
        let client = ArticClient::new(&settings).unwrap();
        assert_eq!(
            client.page_url(PageIndex::new(2)).as_str().split('?').next(),
            Some("https://example.org/api/artworks")
        );
    }

    #[test]
    fn test_invalid_base_url() {
        let settings = SourceSettings::with_base_url("not a url");
        let err = ArticClient::new(&settings).unwrap_err();
        assert!(matches!(err, SourceError::InvalidBaseUrl { .. }));
    }

    #[test]
    fn test_empty_fields_are_omitted() {
        let settings = SourceSettings {
            fields: Vec::new(),
            ..Default::default()
        };
        let client = ArticClient::new(&settings).unwrap();
        assert_eq!(client.page_url(PageIndex::new(1)).query(), Some("page=2&limit=12"));
    }
}
