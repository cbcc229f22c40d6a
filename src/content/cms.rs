//! CMS-backed content source

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use crate::content::{ContentError, ContentSource, SitePayload};
use crate::model::Company;

pub struct HttpContentSource {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpContentSource {
    pub fn new(
        base_url: impl Into<String>,
        token: Option<String>,
        timeout: Duration,
    ) -> Result<Self, ContentError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
            token,
        })
    }

    fn content_url(&self, company: &Company) -> String {
        format!(
            "{}/companies/{}/content",
            self.base_url.trim_end_matches('/'),
            company.tenant_slug()
        )
    }
}

#[async_trait]
impl ContentSource for HttpContentSource {
    fn name(&self) -> &'static str {
        "cms"
    }

    async fn fetch(&self, company: &Company) -> Result<SitePayload, ContentError> {
        let url = self.content_url(company);
        tracing::debug!("fetching content from {}", url);

        let mut request = self.client.get(&url);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let payload = request
            .send()
            .await?
            .error_for_status()?
            .json::<SitePayload>()
            .await?;
        Ok(payload)
    }
}
