//! Content pipeline - pluggable sources and page data preparation

pub mod cms;
pub mod file;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

use crate::model::{
    AnalystRating, Company, Contact, Holding, Kpi, Leader, Metrics, PageData, PressRelease,
    ResearchPost,
};

pub use cms::HttpContentSource;
pub use file::FileContentSource;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("Content request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },
}

/// Content-manageable slice of a page, as delivered by a source.
///
/// Every field is optional: `Some` replaces the company-derived seed value,
/// `None` leaves it alone.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SitePayload {
    pub thesis: Option<String>,
    pub metrics: Option<Metrics>,
    pub kpis: Option<Vec<Kpi>>,
    pub analysts: Option<Vec<AnalystRating>>,
    pub holdings: Option<Vec<Holding>>,
    pub research: Option<Vec<ResearchPost>>,
    pub leaders: Option<Vec<Leader>>,
    pub press_releases: Option<Vec<PressRelease>>,
    pub contact: Option<Contact>,
}

/// Where a site's managed content comes from.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Short source label used in logs.
    fn name(&self) -> &'static str;

    async fn fetch(&self, company: &Company) -> Result<SitePayload, ContentError>;
}

/// Source for sites that opt out of managed content.
pub struct NullContentSource;

#[async_trait]
impl ContentSource for NullContentSource {
    fn name(&self) -> &'static str {
        "none"
    }

    async fn fetch(&self, _company: &Company) -> Result<SitePayload, ContentError> {
        Ok(SitePayload::default())
    }
}

/// Build the page data for one render.
///
/// Seeds from the company record, then integrates the source payload when
/// `use_cms` is set. Fetch errors propagate; there is no fallback content.
pub async fn prepare_page_data(
    company: &Company,
    source: &dyn ContentSource,
    use_cms: bool,
) -> Result<PageData, ContentError> {
    let mut data = PageData::from_company(company);

    if use_cms {
        let payload = source.fetch(company).await?;
        tracing::debug!(
            "integrating {} content for {}",
            source.name(),
            company.name
        );
        integrate(&mut data, payload);
    }

    // Newest entries lead regardless of source order.
    data.research.sort_by(|a, b| b.date.cmp(&a.date));
    data.press_releases.sort_by(|a, b| b.date.cmp(&a.date));
    Ok(data)
}

fn integrate(data: &mut PageData, payload: SitePayload) {
    if let Some(thesis) = payload.thesis {
        data.thesis = Some(thesis);
    }
    if let Some(metrics) = payload.metrics {
        data.metrics = metrics;
    }
    if let Some(kpis) = payload.kpis {
        data.kpis = kpis;
    }
    if let Some(analysts) = payload.analysts {
        data.analysts = analysts;
    }
    if let Some(holdings) = payload.holdings {
        data.holdings = holdings;
    }
    if let Some(research) = payload.research {
        data.research = research;
    }
    if let Some(leaders) = payload.leaders {
        data.leaders = leaders;
    }
    if let Some(press_releases) = payload.press_releases {
        data.press_releases = press_releases;
    }
    if let Some(contact) = payload.contact {
        data.contact = contact;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn company() -> Company {
        let mut company = Company::new("Acme Capital");
        company.description = Some("Durable compounders".to_string());
        company.ir_email = Some("ir@acme.example".to_string());
        company
    }

    #[tokio::test]
    async fn source_is_never_called_without_cms() {
        let mut source = MockContentSource::new();
        source.expect_fetch().times(0);

        let data = prepare_page_data(&company(), &source, false).await.unwrap();
        assert_eq!(data.thesis.as_deref(), Some("Durable compounders"));
        assert_eq!(data.contact.email.as_deref(), Some("ir@acme.example"));
    }

    #[tokio::test]
    async fn payload_fields_replace_seeds_field_by_field() {
        let mut source = MockContentSource::new();
        source.expect_name().return_const("mock");
        source.expect_fetch().returning(|_| {
            Ok(SitePayload {
                thesis: Some("Special situations".to_string()),
                holdings: Some(vec![Holding {
                    name: "Northwind Logistics".to_string(),
                    sector: None,
                    summary: None,
                    logo_url: None,
                }]),
                ..SitePayload::default()
            })
        });

        let data = prepare_page_data(&company(), &source, true).await.unwrap();
        assert_eq!(data.thesis.as_deref(), Some("Special situations"));
        assert_eq!(data.holdings.len(), 1);
        // Fields the payload left out keep their seeds.
        assert_eq!(data.contact.email.as_deref(), Some("ir@acme.example"));
    }

    #[tokio::test]
    async fn research_and_press_sort_newest_first() {
        let mut source = MockContentSource::new();
        source.expect_name().return_const("mock");
        source.expect_fetch().returning(|_| {
            let post = |title: &str, date: NaiveDate| ResearchPost {
                id: title.to_string(),
                title: title.to_string(),
                date,
                excerpt: None,
                url: None,
            };
            Ok(SitePayload {
                research: Some(vec![
                    post("older", NaiveDate::from_ymd_opt(2023, 11, 2).unwrap()),
                    post("newest", NaiveDate::from_ymd_opt(2024, 2, 20).unwrap()),
                    post("oldest", NaiveDate::from_ymd_opt(2023, 5, 14).unwrap()),
                ]),
                ..SitePayload::default()
            })
        });

        let data = prepare_page_data(&company(), &source, true).await.unwrap();
        let titles: Vec<&str> = data.research.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["newest", "older", "oldest"]);
    }

    #[tokio::test]
    async fn fetch_errors_propagate_unmodified() {
        let mut source = MockContentSource::new();
        source.expect_name().return_const("mock");
        source.expect_fetch().returning(|_| {
            Err(ContentError::Io {
                path: PathBuf::from("content.yaml"),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
            })
        });

        let err = prepare_page_data(&company(), &source, true)
            .await
            .unwrap_err();
        assert!(matches!(err, ContentError::Io { .. }));
    }

    #[tokio::test]
    async fn null_source_returns_empty_payload() {
        let data = prepare_page_data(&company(), &NullContentSource, true)
            .await
            .unwrap();
        assert!(data.kpis.is_empty());
        assert_eq!(data.thesis.as_deref(), Some("Durable compounders"));
    }
}
