//! Tenant and page data model shared across the generator

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

// Compile regex once at startup
static NON_SLUG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z0-9]+").expect("Invalid slug regex"));

/// Company record for a tenant site.
///
/// Only `name` is required. The optional font fields participate in style
/// token fallback; everything else is carried into the rendered page as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Company {
    pub name: String,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub website: Option<String>,
    pub ir_email: Option<String>,
    pub logo_url: Option<String>,
    pub ticker_symbol: Option<String>,
    pub primary_font_family: Option<String>,
    pub secondary_font_family: Option<String>,
    pub press_releases: Option<Vec<PressRelease>>,
}

impl Company {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            slug: None,
            description: None,
            website: None,
            ir_email: None,
            logo_url: None,
            ticker_symbol: None,
            primary_font_family: None,
            secondary_font_family: None,
            press_releases: None,
        }
    }

    /// Directory-safe tenant identifier: the configured slug when present,
    /// otherwise derived from the company name. Names with no slug-safe
    /// characters fall back to `"site"` so output paths and CMS URLs never
    /// get an empty segment.
    pub fn tenant_slug(&self) -> String {
        match self.slug.as_deref() {
            Some(slug) if !slug.trim().is_empty() => slug.trim().to_string(),
            _ => {
                let derived = slugify(&self.name);
                if derived.is_empty() {
                    "site".to_string()
                } else {
                    derived
                }
            }
        }
    }
}

/// Lowercase a name and collapse every non-alphanumeric run into a hyphen.
pub fn slugify(name: &str) -> String {
    let lowered = name.to_lowercase();
    NON_SLUG
        .replace_all(&lowered, "-")
        .trim_matches('-')
        .to_string()
}

/// Opaque template reference.
///
/// The generator reads `layout` to pick a page layout; `settings` rides
/// along to the composer untouched and uninterpreted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Template {
    pub name: Option<String>,
    pub layout: Option<String>,
    pub settings: Option<toml::Value>,
}

/// Direction glyph for a KPI trend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    #[default]
    Flat,
}

impl Trend {
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Up => "▲",
            Self::Down => "▼",
            Self::Flat => "■",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Self::Up => "trend-up",
            Self::Down => "trend-down",
            Self::Flat => "trend-flat",
        }
    }
}

/// One entry in the KPI strip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Kpi {
    pub label: String,
    pub value: String,
    pub change: String,
    pub change_percent: Option<String>,
    pub period: String,
    #[serde(default)]
    pub trend: Trend,
}

/// Analyst rating tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rating {
    #[serde(rename = "Strong Buy")]
    StrongBuy,
    Buy,
    Hold,
    Underperform,
    Sell,
}

impl Rating {
    pub fn css_class(self) -> &'static str {
        match self {
            Self::StrongBuy => "rating-strong-buy",
            Self::Buy => "rating-buy",
            Self::Hold => "rating-hold",
            Self::Underperform => "rating-underperform",
            Self::Sell => "rating-sell",
        }
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::StrongBuy => write!(f, "Strong Buy"),
            Self::Buy => write!(f, "Buy"),
            Self::Hold => write!(f, "Hold"),
            Self::Underperform => write!(f, "Underperform"),
            Self::Sell => write!(f, "Sell"),
        }
    }
}

/// A sell-side coverage entry shown in the analyst table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalystRating {
    #[serde(default = "record_id")]
    pub id: String,
    pub bank: String,
    pub analyst_name: String,
    pub rating: Rating,
    pub target_price: String,
    pub date: NaiveDate,
}

/// Headline fund metrics sourced from content or market data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Metrics {
    pub aum: Option<String>,
    pub share_price: Option<String>,
    pub market_cap: Option<String>,
}

/// One portfolio company in the grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holding {
    pub name: String,
    pub sector: Option<String>,
    pub summary: Option<String>,
    pub logo_url: Option<String>,
}

/// Thought-leadership article or research note.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResearchPost {
    #[serde(default = "record_id")]
    pub id: String,
    pub title: String,
    pub date: NaiveDate,
    pub excerpt: Option<String>,
    pub url: Option<String>,
}

/// Team member shown in the leadership grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Leader {
    pub name: String,
    pub title: String,
    pub bio: Option<String>,
    pub photo_url: Option<String>,
}

/// Company press release.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PressRelease {
    #[serde(default = "record_id")]
    pub id: String,
    pub title: String,
    pub date: NaiveDate,
    pub url: Option<String>,
    pub summary: Option<String>,
}

/// Contact details for the footer-most section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contact {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub website: Option<String>,
}

impl Contact {
    pub fn is_empty(&self) -> bool {
        self.email.is_none()
            && self.phone.is_none()
            && self.address.is_none()
            && self.website.is_none()
    }
}

/// Everything a layout needs to fill its blocks.
///
/// Built once per render by the content pipeline, consumed by the cluster
/// registry and block renderers, then discarded.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PageData {
    pub thesis: Option<String>,
    pub metrics: Metrics,
    pub kpis: Vec<Kpi>,
    pub analysts: Vec<AnalystRating>,
    pub holdings: Vec<Holding>,
    pub research: Vec<ResearchPost>,
    pub leaders: Vec<Leader>,
    pub press_releases: Vec<PressRelease>,
    pub contact: Contact,
}

impl PageData {
    /// Seed page data from the company record alone: thesis from the
    /// description, contact from IR fields, press releases from the record.
    pub fn from_company(company: &Company) -> Self {
        Self {
            thesis: company.description.clone(),
            contact: Contact {
                email: company.ir_email.clone(),
                website: company.website.clone(),
                ..Contact::default()
            },
            press_releases: company.press_releases.clone().unwrap_or_default(),
            ..Self::default()
        }
    }

    /// Apply a typed override set. Fields left `None` keep the base value.
    pub fn apply(&mut self, overrides: PageOverrides) {
        if let Some(aum) = overrides.aum {
            self.metrics.aum = Some(aum);
        }
        if let Some(kpis) = overrides.kpis {
            self.kpis = kpis;
        }
        if let Some(analysts) = overrides.analysts {
            self.analysts = analysts;
        }
    }
}

/// Explicit override set layered onto a page by a layout.
///
/// Every overridable field is enumerated here so layouts cannot silently
/// drift from the base data shape.
#[derive(Debug, Clone, Default)]
pub struct PageOverrides {
    pub aum: Option<String>,
    pub kpis: Option<Vec<Kpi>>,
    pub analysts: Option<Vec<AnalystRating>>,
}

fn record_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_replace_only_named_fields() {
        let mut data = PageData {
            thesis: Some("Long-horizon value".to_string()),
            metrics: Metrics {
                aum: Some("$1.0B".to_string()),
                share_price: Some("$42.10".to_string()),
                market_cap: None,
            },
            kpis: vec![Kpi {
                label: "Old".to_string(),
                value: "0".to_string(),
                change: "0".to_string(),
                change_percent: None,
                period: "FY23".to_string(),
                trend: Trend::Flat,
            }],
            ..PageData::default()
        };

        data.apply(PageOverrides {
            aum: Some("$2.5B".to_string()),
            kpis: None,
            analysts: None,
        });

        assert_eq!(data.metrics.aum.as_deref(), Some("$2.5B"));
        assert_eq!(data.metrics.share_price.as_deref(), Some("$42.10"));
        assert_eq!(data.kpis.len(), 1, "kpis must survive a None override");
        assert_eq!(data.thesis.as_deref(), Some("Long-horizon value"));
    }

    #[test]
    fn seed_pulls_contact_and_press_from_company() {
        let mut company = Company::new("Acme Capital");
        company.description = Some("Compounding since 2009".to_string());
        company.ir_email = Some("ir@acme.example".to_string());
        company.press_releases = Some(vec![PressRelease {
            id: "pr-1".to_string(),
            title: "Q4 results".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            url: None,
            summary: None,
        }]);

        let data = PageData::from_company(&company);
        assert_eq!(data.thesis.as_deref(), Some("Compounding since 2009"));
        assert_eq!(data.contact.email.as_deref(), Some("ir@acme.example"));
        assert_eq!(data.press_releases.len(), 1);
        assert!(data.kpis.is_empty());
    }

    #[test]
    fn analyst_rating_parses_original_wire_form() {
        let json = r#"{
            "id": "1",
            "bank": "Goldman Sachs",
            "analyst_name": "Jane Smith",
            "rating": "Strong Buy",
            "target_price": "275",
            "date": "2024-01-15"
        }"#;

        let rating: AnalystRating = serde_json::from_str(json).unwrap();
        assert_eq!(rating.rating, Rating::StrongBuy);
        assert_eq!(rating.date, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
        assert_eq!(rating.rating.to_string(), "Strong Buy");
    }

    #[test]
    fn content_records_get_ids_when_missing() {
        let yaml = r#"
title: "New fund launch"
date: 2024-03-08
"#;
        let release: PressRelease = serde_yaml::from_str(yaml).unwrap();
        assert!(!release.id.is_empty());
    }

    #[test]
    fn tenant_slug_prefers_configured_slug() {
        let mut company = Company::new("Meridian Growth Partners, L.P.");
        assert_eq!(company.tenant_slug(), "meridian-growth-partners-l-p");

        company.slug = Some("meridian".to_string());
        assert_eq!(company.tenant_slug(), "meridian");

        company.slug = Some("   ".to_string());
        assert_eq!(company.tenant_slug(), "meridian-growth-partners-l-p");
    }

    #[test]
    fn slugify_collapses_punctuation_runs() {
        assert_eq!(slugify("Acme Capital"), "acme-capital");
        assert_eq!(slugify("  A&B -- Holdings  "), "a-b-holdings");
    }

    #[test]
    fn unslugifiable_names_fall_back_to_a_fixed_slug() {
        assert_eq!(slugify("???"), "");
        assert_eq!(Company::new("???").tenant_slug(), "site");
        assert_eq!(Company::new("北辰資本").tenant_slug(), "site");
    }

    #[test]
    fn kpi_change_percent_is_optional() {
        let json = r#"{
            "label": "Portfolio Companies",
            "value": "45",
            "change": "+8",
            "period": "Active Investments",
            "trend": "up"
        }"#;

        let kpi: Kpi = serde_json::from_str(json).unwrap();
        assert_eq!(kpi.change_percent, None);
        assert_eq!(kpi.trend, Trend::Up);
    }
}
