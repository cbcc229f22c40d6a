//! Capital Markets Hub layout
//!
//! Asset manager / investment firm / fund platform: thesis and AUM up top,
//! portfolio snapshot, then research and thought leadership.

use anyhow::Result;
use chrono::NaiveDate;
use std::sync::Arc;

use crate::content::{self, ContentSource};
use crate::model::{AnalystRating, Company, Kpi, PageOverrides, Rating, Template, Trend};
use crate::render::blocks::PageHeader;
use crate::render::clusters::ComponentClusters;
use crate::render::compose::ComponentComposer;
use crate::render::html::{attr, esc};
use crate::theme::{StyleTokens, Theme};

pub struct CapitalMarketsHub {
    content: Arc<dyn ContentSource>,
    use_cms: bool,
}

impl CapitalMarketsHub {
    pub fn new(content: Arc<dyn ContentSource>, use_cms: bool) -> Self {
        Self { content, use_cms }
    }

    /// Render the full page body for one company.
    ///
    /// Awaits the content pipeline once, layers the hub's demo overrides on
    /// top, then renders synchronously. Content errors propagate unmodified.
    pub async fn render(
        &self,
        company: &Company,
        template: Option<&Template>,
        theme: Option<&Theme>,
    ) -> Result<String> {
        let mut data =
            content::prepare_page_data(company, self.content.as_ref(), self.use_cms).await?;
        data.apply(PageOverrides::capital_markets_demo());

        let tokens = StyleTokens::resolve(theme, company);

        let mut out = String::with_capacity(16 * 1024);
        out.push_str(&format!(
            "<div class=\"ir-site capital-markets-hub\" style=\"background-color:{};\
             color:{};font-family:{};min-height:100vh\">",
            attr(&tokens.background_color),
            attr(&tokens.text_color),
            attr(&tokens.primary_font)
        ));

        // Theme custom properties for descendant styling
        out.push_str("<style>:root{");
        for (name, value) in tokens.css_variables() {
            out.push_str(&format!("{}:{};", name, esc(value)));
        }
        out.push_str("}</style>");

        PageHeader::new(company, &tokens).render(&mut out);

        let components = ComponentClusters::capital_markets_hub(&data, &tokens);
        ComponentComposer::new(template, theme, company, components).render(&mut out);

        out.push_str("</div>");
        Ok(out)
    }
}

impl PageOverrides {
    /// Placeholder fund metrics every Capital Markets Hub page shows until
    /// real market data is wired up. Applied unconditionally, so tenant
    /// content never leaks into the KPI strip or the analyst table.
    pub fn capital_markets_demo() -> Self {
        Self {
            aum: Some("$2.5B".to_string()),
            kpis: Some(vec![
                Kpi {
                    label: "AUM".to_string(),
                    value: "$2.5B".to_string(),
                    change: "+25%".to_string(),
                    change_percent: Some("25.0".to_string()),
                    period: "Q4 2024".to_string(),
                    trend: Trend::Up,
                },
                Kpi {
                    label: "Portfolio Companies".to_string(),
                    value: "45".to_string(),
                    change: "+8".to_string(),
                    change_percent: None,
                    period: "Active Investments".to_string(),
                    trend: Trend::Up,
                },
                Kpi {
                    label: "IRR".to_string(),
                    value: "18.5%".to_string(),
                    change: "+2.5%".to_string(),
                    change_percent: Some("2.5".to_string()),
                    period: "Since Inception".to_string(),
                    trend: Trend::Up,
                },
            ]),
            analysts: Some(vec![
                AnalystRating {
                    id: "1".to_string(),
                    bank: "Goldman Sachs".to_string(),
                    analyst_name: "Jane Smith".to_string(),
                    rating: Rating::StrongBuy,
                    target_price: "275".to_string(),
                    date: NaiveDate::from_ymd_opt(2024, 1, 15).expect("static demo date"),
                },
                AnalystRating {
                    id: "2".to_string(),
                    bank: "Morgan Stanley".to_string(),
                    analyst_name: "John Doe".to_string(),
                    rating: Rating::Buy,
                    target_price: "265".to_string(),
                    date: NaiveDate::from_ymd_opt(2024, 1, 10).expect("static demo date"),
                },
            ]),
        }
    }
}
