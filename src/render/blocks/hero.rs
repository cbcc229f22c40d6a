//! Hero section with the investment thesis and headline metrics

use crate::model::PageData;
use crate::render::html::{attr, esc};
use crate::theme::StyleTokens;

pub struct Hero<'a> {
    data: &'a PageData,
    tokens: &'a StyleTokens,
}

impl<'a> Hero<'a> {
    pub fn new(data: &'a PageData, tokens: &'a StyleTokens) -> Self {
        Self { data, tokens }
    }

    pub fn render(&self, out: &mut String) {
        let metrics = &self.data.metrics;
        let headline: [(&str, Option<&str>); 3] = [
            ("Assets Under Management", metrics.aum.as_deref()),
            ("Share Price", metrics.share_price.as_deref()),
            ("Market Cap", metrics.market_cap.as_deref()),
        ];
        let has_metrics = headline.iter().any(|(_, value)| value.is_some());

        // A hero with neither thesis nor metrics renders nothing.
        if self.data.thesis.is_none() && !has_metrics {
            return;
        }

        out.push_str("<section class=\"ir-hero\">");
        if let Some(thesis) = &self.data.thesis {
            out.push_str(&format!(
                "<h2 class=\"ir-thesis\" style=\"font-family:{}\">{}</h2>",
                attr(&self.tokens.secondary_font),
                esc(thesis)
            ));
        }
        if has_metrics {
            out.push_str("<div class=\"ir-headline-metrics\">");
            for (label, value) in headline {
                if let Some(value) = value {
                    out.push_str(&format!(
                        "<div class=\"ir-headline-metric\">\
                         <span class=\"ir-metric-value\" style=\"color:{}\">{}</span>\
                         <span class=\"ir-metric-label\">{}</span></div>",
                        attr(&self.tokens.accent_color),
                        esc(value),
                        label
                    ));
                }
            }
            out.push_str("</div>");
        }
        out.push_str("</section>");
    }
}
