//! Portfolio holdings grid (anchors the `#portfolio` nav link)

use crate::model::Holding;
use crate::render::html::{attr, esc};
use crate::theme::StyleTokens;

pub struct PortfolioGrid<'a> {
    holdings: &'a [Holding],
    tokens: &'a StyleTokens,
}

impl<'a> PortfolioGrid<'a> {
    pub fn new(holdings: &'a [Holding], tokens: &'a StyleTokens) -> Self {
        Self { holdings, tokens }
    }

    pub fn render(&self, out: &mut String) {
        out.push_str("<section id=\"portfolio\" class=\"ir-portfolio\">");
        out.push_str(&format!(
            "<h2 class=\"ir-section-title\" style=\"color:{}\">Portfolio</h2>",
            attr(&self.tokens.accent_color)
        ));

        if self.holdings.is_empty() {
            out.push_str("<p class=\"ir-empty\">Portfolio details coming soon.</p>");
            out.push_str("</section>");
            return;
        }

        out.push_str("<div class=\"ir-holding-grid\">");
        for holding in self.holdings {
            out.push_str("<article class=\"ir-holding\">");
            if let Some(logo) = &holding.logo_url {
                out.push_str(&format!(
                    "<img class=\"ir-holding-logo\" src=\"{}\" alt=\"{} logo\">",
                    attr(logo),
                    attr(&holding.name)
                ));
            }
            out.push_str(&format!("<h3>{}</h3>", esc(&holding.name)));
            if let Some(sector) = &holding.sector {
                out.push_str(&format!(
                    "<span class=\"ir-holding-sector\">{}</span>",
                    esc(sector)
                ));
            }
            if let Some(summary) = &holding.summary {
                out.push_str(&format!(
                    "<p class=\"ir-holding-summary\">{}</p>",
                    esc(summary)
                ));
            }
            out.push_str("</article>");
        }
        out.push_str("</div></section>");
    }
}
