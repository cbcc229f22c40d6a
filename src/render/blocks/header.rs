//! Sticky page header with brand row and section navigation

use crate::model::Company;
use crate::render::html::{attr, esc};
use crate::theme::{self, StyleTokens};

/// Alpha fraction behind the ticker badge; renders as the hex suffix `30`.
pub const BADGE_ALPHA: f32 = 48.0 / 255.0;

/// Section links in render order. The anchors must match the section ids
/// emitted by the body blocks.
pub const NAV_LINKS: [(&str, &str); 4] = [
    ("#portfolio", "Portfolio"),
    ("#research", "Research"),
    ("#team", "Team"),
    ("#contact", "Contact"),
];

pub struct PageHeader<'a> {
    company: &'a Company,
    tokens: &'a StyleTokens,
}

impl<'a> PageHeader<'a> {
    pub fn new(company: &'a Company, tokens: &'a StyleTokens) -> Self {
        Self { company, tokens }
    }

    pub fn render(&self, out: &mut String) {
        let t = self.tokens;

        out.push_str(&format!(
            "<header class=\"ir-header\" style=\"position:sticky;top:0;z-index:50;\
             border-bottom:1px solid {};background-color:{}\">",
            attr(&t.accent_color),
            attr(&t.background_color)
        ));
        out.push_str("<div class=\"ir-header-inner\">");

        // Brand row
        out.push_str("<div class=\"ir-brand\">");
        if let Some(logo) = &self.company.logo_url {
            out.push_str(&format!(
                "<img class=\"ir-logo\" src=\"{}\" alt=\"{} Logo\">",
                attr(logo),
                attr(&self.company.name)
            ));
        }
        out.push_str(&format!(
            "<h1 class=\"ir-company-name\" style=\"color:{}\">{}</h1>",
            attr(&t.accent_color),
            esc(&self.company.name)
        ));
        if let Some(ticker) = &self.company.ticker_symbol {
            out.push_str(&format!(
                "<span class=\"ir-ticker-badge\" style=\"background-color:{};color:{}\">{}</span>",
                attr(&theme::with_alpha(&t.accent_color, BADGE_ALPHA)),
                attr(&t.text_color),
                esc(ticker)
            ));
        }
        out.push_str("</div>");

        // Section nav
        out.push_str("<nav class=\"ir-nav\"><ul>");
        for (href, label) in NAV_LINKS {
            out.push_str(&format!(
                "<li><a href=\"{}\" style=\"color:{}\">{}</a></li>",
                href,
                attr(&t.text_color),
                label
            ));
        }
        out.push_str("</ul></nav>");

        out.push_str("</div></header>");
    }
}
