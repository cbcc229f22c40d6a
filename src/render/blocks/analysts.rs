//! Sell-side analyst coverage table

use crate::model::AnalystRating;
use crate::render::html::{attr, esc};
use crate::theme::StyleTokens;

pub struct AnalystTable<'a> {
    analysts: &'a [AnalystRating],
    tokens: &'a StyleTokens,
}

impl<'a> AnalystTable<'a> {
    pub fn new(analysts: &'a [AnalystRating], tokens: &'a StyleTokens) -> Self {
        Self { analysts, tokens }
    }

    pub fn render(&self, out: &mut String) {
        out.push_str("<section class=\"ir-analysts\">");
        out.push_str(&format!(
            "<h2 class=\"ir-section-title\" style=\"color:{}\">Analyst Coverage</h2>",
            attr(&self.tokens.accent_color)
        ));

        if self.analysts.is_empty() {
            out.push_str("<p class=\"ir-empty\">No active analyst coverage.</p>");
            out.push_str("</section>");
            return;
        }

        out.push_str("<table class=\"ir-analyst-table\">");
        out.push_str(
            "<thead><tr><th>Firm</th><th>Analyst</th><th>Rating</th>\
             <th>Price Target</th><th>Date</th></tr></thead>",
        );
        out.push_str("<tbody>");
        for entry in self.analysts {
            out.push_str(&format!("<tr data-rating-id=\"{}\">", attr(&entry.id)));
            out.push_str(&format!("<td>{}</td>", esc(&entry.bank)));
            out.push_str(&format!("<td>{}</td>", esc(&entry.analyst_name)));
            out.push_str(&format!(
                "<td><span class=\"ir-rating {}\">{}</span></td>",
                entry.rating.css_class(),
                entry.rating
            ));
            out.push_str(&format!("<td>{}</td>", esc(&entry.target_price)));
            out.push_str(&format!(
                "<td><time datetime=\"{}\">{}</time></td>",
                entry.date,
                entry.date.format("%b %-d, %Y")
            ));
            out.push_str("</tr>");
        }
        out.push_str("</tbody></table></section>");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Company, Rating};
    use chrono::NaiveDate;

    fn tokens() -> StyleTokens {
        StyleTokens::resolve(None, &Company::new("Acme Capital"))
    }

    #[test]
    fn rows_carry_rating_class_and_id() {
        let analysts = vec![AnalystRating {
            id: "1".to_string(),
            bank: "Goldman Sachs".to_string(),
            analyst_name: "Jane Smith".to_string(),
            rating: Rating::StrongBuy,
            target_price: "275".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        }];
        let tokens = tokens();
        let mut out = String::new();
        AnalystTable::new(&analysts, &tokens).render(&mut out);

        assert!(out.contains("data-rating-id=\"1\""));
        assert!(out.contains("rating-strong-buy"));
        assert!(out.contains(">Strong Buy</span>"));
        assert!(out.contains("<td>275</td>"));
        assert!(out.contains("datetime=\"2024-01-15\""));
    }

    #[test]
    fn empty_coverage_renders_muted_line() {
        let tokens = tokens();
        let mut out = String::new();
        AnalystTable::new(&[], &tokens).render(&mut out);
        assert!(out.contains("ir-empty"));
        assert!(!out.contains("<table"));
    }
}
