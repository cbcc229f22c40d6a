//! KPI strip rendered directly under the hero

use crate::model::Kpi;
use crate::render::html::{attr, esc};
use crate::theme::StyleTokens;

pub struct KpiStrip<'a> {
    kpis: &'a [Kpi],
    tokens: &'a StyleTokens,
}

impl<'a> KpiStrip<'a> {
    pub fn new(kpis: &'a [Kpi], tokens: &'a StyleTokens) -> Self {
        Self { kpis, tokens }
    }

    pub fn render(&self, out: &mut String) {
        out.push_str("<section class=\"ir-kpis\">");
        if self.kpis.is_empty() {
            out.push_str("<p class=\"ir-empty\">No key metrics published.</p>");
            out.push_str("</section>");
            return;
        }

        out.push_str("<div class=\"ir-kpi-grid\">");
        for kpi in self.kpis {
            out.push_str(&format!("<div class=\"ir-kpi {}\"", kpi.trend.css_class()));
            if let Some(percent) = &kpi.change_percent {
                out.push_str(&format!(" data-change-percent=\"{}\"", attr(percent)));
            }
            out.push('>');
            out.push_str(&format!(
                "<span class=\"ir-kpi-label\">{}</span>\
                 <span class=\"ir-kpi-value\" style=\"color:{}\">{}</span>\
                 <span class=\"ir-kpi-change\">{} {}</span>\
                 <span class=\"ir-kpi-period\">{}</span>",
                esc(&kpi.label),
                attr(&self.tokens.accent_color),
                esc(&kpi.value),
                kpi.trend.glyph(),
                esc(&kpi.change),
                esc(&kpi.period)
            ));
            out.push_str("</div>");
        }
        out.push_str("</div></section>");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Company, Trend};

    fn tokens() -> StyleTokens {
        StyleTokens::resolve(None, &Company::new("Acme Capital"))
    }

    fn kpi(label: &str, percent: Option<&str>, trend: Trend) -> Kpi {
        Kpi {
            label: label.to_string(),
            value: "45".to_string(),
            change: "+8".to_string(),
            change_percent: percent.map(str::to_string),
            period: "Active Investments".to_string(),
            trend,
        }
    }

    #[test]
    fn change_percent_attribute_is_conditional() {
        let kpis = vec![
            kpi("AUM", Some("25.0"), Trend::Up),
            kpi("Portfolio Companies", None, Trend::Up),
        ];
        let tokens = tokens();
        let mut out = String::new();
        KpiStrip::new(&kpis, &tokens).render(&mut out);

        assert_eq!(out.matches("data-change-percent").count(), 1);
        assert!(out.contains("data-change-percent=\"25.0\""));
    }

    #[test]
    fn trend_maps_to_glyph_and_class() {
        let kpis = vec![kpi("IRR", None, Trend::Down)];
        let tokens = tokens();
        let mut out = String::new();
        KpiStrip::new(&kpis, &tokens).render(&mut out);

        assert!(out.contains("trend-down"));
        assert!(out.contains("▼ +8"));
    }

    #[test]
    fn empty_strip_renders_muted_line() {
        let tokens = tokens();
        let mut out = String::new();
        KpiStrip::new(&[], &tokens).render(&mut out);
        assert!(out.contains("ir-empty"));
        assert!(!out.contains("ir-kpi-grid"));
    }
}
