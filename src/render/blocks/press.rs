//! Press release list

use crate::model::PressRelease;
use crate::render::html::{attr, esc};
use crate::theme::StyleTokens;

pub struct PressList<'a> {
    releases: &'a [PressRelease],
    tokens: &'a StyleTokens,
}

impl<'a> PressList<'a> {
    pub fn new(releases: &'a [PressRelease], tokens: &'a StyleTokens) -> Self {
        Self { releases, tokens }
    }

    pub fn render(&self, out: &mut String) {
        out.push_str("<section id=\"news\" class=\"ir-press\">");
        out.push_str(&format!(
            "<h2 class=\"ir-section-title\" style=\"color:{}\">News &amp; Press</h2>",
            attr(&self.tokens.accent_color)
        ));

        if self.releases.is_empty() {
            out.push_str("<p class=\"ir-empty\">No press releases yet.</p>");
            out.push_str("</section>");
            return;
        }

        out.push_str("<ul class=\"ir-press-list\">");
        for release in self.releases {
            out.push_str("<li class=\"ir-press-release\">");
            out.push_str(&format!(
                "<time datetime=\"{}\">{}</time>",
                release.date,
                release.date.format("%b %-d, %Y")
            ));
            match &release.url {
                Some(url) => out.push_str(&format!(
                    "<h3><a href=\"{}\">{}</a></h3>",
                    attr(url),
                    esc(&release.title)
                )),
                None => out.push_str(&format!("<h3>{}</h3>", esc(&release.title))),
            }
            if let Some(summary) = &release.summary {
                out.push_str(&format!(
                    "<p class=\"ir-press-summary\">{}</p>",
                    esc(summary)
                ));
            }
            out.push_str("</li>");
        }
        out.push_str("</ul></section>");
    }
}
