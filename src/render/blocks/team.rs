//! Leadership grid (anchors the `#team` nav link)

use crate::model::Leader;
use crate::render::html::{attr, esc};
use crate::theme::StyleTokens;

pub struct TeamGrid<'a> {
    leaders: &'a [Leader],
    tokens: &'a StyleTokens,
}

impl<'a> TeamGrid<'a> {
    pub fn new(leaders: &'a [Leader], tokens: &'a StyleTokens) -> Self {
        Self { leaders, tokens }
    }

    pub fn render(&self, out: &mut String) {
        out.push_str("<section id=\"team\" class=\"ir-team\">");
        out.push_str(&format!(
            "<h2 class=\"ir-section-title\" style=\"color:{}\">Leadership</h2>",
            attr(&self.tokens.accent_color)
        ));

        if self.leaders.is_empty() {
            out.push_str("<p class=\"ir-empty\">Leadership profiles coming soon.</p>");
            out.push_str("</section>");
            return;
        }

        out.push_str("<div class=\"ir-leader-grid\">");
        for leader in self.leaders {
            out.push_str("<article class=\"ir-leader\">");
            if let Some(photo) = &leader.photo_url {
                out.push_str(&format!(
                    "<img class=\"ir-leader-photo\" src=\"{}\" alt=\"{}\">",
                    attr(photo),
                    attr(&leader.name)
                ));
            }
            out.push_str(&format!("<h3>{}</h3>", esc(&leader.name)));
            out.push_str(&format!(
                "<span class=\"ir-leader-title\">{}</span>",
                esc(&leader.title)
            ));
            if let Some(bio) = &leader.bio {
                out.push_str(&format!("<p class=\"ir-leader-bio\">{}</p>", esc(bio)));
            }
            out.push_str("</article>");
        }
        out.push_str("</div></section>");
    }
}
