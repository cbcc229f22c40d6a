//! Research and thought-leadership list (anchors the `#research` nav link)

use crate::model::ResearchPost;
use crate::render::html::{attr, esc};
use crate::theme::StyleTokens;

pub struct ResearchList<'a> {
    posts: &'a [ResearchPost],
    tokens: &'a StyleTokens,
}

impl<'a> ResearchList<'a> {
    pub fn new(posts: &'a [ResearchPost], tokens: &'a StyleTokens) -> Self {
        Self { posts, tokens }
    }

    pub fn render(&self, out: &mut String) {
        out.push_str("<section id=\"research\" class=\"ir-research\">");
        out.push_str(&format!(
            "<h2 class=\"ir-section-title\" style=\"color:{}\">Research &amp; Insights</h2>",
            attr(&self.tokens.accent_color)
        ));

        if self.posts.is_empty() {
            out.push_str("<p class=\"ir-empty\">Research notes are on the way.</p>");
            out.push_str("</section>");
            return;
        }

        out.push_str("<ul class=\"ir-research-list\">");
        for post in self.posts {
            out.push_str("<li class=\"ir-research-post\">");
            out.push_str(&format!(
                "<time datetime=\"{}\">{}</time>",
                post.date,
                post.date.format("%b %-d, %Y")
            ));
            match &post.url {
                Some(url) => out.push_str(&format!(
                    "<h3><a href=\"{}\">{}</a></h3>",
                    attr(url),
                    esc(&post.title)
                )),
                None => out.push_str(&format!("<h3>{}</h3>", esc(&post.title))),
            }
            if let Some(excerpt) = &post.excerpt {
                out.push_str(&format!(
                    "<p class=\"ir-research-excerpt\">{}</p>",
                    esc(excerpt)
                ));
            }
            out.push_str("</li>");
        }
        out.push_str("</ul></section>");
    }
}
