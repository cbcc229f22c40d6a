//! Investor contact panel (anchors the `#contact` nav link)

use crate::model::Contact;
use crate::render::html::{attr, esc};
use crate::theme::StyleTokens;

pub struct ContactPanel<'a> {
    contact: &'a Contact,
    tokens: &'a StyleTokens,
}

impl<'a> ContactPanel<'a> {
    pub fn new(contact: &'a Contact, tokens: &'a StyleTokens) -> Self {
        Self { contact, tokens }
    }

    pub fn render(&self, out: &mut String) {
        out.push_str("<section id=\"contact\" class=\"ir-contact\">");
        out.push_str(&format!(
            "<h2 class=\"ir-section-title\" style=\"color:{}\">Contact</h2>",
            attr(&self.tokens.accent_color)
        ));

        if self.contact.is_empty() {
            out.push_str("<p class=\"ir-empty\">Contact information coming soon.</p>");
            out.push_str("</section>");
            return;
        }

        out.push_str("<ul class=\"ir-contact-rows\">");
        if let Some(email) = &self.contact.email {
            out.push_str(&format!(
                "<li class=\"ir-contact-row\"><span class=\"ir-contact-label\">Investor \
                 Relations</span><a href=\"mailto:{}\">{}</a></li>",
                attr(email),
                esc(email)
            ));
        }
        if let Some(phone) = &self.contact.phone {
            out.push_str(&format!(
                "<li class=\"ir-contact-row\"><span class=\"ir-contact-label\">Phone</span>\
                 <a href=\"tel:{}\">{}</a></li>",
                attr(phone),
                esc(phone)
            ));
        }
        if let Some(address) = &self.contact.address {
            out.push_str(&format!(
                "<li class=\"ir-contact-row\"><span class=\"ir-contact-label\">Office</span>\
                 <span>{}</span></li>",
                esc(address)
            ));
        }
        if let Some(website) = &self.contact.website {
            out.push_str(&format!(
                "<li class=\"ir-contact-row\"><span class=\"ir-contact-label\">Web</span>\
                 <a href=\"{}\">{}</a></li>",
                attr(website),
                esc(website)
            ));
        }
        out.push_str("</ul></section>");
    }
}
