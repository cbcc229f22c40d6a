//! Component composition - turns an ordered block list into the main region

use crate::model::{Company, Template};
use crate::render::blocks::{
    AnalystTable, ContactPanel, Hero, KpiStrip, PortfolioGrid, PressList, ResearchList, TeamGrid,
};
use crate::render::html::attr;
use crate::theme::Theme;

/// One renderable unit of the page body.
pub enum Block<'a> {
    Hero(Hero<'a>),
    Kpis(KpiStrip<'a>),
    Portfolio(PortfolioGrid<'a>),
    Research(ResearchList<'a>),
    Analysts(AnalystTable<'a>),
    Team(TeamGrid<'a>),
    Press(PressList<'a>),
    Contact(ContactPanel<'a>),
}

impl<'a> Block<'a> {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Hero(_) => "hero",
            Self::Kpis(_) => "kpis",
            Self::Portfolio(_) => "portfolio",
            Self::Research(_) => "research",
            Self::Analysts(_) => "analysts",
            Self::Team(_) => "team",
            Self::Press(_) => "press",
            Self::Contact(_) => "contact",
        }
    }

    fn render(&self, out: &mut String) {
        match self {
            Self::Hero(block) => block.render(out),
            Self::Kpis(block) => block.render(out),
            Self::Portfolio(block) => block.render(out),
            Self::Research(block) => block.render(out),
            Self::Analysts(block) => block.render(out),
            Self::Team(block) => block.render(out),
            Self::Press(block) => block.render(out),
            Self::Contact(block) => block.render(out),
        }
    }
}

/// Renders an ordered block list into `<main class="ir-main">`.
///
/// The composer never interprets template settings; the template only
/// contributes a `data-template` tag when it carries a name.
pub struct ComponentComposer<'a> {
    template: Option<&'a Template>,
    theme: Option<&'a Theme>,
    company: &'a Company,
    components: Vec<Block<'a>>,
}

impl<'a> ComponentComposer<'a> {
    pub fn new(
        template: Option<&'a Template>,
        theme: Option<&'a Theme>,
        company: &'a Company,
        components: Vec<Block<'a>>,
    ) -> Self {
        Self {
            template,
            theme,
            company,
            components,
        }
    }

    pub fn render(&self, out: &mut String) {
        let theme_name = self
            .theme
            .and_then(|theme| theme.name.as_deref())
            .unwrap_or("default");
        tracing::debug!(
            "composing [{}] for {} (theme: {})",
            self.components
                .iter()
                .map(Block::kind)
                .collect::<Vec<_>>()
                .join(", "),
            self.company.name,
            theme_name
        );

        match self.template.and_then(|template| template.name.as_deref()) {
            Some(name) => out.push_str(&format!(
                "<main class=\"ir-main\" data-template=\"{}\">",
                attr(name)
            )),
            None => out.push_str("<main class=\"ir-main\">"),
        }
        for block in &self.components {
            block.render(out);
        }
        out.push_str("</main>");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PageData;
    use crate::theme::StyleTokens;

    #[test]
    fn template_name_tags_the_main_region() {
        let company = Company::new("Acme Capital");
        let template = Template {
            name: Some("Capital Markets Hub".to_string()),
            layout: Some("capital-markets-hub".to_string()),
            settings: None,
        };

        let mut out = String::new();
        ComponentComposer::new(Some(&template), None, &company, Vec::new()).render(&mut out);
        assert!(out.contains("data-template=\"Capital Markets Hub\""));

        let mut untagged = String::new();
        ComponentComposer::new(None, None, &company, Vec::new()).render(&mut untagged);
        assert_eq!(untagged, "<main class=\"ir-main\"></main>");
    }

    #[test]
    fn blocks_render_in_list_order() {
        let company = Company::new("Acme Capital");
        let tokens = StyleTokens::resolve(None, &company);
        let data = PageData::default();
        let blocks = vec![
            Block::Portfolio(PortfolioGrid::new(&data.holdings, &tokens)),
            Block::Team(TeamGrid::new(&data.leaders, &tokens)),
        ];

        let mut out = String::new();
        ComponentComposer::new(None, None, &company, blocks).render(&mut out);
        let portfolio = out.find("id=\"portfolio\"").expect("portfolio section");
        let team = out.find("id=\"team\"").expect("team section");
        assert!(portfolio < team);
    }
}
