//! Per-layout block cluster registry

use crate::model::PageData;
use crate::render::blocks::{
    AnalystTable, ContactPanel, Hero, KpiStrip, PortfolioGrid, PressList, ResearchList, TeamGrid,
};
use crate::render::compose::Block;
use crate::theme::StyleTokens;

/// Named block orderings, one constructor per layout.
pub struct ComponentClusters;

impl ComponentClusters {
    /// The Capital Markets Hub body: thesis and AUM up top, then the
    /// portfolio snapshot, research, coverage, team, news, and contact.
    pub fn capital_markets_hub<'a>(data: &'a PageData, tokens: &'a StyleTokens) -> Vec<Block<'a>> {
        vec![
            Block::Hero(Hero::new(data, tokens)),
            Block::Kpis(KpiStrip::new(&data.kpis, tokens)),
            Block::Portfolio(PortfolioGrid::new(&data.holdings, tokens)),
            Block::Research(ResearchList::new(&data.research, tokens)),
            Block::Analysts(AnalystTable::new(&data.analysts, tokens)),
            Block::Team(TeamGrid::new(&data.leaders, tokens)),
            Block::Press(PressList::new(&data.press_releases, tokens)),
            Block::Contact(ContactPanel::new(&data.contact, tokens)),
        ]
    }
}
