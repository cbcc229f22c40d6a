//! Page block renderers

pub mod analysts;
pub mod contact;
pub mod header;
pub mod hero;
pub mod kpis;
pub mod portfolio;
pub mod press;
pub mod research;
pub mod team;

pub use analysts::AnalystTable;
pub use contact::ContactPanel;
pub use header::PageHeader;
pub use hero::Hero;
pub use kpis::KpiStrip;
pub use portfolio::PortfolioGrid;
pub use press::PressList;
pub use research::ResearchList;
pub use team::TeamGrid;
