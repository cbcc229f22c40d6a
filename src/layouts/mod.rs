//! Page layouts

pub mod capital_markets_hub;

pub use capital_markets_hub::CapitalMarketsHub;

/// Layouts the generator can dispatch to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutKind {
    CapitalMarketsHub,
}

impl LayoutKind {
    pub const ALL: [LayoutKind; 1] = [LayoutKind::CapitalMarketsHub];

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "capital-markets-hub" => Some(Self::CapitalMarketsHub),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::CapitalMarketsHub => "capital-markets-hub",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_names_round_trip() {
        for kind in LayoutKind::ALL {
            assert_eq!(LayoutKind::from_name(kind.name()), Some(kind));
        }
        assert_eq!(LayoutKind::from_name("earnings-first"), None);
    }
}
