use crate::models::{Crop, Level};
use serde::{Deserialize, Serialize};

/// Recommendation tier a crop lands in for a given (season, region) query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tier {
    Recommended,
    Risky,
    NotSuitable,
}

impl Tier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Recommended => "Recommended",
            Tier::Risky => "Risky",
            Tier::NotSuitable => "Not Suitable",
        }
    }

    pub fn color(&self) -> ratatui::style::Color {
        use ratatui::style::Color;
        match self {
            Tier::Recommended => Color::Green,
            Tier::Risky => Color::Yellow,
            Tier::NotSuitable => Color::Red,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Tier::Recommended => "✓",
            Tier::Risky => "⚠",
            Tier::NotSuitable => "✗",
        }
    }

    pub fn all() -> &'static [Tier] {
        &[Tier::Recommended, Tier::Risky, Tier::NotSuitable]
    }

    pub fn next(&self) -> Self {
        match self {
            Tier::Recommended => Tier::Risky,
            Tier::Risky => Tier::NotSuitable,
            Tier::NotSuitable => Tier::Recommended,
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A catalog crop augmented with the classifier's computed fields.
/// `market_demand` and `risk_level` here supersede the static baselines
/// on the crop record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CropAdvice {
    pub crop: Crop,
    pub market_demand: Level,
    pub risk_level: Level,
    pub tier: Tier,
    pub reason: String,
}

/// Partition of the catalog for one (season, region) query. Recomputed
/// fresh on every query, never stored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecommendationSet {
    pub recommended: Vec<CropAdvice>,
    pub risky: Vec<CropAdvice>,
    pub not_suitable: Vec<CropAdvice>,
}

impl RecommendationSet {
    pub fn tier(&self, tier: Tier) -> &[CropAdvice] {
        match tier {
            Tier::Recommended => &self.recommended,
            Tier::Risky => &self.risky,
            Tier::NotSuitable => &self.not_suitable,
        }
    }

    pub fn total(&self) -> usize {
        self.recommended.len() + self.risky.len() + self.not_suitable.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// Crop lifecycle stage resolved for a query month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stage {
    Sowing,
    Growth,
    Harvest,
    GeneralCare,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Sowing => "Sowing",
            Stage::Growth => "Growth",
            Stage::Harvest => "Harvest",
            Stage::GeneralCare => "General Care",
        }
    }

    pub fn color(&self) -> ratatui::style::Color {
        use ratatui::style::Color;
        match self {
            Stage::Sowing => Color::Cyan,
            Stage::Growth => Color::Green,
            Stage::Harvest => Color::Yellow,
            Stage::GeneralCare => Color::Gray,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Stage::Sowing => "●",
            Stage::Growth => "▲",
            Stage::Harvest => "■",
            Stage::GeneralCare => "·",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Stage resolution result: the matched stage and its task checklist.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StagePlan {
    pub stage: Stage,
    pub steps: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_cycle_covers_all() {
        let mut tier = Tier::Recommended;
        for _ in 0..3 {
            tier = tier.next();
        }
        assert_eq!(tier, Tier::Recommended);
        assert_eq!(Tier::all().len(), 3);
    }

    #[test]
    fn empty_set_totals_zero() {
        let set = RecommendationSet::default();
        assert!(set.is_empty());
        assert_eq!(set.total(), 0);
        assert!(set.tier(Tier::Risky).is_empty());
    }
}
