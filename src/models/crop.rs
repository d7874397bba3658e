use crate::models::Season;
use serde::{Deserialize, Serialize};

/// Categorical Low/Medium/High label used for water requirement,
/// risk, and market demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Level {
    Low,
    Medium,
    High,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Low => "Low",
            Level::Medium => "Medium",
            Level::High => "High",
        }
    }

    /// Color reading for risk-like fields (low is good).
    pub fn risk_color(&self) -> ratatui::style::Color {
        use ratatui::style::Color;
        match self {
            Level::Low => Color::Green,
            Level::Medium => Color::Yellow,
            Level::High => Color::Red,
        }
    }

    /// Color reading for demand-like fields (high is good).
    pub fn demand_color(&self) -> ratatui::style::Color {
        use ratatui::style::Color;
        match self {
            Level::Low => Color::Red,
            Level::Medium => Color::Yellow,
            Level::High => Color::Green,
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "low" => Some(Level::Low),
            "medium" | "med" => Some(Level::Medium),
            "high" => Some(Level::High),
            _ => None,
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One lifecycle window: the months (0-based indices) it covers and the
/// ordered task checklist for it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StageWindow {
    pub months: Vec<u32>,
    pub tasks: Vec<String>,
}

impl StageWindow {
    pub fn contains(&self, month: u32) -> bool {
        self.months.contains(&month)
    }
}

/// Sowing/growth/harvest calendar for a single crop. Month sets may
/// overlap across windows; precedence is decided by the stage resolver.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StageCalendar {
    pub sowing: StageWindow,
    pub growth: StageWindow,
    pub harvest: StageWindow,
}

/// Free-text justification notes shown alongside a recommendation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WhyNotes {
    pub season: String,
    pub market: String,
    pub risk: String,
}

/// A catalog crop record. Immutable after load; `base_risk` and
/// `market_demand` are static baselines that the classifier supersedes
/// with computed values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Crop {
    pub id: String,
    pub name: String,
    pub one_line: String,
    pub icon: String,
    pub seasons: Vec<Season>,
    pub regions: Vec<String>,
    pub water_requirement: Level,
    pub base_risk: Level,
    pub market_demand: Level,
    /// Reference price in rupees per quintal, display only.
    pub avg_price: f64,
    pub why: WhyNotes,
    pub stages: StageCalendar,
}

impl Crop {
    pub fn supports_season(&self, season: Season) -> bool {
        self.seasons.contains(&season)
    }

    pub fn grown_in(&self, region: &str) -> bool {
        self.regions.iter().any(|r| r == region)
    }

    pub fn is_multi_season(&self) -> bool {
        self.seasons.len() > 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_crop() -> Crop {
        Crop {
            id: "test".into(),
            name: "Test Crop".into(),
            one_line: "A crop for tests.".into(),
            icon: "test".into(),
            seasons: vec![Season::Kharif, Season::Zaid],
            regions: vec!["Vidarbha".into()],
            water_requirement: Level::Medium,
            base_risk: Level::Low,
            market_demand: Level::High,
            avg_price: 1000.0,
            why: WhyNotes {
                season: String::new(),
                market: String::new(),
                risk: String::new(),
            },
            stages: StageCalendar {
                sowing: StageWindow {
                    months: vec![5, 6],
                    tasks: vec!["Sow".into()],
                },
                growth: StageWindow {
                    months: vec![7],
                    tasks: vec!["Grow".into()],
                },
                harvest: StageWindow {
                    months: vec![9],
                    tasks: vec!["Reap".into()],
                },
            },
        }
    }

    #[test]
    fn level_from_str_valid() {
        assert_eq!(Level::from_str("Low"), Some(Level::Low));
        assert_eq!(Level::from_str("MEDIUM"), Some(Level::Medium));
        assert_eq!(Level::from_str("med"), Some(Level::Medium));
        assert_eq!(Level::from_str("high"), Some(Level::High));
    }

    #[test]
    fn level_from_str_invalid() {
        assert_eq!(Level::from_str("severe"), None);
        assert_eq!(Level::from_str(""), None);
    }

    #[test]
    fn crop_season_and_region_fit() {
        let crop = sample_crop();
        assert!(crop.supports_season(Season::Kharif));
        assert!(crop.supports_season(Season::Zaid));
        assert!(!crop.supports_season(Season::Rabi));
        assert!(crop.grown_in("Vidarbha"));
        assert!(!crop.grown_in("Punjab"));
        assert!(crop.is_multi_season());
    }

    #[test]
    fn stage_window_contains() {
        let crop = sample_crop();
        assert!(crop.stages.sowing.contains(5));
        assert!(!crop.stages.sowing.contains(7));
        // Out-of-range months are simply absent
        assert!(!crop.stages.sowing.contains(42));
    }
}
