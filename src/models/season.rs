use serde::{Deserialize, Serialize};

/// The three cropping seasons of the Indian agricultural calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Kharif,
    Rabi,
    Zaid,
}

impl Season {
    /// Stable lowercase key, used in reason strings and config files.
    pub fn key(&self) -> &'static str {
        match self {
            Season::Kharif => "kharif",
            Season::Rabi => "rabi",
            Season::Zaid => "zaid",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Season::Kharif => "Kharif",
            Season::Rabi => "Rabi",
            Season::Zaid => "Zaid",
        }
    }

    pub fn phase(&self) -> &'static str {
        match self {
            Season::Kharif => "Monsoon Phase",
            Season::Rabi => "Winter Phase",
            Season::Zaid => "Summer Phase",
        }
    }

    pub fn color(&self) -> ratatui::style::Color {
        use ratatui::style::Color;
        match self {
            Season::Kharif => Color::Green,
            Season::Rabi => Color::Blue,
            Season::Zaid => Color::Yellow,
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "kharif" | "monsoon" => Some(Season::Kharif),
            "rabi" | "winter" => Some(Season::Rabi),
            "zaid" | "zayad" | "summer" => Some(Season::Zaid),
            _ => None,
        }
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn season_from_str_valid() {
        assert_eq!(Season::from_str("kharif"), Some(Season::Kharif));
        assert_eq!(Season::from_str("Kharif"), Some(Season::Kharif));
        assert_eq!(Season::from_str("monsoon"), Some(Season::Kharif));
        assert_eq!(Season::from_str("RABI"), Some(Season::Rabi));
        assert_eq!(Season::from_str("summer"), Some(Season::Zaid));
    }

    #[test]
    fn season_from_str_invalid() {
        assert_eq!(Season::from_str("autumn"), None);
        assert_eq!(Season::from_str(""), None);
    }

    #[test]
    fn season_key_round_trip() {
        for season in [Season::Kharif, Season::Rabi, Season::Zaid] {
            assert_eq!(Season::from_str(season.key()), Some(season));
        }
    }
}
