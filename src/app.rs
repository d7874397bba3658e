use crate::catalog::{Catalog, REGIONS};
use crate::config::Config;
use crate::db::Database;
use crate::error::Result;
use crate::logic::{classify, detect_season};
use crate::models::{CropAdvice, RecommendationSet, Season, Tier};
use crate::ui::screens::SettingsField;
use chrono::{Datelike, Local};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Dashboard,
    Recommendations,
    Calendar,
    Crops,
    Settings,
}

impl Screen {
    pub fn from_key(c: char) -> Option<Self> {
        match c {
            '1' => Some(Screen::Dashboard),
            '2' => Some(Screen::Recommendations),
            '3' => Some(Screen::Calendar),
            '4' => Some(Screen::Crops),
            's' | 'S' => Some(Screen::Settings),
            _ => None,
        }
    }
}

pub struct RecommendationsState {
    pub tier: Tier,
    pub selected_index: usize,
}

impl RecommendationsState {
    pub fn new() -> Self {
        Self {
            tier: Tier::Recommended,
            selected_index: 0,
        }
    }

    pub fn next(&mut self, max: usize) {
        if max > 0 && self.selected_index < max - 1 {
            self.selected_index += 1;
        }
    }

    pub fn prev(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    pub fn cycle_tier(&mut self) {
        self.tier = self.tier.next();
        self.selected_index = 0;
    }
}

pub struct CropsState {
    pub selected_index: usize,
}

impl CropsState {
    pub fn new() -> Self {
        Self { selected_index: 0 }
    }

    pub fn next(&mut self, max: usize) {
        if max > 0 && self.selected_index < max - 1 {
            self.selected_index += 1;
        }
    }

    pub fn prev(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }
}

pub struct CalendarState {
    pub selected_index: usize,
}

impl CalendarState {
    pub fn new() -> Self {
        Self { selected_index: 0 }
    }

    pub fn next(&mut self, max: usize) {
        if max > 0 && self.selected_index < max - 1 {
            self.selected_index += 1;
        }
    }

    pub fn prev(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }
}

pub struct SettingsState {
    pub focused_field: SettingsField,
}

impl SettingsState {
    pub fn new() -> Self {
        Self {
            focused_field: SettingsField::Region,
        }
    }

    pub fn next_field(&mut self) {
        self.focused_field = self.focused_field.next();
    }

    pub fn prev_field(&mut self) {
        self.focused_field = self.focused_field.prev();
    }
}

pub struct App {
    pub screen: Screen,
    pub should_quit: bool,
    pub config: Config,
    pub db: Database,
    pub catalog: Catalog,

    // Query inputs, owned here and passed to the engine explicitly
    pub month: u32,
    pub region: String,

    // Derived advice, recomputed whenever month or region changes
    pub season: Season,
    pub advice: RecommendationSet,

    pub alerts_enabled: bool,

    // Screen states
    pub recommendations_state: RecommendationsState,
    pub calendar_state: CalendarState,
    pub crops_state: CropsState,
    pub settings_state: SettingsState,

    // UI state
    pub status_message: Option<String>,
}

impl App {
    pub fn new(config: Config, db: Database, catalog: Catalog) -> Result<Self> {
        // The query month starts at the local calendar month; the engine
        // itself never reads the clock.
        let month = Local::now().month0();
        let region = config.farm.region.clone();

        // Persisted toggle wins over the config default
        let alerts_enabled = db
            .alerts_preference()?
            .unwrap_or(config.farm.alerts_enabled);

        let season = detect_season(month);
        let advice = classify(catalog.crops(), season, &region);

        Ok(Self {
            screen: Screen::Dashboard,
            should_quit: false,
            config,
            db,
            catalog,
            month,
            region,
            season,
            advice,
            alerts_enabled,
            recommendations_state: RecommendationsState::new(),
            calendar_state: CalendarState::new(),
            crops_state: CropsState::new(),
            settings_state: SettingsState::new(),
            status_message: None,
        })
    }

    pub fn switch_screen(&mut self, screen: Screen) {
        self.screen = screen;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn set_status(&mut self, message: &str) {
        self.status_message = Some(message.to_string());
    }

    fn refresh_advice(&mut self) {
        self.season = detect_season(self.month);
        self.advice = classify(self.catalog.crops(), self.season, &self.region);
        self.recommendations_state.selected_index = 0;
    }

    pub fn next_month(&mut self) {
        self.month = (self.month + 1) % 12;
        self.refresh_advice();
    }

    pub fn prev_month(&mut self) {
        self.month = (self.month + 11) % 12;
        self.refresh_advice();
    }

    pub fn cycle_region(&mut self, forward: bool) {
        let idx = REGIONS
            .iter()
            .position(|r| *r == self.region)
            .unwrap_or(0);
        let next = if forward {
            (idx + 1) % REGIONS.len()
        } else {
            (idx + REGIONS.len() - 1) % REGIONS.len()
        };
        self.region = REGIONS[next].to_string();
        self.refresh_advice();
    }

    pub fn toggle_alerts(&mut self) {
        self.alerts_enabled = !self.alerts_enabled;
        match self.db.set_alerts_enabled(self.alerts_enabled) {
            Ok(()) => self.set_status(if self.alerts_enabled {
                "Risk alerts enabled"
            } else {
                "Risk alerts disabled"
            }),
            Err(e) => self.set_status(&format!("Failed to save preference: {}", e)),
        }
    }

    pub fn current_tier_list(&self) -> &[CropAdvice] {
        self.advice.tier(self.recommendations_state.tier)
    }

    /// Risky-tier advice surfaced on the dashboard when alerts are on.
    pub fn active_alerts(&self) -> &[CropAdvice] {
        if self.alerts_enabled {
            &self.advice.risky
        } else {
            &[]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_app() -> App {
        let config = Config::default();
        let db = Database::open_in_memory().unwrap();
        let catalog = Catalog::load().unwrap();
        App::new(config, db, catalog).unwrap()
    }

    #[test]
    fn screen_from_key() {
        assert_eq!(Screen::from_key('1'), Some(Screen::Dashboard));
        assert_eq!(Screen::from_key('2'), Some(Screen::Recommendations));
        assert_eq!(Screen::from_key('s'), Some(Screen::Settings));
        assert_eq!(Screen::from_key('z'), None);
    }

    #[test]
    fn month_navigation_wraps_and_recomputes() {
        let mut app = test_app();
        app.month = 11;
        app.next_month();
        assert_eq!(app.month, 0);
        assert_eq!(app.season, detect_season(0));
        app.prev_month();
        assert_eq!(app.month, 11);
        assert_eq!(app.advice.total(), app.catalog.len());
    }

    #[test]
    fn region_cycles_through_fixed_list() {
        let mut app = test_app();
        let start = app.region.clone();
        for _ in 0..REGIONS.len() {
            app.cycle_region(true);
        }
        assert_eq!(app.region, start);
    }

    #[test]
    fn alert_toggle_round_trips_through_store() {
        let mut app = test_app();
        assert!(app.alerts_enabled);
        app.toggle_alerts();
        assert!(!app.alerts_enabled);
        assert!(!app.db.alerts_enabled().unwrap());
        assert!(app.active_alerts().is_empty());
    }
}
