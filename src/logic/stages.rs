use crate::models::{Crop, Stage, StagePlan};

/// Fallback checklist when no stage window covers the query month.
pub const GENERAL_CARE_STEPS: [&str; 3] = [
    "Monitor soil moisture levels",
    "Check for local pest reports",
    "Visit local market for price trends",
];

/// Resolve the lifecycle stage and task checklist for a crop in a given
/// month.
///
/// Windows are checked sowing, then growth, then harvest; the first
/// match wins, which fixes precedence for calendars where windows
/// overlap (maize's sowing and harvest sets both contain May). A month
/// outside every window, including out-of-range values, resolves to
/// General Care.
pub fn actionable_steps(crop: &Crop, month: u32) -> StagePlan {
    if crop.stages.sowing.contains(month) {
        return StagePlan {
            stage: Stage::Sowing,
            steps: crop.stages.sowing.tasks.clone(),
        };
    }
    if crop.stages.growth.contains(month) {
        return StagePlan {
            stage: Stage::Growth,
            steps: crop.stages.growth.tasks.clone(),
        };
    }
    if crop.stages.harvest.contains(month) {
        return StagePlan {
            stage: Stage::Harvest,
            steps: crop.stages.harvest.tasks.clone(),
        };
    }
    StagePlan {
        stage: Stage::GeneralCare,
        steps: GENERAL_CARE_STEPS.iter().map(|s| s.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::models::{Level, Season, StageCalendar, StageWindow, WhyNotes};

    fn overlap_crop() -> Crop {
        Crop {
            id: "overlap".into(),
            name: "Overlap".into(),
            one_line: String::new(),
            icon: "test".into(),
            seasons: vec![Season::Kharif],
            regions: vec![],
            water_requirement: Level::Low,
            base_risk: Level::Low,
            market_demand: Level::Low,
            avg_price: 0.0,
            why: WhyNotes {
                season: String::new(),
                market: String::new(),
                risk: String::new(),
            },
            stages: StageCalendar {
                sowing: StageWindow {
                    months: vec![5],
                    tasks: vec!["sow tasks".into()],
                },
                growth: StageWindow {
                    months: vec![5, 6],
                    tasks: vec!["grow tasks".into()],
                },
                harvest: StageWindow {
                    months: vec![6],
                    tasks: vec!["harvest tasks".into()],
                },
            },
        }
    }

    #[test]
    fn rice_growth_in_june() {
        let catalog = Catalog::load().unwrap();
        let rice = catalog.get("rice").unwrap();
        let plan = actionable_steps(rice, 6);
        assert_eq!(plan.stage, Stage::Growth);
        assert_eq!(
            plan.steps,
            vec!["Transplanting", "Water level management", "First urea dose"]
        );
    }

    #[test]
    fn sowing_wins_over_growth() {
        let crop = overlap_crop();
        let plan = actionable_steps(&crop, 5);
        assert_eq!(plan.stage, Stage::Sowing);
        assert_eq!(plan.steps, vec!["sow tasks"]);
    }

    #[test]
    fn growth_wins_over_harvest() {
        let crop = overlap_crop();
        let plan = actionable_steps(&crop, 6);
        assert_eq!(plan.stage, Stage::Growth);
    }

    #[test]
    fn maize_may_overlap_resolves_to_sowing_precedence() {
        // Maize lists May (5) in both sowing and harvest; sowing is
        // checked first.
        let catalog = Catalog::load().unwrap();
        let maize = catalog.get("maize").unwrap();
        let plan = actionable_steps(maize, 5);
        assert_eq!(plan.stage, Stage::Sowing);
    }

    #[test]
    fn uncovered_month_falls_back_to_general_care() {
        let catalog = Catalog::load().unwrap();
        let rice = catalog.get("rice").unwrap();
        // Rice has no window containing January (0).
        let plan = actionable_steps(rice, 0);
        assert_eq!(plan.stage, Stage::GeneralCare);
        assert_eq!(plan.steps, GENERAL_CARE_STEPS.to_vec());
        assert_eq!(plan.steps.len(), 3);
    }

    #[test]
    fn out_of_range_month_is_general_care() {
        let catalog = Catalog::load().unwrap();
        let rice = catalog.get("rice").unwrap();
        let plan = actionable_steps(rice, 42);
        assert_eq!(plan.stage, Stage::GeneralCare);
    }

    #[test]
    fn stage_steps_returned_verbatim() {
        let catalog = Catalog::load().unwrap();
        let wheat = catalog.get("wheat").unwrap();
        let plan = actionable_steps(wheat, 10);
        assert_eq!(plan.stage, Stage::Sowing);
        assert_eq!(plan.steps, wheat.stages.sowing.tasks);
    }
}
