use crate::error::{AgriOpsError, Result};
use crate::models::Crop;
use std::collections::HashSet;

/// Embedded crop dataset. The catalog is an immutable loaded table; a
/// future file- or service-backed source injects the same shape.
const CROPS_JSON: &str = include_str!("../data/crops.json");

/// Regions selectable in settings. Region matching is plain string
/// comparison, so an unlisted region simply never fits.
pub const REGIONS: &[&str] = &[
    "Western Maharashtra",
    "Central Maharashtra",
    "Vidarbha",
    "North India Plains",
    "Coastal Karnataka",
    "Gujarat Saurashtra",
];

#[derive(Debug, Clone)]
pub struct Catalog {
    crops: Vec<Crop>,
}

impl Catalog {
    /// Parse and validate the embedded dataset.
    pub fn load() -> Result<Self> {
        Self::from_json(CROPS_JSON)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let crops: Vec<Crop> = serde_json::from_str(json)?;
        Self::validate(&crops)?;
        tracing::debug!(count = crops.len(), "crop catalog loaded");
        Ok(Self { crops })
    }

    fn validate(crops: &[Crop]) -> Result<()> {
        let mut seen = HashSet::new();
        for crop in crops {
            if crop.seasons.is_empty() {
                return Err(AgriOpsError::InvalidData(format!(
                    "crop '{}' has an empty season set",
                    crop.id
                )));
            }
            if !seen.insert(crop.id.as_str()) {
                return Err(AgriOpsError::InvalidData(format!(
                    "duplicate crop id '{}'",
                    crop.id
                )));
            }
        }
        Ok(())
    }

    pub fn crops(&self) -> &[Crop] {
        &self.crops
    }

    pub fn get(&self, id: &str) -> Option<&Crop> {
        self.crops.iter().find(|c| c.id == id)
    }

    pub fn len(&self) -> usize {
        self.crops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.crops.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Season;

    #[test]
    fn embedded_catalog_loads() {
        let catalog = Catalog::load().unwrap();
        assert!(!catalog.is_empty());
        assert_eq!(catalog.len(), 5);
        for id in ["rice", "wheat", "soybean", "maize", "moong"] {
            assert!(catalog.get(id).is_some(), "missing crop {}", id);
        }
    }

    #[test]
    fn catalog_order_is_dataset_order() {
        let catalog = Catalog::load().unwrap();
        let ids: Vec<&str> = catalog.crops().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["rice", "wheat", "soybean", "maize", "moong"]);
    }

    #[test]
    fn every_crop_has_seasons() {
        let catalog = Catalog::load().unwrap();
        for crop in catalog.crops() {
            assert!(!crop.seasons.is_empty(), "{} has no seasons", crop.id);
        }
    }

    #[test]
    fn rice_matches_dataset() {
        let catalog = Catalog::load().unwrap();
        let rice = catalog.get("rice").unwrap();
        assert_eq!(rice.name, "Rice (Paddy)");
        assert_eq!(rice.seasons, vec![Season::Kharif]);
        assert!(rice.grown_in("Western Maharashtra"));
        assert_eq!(rice.stages.growth.months, vec![6, 7, 8]);
        assert_eq!(rice.stages.growth.tasks.len(), 3);
    }

    #[test]
    fn rejects_empty_season_set() {
        let json = r#"[{
            "id": "x", "name": "X", "one_line": "", "icon": "x",
            "seasons": [], "regions": [],
            "water_requirement": "Low", "base_risk": "Low", "market_demand": "Low",
            "avg_price": 0,
            "why": { "season": "", "market": "", "risk": "" },
            "stages": {
                "sowing": { "months": [], "tasks": [] },
                "growth": { "months": [], "tasks": [] },
                "harvest": { "months": [], "tasks": [] }
            }
        }]"#;
        assert!(matches!(
            Catalog::from_json(json),
            Err(AgriOpsError::InvalidData(_))
        ));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let catalog = Catalog::load().unwrap();
        let mut crops = catalog.crops().to_vec();
        crops.push(crops[0].clone());
        let json = serde_json::to_string(&crops).unwrap();
        assert!(matches!(
            Catalog::from_json(&json),
            Err(AgriOpsError::InvalidData(_))
        ));
    }
}
