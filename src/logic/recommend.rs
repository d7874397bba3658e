use crate::models::{Crop, CropAdvice, Level, RecommendationSet, Season, Tier};

/// Partition the catalog into recommendation tiers for one
/// (season, region) query.
///
/// Every crop lands in exactly one tier, in catalog order. The computed
/// demand and risk labels supersede the static baselines on the crop
/// record. Region matching is plain string equality, so an unknown
/// region degrades every crop to risky or not-suitable rather than
/// erroring.
pub fn classify(catalog: &[Crop], season: Season, region: &str) -> RecommendationSet {
    let mut set = RecommendationSet::default();

    for crop in catalog {
        let season_fit = crop.supports_season(season);
        let region_fit = crop.grown_in(region);

        // In-season crops carry high demand; off-season crops that can
        // grow in another window keep a medium floor.
        let market_demand = if season_fit {
            Level::High
        } else if crop.is_multi_season() {
            Level::Medium
        } else {
            Level::Low
        };

        let risk_level = if season_fit && region_fit {
            Level::Low
        } else if season_fit {
            Level::Medium
        } else {
            Level::High
        };

        let (tier, reason) = if season_fit && region_fit {
            (
                Tier::Recommended,
                "Perfect climate and regional match.".to_string(),
            )
        } else if season_fit {
            (
                Tier::Risky,
                "Suitable season but requires regional adaptation.".to_string(),
            )
        } else {
            (
                Tier::NotSuitable,
                format!("Not suitable for {} phase.", season.key()),
            )
        };

        let advice = CropAdvice {
            crop: crop.clone(),
            market_demand,
            risk_level,
            tier,
            reason,
        };

        match tier {
            Tier::Recommended => set.recommended.push(advice),
            Tier::Risky => set.risky.push(advice),
            Tier::NotSuitable => set.not_suitable.push(advice),
        }
    }

    set
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn catalog() -> Catalog {
        Catalog::load().unwrap()
    }

    #[test]
    fn partition_closure_over_all_queries() {
        let catalog = catalog();
        let regions = ["Western Maharashtra", "Vidarbha", "Atlantis", ""];
        for season in [Season::Kharif, Season::Rabi, Season::Zaid] {
            for region in regions {
                let set = classify(catalog.crops(), season, region);
                assert_eq!(set.total(), catalog.len(), "{:?}/{}", season, region);

                let mut ids: Vec<&str> = set
                    .recommended
                    .iter()
                    .chain(&set.risky)
                    .chain(&set.not_suitable)
                    .map(|a| a.crop.id.as_str())
                    .collect();
                ids.sort_unstable();
                ids.dedup();
                assert_eq!(ids.len(), catalog.len(), "crop appeared twice");
            }
        }
    }

    #[test]
    fn kharif_western_maharashtra_example() {
        let catalog = catalog();
        let set = classify(catalog.crops(), Season::Kharif, "Western Maharashtra");

        let recommended: Vec<&str> =
            set.recommended.iter().map(|a| a.crop.id.as_str()).collect();
        assert!(recommended.contains(&"rice"));

        let not_suitable: Vec<&str> = set
            .not_suitable
            .iter()
            .map(|a| a.crop.id.as_str())
            .collect();
        assert!(not_suitable.contains(&"wheat"));

        let rice = &set.recommended[0];
        assert_eq!(rice.crop.id, "rice");
        assert_eq!(rice.market_demand, Level::High);
        assert_eq!(rice.risk_level, Level::Low);
        assert_eq!(rice.reason, "Perfect climate and regional match.");
    }

    #[test]
    fn season_fit_without_region_is_risky() {
        let catalog = catalog();
        // Soybean is kharif but does not list Western Maharashtra.
        let set = classify(catalog.crops(), Season::Kharif, "Western Maharashtra");
        let soybean = set
            .risky
            .iter()
            .find(|a| a.crop.id == "soybean")
            .expect("soybean should be risky");
        assert_eq!(soybean.market_demand, Level::High);
        assert_eq!(soybean.risk_level, Level::Medium);
        assert_eq!(
            soybean.reason,
            "Suitable season but requires regional adaptation."
        );
    }

    #[test]
    fn region_fit_without_season_is_still_not_suitable() {
        let catalog = catalog();
        // Soybean lists Vidarbha but is kharif-only; a region match
        // cannot soften an off-season verdict.
        let set = classify(catalog.crops(), Season::Rabi, "Vidarbha");
        let soybean = set
            .not_suitable
            .iter()
            .find(|a| a.crop.id == "soybean")
            .expect("soybean should be not suitable in rabi");
        assert!(soybean.crop.grown_in("Vidarbha"));
        assert_eq!(soybean.risk_level, Level::High);
        assert_eq!(soybean.market_demand, Level::Low);
        assert_eq!(soybean.reason, "Not suitable for rabi phase.");
    }

    #[test]
    fn off_season_demand_depends_on_multi_season() {
        let catalog = catalog();
        let set = classify(catalog.crops(), Season::Rabi, "Vidarbha");

        // Wheat is the only rabi crop; everything else is off-season.
        let maize = set
            .not_suitable
            .iter()
            .find(|a| a.crop.id == "maize")
            .unwrap();
        assert_eq!(maize.market_demand, Level::Medium); // kharif + zaid
        assert_eq!(maize.risk_level, Level::High);
        assert_eq!(maize.reason, "Not suitable for rabi phase.");

        let rice = set
            .not_suitable
            .iter()
            .find(|a| a.crop.id == "rice")
            .unwrap();
        assert_eq!(rice.market_demand, Level::Low); // single-season
        assert_eq!(rice.risk_level, Level::High);
    }

    #[test]
    fn unknown_region_yields_no_recommended() {
        let catalog = catalog();
        let set = classify(catalog.crops(), Season::Kharif, "Atlantis");
        assert!(set.recommended.is_empty());
        // Season-fit crops all degrade to risky.
        for advice in &set.risky {
            assert_eq!(advice.risk_level, Level::Medium);
        }
    }

    #[test]
    fn tier_lists_preserve_catalog_order() {
        let catalog = catalog();
        let set = classify(catalog.crops(), Season::Kharif, "Vidarbha");
        let positions: Vec<usize> = set
            .risky
            .iter()
            .map(|a| {
                catalog
                    .crops()
                    .iter()
                    .position(|c| c.id == a.crop.id)
                    .unwrap()
            })
            .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
    }
}
