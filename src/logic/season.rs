use crate::models::Season;

/// Map a 0-based calendar month to its cropping season.
///
/// Jun-Sep (5-8) is Kharif, Oct-Feb (9-11, 0-1) is Rabi, and the
/// remaining Mar-May window is Zaid. The bounds are the fixed constants
/// of the Indian agricultural calendar; they partition 0..=11 with no
/// gap or overlap. Months above 11 fall into the open Rabi arm, so the
/// function stays total for out-of-domain input.
pub fn detect_season(month: u32) -> Season {
    match month {
        5..=8 => Season::Kharif,
        0..=1 | 9.. => Season::Rabi,
        _ => Season::Zaid,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn covers_every_month_exactly_once() {
        let expected = [
            Season::Rabi,   // Jan
            Season::Rabi,   // Feb
            Season::Zaid,   // Mar
            Season::Zaid,   // Apr
            Season::Zaid,   // May
            Season::Kharif, // Jun
            Season::Kharif, // Jul
            Season::Kharif, // Aug
            Season::Kharif, // Sep
            Season::Rabi,   // Oct
            Season::Rabi,   // Nov
            Season::Rabi,   // Dec
        ];
        for (month, want) in expected.iter().enumerate() {
            assert_eq!(detect_season(month as u32), *want, "month {}", month);
        }
    }

    #[test]
    fn june_is_kharif() {
        let season = detect_season(6);
        assert_eq!(season, Season::Kharif);
        assert_eq!(season.key(), "kharif");
        assert_eq!(season.phase(), "Monsoon Phase");
    }

    #[test]
    fn boundary_months() {
        assert_eq!(detect_season(5), Season::Kharif);
        assert_eq!(detect_season(8), Season::Kharif);
        assert_eq!(detect_season(9), Season::Rabi);
        assert_eq!(detect_season(1), Season::Rabi);
        assert_eq!(detect_season(2), Season::Zaid);
        assert_eq!(detect_season(4), Season::Zaid);
    }

    #[test]
    fn out_of_domain_months_fall_into_the_open_rabi_arm() {
        assert_eq!(detect_season(12), Season::Rabi);
        assert_eq!(detect_season(25), Season::Rabi);
        assert_eq!(detect_season(u32::MAX), Season::Rabi);
    }
}
