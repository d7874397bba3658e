pub mod month_strip;

pub use month_strip::{month_name, StageLegend, MonthStrip, MONTH_ABBREVS};
