use crate::models::{Crop, Stage};
use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

pub const MONTH_ABBREVS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

pub fn month_name(month: u32) -> &'static str {
    match month {
        0 => "January",
        1 => "February",
        2 => "March",
        3 => "April",
        4 => "May",
        5 => "June",
        6 => "July",
        7 => "August",
        8 => "September",
        9 => "October",
        10 => "November",
        11 => "December",
        _ => "Unknown",
    }
}

/// One-line 12-month strip for a crop: each month cell is colored by the
/// stage window that claims it (sowing before growth before harvest,
/// matching the resolver's precedence) and the query month is bracketed.
pub struct MonthStrip<'a> {
    crop: &'a Crop,
    query_month: u32,
}

impl<'a> MonthStrip<'a> {
    pub fn new(crop: &'a Crop, query_month: u32) -> Self {
        Self { crop, query_month }
    }

    fn stage_for(&self, month: u32) -> Option<Stage> {
        if self.crop.stages.sowing.contains(month) {
            Some(Stage::Sowing)
        } else if self.crop.stages.growth.contains(month) {
            Some(Stage::Growth)
        } else if self.crop.stages.harvest.contains(month) {
            Some(Stage::Harvest)
        } else {
            None
        }
    }

    pub fn line(&self) -> Line<'static> {
        let mut spans: Vec<Span> = Vec::with_capacity(24);
        for (month, abbrev) in MONTH_ABBREVS.iter().enumerate() {
            let month = month as u32;
            let style = match self.stage_for(month) {
                Some(stage) => Style::default().fg(stage.color()),
                None => Theme::dim(),
            };

            if month == self.query_month {
                spans.push(Span::styled(format!("[{}]", abbrev), style.patch(Theme::header())));
            } else {
                spans.push(Span::styled(format!(" {} ", abbrev), style));
            }
        }
        Line::from(spans)
    }
}

pub struct StageLegend;

impl Widget for StageLegend {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let stages = [
            Stage::Sowing,
            Stage::Growth,
            Stage::Harvest,
            Stage::GeneralCare,
        ];

        let mut y = area.y;
        for stage in stages {
            if y >= area.y + area.height {
                break;
            }

            let line = Line::from(vec![
                Span::styled(
                    format!("{} ", stage.symbol()),
                    Style::default().fg(stage.color()),
                ),
                Span::styled(stage.as_str(), Theme::dim()),
            ]);

            buf.set_line(area.x, y, &line, area.width);
            y += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn month_names_cover_year() {
        for month in 0..12u32 {
            assert_ne!(month_name(month), "Unknown");
        }
        assert_eq!(month_name(12), "Unknown");
    }

    #[test]
    fn strip_line_has_twelve_cells() {
        let catalog = Catalog::load().unwrap();
        let rice = catalog.get("rice").unwrap();
        let line = MonthStrip::new(rice, 6).line();
        assert_eq!(line.spans.len(), 12);
    }
}
