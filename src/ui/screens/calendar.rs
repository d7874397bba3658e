use crate::logic::actionable_steps;
use crate::models::Crop;
use crate::ui::components::{month_name, MonthStrip, StageLegend};
use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

pub struct CalendarScreen<'a> {
    pub crops: &'a [Crop],
    pub month: u32,
    pub selected_index: usize,
}

impl<'a> CalendarScreen<'a> {
    pub fn new(crops: &'a [Crop], month: u32) -> Self {
        Self {
            crops,
            month,
            selected_index: 0,
        }
    }

    pub fn with_selection(mut self, index: usize) -> Self {
        self.selected_index = index;
        self
    }

    fn selected_crop(&self) -> Option<&Crop> {
        self.crops.get(self.selected_index)
    }
}

impl Widget for CalendarScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Title
                Constraint::Min(10),   // Grid + details
                Constraint::Length(1), // Nav
            ])
            .split(area);

        // Title
        let title = Line::from(vec![
            Span::styled("Crop Calendar", Theme::title()),
            Span::styled(
                format!(" - {}", month_name(self.month)),
                Theme::highlight(),
            ),
        ]);
        Paragraph::new(title).render(chunks[0], buf);

        // Grid on left, stage details on right
        let content = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(chunks[1]);

        let grid_area = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(8), Constraint::Length(6)])
            .split(content[0]);

        self.render_grid(grid_area[0], buf);

        let legend_block = Block::default()
            .title("Legend")
            .borders(Borders::ALL)
            .border_style(Theme::border());
        let legend_inner = legend_block.inner(grid_area[1]);
        legend_block.render(grid_area[1], buf);
        StageLegend.render(legend_inner, buf);

        self.render_details(content[1], buf);

        // Navigation
        let nav = Line::from(vec![
            Span::styled("[↑↓]", Theme::nav_key()),
            Span::styled("Crop ", Theme::nav_label()),
            Span::styled("[←→]", Theme::nav_key()),
            Span::styled("Month ", Theme::nav_label()),
            Span::styled("[Esc]", Theme::nav_key()),
            Span::styled("Back", Theme::nav_label()),
        ]);
        Paragraph::new(nav).render(chunks[2], buf);
    }
}

impl CalendarScreen<'_> {
    fn render_grid(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title("Stage Windows")
            .borders(Borders::ALL)
            .border_style(Theme::border());

        let inner = block.inner(area);
        block.render(area, buf);

        // One row per crop: name, then the 12-month strip
        let mut y = inner.y;
        for (i, crop) in self.crops.iter().enumerate() {
            if y + 1 >= inner.y + inner.height {
                break;
            }

            let name_style = if i == self.selected_index {
                Theme::selected()
            } else {
                Theme::normal()
            };
            let name_line = Line::from(Span::styled(crop.name.clone(), name_style));
            buf.set_line(inner.x, y, &name_line, inner.width);

            let strip_line = MonthStrip::new(crop, self.month).line();
            buf.set_line(inner.x + 2, y + 1, &strip_line, inner.width.saturating_sub(2));

            y += 2;
        }
    }

    fn render_details(&self, area: Rect, buf: &mut Buffer) {
        let crop = match self.selected_crop() {
            Some(c) => c,
            None => return,
        };

        let plan = actionable_steps(crop, self.month);

        let block = Block::default()
            .title(format!("{} in {}", crop.name, month_name(self.month)))
            .borders(Borders::ALL)
            .border_style(Theme::border());

        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines = vec![
            Line::from(vec![
                Span::styled("Stage: ", Theme::dim()),
                Span::styled(
                    format!("{} {}", plan.stage.symbol(), plan.stage.as_str()),
                    Style::default().fg(plan.stage.color()),
                ),
            ]),
            Line::from(vec![]),
            Line::from(vec![Span::styled("Tasks:", Theme::dim())]),
        ];

        for step in &plan.steps {
            lines.push(Line::from(vec![
                Span::styled("  • ", Theme::dim()),
                Span::styled(step.clone(), Theme::normal()),
            ]));
        }

        Paragraph::new(lines).wrap(Wrap { trim: true }).render(inner, buf);
    }
}
