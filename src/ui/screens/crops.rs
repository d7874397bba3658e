use crate::logic::actionable_steps;
use crate::models::Crop;
use crate::ui::components::month_name;
use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Cell, List, ListItem, Paragraph, Row, Table, Widget, Wrap},
};

pub struct CropsScreen<'a> {
    pub crops: &'a [Crop],
    pub month: u32,
    pub selected_index: usize,
}

impl<'a> CropsScreen<'a> {
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

impl Widget for CropsScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Title
                Constraint::Min(10),   // Table + detail
                Constraint::Length(1), // Nav
            ])
            .split(area);

        let title = Line::from(vec![
            Span::styled("Crop Catalog", Theme::title()),
            Span::styled(format!(" ({} crops)", self.crops.len()), Theme::dim()),
        ]);
        Paragraph::new(title).render(chunks[0], buf);

        let content = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(chunks[1]);

        self.render_table(content[0], buf);
        self.render_steps(content[1], buf);

        let nav = Line::from(vec![
            Span::styled("[↑↓]", Theme::nav_key()),
            Span::styled("Navigate ", Theme::nav_label()),
            Span::styled("[←→]", Theme::nav_key()),
            Span::styled("Month ", Theme::nav_label()),
            Span::styled("[Esc]", Theme::nav_key()),
            Span::styled("Back", Theme::nav_label()),
        ]);
        Paragraph::new(nav).render(chunks[2], buf);
    }
}

impl CropsScreen<'_> {
    fn render_table(&self, area: Rect, buf: &mut Buffer) {
        let header_cells = ["Crop", "Seasons", "Water", "Price (₹/q)"]
            .iter()
            .map(|h| Cell::from(*h).style(Theme::header()));

        let header = Row::new(header_cells).height(1);

        let rows: Vec<Row> = self
            .crops
            .iter()
            .enumerate()
            .map(|(i, crop)| {
                let style = if i == self.selected_index {
                    Theme::selected()
                } else {
                    Theme::normal()
                };

                let seasons = crop
                    .seasons
                    .iter()
                    .map(|s| s.label())
                    .collect::<Vec<_>>()
                    .join(", ");

                let cells = vec![
                    Cell::from(crop.name.clone()),
                    Cell::from(seasons),
                    Cell::from(crop.water_requirement.as_str()),
                    Cell::from(format!("{:.0}", crop.avg_price)),
                ];

                Row::new(cells).style(style)
            })
            .collect();

        let widths = [
            Constraint::Min(16),
            Constraint::Length(14),
            Constraint::Length(8),
            Constraint::Length(12),
        ];

        let table = Table::new(rows, widths).header(header).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Theme::border()),
        );

        Widget::render(table, area, buf);
    }

    fn render_steps(&self, area: Rect, buf: &mut Buffer) {
        let crop = match self.selected_crop() {
            Some(c) => c,
            None => return,
        };

        let plan = actionable_steps(crop, self.month);

        let block = Block::default()
            .title(format!("Action Plan - {}", month_name(self.month)))
            .borders(Borders::ALL)
            .border_style(Theme::border());

        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(4)])
            .split(inner);

        let head = vec![
            Line::from(vec![
                Span::styled(crop.name.clone(), Theme::header()),
                Span::raw("  "),
                Span::styled(
                    format!("{} {}", plan.stage.symbol(), plan.stage.as_str()),
                    Style::default().fg(plan.stage.color()),
                ),
            ]),
            Line::from(vec![Span::styled(crop.one_line.clone(), Theme::dim())]),
        ];
        Paragraph::new(head)
            .wrap(Wrap { trim: true })
            .render(chunks[0], buf);

        let items: Vec<ListItem> = plan
            .steps
            .iter()
            .enumerate()
            .map(|(i, step)| {
                let line = Line::from(vec![
                    Span::styled(format!("{}. ", i + 1), Theme::dim()),
                    Span::styled(step.clone(), Theme::normal()),
                ]);
                ListItem::new(line)
            })
            .collect();

        List::new(items).render(chunks[1], buf);
    }
}
