use crate::models::{CropAdvice, RecommendationSet, Tier};
use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget, Wrap},
};

pub struct RecommendationsScreen<'a> {
    pub advice: &'a RecommendationSet,
    pub tier: Tier,
    pub selected_index: usize,
}

impl<'a> RecommendationsScreen<'a> {
    pub fn new(advice: &'a RecommendationSet) -> Self {
        Self {
            advice,
            tier: Tier::Recommended,
            selected_index: 0,
        }
    }

    pub fn with_tier(mut self, tier: Tier) -> Self {
        self.tier = tier;
        self
    }

    pub fn with_selection(mut self, index: usize) -> Self {
        self.selected_index = index;
        self
    }

    fn tier_list(&self) -> &[CropAdvice] {
        self.advice.tier(self.tier)
    }
}

impl Widget for RecommendationsScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Title + tier tabs
                Constraint::Min(10),   // Content
                Constraint::Length(1), // Nav
            ])
            .split(area);

        // Title with tier tabs
        let mut spans = vec![
            Span::styled("Recommendations", Theme::title()),
            Span::raw("  "),
        ];
        for tier in Tier::all() {
            let count = self.advice.tier(*tier).len();
            let label = format!(" {} ({}) ", tier.as_str(), count);
            if *tier == self.tier {
                spans.push(Span::styled(
                    label,
                    Style::default().fg(tier.color()).patch(Theme::selected()),
                ));
            } else {
                spans.push(Span::styled(label, Style::default().fg(tier.color())));
            }
        }
        Paragraph::new(Line::from(spans)).render(chunks[0], buf);

        // Content: list on left, details on right
        let content = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(chunks[1]);

        self.render_list(content[0], buf);
        self.render_details(content[1], buf);

        // Navigation
        let nav = Line::from(vec![
            Span::styled("[Tab]", Theme::nav_key()),
            Span::styled("Tier ", Theme::nav_label()),
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

impl RecommendationsScreen<'_> {
    fn render_list(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(self.tier.as_str())
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.tier.color()));

        let inner = block.inner(area);
        block.render(area, buf);

        let list = self.tier_list();

        if list.is_empty() {
            let para = Paragraph::new(Span::styled("No crops in this tier", Theme::dim()));
            para.render(inner, buf);
            return;
        }

        let items: Vec<ListItem> = list
            .iter()
            .enumerate()
            .map(|(i, advice)| {
                let style = if i == self.selected_index {
                    Theme::selected()
                } else {
                    Style::default()
                };

                let tier_style = Style::default().fg(advice.tier.color());
                let line = Line::from(vec![
                    Span::styled(format!("{} ", advice.tier.symbol()), tier_style),
                    Span::styled(advice.crop.name.clone(), Theme::normal()),
                ]);

                ListItem::new(line).style(style)
            })
            .collect();

        List::new(items).render(inner, buf);
    }

    fn render_details(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title("Details")
            .borders(Borders::ALL)
            .border_style(Theme::border());

        let inner = block.inner(area);
        block.render(area, buf);

        let advice = match self.tier_list().get(self.selected_index) {
            Some(a) => a,
            None => {
                let para =
                    Paragraph::new(Span::styled("Select a crop to view details", Theme::dim()));
                para.render(inner, buf);
                return;
            }
        };

        let crop = &advice.crop;
        let mut lines = Vec::new();

        lines.push(Line::from(vec![
            Span::styled(crop.name.clone(), Theme::header()),
            Span::styled(format!("  ₹{:.0}/quintal", crop.avg_price), Theme::dim()),
        ]));
        lines.push(Line::from(vec![Span::styled(
            crop.one_line.clone(),
            Theme::dim(),
        )]));
        lines.push(Line::from(vec![]));

        lines.push(Line::from(vec![
            Span::styled("Demand: ", Theme::dim()),
            Span::styled(
                advice.market_demand.as_str(),
                Style::default().fg(advice.market_demand.demand_color()),
            ),
            Span::styled("  Risk: ", Theme::dim()),
            Span::styled(
                advice.risk_level.as_str(),
                Style::default().fg(advice.risk_level.risk_color()),
            ),
            Span::styled("  Water: ", Theme::dim()),
            Span::styled(crop.water_requirement.as_str(), Theme::normal()),
        ]));
        lines.push(Line::from(vec![
            Span::styled("Seasons: ", Theme::dim()),
            Span::styled(
                crop.seasons
                    .iter()
                    .map(|s| s.label())
                    .collect::<Vec<_>>()
                    .join(", "),
                Theme::normal(),
            ),
        ]));
        lines.push(Line::from(vec![
            Span::styled("Regions: ", Theme::dim()),
            Span::styled(crop.regions.join(", "), Theme::normal()),
        ]));
        lines.push(Line::from(vec![]));

        lines.push(Line::from(vec![Span::styled("Verdict:", Theme::dim())]));
        lines.push(Line::from(vec![Span::styled(
            advice.reason.clone(),
            Style::default().fg(advice.tier.color()),
        )]));
        lines.push(Line::from(vec![]));

        lines.push(Line::from(vec![Span::styled("Why:", Theme::dim())]));
        lines.push(Line::from(vec![
            Span::styled("  Season: ", Theme::dim()),
            Span::styled(crop.why.season.clone(), Theme::normal()),
        ]));
        lines.push(Line::from(vec![
            Span::styled("  Market: ", Theme::dim()),
            Span::styled(crop.why.market.clone(), Theme::normal()),
        ]));
        lines.push(Line::from(vec![
            Span::styled("  Risk: ", Theme::dim()),
            Span::styled(crop.why.risk.clone(), Theme::normal()),
        ]));

        Paragraph::new(lines).wrap(Wrap { trim: true }).render(inner, buf);
    }
}
