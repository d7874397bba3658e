use crate::models::{CropAdvice, RecommendationSet, Season, Tier};
use crate::ui::components::month_name;
use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget},
};

pub struct DashboardScreen<'a> {
    pub farm_name: &'a str,
    pub region: &'a str,
    pub month: u32,
    pub season: Season,
    pub advice: &'a RecommendationSet,
    pub alerts: &'a [CropAdvice],
    pub status_message: Option<&'a str>,
}

impl<'a> DashboardScreen<'a> {
    pub fn new(
        farm_name: &'a str,
        region: &'a str,
        month: u32,
        season: Season,
        advice: &'a RecommendationSet,
        alerts: &'a [CropAdvice],
    ) -> Self {
        Self {
            farm_name,
            region,
            month,
            season,
            advice,
            alerts,
            status_message: None,
        }
    }

    pub fn with_status(mut self, status: Option<&'a str>) -> Self {
        self.status_message = status;
        self
    }
}

impl Widget for DashboardScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Length(4), // Season banner
                Constraint::Min(8),    // Top picks and alerts
                Constraint::Length(1), // Status message
                Constraint::Length(1), // Nav bar
            ])
            .split(area);

        self.render_header(chunks[0], buf);
        self.render_season_banner(chunks[1], buf);

        let middle = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[2]);

        self.render_top_picks(middle[0], buf);
        self.render_alerts(middle[1], buf);

        self.render_status_message(chunks[3], buf);
        self.render_nav(chunks[4], buf);
    }
}

impl DashboardScreen<'_> {
    fn render_header(&self, area: Rect, buf: &mut Buffer) {
        let title = format!("AgriOps - {} ({})", self.farm_name, self.region);

        let block = Block::default()
            .title(Span::styled(title, Theme::title()))
            .borders(Borders::BOTTOM)
            .border_style(Theme::border());

        let info = format!("Advising for: {}", month_name(self.month));
        let para = Paragraph::new(Span::styled(info, Theme::dim())).block(block);
        para.render(area, buf);
    }

    fn render_season_banner(&self, area: Rect, buf: &mut Buffer) {
        let season_style = Style::default().fg(self.season.color());

        let block = Block::default()
            .title(Span::styled("Current Season", Theme::header()))
            .borders(Borders::ALL)
            .border_style(season_style);

        let inner = block.inner(area);
        block.render(area, buf);

        let counts = Line::from(vec![
            Span::styled(self.season.label(), season_style.patch(Theme::header())),
            Span::styled(format!(" - {}", self.season.phase()), Theme::dim()),
            Span::raw("   "),
            Span::styled(
                format!("{} recommended", self.advice.recommended.len()),
                Style::default().fg(Tier::Recommended.color()),
            ),
            Span::styled(" / ", Theme::dim()),
            Span::styled(
                format!("{} risky", self.advice.risky.len()),
                Style::default().fg(Tier::Risky.color()),
            ),
            Span::styled(" / ", Theme::dim()),
            Span::styled(
                format!("{} not suitable", self.advice.not_suitable.len()),
                Style::default().fg(Tier::NotSuitable.color()),
            ),
        ]);

        Paragraph::new(counts).render(inner, buf);
    }

    fn render_top_picks(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(Span::styled("Top Picks", Theme::header()))
            .borders(Borders::ALL)
            .border_style(Theme::border());

        let inner = block.inner(area);
        block.render(area, buf);

        if self.advice.recommended.is_empty() {
            let para = Paragraph::new(Span::styled(
                "No recommended crops for this month and region",
                Theme::dim(),
            ));
            para.render(inner, buf);
            return;
        }

        let items: Vec<ListItem> = self
            .advice
            .recommended
            .iter()
            .take(4)
            .map(|advice| {
                let tier_style = Style::default().fg(advice.tier.color());
                let title_line = Line::from(vec![
                    Span::styled(format!("{} ", advice.tier.symbol()), tier_style),
                    Span::styled(advice.crop.name.clone(), Theme::header()),
                    Span::styled(
                        format!("  ₹{:.0}/quintal", advice.crop.avg_price),
                        Theme::dim(),
                    ),
                ]);
                let desc_line = Line::from(vec![
                    Span::styled("  ", Theme::dim()),
                    Span::styled(advice.crop.one_line.clone(), Theme::dim()),
                ]);
                ListItem::new(vec![title_line, desc_line])
            })
            .collect();

        List::new(items).render(inner, buf);
    }

    fn render_alerts(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(Span::styled("Risk Alerts", Theme::header()))
            .borders(Borders::ALL)
            .border_style(Theme::border());

        let inner = block.inner(area);
        block.render(area, buf);

        if self.alerts.is_empty() {
            let para = Paragraph::new(Span::styled(
                "No active alerts (toggle in Settings)",
                Theme::dim(),
            ));
            para.render(inner, buf);
            return;
        }

        let items: Vec<ListItem> = self
            .alerts
            .iter()
            .take(3)
            .map(|advice| {
                let risk_style = Style::default().fg(advice.risk_level.risk_color());
                let title_line = Line::from(vec![
                    Span::styled("⚠ ", risk_style),
                    Span::styled(advice.crop.name.clone(), risk_style),
                    Span::styled(
                        format!("  ({} risk)", advice.risk_level.as_str()),
                        Theme::dim(),
                    ),
                ]);
                let desc_line = Line::from(vec![
                    Span::styled("  ", Theme::dim()),
                    Span::styled(advice.reason.clone(), Theme::dim()),
                ]);
                ListItem::new(vec![title_line, desc_line])
            })
            .collect();

        List::new(items).render(inner, buf);
    }

    fn render_status_message(&self, area: Rect, buf: &mut Buffer) {
        if let Some(msg) = self.status_message {
            let style = if msg.contains("Failed") || msg.contains("failed") {
                Theme::warning()
            } else {
                Theme::success()
            };
            let para = Paragraph::new(Span::styled(msg, style));
            para.render(area, buf);
        }
    }

    fn render_nav(&self, area: Rect, buf: &mut Buffer) {
        let nav = Line::from(vec![
            Span::styled("[1]", Theme::nav_key()),
            Span::styled("Dashboard ", Theme::nav_label()),
            Span::styled("[2]", Theme::nav_key()),
            Span::styled("Recommendations ", Theme::nav_label()),
            Span::styled("[3]", Theme::nav_key()),
            Span::styled("Calendar ", Theme::nav_label()),
            Span::styled("[4]", Theme::nav_key()),
            Span::styled("Crops ", Theme::nav_label()),
            Span::styled("[s]", Theme::nav_key()),
            Span::styled("Settings ", Theme::nav_label()),
            Span::styled("[←→]", Theme::nav_key()),
            Span::styled("Month ", Theme::nav_label()),
            Span::styled("[q]", Theme::nav_key()),
            Span::styled("Quit", Theme::nav_label()),
        ]);

        Paragraph::new(nav).render(area, buf);
    }
}
