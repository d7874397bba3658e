use crate::catalog::REGIONS;
use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsField {
    Region,
    Alerts,
}

impl SettingsField {
    pub fn all() -> &'static [SettingsField] {
        &[SettingsField::Region, SettingsField::Alerts]
    }

    pub fn label(&self) -> &'static str {
        match self {
            SettingsField::Region => "Region",
            SettingsField::Alerts => "Risk Alerts",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            SettingsField::Region => SettingsField::Alerts,
            SettingsField::Alerts => SettingsField::Region,
        }
    }

    pub fn prev(&self) -> Self {
        // Two fields, so prev mirrors next
        self.next()
    }
}

pub struct SettingsScreen<'a> {
    pub region: &'a str,
    pub alerts_enabled: bool,
    pub focused_field: SettingsField,
}

impl<'a> SettingsScreen<'a> {
    pub fn new(region: &'a str, alerts_enabled: bool) -> Self {
        Self {
            region,
            alerts_enabled,
            focused_field: SettingsField::Region,
        }
    }

    pub fn with_focus(mut self, field: SettingsField) -> Self {
        self.focused_field = field;
        self
    }

    fn field_value(&self, field: SettingsField) -> String {
        match field {
            SettingsField::Region => self.region.to_string(),
            SettingsField::Alerts => if self.alerts_enabled {
                "Enabled"
            } else {
                "Disabled"
            }
            .to_string(),
        }
    }
}

impl Widget for SettingsScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Title
                Constraint::Min(8),    // Form
                Constraint::Length(5), // Help
                Constraint::Length(1), // Nav
            ])
            .split(area);

        let title = Line::from(vec![
            Span::styled("Settings", Theme::title()),
            Span::styled(" - Advisory Preferences", Theme::dim()),
        ]);
        Paragraph::new(title).render(chunks[0], buf);

        self.render_form(chunks[1], buf);
        self.render_help(chunks[2], buf);

        let nav = Line::from(vec![
            Span::styled("[↑↓]", Theme::nav_key()),
            Span::styled("Navigate ", Theme::nav_label()),
            Span::styled("[←→/Enter]", Theme::nav_key()),
            Span::styled("Change ", Theme::nav_label()),
            Span::styled("[Esc]", Theme::nav_key()),
            Span::styled("Back", Theme::nav_label()),
        ]);
        Paragraph::new(nav).render(chunks[3], buf);
    }
}

impl SettingsScreen<'_> {
    fn render_form(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title("Preferences")
            .borders(Borders::ALL)
            .border_style(Theme::border());

        let inner = block.inner(area);
        block.render(area, buf);

        let field_height = 3;
        let constraints: Vec<Constraint> = SettingsField::all()
            .iter()
            .map(|_| Constraint::Length(field_height))
            .collect();

        let field_areas = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(inner);

        for (i, field) in SettingsField::all().iter().enumerate() {
            let is_focused = *field == self.focused_field;

            let border_style = if is_focused {
                Theme::border_focused()
            } else {
                Theme::border()
            };

            let value_style = if is_focused {
                Theme::selected()
            } else {
                Theme::normal()
            };

            let field_block = Block::default()
                .title(field.label())
                .borders(Borders::ALL)
                .border_style(border_style);

            let field_inner = field_block.inner(field_areas[i]);
            field_block.render(field_areas[i], buf);

            let para = Paragraph::new(Span::styled(self.field_value(*field), value_style));
            para.render(field_inner, buf);
        }
    }

    fn render_help(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title("Field Options")
            .borders(Borders::ALL)
            .border_style(Theme::border());

        let inner = block.inner(area);
        block.render(area, buf);

        let help_text = match self.focused_field {
            SettingsField::Region => format!(
                "Options: {}. Session only; set the startup default in config.yaml.",
                REGIONS.join(", ")
            ),
            SettingsField::Alerts => {
                "Show risky-tier crops as alerts on the dashboard. Saved across sessions."
                    .to_string()
            }
        };

        let para = Paragraph::new(Span::styled(help_text, Theme::dim()))
            .wrap(ratatui::widgets::Wrap { trim: true });
        para.render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_cycle_returns_home() {
        let mut field = SettingsField::Region;
        for _ in 0..SettingsField::all().len() {
            field = field.next();
        }
        assert_eq!(field, SettingsField::Region);
    }
}
