use ratatui::{
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::curve::Scenario;
use crate::tui::theme;

pub fn render(frame: &mut Frame, area: Rect, scenario: &Scenario) {
    let title_line = Line::from(vec![
        Span::styled("  ☕  ", theme::crema()),
        Span::styled(
            "MY DAILY ENERGY CURVE",
            theme::crema().add_modifier(Modifier::BOLD),
        ),
    ]);

    let subtitle_line = Line::from(vec![
        Span::styled(scenario.title(), theme::amber()),
        Span::styled("  ·  ", theme::dim()),
        Span::styled("how caffeine shapes the day", theme::dim()),
    ]);

    let text = vec![title_line, Line::from(""), subtitle_line];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::crema().add_modifier(Modifier::BOLD))
        .style(theme::base());

    let paragraph = Paragraph::new(text)
        .block(block)
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}
