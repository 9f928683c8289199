use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::curve::Snapshot;
use crate::tui::theme;
use crate::utils::format::format_percent;

pub fn render(frame: &mut Frame, area: Rect, snap: &Snapshot) {
    let block = Block::default()
        .title(Span::styled(" Key Metrics ", theme::crema()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border())
        .style(theme::surface());

    let stats = &snap.stats;
    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("  Peak     ", theme::dim()),
            Span::styled(
                format!("{}%", stats.peak),
                theme::green().add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("  Minimum  ", theme::dim()),
            Span::styled(format!("{}%", stats.minimum), theme::red()),
        ]),
        Line::from(vec![
            Span::styled("  Mean     ", theme::dim()),
            Span::styled(format_percent(stats.mean_rounded()), theme::amber()),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
