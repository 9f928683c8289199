use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use crate::models::Verdict;
use crate::tui::theme;

pub fn render(frame: &mut Frame, area: Rect, verdict: &Verdict) {
    let style = theme::severity(verdict.severity);

    let block = Block::default()
        .title(Span::styled(" Conclusion ", theme::crema()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(style)
        .style(theme::surface());

    let mut lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(format!("  {} ", verdict.severity.icon()), style),
            Span::styled(verdict.headline, style.add_modifier(Modifier::BOLD)),
        ]),
    ];
    for insight in &verdict.insights {
        lines.push(Line::from(Span::styled(
            format!("    · {}", insight),
            theme::dim(),
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Based on entirely made-up science.",
        theme::dim().add_modifier(Modifier::ITALIC),
    )));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
