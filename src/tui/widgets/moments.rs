use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem},
    Frame,
};

use crate::curve::{slider, Snapshot};
use crate::tui::theme;
use crate::utils::format::pad_display;

pub fn render(frame: &mut Frame, area: Rect, snap: &Snapshot) {
    let block = Block::default()
        .title(Span::styled(" Moments ", theme::crema()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border())
        .style(theme::surface());

    // Resting rows all carry the sleepy glyph; only list the real effects.
    let items: Vec<ListItem> = snap
        .points
        .iter()
        .filter(|p| p.is_annotated() && p.mood != slider::RESTING_MOOD)
        .map(|p| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("  {} ", pad_display(p.mood, 2)), theme::gold()),
                Span::styled(pad_display(&p.label(snap.format), 7), theme::bold()),
                Span::styled(format!("{:>3}%  ", p.energy), theme::amber()),
                Span::styled(p.status, theme::dim()),
            ]))
        })
        .collect();

    let items = if items.is_empty() {
        vec![ListItem::new(Line::from(Span::styled(
            "  Nothing but yawns 😴",
            theme::dim(),
        )))]
    } else {
        items
    };

    frame.render_widget(List::new(items).block(block), area);
}
