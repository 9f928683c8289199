use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::curve::Scenario;
use crate::models::{CoffeeCount, Preset};
use crate::tui::theme;
use crate::utils::format::cups;

pub fn render(frame: &mut Frame, area: Rect, scenario: &Scenario) {
    let sliding = scenario.preset == Preset::Slider;

    let block = Block::default()
        .title(Span::styled(" Coffees ", theme::crema()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if sliding {
            theme::crema()
        } else {
            theme::border()
        })
        .style(theme::surface());

    let total = scenario.coffee_total();
    let hint = if sliding {
        "  [← →] adjust  ·  [0-5] set"
    } else {
        "  fixed at 07:30 & 14:00  ·  [p] slider"
    };

    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("  ", theme::dim()),
            Span::styled(cups(total, CoffeeCount::MAX), theme::crema()),
            Span::styled(
                format!("  {} / {}", total, CoffeeCount::MAX),
                theme::bold().add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(hint, theme::dim())),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
