use ratatui::{
    layout::Rect,
    symbols,
    text::Span,
    widgets::{Axis, Block, BorderType, Borders, Chart, Dataset, GraphType},
    Frame,
};

use crate::curve::Snapshot;
use crate::tui::theme;

/// (row index, energy) pairs for the line and the coffee overlay.
pub fn series(snap: &Snapshot) -> (Vec<(f64, f64)>, Vec<(f64, f64)>) {
    let line: Vec<(f64, f64)> = snap
        .points
        .iter()
        .enumerate()
        .map(|(i, p)| (i as f64, p.energy as f64))
        .collect();
    let coffees: Vec<(f64, f64)> = snap
        .points
        .iter()
        .enumerate()
        .filter(|(_, p)| snap.coffee_hours.contains(&p.hour))
        .map(|(i, p)| (i as f64, p.energy as f64))
        .collect();
    (line, coffees)
}

pub fn render(frame: &mut Frame, area: Rect, snap: &Snapshot) {
    let (line, coffees) = series(snap);

    let datasets = vec![
        Dataset::default()
            .name("Energy")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(theme::crema())
            .data(&line),
        Dataset::default()
            .name("Coffee")
            .marker(symbols::Marker::Block)
            .graph_type(GraphType::Scatter)
            .style(theme::gold())
            .data(&coffees),
    ];

    let last = snap.points.len().saturating_sub(1);
    let x_labels: Vec<Span> = [0, last / 2, last]
        .iter()
        .filter_map(|&i| snap.points.get(i))
        .map(|p| Span::styled(p.label(snap.format), theme::dim()))
        .collect();

    let ceiling = snap.scenario.axis_ceiling();
    let y_labels = vec![
        Span::styled("0", theme::dim()),
        Span::styled("50", theme::dim()),
        Span::styled(format!("{}", ceiling as u32), theme::dim()),
    ];

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .title(Span::styled(" Daily Energy Curve ", theme::crema()))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(theme::border())
                .style(theme::surface()),
        )
        .x_axis(
            Axis::default()
                .title(Span::styled("time of day", theme::dim()))
                .style(theme::dim())
                .bounds([0.0, last.max(1) as f64])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .title(Span::styled("energy %", theme::dim()))
                .style(theme::dim())
                .bounds([0.0, ceiling])
                .labels(y_labels),
        );

    frame.render_widget(chart, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::Scenario;
    use crate::models::{CoffeeCount, HourFormat, Preset};

    #[test]
    fn coffee_overlay_sits_on_the_line() {
        let snap = Scenario::new(Preset::Slider, CoffeeCount::clamped(3))
            .render(HourFormat::Clock)
            .unwrap();
        let (line, coffees) = series(&snap);
        assert_eq!(line.len(), 17);
        assert_eq!(coffees, vec![(3.0, 95.0), (9.0, 90.0), (12.0, 92.0)]);
        assert!(coffees.iter().all(|c| line.contains(c)));
        assert!(
            coffees
                .iter()
                .all(|&(i, _)| snap.points[i as usize].mood != crate::curve::slider::RESTING_MOOD)
        );
    }
}
