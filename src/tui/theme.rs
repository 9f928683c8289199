use ratatui::style::{Color, Modifier, Style};

use crate::models::Severity;

pub const BG: Color = Color::Rgb(20, 14, 11);
pub const SURFACE: Color = Color::Rgb(32, 22, 17);
pub const BORDER: Color = Color::Rgb(74, 52, 38);
pub const TEXT: Color = Color::Rgb(244, 228, 193);
pub const TEXT_DIM: Color = Color::Rgb(150, 124, 100);
pub const CREMA: Color = Color::Rgb(212, 165, 116);
pub const GOLD: Color = Color::Rgb(255, 215, 0);
pub const GREEN: Color = Color::Rgb(92, 148, 92);
pub const AMBER: Color = Color::Rgb(210, 138, 60);
pub const RED: Color = Color::Rgb(180, 82, 62);
pub const BLUE: Color = Color::Rgb(96, 140, 180);

pub fn base() -> Style {
    Style::default().fg(TEXT).bg(BG)
}

pub fn dim() -> Style {
    Style::default().fg(TEXT_DIM)
}

pub fn crema() -> Style {
    Style::default().fg(CREMA)
}

pub fn gold() -> Style {
    Style::default().fg(GOLD)
}

pub fn green() -> Style {
    Style::default().fg(GREEN)
}

pub fn amber() -> Style {
    Style::default().fg(AMBER)
}

pub fn red() -> Style {
    Style::default().fg(RED)
}

pub fn bold() -> Style {
    Style::default().fg(TEXT).add_modifier(Modifier::BOLD)
}

pub fn surface() -> Style {
    Style::default().fg(TEXT).bg(SURFACE)
}

pub fn border() -> Style {
    Style::default().fg(BORDER)
}

pub fn severity(severity: Severity) -> Style {
    match severity {
        Severity::Error => red(),
        Severity::Warning => amber(),
        Severity::Success => green(),
        Severity::Info => Style::default().fg(BLUE),
    }
}
