use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

pub struct Theme;

impl Theme {
    pub const BG_SURFACE: Color = Color::Rgb(30, 32, 40);
    pub const ACCENT_TEAL: Color = Color::Rgb(94, 196, 182);
    pub const ACCENT_AMBER: Color = Color::Rgb(232, 182, 92);
    pub const ACCENT_RED: Color = Color::Rgb(224, 108, 117);
    pub const ACCENT_GREEN: Color = Color::Rgb(152, 195, 121);
    pub const TEXT_PRIMARY: Color = Color::Rgb(220, 223, 228);
    pub const TEXT_SECONDARY: Color = Color::Rgb(150, 156, 168);
    pub const BORDER_DIM: Color = Color::Rgb(72, 78, 92);

    pub fn border() -> Style {
        Style::default().fg(Self::BORDER_DIM)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(Self::ACCENT_TEAL)
    }

    pub fn border_type() -> BorderType {
        BorderType::Rounded
    }

    pub fn border_type_focused() -> BorderType {
        BorderType::Thick
    }

    pub fn title() -> Style {
        Style::default()
            .fg(Self::TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn gallows_frame() -> Color {
        Self::TEXT_SECONDARY
    }

    pub fn figure(lost: bool) -> Color {
        if lost {
            Self::ACCENT_RED
        } else {
            Self::TEXT_PRIMARY
        }
    }

    pub fn masked_word() -> Style {
        Style::default()
            .fg(Self::TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn input_text() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY)
    }

    pub fn input_disabled() -> Style {
        Style::default().fg(Self::BORDER_DIM)
    }

    pub fn button() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY)
    }

    pub fn button_focused() -> Style {
        Style::default()
            .fg(Self::BG_SURFACE)
            .bg(Self::ACCENT_TEAL)
            .add_modifier(Modifier::BOLD)
    }

    pub fn counter() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY)
    }

    pub fn missed_letters() -> Style {
        Style::default().fg(Self::ACCENT_RED)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    }

    pub fn key_hint() -> Style {
        Style::default()
            .fg(Self::ACCENT_AMBER)
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD)
    }
}
