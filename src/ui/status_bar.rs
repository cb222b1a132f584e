use crate::app::state::*;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

const HINTS: &[(&str, &str)] = &[("Tab", "focus"), ("F5", "new game"), ("Esc", "quit")];

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut parts: Vec<Span> = Vec::new();

    let (phase_name, phase_color) = match state.phase {
        Phase::Playing => ("PLAYING", Color::Cyan),
        Phase::Won => ("WON", Theme::ACCENT_GREEN),
        Phase::Lost => ("LOST", Theme::ACCENT_RED),
        Phase::Halted => ("HALTED", Theme::ACCENT_RED),
    };
    parts.push(Span::styled(
        format!(" [{}] ", phase_name),
        Style::default().fg(phase_color).bg(Color::DarkGray),
    ));

    // Status text
    parts.push(Span::styled(
        format!(" {} ", state.status_line()),
        Theme::status_bar(),
    ));

    let mut hints: Vec<Span> = Vec::new();
    for (key, what) in HINTS {
        hints.push(Span::styled(format!(" {}", key), Theme::key_hint()));
        hints.push(Span::styled(format!(" {} ", what), Theme::status_bar()));
    }

    // Pad to fill remaining space
    let used: usize = parts
        .iter()
        .chain(hints.iter())
        .map(|s| s.content.width())
        .sum();
    let remaining = (area.width as usize).saturating_sub(used);
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.extend(hints);

    let line = Line::from(parts);
    let paragraph = Paragraph::new(line);
    frame.render_widget(paragraph, area);
}
