use crate::app::state::{Notice, NoticeKind};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use unicode_width::UnicodeWidthStr;

/// Draw a centered modal dialog over whatever is on screen.
pub fn render(frame: &mut Frame, notice: &Notice) {
    let area = frame.area();

    let help = match notice.kind {
        NoticeKind::Info => "Enter to continue",
        NoticeKind::Error => "Enter to quit",
    };
    let accent = match notice.kind {
        NoticeKind::Info => Theme::ACCENT_TEAL,
        NoticeKind::Error => Theme::ACCENT_RED,
    };

    // Size to content: widest line + borders + padding, min 30 columns
    let body_w = text_width(&notice.body);
    let content_w = body_w
        .max(text_width(&notice.title).saturating_add(2))
        .max(text_width(help));
    let popup_w = content_w
        .saturating_add(6)
        .max(30)
        .min(area.width.saturating_sub(4).max(1));
    let body_lines = body_w.div_ceil(popup_w.saturating_sub(4).max(1));
    let popup_h = body_lines.saturating_add(5).min(area.height.max(1));
    let popup_x = area.x + (area.width.saturating_sub(popup_w)) / 2;
    let popup_y = area.y + (area.height.saturating_sub(popup_h)) / 2;
    let popup_area = Rect::new(popup_x, popup_y, popup_w, popup_h);

    // Clear background
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(format!(" {} ", notice.title))
        .title_style(Theme::title())
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Style::default().fg(accent))
        .style(Style::default().bg(Theme::BG_SURFACE));

    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    if inner.height < 2 || inner.width < 4 {
        return;
    }

    let body_area = Rect::new(inner.x + 1, inner.y + 1, inner.width - 2, inner.height - 2);
    let body = Paragraph::new(Span::styled(
        notice.body.as_str(),
        Style::default()
            .fg(Theme::TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });
    frame.render_widget(body, body_area);

    // Keybinding help
    let help_area = Rect::new(inner.x, inner.y + inner.height - 1, inner.width, 1);
    let help_line = Paragraph::new(Span::styled(
        help,
        Style::default().fg(Theme::TEXT_SECONDARY),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(help_line, help_area);
}

/// Display width in columns, saturating at `u16::MAX`.
fn text_width(text: &str) -> u16 {
    u16::try_from(text.width()).unwrap_or(u16::MAX)
}
