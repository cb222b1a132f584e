use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Wrap};
use unicode_width::UnicodeWidthStr;

/// The masked word, vertically centered in its row. Wraps when the row is
/// narrower than the word.
pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    if area.is_empty() {
        return;
    }
    let text = state.game.display_word();
    let width = u16::try_from(text.width()).unwrap_or(u16::MAX);
    let lines = width.div_ceil(area.width).clamp(1, area.height);
    let middle = Rect::new(
        area.x,
        area.y + (area.height - lines) / 2,
        area.width,
        lines,
    );
    let paragraph = Paragraph::new(Span::styled(text, Theme::masked_word()))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, middle);
}
