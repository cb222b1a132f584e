use crate::app::state::*;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Borders, Paragraph};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let enabled = state.input_enabled();
    let focused = enabled && state.focus == FocusPanel::Input && state.notice.is_none();
    let (border_style, border_type) = if focused {
        (Theme::border_focused(), Theme::border_type_focused())
    } else {
        (Theme::border(), Theme::border_type())
    };

    let block = Block::default()
        .title(" Letter ")
        .title_style(if focused {
            Theme::title()
        } else {
            Theme::border()
        })
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style)
        .padding(Padding::horizontal(1));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let text_style = if enabled {
        Theme::input_text()
    } else {
        Theme::input_disabled()
    };
    let paragraph = Paragraph::new(state.input.text.as_str())
        .style(text_style)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, inner);

    if focused && inner.width > 0 {
        // Centered text: cursor sits just past its midpoint
        let text_width = unicode_width::UnicodeWidthStr::width(state.input.text.as_str()) as u16;
        let start = inner.x + inner.width.saturating_sub(text_width) / 2;
        let cursor_x = (start + text_width).min(inner.right() - 1);
        frame.set_cursor_position((cursor_x, inner.y));
    }
}
