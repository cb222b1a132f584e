use crate::app::state::*;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.focus == FocusPanel::ResetButton && state.notice.is_none();
    let (border_style, border_type, label_style) = if focused {
        (
            Theme::border_focused(),
            Theme::border_type_focused(),
            Theme::button_focused(),
        )
    } else {
        (Theme::border(), Theme::border_type(), Theme::button())
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style);

    let label = Paragraph::new(Span::styled(" New Game ", label_style))
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(label, area);
}
