use crate::app::state::AppState;
use crate::game::MAX_WRONG;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

/// Wrong-guess counter plus the letters that missed.
pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let round = state.game.round();
    let counter = Line::from(Span::styled(
        format!("Wrong guesses: {}/{}", round.wrong_guesses(), MAX_WRONG),
        Theme::counter(),
    ));

    let missed: Vec<String> = round.missed_letters().iter().map(char::to_string).collect();
    let tried = if missed.is_empty() {
        Line::default()
    } else {
        Line::from(vec![
            Span::styled("Missed: ", Theme::counter()),
            Span::styled(missed.join(" "), Theme::missed_letters()),
        ])
    };

    let paragraph = Paragraph::new(vec![counter, tried]).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
