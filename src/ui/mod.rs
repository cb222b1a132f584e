pub mod gallows;
mod info_label;
mod input_box;
pub mod layout;
pub mod notice;
mod reset_button;
mod status_bar;
pub mod theme;
mod title_bar;
mod word_label;

use crate::app::state::{AppState, Phase};
use ratatui::prelude::*;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let app_layout = layout::compute_layout(area);

    title_bar::render(frame, app_layout.title);
    gallows::render(
        frame,
        app_layout.gallows,
        state.game.wrong_guesses(),
        state.phase == Phase::Lost,
    );
    word_label::render(frame, app_layout.word, state);
    input_box::render(frame, app_layout.input_box, state);
    reset_button::render(frame, app_layout.reset_button, state);
    info_label::render(frame, app_layout.info, state);
    status_bar::render(frame, app_layout.status_bar, state);

    if let Some(notice) = &state.notice {
        notice::render(frame, notice);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::Notice;
    use crate::config::AppConfig;
    use crate::game::word_list::StaticWordSource;
    use crate::game::Game;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use ratatui::backend::TestBackend;

    fn state_with(word: &str) -> AppState {
        let game = Game::new(
            Box::new(StaticWordSource::new([word])),
            StdRng::seed_from_u64(0),
        )
        .unwrap();
        AppState::new(AppConfig::default(), game)
    }

    fn screen(state: &AppState) -> String {
        screen_sized(state, 80, 40)
    }

    fn screen_sized(state: &AppState, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| render(f, state)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_renders_masked_word_and_counter() {
        let mut state = state_with("cat");
        state.game.guess('A');
        state.game.guess('Z');
        let text = screen(&state);
        assert!(text.contains("_ A _"));
        assert!(text.contains("Wrong guesses: 1/6"));
        assert!(text.contains("Missed: Z"));
        assert!(text.contains("New Game"));
        assert!(text.contains("H A N G M A N"));
    }

    #[test]
    fn test_renders_notice_over_board() {
        let mut state = state_with("dog");
        state.notice = Some(Notice::info("Game over", "You lost! The word was: DOG"));
        let text = screen(&state);
        assert!(text.contains("You lost! The word was: DOG"));
        assert!(text.contains("Enter to continue"));
    }

    #[test]
    fn test_long_word_fully_visible() {
        let mut state = state_with("pneumonoultramicroscopic");
        for letter in "PNEUMOLTRAICS".chars() {
            state.game.guess(letter);
        }
        let shown = state.game.display_word();
        assert_eq!(shown, "P N E U M O N O U L T R A M I C R O S C O P I C");
        let text = screen_sized(&state, 120, 40);
        assert!(text.contains(&shown));
    }

    #[test]
    fn test_long_word_wraps_on_narrow_terminal() {
        let mut state = state_with("pneumonoultramicroscopic");
        for letter in "PNEUMOLTRAICS".chars() {
            state.game.guess(letter);
        }
        let text = screen_sized(&state, 30, 40);
        let word_row = layout::compute_layout(Rect::new(0, 0, 30, 40)).word;
        // Every position is on screen, split over more than one line
        let rows: Vec<&str> = text
            .lines()
            .skip(word_row.y as usize)
            .take(word_row.height as usize)
            .collect();
        assert!(rows.iter().filter(|row| !row.trim().is_empty()).count() > 1);
        let letters: usize = rows
            .iter()
            .map(|row| row.chars().filter(|c| c.is_alphabetic()).count())
            .sum();
        assert_eq!(letters, 24);
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let state = state_with("dog");
        let mut terminal = Terminal::new(TestBackend::new(10, 4)).unwrap();
        terminal.draw(|f| render(f, &state)).unwrap();
    }
}
