use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::*;
use crate::game::GuessOutcome;
use crate::ui::layout;
use crossterm::event::{
    Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::layout::{Position, Rect};
use std::time::Instant;

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => handle_terminal(state, cevent),
        AppEvent::Tick => {
            state.expire_status(Instant::now());
            vec![]
        }
    }
}

/// Carry out an action that needs more than a state change.
pub fn apply_action(state: &mut AppState, action: Action) {
    match action {
        Action::NewRound => match state.game.reset() {
            Ok(()) => state.start_round(),
            Err(e) => {
                tracing::error!(error = %e, "Could not start a new round");
                state.halt(&e);
            }
        },
        Action::Quit => {
            state.should_quit = true;
        }
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) if key.kind != KeyEventKind::Release => {
            state.dirty = true;
            handle_key(state, key)
        }
        CEvent::Mouse(mouse) => handle_mouse(state, mouse),
        CEvent::Resize(width, height) => {
            state.viewport = Rect::new(0, 0, width, height);
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    // Global keybindings
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }

    // An open dialog captures all input
    if state.notice.is_some() {
        return handle_notice_key(state, key);
    }

    if key.code == KeyCode::F(5)
        || (key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('r'))
    {
        return vec![Action::NewRound];
    }

    match key.code {
        KeyCode::Esc => return vec![Action::Quit],
        KeyCode::Tab | KeyCode::BackTab => {
            state.cycle_focus();
            return vec![];
        }
        _ => {}
    }

    match state.focus {
        FocusPanel::Input => handle_input_key(state, key),
        FocusPanel::ResetButton => handle_button_key(key),
    }
}

fn handle_notice_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => {
            state.notice = None;
            if state.phase == Phase::Halted {
                return vec![Action::Quit];
            }
            if !state.input_enabled() {
                state.focus = FocusPanel::ResetButton;
            }
            vec![]
        }
        _ => vec![],
    }
}

fn handle_button_key(key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') => vec![Action::NewRound],
        _ => vec![],
    }
}

fn handle_input_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    if !state.input_enabled() {
        return vec![];
    }
    match key.code {
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            state.input.insert_char(c);
            submit_input(state);
        }
        KeyCode::Backspace => state.input.delete_back(),
        _ => {}
    }
    vec![]
}

/// Guess whatever the input box holds, if it is exactly one letter.
fn submit_input(state: &mut AppState) {
    let Some(letter) = state.input.single_letter() else {
        return;
    };
    state.input.clear();

    match state.game.guess(letter) {
        GuessOutcome::AlreadyGuessed => {
            state.set_status(format!("'{}' was already tried", letter));
            return;
        }
        GuessOutcome::RoundOver => return,
        GuessOutcome::Hit => state.set_status(format!("'{}' is in the word", letter)),
        GuessOutcome::Miss => state.set_status(format!("No '{}' in the word", letter)),
    }

    if state.game.is_won() {
        tracing::info!(wrong = state.game.wrong_guesses(), "Round won");
        state.phase = Phase::Won;
        state.notice = Some(Notice::info("Congratulations", "You won!"));
    } else if state.game.is_lost() {
        let secret = state.game.round().secret().to_string();
        tracing::info!(%secret, "Round lost");
        state.phase = Phase::Lost;
        state.notice = Some(Notice::info(
            "Game over",
            format!("You lost! The word was: {}", secret),
        ));
    }
}

fn handle_mouse(state: &mut AppState, mouse: MouseEvent) -> Vec<Action> {
    if !state.config.ui.mouse || state.notice.is_some() {
        return vec![];
    }
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return vec![];
    }

    let at = Position::new(mouse.column, mouse.row);
    let app_layout = layout::compute_layout(state.viewport);
    if app_layout.reset_button.contains(at) {
        state.focus = FocusPanel::ResetButton;
        state.dirty = true;
        return vec![Action::NewRound];
    }
    if app_layout.input_box.contains(at) {
        state.focus = FocusPanel::Input;
        state.dirty = true;
    }
    vec![]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::game::word_list::{StaticWordSource, WordList, WordSource};
    use crate::game::{Game, WordSourceError};
    use crossterm::event::KeyEventState;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::cell::Cell;
    use std::rc::Rc;

    fn state_with(words: &[&str]) -> AppState {
        let game = Game::new(
            Box::new(StaticWordSource::new(words.iter().copied())),
            StdRng::seed_from_u64(11),
        )
        .unwrap();
        let mut state = AppState::new(AppConfig::default(), game);
        state.viewport = Rect::new(0, 0, 80, 40);
        state
    }

    fn key(code: KeyCode) -> AppEvent {
        AppEvent::Terminal(CEvent::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    fn type_str(state: &mut AppState, text: &str) -> Vec<Action> {
        text.chars()
            .flat_map(|c| handle_event(state, key(KeyCode::Char(c))))
            .collect()
    }

    fn click(state: &mut AppState, column: u16, row: u16) -> Vec<Action> {
        handle_event(
            state,
            AppEvent::Terminal(CEvent::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                modifiers: KeyModifiers::NONE,
            })),
        )
    }

    #[test]
    fn test_keystroke_submits_lowercase_letter() {
        let mut state = state_with(&["cat"]);
        type_str(&mut state, "c");
        assert!(state.input.text.is_empty());
        assert_eq!(state.game.display_word(), "C _ _");
        assert_eq!(state.phase, Phase::Playing);
    }

    #[test]
    fn test_non_letter_stays_in_input() {
        let mut state = state_with(&["cat"]);
        type_str(&mut state, "1");
        assert_eq!(state.input.text, "1");
        // Two characters in the box, nothing submitted.
        type_str(&mut state, "c");
        assert_eq!(state.input.text, "1c");
        assert_eq!(state.game.display_word(), "_ _ _");
        // Removing both leaves the box ready again.
        handle_event(&mut state, key(KeyCode::Backspace));
        handle_event(&mut state, key(KeyCode::Backspace));
        type_str(&mut state, "t");
        assert_eq!(state.game.display_word(), "_ _ T");
    }

    #[test]
    fn test_win_opens_notice_and_disables_input() {
        let mut state = state_with(&["cat"]);
        type_str(&mut state, "cat");
        assert_eq!(state.phase, Phase::Won);
        assert_eq!(state.game.wrong_guesses(), 0);
        assert_eq!(state.notice.as_ref().map(|n| n.body.as_str()), Some("You won!"));

        handle_event(&mut state, key(KeyCode::Enter));
        assert!(state.notice.is_none());
        assert_eq!(state.focus, FocusPanel::ResetButton);

        state.focus = FocusPanel::Input;
        type_str(&mut state, "z");
        assert!(state.input.text.is_empty());
        assert_eq!(state.game.wrong_guesses(), 0);
    }

    #[test]
    fn test_loss_reveals_word() {
        let mut state = state_with(&["dog"]);
        type_str(&mut state, "xyzqrs");
        assert_eq!(state.phase, Phase::Lost);
        assert_eq!(state.game.wrong_guesses(), 6);
        let notice = state.notice.clone().unwrap();
        assert_eq!(notice.body, "You lost! The word was: DOG");
        assert_eq!(notice.kind, NoticeKind::Info);
    }

    #[test]
    fn test_notice_swallows_letters() {
        let mut state = state_with(&["dog"]);
        type_str(&mut state, "xyzqrs");
        type_str(&mut state, "d");
        assert!(state.notice.is_some());
        assert_eq!(state.game.display_word(), "_ _ _");
    }

    #[test]
    fn test_repeat_guess_only_sets_status() {
        let mut state = state_with(&["dog"]);
        type_str(&mut state, "x");
        type_str(&mut state, "x");
        assert_eq!(state.game.wrong_guesses(), 1);
        assert_eq!(state.status_line(), "'X' was already tried");
    }

    #[test]
    fn test_reset_returns_to_playing() {
        let mut state = state_with(&["dog"]);
        type_str(&mut state, "xyzqrs");
        handle_event(&mut state, key(KeyCode::Esc));

        let actions = handle_event(&mut state, key(KeyCode::F(5)));
        assert_eq!(actions, vec![Action::NewRound]);
        for action in actions {
            apply_action(&mut state, action);
        }
        assert_eq!(state.phase, Phase::Playing);
        assert_eq!(state.focus, FocusPanel::Input);
        assert_eq!(state.game.wrong_guesses(), 0);
        assert_eq!(state.game.display_word(), "_ _ _");
    }

    #[test]
    fn test_button_focus_and_enter() {
        let mut state = state_with(&["dog"]);
        handle_event(&mut state, key(KeyCode::Tab));
        assert_eq!(state.focus, FocusPanel::ResetButton);
        // Letters do nothing while the button has focus.
        assert!(type_str(&mut state, "d").is_empty());
        assert_eq!(state.game.display_word(), "_ _ _");
        assert_eq!(handle_event(&mut state, key(KeyCode::Enter)), vec![Action::NewRound]);
    }

    #[test]
    fn test_click_reset_button() {
        let mut state = state_with(&["dog"]);
        let button = layout::compute_layout(state.viewport).reset_button;
        let actions = click(&mut state, button.x + 1, button.y + 1);
        assert_eq!(actions, vec![Action::NewRound]);
        assert!(click(&mut state, 0, 0).is_empty());
    }

    #[test]
    fn test_click_ignored_when_mouse_disabled() {
        let mut state = state_with(&["dog"]);
        state.config.ui.mouse = false;
        let button = layout::compute_layout(state.viewport).reset_button;
        assert!(click(&mut state, button.x + 1, button.y + 1).is_empty());
    }

    #[test]
    fn test_key_release_ignored() {
        let mut state = state_with(&["dog"]);
        let release = KeyEvent {
            code: KeyCode::Char('d'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        handle_event(&mut state, AppEvent::Terminal(CEvent::Key(release)));
        assert!(state.input.text.is_empty());
        assert_eq!(state.game.display_word(), "_ _ _");
    }

    #[test]
    fn test_ctrl_c_quits() {
        let mut state = state_with(&["dog"]);
        let event = AppEvent::Terminal(CEvent::Key(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
        )));
        assert_eq!(handle_event(&mut state, event), vec![Action::Quit]);
        apply_action(&mut state, Action::Quit);
        assert!(state.should_quit);
    }

    struct Switchable {
        available: Rc<Cell<bool>>,
    }

    impl WordSource for Switchable {
        fn load(&self) -> Result<WordList, WordSourceError> {
            if self.available.get() {
                StaticWordSource::new(["dog"]).load()
            } else {
                Err(WordSourceError::Missing {
                    path: "words.txt".into(),
                })
            }
        }

        fn describe(&self) -> String {
            "switchable".into()
        }
    }

    #[test]
    fn test_failed_reset_halts_then_quits() {
        let available = Rc::new(Cell::new(true));
        let game = Game::new(
            Box::new(Switchable {
                available: available.clone(),
            }),
            StdRng::seed_from_u64(5),
        )
        .unwrap();
        let mut state = AppState::new(AppConfig::default(), game);

        available.set(false);
        apply_action(&mut state, Action::NewRound);
        assert_eq!(state.phase, Phase::Halted);
        let notice = state.notice.clone().unwrap();
        assert_eq!(notice.kind, NoticeKind::Error);
        assert_eq!(notice.body, "word list 'words.txt' not found");

        assert_eq!(handle_event(&mut state, key(KeyCode::Enter)), vec![Action::Quit]);
    }

    #[test]
    fn test_tick_expires_status() {
        let mut state = state_with(&["dog"]);
        type_str(&mut state, "d");
        assert!(state.status_message.is_some());
        state.expire_status(Instant::now() + std::time::Duration::from_secs(10));
        assert!(state.status_message.is_none());
    }
}
