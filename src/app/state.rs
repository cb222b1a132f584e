use crate::config::AppConfig;
use crate::game::{Game, WordSourceError};
use ratatui::layout::Rect;
use std::time::{Duration, Instant};

/// How long a guess feedback line stays in the status bar.
const STATUS_TTL: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Playing,
    Won,
    Lost,
    /// The word source failed; the application closes once the player
    /// has seen the error.
    Halted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// A modal dialog. While one is open it captures all input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub body: String,
    pub kind: NoticeKind,
}

impl Notice {
    pub fn info(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            kind: NoticeKind::Info,
        }
    }

    pub fn from_error(err: &WordSourceError) -> Self {
        Self {
            title: err.title().to_string(),
            body: err.to_string(),
            kind: NoticeKind::Error,
        }
    }
}

#[derive(Debug, Default)]
pub struct InputState {
    pub text: String,
    pub cursor: usize,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn delete_back(&mut self) {
        if self.cursor > 0 {
            let prev = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.text.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// The single letter the buffer holds, uppercased, if that is all it holds.
    pub fn single_letter(&self) -> Option<char> {
        let upper = self.text.trim().to_uppercase();
        let mut chars = upper.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_alphabetic() => Some(c),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusPanel {
    Input,
    ResetButton,
}

pub struct AppState {
    pub config: AppConfig,
    pub game: Game,
    pub phase: Phase,
    pub input: InputState,
    pub focus: FocusPanel,
    pub notice: Option<Notice>,
    /// Last known terminal area, used to hit-test mouse clicks.
    pub viewport: Rect,
    pub should_quit: bool,
    pub dirty: bool,
    pub status_message: Option<(String, Instant)>,
}

impl AppState {
    pub fn new(config: AppConfig, game: Game) -> Self {
        Self {
            config,
            game,
            phase: Phase::Playing,
            input: InputState::new(),
            focus: FocusPanel::Input,
            notice: None,
            viewport: Rect::default(),
            should_quit: false,
            dirty: true,
            status_message: None,
        }
    }

    /// Input is only accepted while a round is in progress.
    pub fn input_enabled(&self) -> bool {
        self.phase == Phase::Playing
    }

    /// Back to Playing after a successful reset.
    pub fn start_round(&mut self) {
        self.phase = Phase::Playing;
        self.input.clear();
        self.focus = FocusPanel::Input;
        self.notice = None;
        self.status_message = None;
        self.dirty = true;
    }

    pub fn halt(&mut self, err: &WordSourceError) {
        self.phase = Phase::Halted;
        self.input.clear();
        self.notice = Some(Notice::from_error(err));
        self.dirty = true;
    }

    pub fn set_status(&mut self, text: String) {
        self.status_message = Some((text, Instant::now()));
        self.dirty = true;
    }

    /// Drop the status message once it has been shown long enough.
    pub fn expire_status(&mut self, now: Instant) {
        if let Some((_, set_at)) = &self.status_message {
            if now.duration_since(*set_at) >= STATUS_TTL {
                self.status_message = None;
                self.dirty = true;
            }
        }
    }

    pub fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            FocusPanel::Input => FocusPanel::ResetButton,
            FocusPanel::ResetButton => FocusPanel::Input,
        };
        self.dirty = true;
    }

    pub fn status_line(&self) -> String {
        if let Some((ref msg, _)) = self.status_message {
            return msg.clone();
        }
        match self.phase {
            Phase::Playing => "Type a letter to guess".to_string(),
            Phase::Won | Phase::Lost => "Press F5 or New Game to play again".to_string(),
            Phase::Halted => "Word list unavailable".to_string(),
        }
    }
}
