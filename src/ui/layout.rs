use ratatui::layout::{Constraint, Direction, Flex, Layout, Rect};

/// Columns of the centered play area.
const PLAY_WIDTH: u16 = 44;
/// Rows given to the gallows canvas, border included.
const GALLOWS_HEIGHT: u16 = 16;
/// Columns given to the gallows canvas, border included.
const GALLOWS_WIDTH: u16 = 32;
const INPUT_WIDTH: u16 = 12;
const BUTTON_WIDTH: u16 = 16;

pub struct AppLayout {
    pub title: Rect,
    pub gallows: Rect,
    pub word: Rect,
    pub input_box: Rect,
    pub reset_button: Rect,
    pub info: Rect,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect) -> AppLayout {
    // Main vertical split: content | status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let content = main_chunks[0];
    let status_bar = main_chunks[1];

    // Center the play column horizontally
    let play = Layout::default()
        .direction(Direction::Horizontal)
        .flex(Flex::Center)
        .constraints([Constraint::Length(PLAY_WIDTH)])
        .split(content)[0];

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),              // Title
            Constraint::Length(GALLOWS_HEIGHT), // Gallows
            Constraint::Length(3),              // Masked word
            Constraint::Length(3),              // Input + button
            Constraint::Length(2),              // Wrong guesses
            Constraint::Min(0),
        ])
        .split(play);

    let title = rows[0];
    let gallows = centered(rows[1], GALLOWS_WIDTH);
    // The masked word may be wider than the play column
    let word = Rect::new(content.x, rows[2].y, content.width, rows[2].height);

    // Input row: input box | gap | reset button
    let controls = Layout::default()
        .direction(Direction::Horizontal)
        .flex(Flex::Center)
        .spacing(2)
        .constraints([
            Constraint::Length(INPUT_WIDTH),
            Constraint::Length(BUTTON_WIDTH),
        ])
        .split(rows[3]);

    AppLayout {
        title,
        gallows,
        word,
        input_box: controls[0],
        reset_button: controls[1],
        info: rows[4],
        status_bar,
    }
}

fn centered(area: Rect, width: u16) -> Rect {
    Layout::default()
        .direction(Direction::Horizontal)
        .flex(Flex::Center)
        .constraints([Constraint::Length(width)])
        .split(area)[0]
}
