//! The gallows figure.
//!
//! Geometry lives in a 200x220 drawing space with the origin at the top-left
//! and y growing downwards. The frame is always drawn; body parts come from a
//! fixed table, one per wrong guess, so what is drawn depends only on the
//! current wrong-guess count.

use crate::game::MAX_WRONG;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::symbols::Marker;
use ratatui::widgets::canvas::{Canvas, Circle, Context, Line as CanvasLine};
use ratatui::widgets::{Block, Borders};

pub const WIDTH: f64 = 200.0;
pub const HEIGHT: f64 = 220.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Stroke {
    Line { x1: f64, y1: f64, x2: f64, y2: f64 },
    Circle { x: f64, y: f64, radius: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyPart {
    Head,
    Torso,
    LeftArm,
    RightArm,
    LeftLeg,
    RightLeg,
}

const fn line(x1: f64, y1: f64, x2: f64, y2: f64) -> Stroke {
    Stroke::Line { x1, y1, x2, y2 }
}

/// Base, post, beam and hook.
pub const FRAME: [Stroke; 4] = [
    line(20.0, 200.0, 180.0, 200.0),
    line(50.0, 200.0, 50.0, 20.0),
    line(50.0, 20.0, 120.0, 20.0),
    line(120.0, 20.0, 120.0, 40.0),
];

/// Body parts in the order they appear.
pub const BODY: [(BodyPart, Stroke); 6] = [
    (
        BodyPart::Head,
        Stroke::Circle {
            x: 120.0,
            y: 60.0,
            radius: 20.0,
        },
    ),
    (BodyPart::Torso, line(120.0, 80.0, 120.0, 130.0)),
    (BodyPart::LeftArm, line(120.0, 100.0, 90.0, 110.0)),
    (BodyPart::RightArm, line(120.0, 100.0, 150.0, 110.0)),
    (BodyPart::LeftLeg, line(120.0, 130.0, 90.0, 160.0)),
    (BodyPart::RightLeg, line(120.0, 130.0, 150.0, 160.0)),
];

const _: () = assert!(BODY.len() == MAX_WRONG as usize);

/// Body parts visible after `wrong` wrong guesses.
pub fn parts_for(wrong: u8) -> &'static [(BodyPart, Stroke)] {
    &BODY[..usize::from(wrong.min(MAX_WRONG))]
}

/// Every stroke to draw after `wrong` wrong guesses, frame first.
pub fn figure(wrong: u8) -> Vec<Stroke> {
    FRAME
        .iter()
        .copied()
        .chain(parts_for(wrong).iter().map(|(_, stroke)| *stroke))
        .collect()
}

pub fn render(frame: &mut Frame, area: Rect, wrong: u8, lost: bool) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border());

    let strokes = figure(wrong);
    let figure_color = Theme::figure(lost);
    let canvas = Canvas::default()
        .block(block)
        .marker(Marker::Braille)
        .x_bounds([0.0, WIDTH])
        .y_bounds([0.0, HEIGHT])
        .paint(|ctx| {
            for (i, stroke) in strokes.iter().enumerate() {
                let color = if i < FRAME.len() {
                    Theme::gallows_frame()
                } else {
                    figure_color
                };
                draw(ctx, stroke, color);
            }
        });
    frame.render_widget(canvas, area);
}

/// The canvas y axis points up, so flip it.
fn draw(ctx: &mut Context, stroke: &Stroke, color: Color) {
    match *stroke {
        Stroke::Line { x1, y1, x2, y2 } => {
            ctx.draw(&CanvasLine {
                x1,
                y1: HEIGHT - y1,
                x2,
                y2: HEIGHT - y2,
                color,
            });
        }
        Stroke::Circle { x, y, radius } => {
            ctx.draw(&Circle {
                x,
                y: HEIGHT - y,
                radius,
                color,
            });
        }
    }
}
