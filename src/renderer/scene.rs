//! Frame composition
//!
//! Reads the game state and lists what to draw, back to front. Nothing here
//! touches the GPU or the DOM, so the layout is testable natively.

use glam::Vec2;

use super::palette::Rgb;
use crate::settings::Settings;
use crate::sim::{GameState, Side};

/// Score digits
pub const SCORE_FONT_PX: f32 = 100.0;
/// Point/win messages
pub const MESSAGE_FONT_PX: f32 = 15.0;

/// A filled primitive in field coordinates
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Rgb,
    },
    Circle {
        center: Vec2,
        radius: f32,
        color: Rgb,
    },
}

/// A line of text; `y` is the baseline, as with canvas `fillText`
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub x: f32,
    pub y: f32,
    pub text: String,
    pub font_px: f32,
    pub color: Rgb,
}

/// Everything needed to draw one tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    pub shapes: Vec<Shape>,
    pub labels: Vec<Label>,
}

/// Build the frame for the current state
pub fn compose(state: &GameState, settings: &Settings) -> Frame {
    let palette = settings.palette();
    let (w, h) = (state.bounds.width, state.bounds.height);
    let mut frame = Frame::default();

    frame.shapes.push(Shape::Rect {
        x: 0.0,
        y: 0.0,
        width: w,
        height: h,
        color: palette.background,
    });

    let score = |x: f32, value: u32| Label {
        x,
        y: h / 2.0 + 25.0,
        text: value.to_string(),
        font_px: SCORE_FONT_PX,
        color: palette.text,
    };
    frame.labels.push(score(w / 4.0 - 25.0, state.user.score));
    frame.labels.push(score(3.0 * w / 4.0 - 25.0, state.ai.score));

    for paddle in [&state.user, &state.ai] {
        frame.shapes.push(Shape::Rect {
            x: paddle.x,
            y: paddle.y,
            width: paddle.width,
            height: paddle.height,
            color: palette.paddle,
        });
    }

    frame.shapes.push(Shape::Circle {
        center: state.ball.pos,
        radius: state.ball.radius,
        color: palette.ball,
    });

    if let Some((text, offset)) = message(state, settings) {
        frame.labels.push(Label {
            x: w / 4.0 + offset,
            y: h / 2.0,
            text: text.to_string(),
            font_px: MESSAGE_FONT_PX,
            color: palette.text,
        });
    }

    frame
}

/// Banner text and its x offset from the first quarter line
fn message(state: &GameState, settings: &Settings) -> Option<(&'static str, f32)> {
    match state.winner() {
        Some(Side::User) => Some(("User wins!", 110.0)),
        Some(Side::Ai) => Some(("Ai wins!", 120.0)),
        None if !settings.point_messages => None,
        None => match state.last_point? {
            Side::User => Some(("User got a point!", 75.0)),
            Side::Ai => Some(("Ai got a point!", 85.0)),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::Palette;
    use crate::sim::MatchPhase;

    fn message_text(frame: &Frame) -> Option<&str> {
        frame
            .labels
            .iter()
            .find(|l| l.font_px == MESSAGE_FONT_PX)
            .map(|l| l.text.as_str())
    }

    #[test]
    fn test_draw_order_and_geometry() {
        let state = GameState::new();
        let frame = compose(&state, &Settings::default());
        let palette = Palette::classic();

        assert_eq!(frame.shapes.len(), 4);
        assert_eq!(
            frame.shapes[0],
            Shape::Rect {
                x: 0.0,
                y: 0.0,
                width: 600.0,
                height: 400.0,
                color: palette.background,
            }
        );
        assert_eq!(
            frame.shapes[1],
            Shape::Rect {
                x: 40.0,
                y: 162.5,
                width: 10.0,
                height: 75.0,
                color: palette.paddle,
            }
        );
        assert!(matches!(frame.shapes[2], Shape::Rect { x, .. } if x == 550.0));
        assert_eq!(
            frame.shapes[3],
            Shape::Circle {
                center: Vec2::new(300.0, 200.0),
                radius: 7.0,
                color: palette.ball,
            }
        );
    }

    #[test]
    fn test_score_labels() {
        let mut state = GameState::new();
        state.user.score = 3;
        state.ai.score = 12;
        let frame = compose(&state, &Settings::default());

        assert_eq!(frame.labels[0].text, "3");
        assert_eq!((frame.labels[0].x, frame.labels[0].y), (125.0, 225.0));
        assert_eq!(frame.labels[1].text, "12");
        assert_eq!((frame.labels[1].x, frame.labels[1].y), (425.0, 225.0));
        assert_eq!(message_text(&frame), None);
    }

    #[test]
    fn test_point_messages() {
        let mut state = GameState::new();
        state.last_point = Some(Side::User);
        let frame = compose(&state, &Settings::default());
        assert_eq!(message_text(&frame), Some("User got a point!"));

        state.last_point = Some(Side::Ai);
        let frame = compose(&state, &Settings::default());
        assert_eq!(message_text(&frame), Some("Ai got a point!"));
        let label = frame.labels.last().unwrap();
        assert_eq!((label.x, label.y), (235.0, 200.0));
    }

    #[test]
    fn test_win_message_overrides_point() {
        let mut state = GameState::new();
        state.last_point = Some(Side::Ai);
        state.phase = MatchPhase::Won(Side::Ai);

        let settings = Settings {
            point_messages: false,
            ..Default::default()
        };
        let frame = compose(&state, &settings);
        assert_eq!(message_text(&frame), Some("Ai wins!"));

        state.phase = MatchPhase::Won(Side::User);
        let frame = compose(&state, &settings);
        assert_eq!(message_text(&frame), Some("User wins!"));
    }

    #[test]
    fn test_point_messages_can_be_disabled() {
        let mut state = GameState::new();
        state.last_point = Some(Side::User);
        let settings = Settings {
            point_messages: false,
            ..Default::default()
        };
        assert_eq!(message_text(&compose(&state, &settings)), None);
    }

    #[test]
    fn test_high_contrast_palette() {
        let state = GameState::new();
        let settings = Settings {
            high_contrast: true,
            ..Default::default()
        };
        let frame = compose(&state, &settings);
        assert!(matches!(
            frame.shapes[0],
            Shape::Rect { color, .. } if color == Palette::high_contrast().background
        ));
    }
}
