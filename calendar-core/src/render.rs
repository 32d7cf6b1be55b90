//! Drawing seam between the simulation and the host's canvas.

use crate::types::Rgb;
use glam::Vec2;

/// Stroke drawn around a glyph.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Outline {
    pub width: f32,
    pub color: Rgb,
}

/// One centered text draw call.
#[derive(Clone, Debug, PartialEq)]
pub struct TextDraw<'a> {
    pub text: &'a str,
    pub center: Vec2,
    pub size: f32,
    pub fill: Rgb,
    pub outline: Option<Outline>,
}

/// A drawing target provided by the host, in canvas coordinates.
pub trait Surface {
    fn text(&mut self, draw: TextDraw<'_>);
}

/// A [`Surface`] that only records what was drawn.
#[derive(Debug, Default)]
pub struct Recorder {
    pub draws: Vec<RecordedText>,
}

/// Owned copy of a [`TextDraw`].
#[derive(Clone, Debug, PartialEq)]
pub struct RecordedText {
    pub text: String,
    pub center: Vec2,
    pub size: f32,
    pub fill: Rgb,
    pub outline: Option<Outline>,
}

impl Surface for Recorder {
    fn text(&mut self, draw: TextDraw<'_>) {
        self.draws.push(RecordedText {
            text: draw.text.to_owned(),
            center: draw.center,
            size: draw.size,
            fill: draw.fill,
            outline: draw.outline,
        });
    }
}
