//! Layout of the instruction text drawn behind the particles.

use calendar_core::{
    render::{Surface, TextDraw},
    types::{Bounds, Rgb},
};
use glam::Vec2;

/// One centered line (or block) of instruction text.
#[derive(Clone, Debug, PartialEq)]
pub struct IntroLine {
    pub text: &'static str,
    pub center: Vec2,
    pub size: f32,
}

/// Lays the intro block out around a point 38% down the canvas, sized
/// relative to the smaller canvas dimension.
pub fn layout(bounds: Bounds) -> Vec<IntroLine> {
    let anchor = Vec2::new(bounds.width / 2.0, bounds.height * 0.38);
    let title = bounds.width.min(bounds.height) * 0.035;
    let gap = title * 4.5;
    let line = |text, dy: f32, size: f32| IntroLine {
        text,
        center: anchor + Vec2::new(0.0, dy),
        size,
    };

    vec![
        line("STRESS RELIEF CALENDAR", 0.0, title),
        line(
            "Tired of work? Fill this space with your holidays.",
            title * 2.2,
            title * 0.45,
        ),
        line("-------- HOW TO PLAY --------", gap, title * 0.4),
        line(
            "Press keys [ 1-9 ] [ O ] [ N ] [ D ] for Jan - Dec",
            gap + title * 1.8,
            title * 0.4,
        ),
        line(
            "Click to select -> Press [ Delete ] to clear",
            gap + title * 3.8,
            title * 0.4,
        ),
    ]
}

pub fn draw(surface: &mut impl Surface, bounds: Bounds, color: Rgb) {
    for l in layout(bounds) {
        surface.text(TextDraw {
            text: l.text,
            center: l.center,
            size: l.size,
            fill: color,
            outline: None,
        });
    }
}
