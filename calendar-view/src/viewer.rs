//! Interactive calendar toy built with eframe/egui.
//!
//! This module defines [`Viewer`], which owns the [`Session`] and
//! implements [`eframe::App`]: it turns egui input into core
//! [`Command`]s and draws the frame through [`PainterSurface`].

use crate::intro;
use calendar_core::{
    command::{Command, Key},
    error::SimError,
    render::{Surface, TextDraw},
    session::Session,
    types::{Bounds, Rgb},
};
use eframe::App;
use glam::Vec2;
use log::warn;
use rand::rng;

/// Canvas size assumed until the first frame reports the real one.
const INITIAL_BOUNDS: Bounds = Bounds::new(1280.0, 800.0);

/// Main application state.
///
/// ### Fields
/// - `session` - Month registry, particle world and glow.
/// - `rng` - Random source for launch jitter and velocities.
pub struct Viewer {
    session: Session,
    rng: rand::rngs::ThreadRng,
}

impl Viewer {
    /// Creates a viewer with the built-in month table and no particles.
    ///
    /// ### Errors
    /// [`SimError::InvalidConfiguration`] if the month table is malformed.
    pub fn new() -> Result<Self, SimError> {
        Ok(Self {
            session: Session::new(INITIAL_BOUNDS)?,
            rng: rng(),
        })
    }

    /// Applies a command, logging instead of failing on rejection.
    fn apply(&mut self, command: Command) {
        if let Err(err) = self.session.apply(command, &mut self.rng) {
            warn!("ignored {command:?}: {err}");
        }
    }

    /// Translates this frame's raw input events into commands.
    fn handle_input(&mut self, ctx: &egui::Context, rect: egui::Rect) {
        let events = ctx.input(|i| i.events.clone());
        for event in &events {
            if let Some(command) = command_for_event(event, rect) {
                self.apply(command);
            }
        }
    }

    fn ui_canvas(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(egui::Color32::BLACK))
            .show(ctx, |ui| {
                let response = ui.allocate_response(ui.available_size(), egui::Sense::click());
                let rect = response.rect;
                let painter = ui.painter_at(rect);

                let bounds = Bounds::new(rect.width(), rect.height());
                self.apply(Command::Resize(bounds));
                self.handle_input(ctx, rect);

                let mut surface = PainterSurface::new(&painter, rect.min);
                self.session.frame(&mut surface, |surface, color| {
                    intro::draw(surface, bounds, color);
                });
            });

        ctx.request_repaint();
    }
}

impl App for Viewer {
    /// eframe callback: handles input, steps the world and draws it.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui_canvas(ctx);
    }
}

/// Maps a key to a command, if the key means anything to the toy.
pub fn command_for_key(key: egui::Key) -> Option<Command> {
    use egui::Key as K;

    let key = match key {
        K::Delete => Key::Delete,
        K::Backspace => Key::Backspace,
        K::Num1 => Key::Char('1'),
        K::Num2 => Key::Char('2'),
        K::Num3 => Key::Char('3'),
        K::Num4 => Key::Char('4'),
        K::Num5 => Key::Char('5'),
        K::Num6 => Key::Char('6'),
        K::Num7 => Key::Char('7'),
        K::Num8 => Key::Char('8'),
        K::Num9 => Key::Char('9'),
        K::O => Key::Char('o'),
        K::N => Key::Char('n'),
        K::D => Key::Char('d'),
        _ => return None,
    };
    Command::from_key(key)
}

/// Selection command for a pointer press at screen position `pos`, in
/// canvas coordinates. Presses outside the canvas are ignored.
pub fn command_for_press(pos: egui::Pos2, rect: egui::Rect) -> Option<Command> {
    rect.contains(pos).then(|| {
        let local = pos - rect.min;
        Command::SelectAt(Vec2::new(local.x, local.y))
    })
}

fn command_for_event(event: &egui::Event, rect: egui::Rect) -> Option<Command> {
    match event {
        egui::Event::Key {
            key, pressed: true, ..
        } => command_for_key(*key),
        egui::Event::PointerButton {
            pos, pressed: true, ..
        } => command_for_press(*pos, rect),
        _ => None,
    }
}

fn color32(c: Rgb) -> egui::Color32 {
    egui::Color32::from_rgb(c.r, c.g, c.b)
}

/// [`Surface`] backed by an egui painter, offset to the canvas origin.
pub struct PainterSurface<'a> {
    painter: &'a egui::Painter,
    origin: egui::Pos2,
}

impl<'a> PainterSurface<'a> {
    pub fn new(painter: &'a egui::Painter, origin: egui::Pos2) -> Self {
        Self { painter, origin }
    }

    fn stamp(&self, text: &str, at: egui::Pos2, font: &egui::FontId, color: egui::Color32) {
        self.painter
            .text(at, egui::Align2::CENTER_CENTER, text, font.clone(), color);
    }
}

impl Surface for PainterSurface<'_> {
    fn text(&mut self, draw: TextDraw<'_>) {
        // Too small to rasterize.
        if draw.size < 0.5 {
            return;
        }
        let at = self.origin + egui::vec2(draw.center.x, draw.center.y);
        let font = egui::FontId::proportional(draw.size);

        // egui has no stroked text; stamp the glyph around the centre instead.
        if let Some(outline) = draw.outline {
            let r = outline.width * 0.5;
            let color = color32(outline.color);
            for i in 0..8 {
                let angle = i as f32 * std::f32::consts::FRAC_PI_4;
                let offset = egui::vec2(angle.cos(), angle.sin()) * r;
                self.stamp(draw.text, at + offset, &font, color);
            }
        }
        self.stamp(draw.text, at, &font, color32(draw.fill));
    }
}
