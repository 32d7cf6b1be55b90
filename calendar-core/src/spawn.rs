//! Launch placement for new date particles.
//!
//! The twelve months are split into three edge groups of four. Each group
//! launches from its own edge, with slots evenly spaced along it:
//!
//! - months `0..=3` from the left edge, bottom to top, thrown up and right,
//! - months `4..=7` from the top edge, left to right, drifting down,
//! - months `8..=11` from the right edge, top to bottom, thrown up and left.

use crate::{
    config::Config,
    error::{Result, SimError},
    types::{Bounds, MonthIndex},
};
use glam::Vec2;
use rand::Rng;

/// Canvas edge a particle is launched from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EdgeSide {
    Left,
    Top,
    Right,
}

impl EdgeSide {
    /// Returns the edge group of `month`.
    ///
    /// ### Errors
    /// [`SimError::InvalidArgument`] if `month` is not in `0..12`.
    pub fn for_month(month: MonthIndex) -> Result<Self> {
        match month {
            0..=3 => Ok(EdgeSide::Left),
            4..=7 => Ok(EdgeSide::Top),
            8..=11 => Ok(EdgeSide::Right),
            _ => Err(SimError::InvalidArgument(format!(
                "month index {month} out of range"
            ))),
        }
    }

    /// Draws an initial velocity from this edge's launch profile.
    pub fn launch_velocity(self, rng: &mut impl Rng) -> Vec2 {
        match self {
            EdgeSide::Left => Vec2::new(rng.random_range(5.0..12.0), rng.random_range(-10.0..-5.0)),
            EdgeSide::Top => Vec2::new(rng.random_range(-3.0..3.0), rng.random_range(2.0..8.0)),
            EdgeSide::Right => {
                Vec2::new(rng.random_range(-12.0..-5.0), rng.random_range(-10.0..-5.0))
            }
        }
    }
}

/// Initial placement of a freshly spawned particle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Origin {
    pub pos: Vec2,
    pub vel: Vec2,
    pub side: EdgeSide,
}

/// Computes the launch position and velocity for `month` on a canvas of
/// the given size.
///
/// The slot position along the edge is fixed per month; only the jitter
/// along the edge (`±cfg.spawn_jitter`) and the velocity are random.
///
/// ### Parameters
/// - `month` - Month index in `0..12`.
/// - `bounds` - Current canvas size.
/// - `cfg` - Supplies the jitter half-width.
/// - `rng` - Random source for jitter and velocity.
///
/// ### Errors
/// [`SimError::InvalidArgument`] if `month` is not in `0..12`.
pub fn origin(
    month: MonthIndex,
    bounds: Bounds,
    cfg: &Config,
    rng: &mut impl Rng,
) -> Result<Origin> {
    let side = EdgeSide::for_month(month)?;
    let (w, h) = (bounds.width, bounds.height);
    let i = month as f32;
    let jitter = cfg.spawn_jitter;

    let pos = match side {
        EdgeSide::Left => Vec2::new(0.0, h - (i + 1.0) * (h / 5.0)),
        EdgeSide::Top => Vec2::new((i - 3.0) * (w / 5.0), 0.0),
        EdgeSide::Right => Vec2::new(w, (i - 7.0) * (h / 5.0)),
    };
    let offset = rng.random_range(-jitter..=jitter);
    let pos = match side {
        EdgeSide::Left | EdgeSide::Right => pos + Vec2::new(0.0, offset),
        EdgeSide::Top => pos + Vec2::new(offset, 0.0),
    };

    Ok(Origin {
        pos,
        vel: side.launch_velocity(rng),
        side,
    })
}
