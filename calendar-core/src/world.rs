//! The live particle collection and its per-tick pipeline.
//!
//! One tick looks like:
//! 1. [`PhysicsWorld::integrate_phase`] - every particle gets gravity,
//!    damping and its scale animation, then moves by its velocity.
//! 2. [`PhysicsWorld::relaxation_phase`] - a fixed number of sweeps; in
//!    each sweep particle `i` is clamped to the edges and then resolved
//!    against every particle `j > i`.
//! 3. [`PhysicsWorld::render`] - one draw call per particle.
//!
//! The sweep count is fixed, so some overlap can remain after a tick.

use crate::{
    config::Config,
    error::Result,
    month::MonthRegistry,
    particle::Particle,
    render::Surface,
    spawn,
    types::{Bounds, MonthIndex},
};
use glam::Vec2;
use log::{debug, info};
use rand::Rng;

/// Owns every live [`Particle`], in spawn order.
#[derive(Debug)]
pub struct PhysicsWorld {
    pub particles: Vec<Particle>,
    bounds: Bounds,
    cfg: Config,
}

impl PhysicsWorld {
    pub fn new(bounds: Bounds, cfg: Config) -> Self {
        Self {
            particles: Vec::new(),
            bounds,
            cfg,
        }
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn config(&self) -> &Config {
        &self.cfg
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Sets the canvas size used by later edge checks and spawns.
    ///
    /// Existing particles are not moved.
    pub fn resize(&mut self, bounds: Bounds) {
        if bounds != self.bounds {
            info!("canvas resized to {}x{}", bounds.width, bounds.height);
            self.bounds = bounds;
        }
    }

    /// Launches the next date of `month` from its edge and appends it.
    ///
    /// ### Errors
    /// [`crate::error::SimError::InvalidArgument`] if `month` is not in
    /// `0..12`. Neither the registry cursor nor the world changes then.
    pub fn spawn(
        &mut self,
        registry: &mut MonthRegistry,
        month: MonthIndex,
        rng: &mut impl Rng,
    ) -> Result<&Particle> {
        // Validate the month before the registry cursor moves.
        spawn::EdgeSide::for_month(month)?;
        let (date, color) = registry.next_date(month)?;
        let origin = spawn::origin(month, self.bounds, &self.cfg, rng)?;

        debug!(
            "spawn month={month} date={date} side={:?} pos={:?}",
            origin.side, origin.pos
        );
        self.particles
            .push(Particle::from_origin(origin, date.to_string(), color, &self.cfg));
        Ok(&self.particles[self.particles.len() - 1])
    }

    /// Toggles selection on every particle under `point`.
    ///
    /// ### Returns
    /// How many particles were toggled.
    pub fn select_at(&mut self, point: Vec2) -> usize {
        self.particles
            .iter_mut()
            .map(|p| p.hit_test(point))
            .filter(|&hit| hit)
            .count()
    }

    /// Drops every selected particle, keeping the others in order.
    ///
    /// ### Returns
    /// How many particles were removed.
    pub fn remove_selected(&mut self) -> usize {
        let before = self.particles.len();
        self.particles.retain(|p| !p.selected);
        let removed = before - self.particles.len();
        if removed > 0 {
            info!("removed {removed} selected particle(s), {} left", self.particles.len());
        }
        removed
    }

    /// Advances the simulation by one tick without drawing.
    pub fn step(&mut self) {
        self.integrate_phase();
        for _ in 0..self.cfg.relaxation_passes {
            self.relaxation_phase();
        }
    }

    pub fn render(&self, surface: &mut impl Surface) {
        for p in &self.particles {
            p.render(surface, &self.cfg);
        }
    }

    /// One full frame: [`PhysicsWorld::step`] then [`PhysicsWorld::render`].
    pub fn tick(&mut self, surface: &mut impl Surface) {
        self.step();
        self.render(surface);
    }

    /// Forces first, then integration, per particle.
    pub fn integrate_phase(&mut self) {
        for p in &mut self.particles {
            p.apply_forces(&self.cfg);
            p.integrate();
        }
    }

    /// One sweep of edge clamping and pairwise collision resolution.
    ///
    /// Every unordered pair is visited exactly once.
    ///
    /// ### Returns
    /// How many pairs overlapped and were resolved in this sweep.
    pub fn relaxation_phase(&mut self) -> usize {
        let mut contacts = 0;
        for i in 0..self.particles.len() {
            let (head, tail) = self.particles.split_at_mut(i + 1);
            let a = &mut head[i];
            a.check_edges(self.bounds, &self.cfg);
            for b in tail {
                if a.check_collision(b, &self.cfg) {
                    contacts += 1;
                }
            }
        }
        contacts
    }
}
