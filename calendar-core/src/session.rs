use crate::{
    command::Command,
    config::Config,
    error::Result,
    glow::Glow,
    month::MonthRegistry,
    render::Surface,
    types::{Bounds, Rgb},
    world::PhysicsWorld,
};
use log::warn;
use rand::Rng;

/// Everything the toy keeps between frames.
///
/// The host builds one at startup, feeds it [`Command`]s between frames
/// and calls [`Session::frame`] once per frame.
#[derive(Debug)]
pub struct Session {
    pub registry: MonthRegistry,
    pub world: PhysicsWorld,
    pub glow: Glow,
}

impl Session {
    /// A session with the built-in calendar and default physics.
    ///
    /// ### Errors
    /// [`crate::error::SimError::InvalidConfiguration`] if the built-in
    /// month table does not validate.
    pub fn new(bounds: Bounds) -> Result<Self> {
        Ok(Self::with_parts(
            MonthRegistry::standard()?,
            PhysicsWorld::new(bounds, Config::default()),
        ))
    }

    pub fn with_parts(registry: MonthRegistry, world: PhysicsWorld) -> Self {
        Self {
            registry,
            world,
            glow: Glow::new(),
        }
    }

    /// Runs one command against the world.
    ///
    /// A successful spawn also flashes the instruction text.
    pub fn apply(&mut self, command: Command, rng: &mut impl Rng) -> Result<()> {
        match command {
            Command::Spawn(month) => {
                if let Err(err) = self.world.spawn(&mut self.registry, month, rng) {
                    warn!("rejected spawn: {err}");
                    return Err(err);
                }
                self.glow.flash();
            }
            Command::DeleteSelected => {
                self.world.remove_selected();
            }
            Command::SelectAt(point) => {
                self.world.select_at(point);
            }
            Command::Resize(bounds) => self.world.resize(bounds),
        }
        Ok(())
    }

    /// Runs one frame: fades the glow, lets the host draw its backdrop in
    /// the current glow colour, then ticks the world on top of it.
    pub fn frame<S: Surface>(&mut self, surface: &mut S, backdrop: impl FnOnce(&mut S, Rgb)) {
        self.glow.fade();
        backdrop(surface, self.glow.color());
        self.world.tick(surface);
    }
}
