use glam::Vec2;

/// Fixed physics and presentation constants for the date particles.
///
/// Values are per tick; there is no time step scaling.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    /// Acceleration added to every velocity each tick.
    pub gravity: Vec2,
    /// Isotropic velocity multiplier applied after gravity.
    pub damping: f32,
    /// Scale a particle is born with.
    pub initial_scale: f32,
    /// Scale a particle grows toward.
    pub target_scale: f32,
    /// Exponential smoothing factor for the scale animation.
    pub scale_rate: f32,
    /// Multiplier for the vertical velocity on a floor bounce.
    pub floor_restitution: f32,
    /// Multiplier for the horizontal velocity on a floor bounce.
    pub floor_friction: f32,
    /// Multiplier for the horizontal velocity on a wall bounce.
    pub wall_restitution: f32,
    /// Share of the overlap each particle is pushed out by.
    pub push_factor: f32,
    /// Weight of the lerp toward the pair's mean velocity.
    pub velocity_blend: f32,
    /// Edge + collision sweeps per tick.
    pub relaxation_passes: usize,
    /// Collision radius at scale 1.
    pub base_radius: f32,
    /// Font size at scale 1.
    pub base_glyph_size: f32,
    /// Half-width of the uniform jitter along the spawn edge.
    pub spawn_jitter: f32,
    /// Stroke width of the selection outline.
    pub outline_width: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gravity: Vec2::new(0.0, 0.4),
            damping: 0.99,
            initial_scale: 0.1,
            target_scale: 1.0,
            scale_rate: 0.08,
            floor_restitution: -0.4,
            floor_friction: 0.8,
            wall_restitution: -0.5,
            push_factor: 0.5,
            velocity_blend: 0.5,
            relaxation_passes: 3,
            base_radius: 24.0,
            base_glyph_size: 48.0,
            spawn_jitter: 20.0,
            outline_width: 4.0,
        }
    }
}
