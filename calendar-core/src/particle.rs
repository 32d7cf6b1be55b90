use crate::{
    config::Config,
    render::{Outline, Surface, TextDraw},
    spawn::Origin,
    types::{Bounds, Rgb},
};
use glam::Vec2;

/// A date label flying around the canvas as a soft disc.
///
/// The collision radius and the glyph size both follow `scale`, which
/// starts small and eases toward the target scale so new dates pop in.
#[derive(Clone, Debug)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub scale: f32,
    pub label: String,
    pub color: Rgb,
    pub selected: bool,
    pub base_radius: f32,
    pub base_glyph_size: f32,
}

impl Particle {
    pub fn new(pos: Vec2, vel: Vec2, label: String, color: Rgb, cfg: &Config) -> Self {
        Self {
            pos,
            vel,
            scale: cfg.initial_scale,
            label,
            color,
            selected: false,
            base_radius: cfg.base_radius,
            base_glyph_size: cfg.base_glyph_size,
        }
    }

    pub fn from_origin(origin: Origin, label: String, color: Rgb, cfg: &Config) -> Self {
        Self::new(origin.pos, origin.vel, label, color, cfg)
    }

    /// Current collision radius.
    #[inline]
    pub fn radius(&self) -> f32 {
        self.base_radius * self.scale
    }

    /// Gravity, damping and the scale animation for one tick.
    pub fn apply_forces(&mut self, cfg: &Config) {
        self.vel += cfg.gravity;
        self.vel *= cfg.damping;
        self.scale += (cfg.target_scale - self.scale) * cfg.scale_rate;
    }

    #[inline]
    pub fn integrate(&mut self) {
        self.pos += self.vel;
    }

    /// Clamps the particle against the floor and side walls.
    ///
    /// The top of the canvas is open; gravity brings particles back.
    pub fn check_edges(&mut self, bounds: Bounds, cfg: &Config) {
        let r = self.radius();

        if self.pos.y > bounds.height - r {
            self.pos.y = bounds.height - r;
            self.vel.y *= cfg.floor_restitution;
            self.vel.x *= cfg.floor_friction;
        }

        if self.pos.x < r {
            self.pos.x = r;
            self.vel.x *= cfg.wall_restitution;
        } else if self.pos.x > bounds.width - r {
            self.pos.x = bounds.width - r;
            self.vel.x *= cfg.wall_restitution;
        }
    }

    /// Pushes two overlapping particles apart and pulls their velocities
    /// toward their mean.
    ///
    /// Each particle moves by half the overlap along the line between the
    /// centers. Coincident centers are left alone since there is no
    /// direction to push along.
    ///
    /// ### Returns
    /// `true` if the pair overlapped and was resolved.
    pub fn check_collision(&mut self, other: &mut Particle, cfg: &Config) -> bool {
        let min_dist = self.radius() + other.radius();
        let d = self.pos.distance(other.pos);
        if !(d < min_dist && d > 0.0) {
            return false;
        }

        let push = (self.pos - other.pos) / d;
        let force = (min_dist - d) * cfg.push_factor;
        self.pos += push * force;
        other.pos -= push * force;

        let combined = (self.vel + other.vel) * 0.5;
        self.vel = self.vel.lerp(combined, cfg.velocity_blend);
        other.vel = other.vel.lerp(combined, cfg.velocity_blend);
        true
    }

    /// Toggles selection if `point` lies inside the particle.
    pub fn hit_test(&mut self, point: Vec2) -> bool {
        let hit = point.distance(self.pos) < self.radius();
        if hit {
            self.selected = !self.selected;
        }
        hit
    }

    pub fn render(&self, surface: &mut impl Surface, cfg: &Config) {
        surface.text(TextDraw {
            text: &self.label,
            center: self.pos,
            size: self.base_glyph_size * self.scale,
            fill: self.color,
            outline: self.selected.then_some(Outline {
                width: cfg.outline_width,
                color: Rgb::WHITE,
            }),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Recorder;

    const CANVAS: Bounds = Bounds::new(800.0, 600.0);

    fn particle_at(pos: Vec2, vel: Vec2) -> Particle {
        Particle::new(pos, vel, "7".to_string(), Rgb::WHITE, &Config::default())
    }

    fn full_size(pos: Vec2, vel: Vec2) -> Particle {
        let mut p = particle_at(pos, vel);
        p.scale = 1.0;
        p
    }

    #[test]
    fn new_particle_starts_small_and_unselected() {
        let p = particle_at(Vec2::ZERO, Vec2::ZERO);
        assert_eq!(p.scale, 0.1);
        assert!(!p.selected);
        assert!((p.radius() - 2.4).abs() < 1e-6);
    }

    #[test]
    fn apply_forces_adds_gravity_then_damps() {
        let cfg = Config::default();
        let mut p = particle_at(Vec2::ZERO, Vec2::new(10.0, 0.0));

        p.apply_forces(&cfg);

        assert!((p.vel.x - 9.9).abs() < 1e-5);
        assert!((p.vel.y - 0.396).abs() < 1e-5);
        assert!((p.scale - 0.172).abs() < 1e-6);
    }

    #[test]
    fn integrate_moves_by_velocity() {
        let mut p = particle_at(Vec2::new(1.0, 2.0), Vec2::new(3.0, -4.0));
        p.integrate();
        assert_eq!(p.pos, Vec2::new(4.0, -2.0));
    }

    #[test]
    fn scale_grows_monotonically_and_never_passes_target() {
        let cfg = Config::default();
        let mut p = particle_at(Vec2::ZERO, Vec2::ZERO);
        let mut prev = p.scale;

        for _ in 0..2000 {
            p.apply_forces(&cfg);
            assert!(p.scale >= prev);
            assert!(p.scale <= 1.0);
            prev = p.scale;
        }
        assert!(p.scale > 0.999);
    }

    #[test]
    fn floor_bounce_clamps_and_loses_energy() {
        let cfg = Config::default();
        let mut p = full_size(Vec2::new(400.0, 700.0), Vec2::new(5.0, 10.0));

        p.check_edges(CANVAS, &cfg);

        assert_eq!(p.pos.y, 600.0 - 24.0);
        assert!((p.vel.y + 4.0).abs() < 1e-5);
        assert!((p.vel.x - 4.0).abs() < 1e-5);
    }

    #[test]
    fn side_walls_clamp_and_reflect() {
        let cfg = Config::default();

        let mut left = full_size(Vec2::new(-50.0, 100.0), Vec2::new(-8.0, 0.0));
        left.check_edges(CANVAS, &cfg);
        assert_eq!(left.pos.x, 24.0);
        assert_eq!(left.vel.x, 4.0);

        let mut right = full_size(Vec2::new(900.0, 100.0), Vec2::new(8.0, 0.0));
        right.check_edges(CANVAS, &cfg);
        assert_eq!(right.pos.x, 800.0 - 24.0);
        assert_eq!(right.vel.x, -4.0);
    }

    #[test]
    fn ceiling_is_open() {
        let cfg = Config::default();
        let mut p = full_size(Vec2::new(400.0, -300.0), Vec2::new(0.0, -5.0));
        p.check_edges(CANVAS, &cfg);
        assert_eq!(p.pos, Vec2::new(400.0, -300.0));
        assert_eq!(p.vel, Vec2::new(0.0, -5.0));
    }

    #[test]
    fn check_edges_keeps_particle_inside_for_any_velocity() {
        let cfg = Config::default();
        let vels = [
            Vec2::new(-500.0, 900.0),
            Vec2::new(500.0, 900.0),
            Vec2::new(37.0, -3.0),
            Vec2::new(-1.0e4, 1.0e4),
        ];

        for v in vels {
            let mut p = particle_at(Vec2::new(400.0, 300.0), v);
            for _ in 0..20 {
                p.apply_forces(&cfg);
                p.integrate();
                p.check_edges(CANVAS, &cfg);

                let r = p.radius();
                assert!(p.pos.y <= CANVAS.height - r);
                assert!(p.pos.x >= r && p.pos.x <= CANVAS.width - r);
            }
        }
    }

    #[test]
    fn overlapping_pair_is_pushed_apart_and_velocities_blend() {
        let cfg = Config::default();
        // Radius 20 each, so combined radius 40 with the centers 10 apart.
        let mut a = full_size(Vec2::new(100.0, 100.0), Vec2::new(4.0, 0.0));
        let mut b = full_size(Vec2::new(110.0, 100.0), Vec2::new(-2.0, 2.0));
        a.base_radius = 20.0;
        b.base_radius = 20.0;

        assert!(a.check_collision(&mut b, &cfg));

        assert!(a.pos.distance(b.pos) > 10.0);
        assert!((a.pos.x - 85.0).abs() < 1e-4);
        assert!((b.pos.x - 125.0).abs() < 1e-4);

        // Mean velocity is (1, 1); each side moves halfway toward it.
        assert!(a.vel.abs_diff_eq(Vec2::new(2.5, 0.5), 1e-5));
        assert!(b.vel.abs_diff_eq(Vec2::new(-0.5, 1.5), 1e-5));
    }

    #[test]
    fn coincident_pair_is_left_untouched() {
        let cfg = Config::default();
        let mut a = full_size(Vec2::new(50.0, 50.0), Vec2::new(1.0, 0.0));
        let mut b = full_size(Vec2::new(50.0, 50.0), Vec2::new(-1.0, 0.0));

        assert!(!a.check_collision(&mut b, &cfg));

        assert_eq!(a.pos, Vec2::new(50.0, 50.0));
        assert_eq!(b.pos, Vec2::new(50.0, 50.0));
        assert!(a.pos.is_finite() && a.vel.is_finite());
        assert_eq!(a.vel, Vec2::new(1.0, 0.0));
    }

    #[test]
    fn separated_pair_is_ignored() {
        let cfg = Config::default();
        let mut a = full_size(Vec2::new(0.0, 0.0), Vec2::X);
        let mut b = full_size(Vec2::new(48.0, 0.0), Vec2::Y);

        assert!(!a.check_collision(&mut b, &cfg));
        assert_eq!(a.vel, Vec2::X);
        assert_eq!(b.vel, Vec2::Y);
    }

    #[test]
    fn hit_test_toggles_inside_radius_only() {
        let mut p = full_size(Vec2::new(100.0, 100.0), Vec2::ZERO);

        assert!(!p.hit_test(Vec2::new(130.0, 100.0)));
        assert!(!p.selected);

        assert!(p.hit_test(Vec2::new(110.0, 105.0)));
        assert!(p.selected);

        assert!(p.hit_test(Vec2::new(100.0, 100.0)));
        assert!(!p.selected);
    }

    #[test]
    fn render_scales_glyph_and_outlines_selection() {
        let cfg = Config::default();
        let mut p = particle_at(Vec2::new(10.0, 20.0), Vec2::ZERO);
        p.scale = 0.5;
        let mut rec = Recorder::default();

        p.render(&mut rec, &cfg);
        p.selected = true;
        p.render(&mut rec, &cfg);

        assert_eq!(rec.draws.len(), 2);
        assert_eq!(rec.draws[0].text, "7");
        assert_eq!(rec.draws[0].center, Vec2::new(10.0, 20.0));
        assert_eq!(rec.draws[0].size, 24.0);
        assert_eq!(rec.draws[0].outline, None);
        assert_eq!(
            rec.draws[1].outline,
            Some(Outline {
                width: 4.0,
                color: Rgb::WHITE
            })
        );
    }
}
