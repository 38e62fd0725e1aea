//! Simulation half of the decorative snowfall. No DOM types here:
//! the canvas component feeds in viewport sizes, frame deltas, and a
//! uniform-[0,1) random source, and reads particles back out to draw.

use std::f64::consts::TAU;

/// Multiplied into each particle's own alpha at draw time.
pub const ALPHA_DAMP: f64 = 0.95;

const MAX_PARTICLES: usize = 300;
const AREA_PER_PARTICLE: f64 = 1500.0;

/// Frame deltas are clamped here so a stalled tab does not teleport
/// every flake on the next frame.
const MAX_FRAME_MS: f64 = 60.0;

/// How far past a horizontal edge a flake may drift before it is
/// recycled.
const EDGE_SLACK: f64 = 50.0;

fn range(rng: &mut impl FnMut() -> f64, min: f64, max: f64) -> f64 {
    rng() * (max - min) + min
}

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub speed: f64,
    pub sway: f64,
    pub angle: f64,
    pub alpha: f64,
}

impl Particle {
    fn spawn(width: f64, height: f64, rng: &mut impl FnMut() -> f64) -> Self {
        let radius = range(rng, 1.0, 4.0) * if rng() < 0.2 { 1.8 } else { 1.0 };

        Self {
            x: range(rng, 0.0, width),
            y: range(rng, -height, 0.0),
            radius,
            speed: range(rng, 0.3, 1.2) * (radius / 2.0),
            sway: range(rng, 0.5, 1.8),
            angle: range(rng, 0.0, TAU),
            alpha: range(rng, 0.4, 0.95),
        }
    }

    /// Back above the viewport with fresh speed and opacity. Radius,
    /// angle, and sway are deliberately kept.
    fn recycle(&mut self, width: f64, rng: &mut impl FnMut() -> f64) {
        self.x = range(rng, 0.0, width);
        self.y = range(rng, -60.0, -10.0);
        self.speed = range(rng, 0.3, 1.2) * (self.radius / 2.0);
        self.alpha = range(rng, 0.4, 0.95);
    }
}

#[derive(Debug, Default)]
pub struct SnowField {
    particles: Vec<Particle>,
    width: f64,
    height: f64,
}

impl SnowField {
    /// Flake count scales with viewport area, capped for perf.
    pub fn target_count(width: f64, height: f64) -> usize {
        ((width * height / AREA_PER_PARTICLE) as usize).min(MAX_PARTICLES)
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    /// Records the new viewport size and grows or shrinks the set to
    /// the target count. Surviving particles are left untouched.
    pub fn resize(&mut self, width: f64, height: f64, rng: &mut impl FnMut() -> f64) {
        self.width = width;
        self.height = height;

        let target = Self::target_count(width, height);
        while self.particles.len() < target {
            self.particles.push(Particle::spawn(width, height, rng));
        }
        self.particles.truncate(target);
    }

    /// Advances every particle by `dt_ms` (clamped) and recycles the
    /// ones that left the visible area.
    pub fn step(&mut self, dt_ms: f64, rng: &mut impl FnMut() -> f64) {
        let dt = dt_ms.min(MAX_FRAME_MS);

        for particle in &mut self.particles {
            particle.y += particle.speed * dt * 0.06;
            particle.angle += 0.01 * particle.sway * dt * 0.06;
            particle.x += particle.angle.sin() * (0.5 + particle.sway * 0.2);

            let below = particle.y - particle.radius > self.height;
            let off_side =
                particle.x < -EDGE_SLACK || particle.x > self.width + EDGE_SLACK;
            if below || off_side {
                particle.recycle(self.width, rng);
            }
        }
    }
}
