//! Ambient particle field.
//!
//! Timer-driven pool of short-lived decorative particles. Spawning runs off
//! an accumulator fed by frame delta time rather than an OS timer, so a
//! stalled frame catches up on its own and teardown is just dropping the
//! field.

use rand::RngExt;

use folio_types::particle::{
    FLOAT_DELAY_MAX, FLOAT_DURATION_MAX, FLOAT_DURATION_MIN, Particle, ParticleColor, SEED_BURST,
    SIZE_MAX, SIZE_MIN, SPAWN_INTERVAL,
};

/// Hard cap on live particles. The natural steady state (10s lifetime at a
/// 300ms cadence plus the seed burst) stays well under this; the cap only
/// matters after a pathological frame stall.
pub const MAX_PARTICLES: usize = 96;

#[derive(Debug, Default)]
pub struct ParticleField {
    particles: Vec<Particle>,
    spawn_accumulator: f32,
}

impl ParticleField {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Populate the field immediately at startup, before the first spawn
    /// interval has elapsed.
    pub fn seed_burst(&mut self, viewport: (u16, u16)) {
        for _ in 0..SEED_BURST {
            self.spawn_one(viewport);
        }
    }

    /// Advance the field by one frame: age everything, drop the expired,
    /// then spawn for however many whole intervals the accumulator covers.
    pub fn tick(&mut self, dt: f32, viewport: (u16, u16)) {
        for particle in &mut self.particles {
            particle.advance(dt);
        }
        self.remove_expired();

        self.spawn_accumulator += dt;
        let interval = SPAWN_INTERVAL.as_secs_f32();
        while self.spawn_accumulator >= interval {
            self.spawn_accumulator -= interval;
            self.spawn_one(viewport);
        }
    }

    /// Retain only unexpired particles. Safe to call on an already-swept or
    /// empty field.
    pub fn remove_expired(&mut self) {
        self.particles.retain(|particle| !particle.is_expired());
    }

    pub fn clear(&mut self) {
        self.particles.clear();
        self.spawn_accumulator = 0.0;
    }

    fn spawn_one(&mut self, viewport: (u16, u16)) {
        let (width, height) = viewport;
        if width == 0 || height == 0 || self.particles.len() >= MAX_PARTICLES {
            return;
        }

        let mut rng = rand::rng();
        let x = rng.random_range(0.0..f32::from(width));
        let y = rng.random_range(0.0..f32::from(height));
        let size = rng.random_range(SIZE_MIN..SIZE_MAX);
        let color = ParticleColor::ALL[rng.random_range(0..ParticleColor::ALL.len())];
        let float_duration = rng.random_range(FLOAT_DURATION_MIN..FLOAT_DURATION_MAX);
        let float_delay = rng.random_range(0.0..FLOAT_DELAY_MAX);
        self.particles.push(Particle::new(
            x,
            y,
            size,
            color,
            float_duration,
            float_delay,
        ));
    }
}
