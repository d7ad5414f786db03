//! Ambient particle model.
//!
//! Pure value math only. Spawning, randomness, and pool bookkeeping live in
//! the engine's particle field; rendering maps sizes and colors to glyphs.

use std::f32::consts::PI;
use std::time::Duration;

/// How often the field spawns one particle.
pub const SPAWN_INTERVAL: Duration = Duration::from_millis(300);

/// Particles seeded immediately at startup, before the first interval.
pub const SEED_BURST: usize = 15;

/// Fixed lifetime after which a particle is removed.
pub const LIFETIME: Duration = Duration::from_secs(10);

/// Size bounds, half-open: `SIZE_MIN <= size < SIZE_MAX`.
pub const SIZE_MIN: f32 = 5.0;
pub const SIZE_MAX: f32 = 15.0;

/// Float animation period bounds in seconds, half-open.
pub const FLOAT_DURATION_MIN: f32 = 4.0;
pub const FLOAT_DURATION_MAX: f32 = 10.0;

/// Float animation start delay bound in seconds, half-open from zero.
pub const FLOAT_DELAY_MAX: f32 = 5.0;

/// Peak of the vertical bob, in rows. The page lifted particles 20px,
/// one line height.
pub const FLOAT_AMPLITUDE_ROWS: f32 = 1.0;

/// Number of glyph steps the size range maps onto.
pub const SIZE_CLASSES: usize = 4;

/// Fixed palette for particles, over the dark background.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticleColor {
    Purple,
    Blue,
    Pink,
    Green,
    Yellow,
}

impl ParticleColor {
    pub const ALL: [Self; 5] = [
        Self::Purple,
        Self::Blue,
        Self::Pink,
        Self::Green,
        Self::Yellow,
    ];

    #[must_use]
    pub const fn rgb(self) -> (u8, u8, u8) {
        match self {
            Self::Purple => (147, 51, 234),
            Self::Blue => (59, 130, 246),
            Self::Pink => (236, 72, 153),
            Self::Green => (16, 185, 129),
            Self::Yellow => (245, 158, 11),
        }
    }
}

/// One ephemeral decorative particle.
///
/// Position is in fractional viewport cells; no identity beyond the value
/// itself and no relationship to any other particle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub color: ParticleColor,
    /// Period of the vertical bob, seconds.
    pub float_duration: f32,
    /// Seconds before the bob starts.
    pub float_delay: f32,
    age: f32,
}

impl Particle {
    #[must_use]
    pub fn new(
        x: f32,
        y: f32,
        size: f32,
        color: ParticleColor,
        float_duration: f32,
        float_delay: f32,
    ) -> Self {
        Self {
            x,
            y,
            size,
            color,
            float_duration,
            float_delay,
            age: 0.0,
        }
    }

    pub fn advance(&mut self, dt: f32) {
        self.age += dt;
    }

    #[must_use]
    pub fn age(&self) -> f32 {
        self.age
    }

    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.age >= LIFETIME.as_secs_f32()
    }

    /// Vertical bob offset in rows, negative while lifted.
    ///
    /// Zero until the delay has elapsed; afterwards a smooth up-and-back
    /// cycle per period, starting and ending at rest like the page's float
    /// keyframes.
    #[must_use]
    pub fn float_offset(&self) -> f32 {
        let active = self.age - self.float_delay;
        if active <= 0.0 || self.float_duration <= 0.0 {
            return 0.0;
        }
        let phase = (active / self.float_duration).fract();
        -(phase * PI).sin() * FLOAT_AMPLITUDE_ROWS
    }

    /// Glyph ramp step for this particle's size, `0..SIZE_CLASSES`.
    #[must_use]
    pub fn size_class(&self) -> usize {
        let span = SIZE_MAX - SIZE_MIN;
        let normalized = ((self.size - SIZE_MIN) / span).clamp(0.0, 1.0);
        ((normalized * SIZE_CLASSES as f32) as usize).min(SIZE_CLASSES - 1)
    }
}
