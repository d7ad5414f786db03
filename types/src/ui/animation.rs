//! Animation timing primitives.

use std::time::Duration;

fn normalized_progress(elapsed: Duration, duration: Duration) -> f32 {
    if duration.is_zero() {
        return 1.0;
    }

    let elapsed = elapsed.as_secs_f32();
    let total = duration.as_secs_f32();
    (elapsed / total).clamp(0.0, 1.0)
}

/// Cubic ease-out: fast start, settling into the target.
#[must_use]
pub fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}

#[derive(Debug, Clone)]
pub struct EffectTimer {
    elapsed: Duration,
    duration: Duration,
}

impl EffectTimer {
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self {
            elapsed: Duration::ZERO,
            duration,
        }
    }

    pub fn advance(&mut self, delta: Duration) {
        self.elapsed = self.elapsed.saturating_add(delta);
    }

    #[must_use]
    pub fn progress(&self) -> f32 {
        normalized_progress(self.elapsed, self.duration)
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}

/// Eased scroll from one offset to another, used for section jumps.
///
/// Mirrors the page's smooth scroll on nav clicks: a fixed-duration
/// ease-out toward the target row. Manual scrolling replaces the glide.
#[derive(Debug, Clone)]
pub struct ScrollGlide {
    from: u16,
    to: u16,
    timer: EffectTimer,
}

impl ScrollGlide {
    pub const DURATION: Duration = Duration::from_millis(350);

    #[must_use]
    pub fn new(from: u16, to: u16) -> Self {
        Self {
            from,
            to,
            timer: EffectTimer::new(Self::DURATION),
        }
    }

    pub fn advance(&mut self, delta: Duration) {
        self.timer.advance(delta);
    }

    /// Offset for the current frame.
    #[must_use]
    pub fn current_offset(&self) -> u16 {
        let eased = ease_out_cubic(self.timer.progress());
        let from = f32::from(self.from);
        let to = f32::from(self.to);
        (from + (to - from) * eased).round() as u16
    }

    #[must_use]
    pub fn target(&self) -> u16 {
        self.to
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.timer.is_finished()
    }
}
