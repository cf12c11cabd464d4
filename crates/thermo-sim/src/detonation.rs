//! Detonation component: the visual timeline of a blast at a city.
//!
//! The curve has three stages scaled by the detonation speed: the
//! diameter grows for `DETONATION_GROWTH_SECS`, the light holds at full
//! intensity until the peak ends, then fades over `DETONATION_DECAY_SECS`.

use hecs::Entity;

use thermo_core::constants::{
    DETONATION_DECAY_SECS, DETONATION_GROWTH_SECS, DETONATION_PEAK_SECS, DETONATION_SPEED,
};
use thermo_core::enums::DetonationPhase;

#[derive(Debug, Clone, PartialEq)]
pub struct Detonation {
    /// City entity that was hit.
    pub city: Entity,
    speed: f64,
    clock: f64,
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

impl Detonation {
    pub fn new(city: Entity) -> Self {
        Self::with_speed(city, DETONATION_SPEED)
    }

    pub fn with_speed(city: Entity, speed: f64) -> Self {
        Self {
            city,
            speed,
            clock: 0.0,
        }
    }

    /// Advance the animation clock. Returns the new clock.
    pub fn update(&mut self, delta: f64) -> f64 {
        self.clock += delta;
        self.clock
    }

    pub fn clock(&self) -> f64 {
        self.clock
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    fn growth_end(&self) -> f64 {
        DETONATION_GROWTH_SECS * self.speed
    }

    fn peak_end(&self) -> f64 {
        (DETONATION_GROWTH_SECS + DETONATION_PEAK_SECS) * self.speed
    }

    fn decay_end(&self) -> f64 {
        (DETONATION_GROWTH_SECS + DETONATION_PEAK_SECS + DETONATION_DECAY_SECS) * self.speed
    }

    /// Relative blast diameter.
    ///
    /// The ramp rate is `speed / growth`, while the growth window itself
    /// lasts `growth * speed`: speeds other than 1.0 overshoot 1.0 before
    /// the hold kicks in.
    pub fn diameter(&self) -> f64 {
        if self.clock < self.growth_end() {
            lerp(0.0, 1.0, self.clock / DETONATION_GROWTH_SECS * self.speed)
        } else {
            1.0
        }
    }

    /// Light intensity in `[0, 1]`.
    pub fn light_intensity(&self) -> f64 {
        if self.clock <= self.peak_end() {
            1.0
        } else if self.clock <= self.decay_end() {
            lerp(1.0, 0.0, (self.clock - self.peak_end()) / (self.decay_end() - self.peak_end()))
        } else {
            0.0
        }
    }

    pub fn phase(&self) -> DetonationPhase {
        if self.clock < self.growth_end() {
            DetonationPhase::Growth
        } else if self.clock <= self.peak_end() {
            DetonationPhase::Peak
        } else if self.clock <= self.decay_end() {
            DetonationPhase::Decay
        } else {
            DetonationPhase::Spent
        }
    }

    /// The light has fully faded.
    pub fn is_spent(&self) -> bool {
        self.phase() == DetonationPhase::Spent
    }
}
