//! Simulation constants and tuning parameters.

// --- Projection ---

/// Latitude (degrees) beyond which the Mercator projection clamps to the pole.
pub const MERCATOR_LAT_LIMIT: f64 = 85.0;

/// Map-space world width (normalized units).
pub const WORLD_WIDTH: f64 = 1.25;

/// Map-space world height (normalized units).
pub const WORLD_HEIGHT: f64 = 1.0;

// --- Flight ---

/// Trajectory waypoints generated per radian of great-circle distance.
pub const WAYPOINTS_PER_RADIAN: f64 = 200.0;

/// Legs advanced per second of flight at speed factor 1 (one leg every 5s).
pub const SPEED_ADJUST: f64 = 0.2;

/// Upper bound (exclusive) of the random launch delay, in seconds.
pub const MAX_LAUNCH_DELAY_SECS: f64 = 60.0;

/// Simulated seconds after which every party may launch.
pub const RETALIATION_DELAY_SECS: f64 = 60.0;

// --- Launch sites ---

/// Warheads a submarine can launch.
pub const SUBMARINE_LAUNCH_CAPACITY: u32 = 20;

// --- Casualties ---

/// Kill ratio per surviving-population threshold, descending thresholds.
/// The first threshold not above the survivors applies.
pub const KILL_RATIO_THRESHOLDS: [(u64, f64); 8] = [
    (10_000_000, 0.02),
    (5_000_000, 0.04),
    (1_000_000, 0.15),
    (500_000, 0.25),
    (100_000, 0.40),
    (50_000, 0.50),
    (10_000, 0.75),
    (0, 0.90),
];

/// Diminishing returns per prior strike: divisor is `1 + factor * hits`.
pub const PREVIOUS_STRIKE_FACTOR: f64 = 0.2;

/// Total width of the random fluctuation band around 1.0 (±10%).
pub const DEATH_MAX_FLUCTUATION_RATIO: f64 = 0.2;

/// Probability that a strike is a partial miss.
pub const MISS_PROBABILITY: f64 = 0.05;

/// Divisor applied to a partial miss.
pub const MISS_FACTOR: f64 = 1.25;

// --- Detonation animation ---

/// Fireball growth phase (seconds).
pub const DETONATION_GROWTH_SECS: f64 = 1.0;

/// Full-intensity peak phase (seconds).
pub const DETONATION_PEAK_SECS: f64 = 3.0;

/// Fade-out phase (seconds).
pub const DETONATION_DECAY_SECS: f64 = 3.0;

/// Animation speed of every detonation created by the scenario.
pub const DETONATION_SPEED: f64 = 1.0;
