//! Nuke component: a missile flying a precomputed great-circle trajectory.
//!
//! Attached to ECS entities together with the launching party's `PartyId`.
//! Origin and destination are entity references into the same world.

use hecs::Entity;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use thermo_core::constants::{MAX_LAUNCH_DELAY_SECS, SPEED_ADJUST, WAYPOINTS_PER_RADIAN};
use thermo_core::enums::NukePhase;
use thermo_core::types::GeoCoord;
use thermo_geo::{equidistant_points, haversine, GeoError};

/// A nuclear missile.
#[derive(Debug, Clone)]
pub struct Nuke {
    /// Launch site entity.
    pub origin: Entity,
    /// Target city entity.
    pub destination: Entity,
    /// Remaining seconds between launch order and lift-off.
    launch_delay: f64,
    /// Waypoints from origin (exclusive) to destination (inclusive).
    trajectory: Vec<GeoCoord>,
    leg: usize,
    launched: bool,
    detonated: bool,
    /// Seconds flown since lift-off.
    flight_time: f64,
}

impl Nuke {
    /// Build a nuke with a random launch delay in `[0, 60)` seconds.
    ///
    /// The trajectory holds `floor(distance_rad * 200)` interior waypoints
    /// followed by the destination itself, so angular speed is roughly
    /// the same for every flight.
    pub fn new(
        origin: Entity,
        origin_coord: GeoCoord,
        destination: Entity,
        destination_coord: GeoCoord,
        rng: &mut ChaCha8Rng,
    ) -> Result<Self, GeoError> {
        let launch_delay = rng.gen_range(0.0..MAX_LAUNCH_DELAY_SECS);
        Self::with_launch_delay(origin, origin_coord, destination, destination_coord, launch_delay)
    }

    /// Build a nuke with an explicit launch delay.
    pub fn with_launch_delay(
        origin: Entity,
        origin_coord: GeoCoord,
        destination: Entity,
        destination_coord: GeoCoord,
        launch_delay: f64,
    ) -> Result<Self, GeoError> {
        let distance = haversine(origin_coord, destination_coord);
        let waypoints = (distance * WAYPOINTS_PER_RADIAN) as usize;
        let mut trajectory = equidistant_points(origin_coord, destination_coord, waypoints)?;
        trajectory.push(destination_coord);

        Ok(Self {
            origin,
            destination,
            launch_delay: launch_delay.max(0.0),
            trajectory,
            leg: 0,
            launched: false,
            detonated: false,
            flight_time: 0.0,
        })
    }

    /// Give the launch order. The launch delay starts counting down at the next update.
    pub fn launch(&mut self) {
        self.launched = true;
    }

    /// Advance by `delta` simulated seconds. Returns the total flight time.
    ///
    /// Nothing happens before launch or after detonation. The delta first
    /// counts down the launch delay; the call that exhausts it also flies
    /// for the full delta.
    pub fn update(&mut self, delta: f64) -> f64 {
        if !self.launched || self.detonated {
            return 0.0;
        }
        self.launch_delay = (self.launch_delay - delta).max(0.0);
        if self.launch_delay > 0.0 {
            return 0.0;
        }
        self.flight_time += delta;
        self.leg = ((self.flight_time * SPEED_ADJUST).floor().max(0.0) as usize).min(self.last_leg());
        self.flight_time
    }

    /// Whether the final waypoint has been reached.
    pub fn has_reached_destination(&self) -> bool {
        self.leg == self.last_leg()
    }

    /// Lifecycle phase derived from the flags and the leg.
    pub fn phase(&self) -> NukePhase {
        if self.detonated {
            NukePhase::Detonated
        } else if self.has_reached_destination() {
            NukePhase::Arrived
        } else if self.launched {
            NukePhase::InFlight
        } else {
            NukePhase::PreLaunch
        }
    }

    /// Launched and still flying.
    pub fn is_airborne(&self) -> bool {
        self.launched && !self.has_reached_destination()
    }

    /// Current waypoint.
    pub fn position(&self) -> GeoCoord {
        self.trajectory[self.leg]
    }

    pub fn trajectory(&self) -> &[GeoCoord] {
        &self.trajectory
    }

    pub fn leg(&self) -> usize {
        self.leg
    }

    pub fn last_leg(&self) -> usize {
        self.trajectory.len() - 1
    }

    pub fn is_launched(&self) -> bool {
        self.launched
    }

    pub fn is_detonated(&self) -> bool {
        self.detonated
    }

    pub fn launch_delay(&self) -> f64 {
        self.launch_delay
    }

    pub fn flight_time(&self) -> f64 {
        self.flight_time
    }

    /// Flight seconds needed after lift-off to reach the destination.
    pub fn flight_duration_secs(&self) -> f64 {
        self.last_leg() as f64 / SPEED_ADJUST
    }

    /// Only the detonation system flips this, after applying the hit.
    pub(crate) fn mark_detonated(&mut self) {
        self.detonated = true;
    }
}
