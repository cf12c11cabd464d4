//! Simulation engine: drives one scenario from launch order to termination.
//!
//! `SimulationEngine` owns the scenario and its RNG, processes operator
//! commands at step boundaries, advances the exchange and produces
//! `SimSnapshot`s. Completely headless, enabling deterministic testing.

use std::collections::VecDeque;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use thermo_core::commands::SimCommand;
use thermo_core::definitions::{ScenarioDefinition, WorldData};
use thermo_core::enums::{MapView, SimPhase, SimulationSpeed};
use thermo_core::events::SimEvent;
use thermo_core::state::{Outcome, SimSnapshot};
use thermo_core::types::SimClock;

use crate::error::SimError;
use crate::scenario::Scenario;
use crate::scenario_maker::ScenarioMaker;
use crate::systems;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same exchange.
    pub seed: u64,
    /// Initial speed.
    pub speed: SimulationSpeed,
    /// Reject parties whose launch capacity cannot cover their warheads
    /// before assigning any of them.
    pub strict_capacity: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            speed: SimulationSpeed::default(),
            strict_capacity: cfg!(debug_assertions),
        }
    }
}

/// The simulation engine. Owns the scenario and all run state.
pub struct SimulationEngine {
    scenario: Scenario,
    clock: SimClock,
    phase: SimPhase,
    speed: SimulationSpeed,
    view: MapView,
    rng: ChaCha8Rng,
    command_queue: VecDeque<SimCommand>,
    events: Vec<SimEvent>,
}

impl SimulationEngine {
    /// Build the scenario from reference data and wrap it in an engine.
    /// Scenario assembly and the exchange share one seeded RNG.
    pub fn new(
        config: &SimConfig,
        data: &WorldData,
        definition: &ScenarioDefinition,
    ) -> Result<Self, SimError> {
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let scenario = ScenarioMaker::from_world(data)
            .strict_capacity(config.strict_capacity)
            .make(definition, &mut rng)?;
        Ok(Self::with_rng(config, scenario, rng))
    }

    /// Wrap an already assembled scenario.
    pub fn from_scenario(config: &SimConfig, scenario: Scenario) -> Self {
        Self::with_rng(config, scenario, ChaCha8Rng::seed_from_u64(config.seed))
    }

    fn with_rng(config: &SimConfig, scenario: Scenario, rng: ChaCha8Rng) -> Self {
        let view = scenario.initial_view();
        Self {
            scenario,
            clock: SimClock::default(),
            phase: SimPhase::default(),
            speed: config.speed,
            view,
            rng,
            command_queue: VecDeque::new(),
            events: Vec::new(),
        }
    }

    /// Queue a command for processing at the next step boundary.
    pub fn queue_command(&mut self, command: SimCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = SimCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance by `delta` wall-clock seconds and return the resulting snapshot.
    ///
    /// While running, the exchange advances by `delta` scaled by the
    /// current speed. Once terminated, only detonation animations move.
    pub fn tick(&mut self, delta: f64) -> Result<SimSnapshot, SimError> {
        self.process_commands();

        match self.phase {
            SimPhase::Running => self.step(delta)?,
            SimPhase::Terminated => self.scenario.advance_detonations(delta),
            SimPhase::WaitingToStart | SimPhase::Paused => {}
        }

        let events = std::mem::take(&mut self.events);
        Ok(systems::snapshot::build_snapshot(
            &self.scenario,
            self.clock,
            self.phase,
            self.speed,
            self.view,
            events,
        ))
    }

    /// Tick until the exchange terminates or `max_ticks` is reached.
    /// Returns the number of ticks run.
    pub fn run_until_terminated(&mut self, delta: f64, max_ticks: u64) -> Result<u64, SimError> {
        if self.phase == SimPhase::WaitingToStart {
            self.queue_command(SimCommand::Launch);
        }
        let mut ticks = 0;
        while self.phase != SimPhase::Terminated && ticks < max_ticks {
            self.tick(delta)?;
            ticks += 1;
        }
        Ok(ticks)
    }

    pub fn phase(&self) -> SimPhase {
        self.phase
    }

    pub fn clock(&self) -> SimClock {
        self.clock
    }

    pub fn speed(&self) -> SimulationSpeed {
        self.speed
    }

    pub fn view(&self) -> MapView {
        self.view
    }

    /// Get a read-only reference to the scenario.
    pub fn scenario(&self) -> &Scenario {
        &self.scenario
    }

    /// Current tally.
    pub fn outcome(&self) -> Outcome {
        self.scenario.outcome()
    }

    fn step(&mut self, delta: f64) -> Result<(), SimError> {
        let factor = self.speed.speed_factor();
        self.clock.advance(delta * factor);

        let events = self
            .scenario
            .advance(delta, factor, self.clock.elapsed_secs, &mut self.rng)?;
        self.events.extend(events);

        if self.scenario.is_terminated() {
            self.phase = SimPhase::Terminated;
            let fatalities = self.scenario.fatalities();
            tracing::info!(
                target: "thermo::sim",
                scenario = %self.scenario.name,
                clock = self.clock.elapsed_secs,
                steps = self.clock.step,
                fatalities,
                "sim.terminated"
            );
            self.events.push(SimEvent::Terminated { fatalities });
        }
        Ok(())
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single command.
    fn handle_command(&mut self, command: SimCommand) {
        let previous = self.phase;
        match command {
            SimCommand::Launch => {
                if self.phase == SimPhase::WaitingToStart {
                    self.phase = SimPhase::Running;
                }
            }
            SimCommand::Pause => {
                if self.phase == SimPhase::Running {
                    self.phase = SimPhase::Paused;
                }
            }
            SimCommand::Resume => {
                if self.phase == SimPhase::Paused {
                    self.phase = SimPhase::Running;
                }
            }
            SimCommand::TogglePause => {
                self.phase = match self.phase {
                    SimPhase::Running => SimPhase::Paused,
                    SimPhase::Paused => SimPhase::Running,
                    other => other,
                };
            }
            SimCommand::Faster => self.speed = self.speed.faster(),
            SimCommand::Slower => self.speed = self.speed.slower(),
            SimCommand::SetSpeed { speed } => self.speed = speed,
            SimCommand::SetView { view } => self.view = view,
        }

        if self.phase != previous {
            tracing::info!(
                target: "thermo::sim",
                from = ?previous,
                to = ?self.phase,
                "sim.phase_changed"
            );
        } else if matches!(
            command,
            SimCommand::Launch | SimCommand::Pause | SimCommand::Resume | SimCommand::TogglePause
        ) {
            tracing::debug!(target: "thermo::sim", ?command, phase = ?self.phase, "sim.command_ignored");
        } else {
            tracing::debug!(target: "thermo::sim", ?command, speed = ?self.speed, view = ?self.view, "sim.command");
        }
    }
}
