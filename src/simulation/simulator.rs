//! The simulation driver.
//!
//! Every round, each player takes exactly one turn in id order. All dice
//! come from a single seeded stream consumed round-major then player-major,
//! so a seed fully determines a run.

use std::io::Write;

use crate::core::{DiceSource, GameRng, GameState, PlayerId, SimError, SimulationConfig};
use crate::rules::{TurnEngine, TurnOutcome};

use super::report::{write_narrative, SimulationReport};

/// Runs one configured simulation.
///
/// ```
/// use monopoly_sim::core::SimulationConfig;
/// use monopoly_sim::simulation::Simulator;
///
/// let mut sim = Simulator::new(SimulationConfig::new(2, 10).with_seed(1)).unwrap();
/// let report = sim.run(&mut std::io::sink()).unwrap();
///
/// assert_eq!(report.seed, 1);
/// assert_eq!(report.rounds, 10);
/// ```
pub struct Simulator<D: DiceSource = GameRng> {
    config: SimulationConfig,
    engine: TurnEngine,
    state: GameState,
    dice: D,
    seed: u64,
    rounds_played: u32,
}

impl Simulator<GameRng> {
    /// Build a simulator, drawing a seed if the configuration has none.
    pub fn new(config: SimulationConfig) -> Result<Self, SimError> {
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        let seed = rng.seed();
        Self::with_dice(config, rng, seed)
    }
}

impl<D: DiceSource> Simulator<D> {
    /// Build a simulator over any dice source.
    ///
    /// `seed` is only reported; the dice are used as given.
    pub fn with_dice(config: SimulationConfig, dice: D, seed: u64) -> Result<Self, SimError> {
        config.validate()?;
        log::info!(
            "simulating {} players for {} rounds (seed {})",
            config.player_count,
            config.turn_count,
            seed
        );

        Ok(Self {
            engine: TurnEngine::new(config.rules),
            state: GameState::new(config.player_count, config.verbose),
            config,
            dice,
            seed,
            rounds_played: 0,
        })
    }

    #[must_use]
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    /// Have all configured rounds been played?
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.rounds_played >= self.config.turn_count
    }

    /// Play one round: one turn per player, in id order.
    ///
    /// Stepping past the configured round count is allowed.
    pub fn step_round(&mut self) -> Result<Vec<TurnOutcome>, SimError> {
        self.state.begin_round(self.rounds_played);

        let mut outcomes = Vec::with_capacity(self.state.player_count());
        for player in PlayerId::all(self.state.player_count()) {
            let outcome = self
                .engine
                .resolve_turn(&mut self.state, &mut self.dice, player)?;
            outcomes.push(outcome);
        }

        self.rounds_played += 1;
        Ok(outcomes)
    }

    /// Play the remaining rounds, writing the narrative to `out` after
    /// each one when verbose.
    pub fn run<W: Write>(&mut self, out: &mut W) -> Result<SimulationReport, SimError> {
        while !self.is_finished() {
            self.step_round()?;

            if self.state.narrative.is_enabled() {
                let records = self.state.narrative.drain();
                write_narrative(out, records.iter())?;
            }
            log::debug!(
                "round {} of {} complete",
                self.rounds_played,
                self.config.turn_count
            );
        }

        let report = self.report();
        log::info!(
            "simulation finished: {} landings over {} rounds",
            report.total_landings(),
            report.rounds
        );
        Ok(report)
    }

    /// Statistics for the rounds played so far.
    #[must_use]
    pub fn report(&self) -> SimulationReport {
        SimulationReport::from_state(&self.state, self.seed, self.rounds_played)
    }
}
