//! Simulation configuration.
//!
//! - `RuleSet`: The tunable constants of the turn rules
//! - `SimulationConfig`: Players, rounds, seed, verbosity and rules
//!
//! Configurations are checked with `validate()` before any state is built.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::error::SimError;

/// Failed escape attempts a prisoner serves before being released.
pub const MAXIMUM_JAIL_SENTENCE: u32 = 2;

/// Consecutive doubles that send a player to jail.
pub const MAXIMUM_CONSECUTIVE_DOUBLES: u8 = 3;

/// Tunable rule constants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSet {
    /// Failed attempts after which the next non-doubles roll releases the player.
    pub max_jail_sentence: u32,

    /// The roll that completes this many doubles in a row is an arrest.
    pub max_consecutive_doubles: u8,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            max_jail_sentence: MAXIMUM_JAIL_SENTENCE,
            max_consecutive_doubles: MAXIMUM_CONSECUTIVE_DOUBLES,
        }
    }
}

impl RuleSet {
    #[must_use]
    pub fn with_jail_sentence(mut self, attempts: u32) -> Self {
        self.max_jail_sentence = attempts;
        self
    }

    #[must_use]
    pub fn with_consecutive_doubles(mut self, limit: u8) -> Self {
        self.max_consecutive_doubles = limit;
        self
    }
}

/// Complete simulation configuration.
///
/// ```
/// use monopoly_sim::core::SimulationConfig;
///
/// let config = SimulationConfig::new(4, 100).with_seed(7).verbose(true);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.output_path().to_str(), Some("output/4p100r7sv.out"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Number of players (1-255).
    pub player_count: usize,

    /// Number of rounds; every player takes one turn per round.
    pub turn_count: u32,

    /// Seed for the dice. `None` draws one from the OS.
    pub seed: Option<u64>,

    /// Record the per-event narrative.
    pub verbose: bool,

    /// Rule constants.
    pub rules: RuleSet,
}

impl SimulationConfig {
    /// Create a configuration with default rules, no seed, quiet output.
    #[must_use]
    pub fn new(player_count: usize, turn_count: u32) -> Self {
        Self {
            player_count,
            turn_count,
            seed: None,
            verbose: false,
            rules: RuleSet::default(),
        }
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    #[must_use]
    pub fn with_rules(mut self, rules: RuleSet) -> Self {
        self.rules = rules;
        self
    }

    /// Check the configuration before a simulation is built from it.
    pub fn validate(&self) -> Result<(), SimError> {
        if self.player_count == 0 {
            return Err(SimError::InvalidConfiguration(
                "at least 1 player is required".to_string(),
            ));
        }
        if self.player_count > 255 {
            return Err(SimError::InvalidConfiguration(format!(
                "at most 255 players are supported, got {}",
                self.player_count
            )));
        }
        if self.rules.max_consecutive_doubles == 0 {
            return Err(SimError::InvalidConfiguration(
                "the consecutive doubles limit must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Default report location, named after the run parameters.
    ///
    /// `output/{players}p{turns}r[{seed}s][v].out`
    #[must_use]
    pub fn output_path(&self) -> PathBuf {
        let mut name = format!("{}p{}r", self.player_count, self.turn_count);
        if let Some(seed) = self.seed {
            name.push_str(&format!("{seed}s"));
        }
        if self.verbose {
            name.push('v');
        }
        PathBuf::from("output").join(format!("{name}.out"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rules() {
        let rules = RuleSet::default();
        assert_eq!(rules.max_jail_sentence, 2);
        assert_eq!(rules.max_consecutive_doubles, 3);
    }

    #[test]
    fn test_rules_builder() {
        let rules = RuleSet::default()
            .with_jail_sentence(3)
            .with_consecutive_doubles(2);
        assert_eq!(rules.max_jail_sentence, 3);
        assert_eq!(rules.max_consecutive_doubles, 2);
    }

    #[test]
    fn test_config_builder() {
        let config = SimulationConfig::new(2, 10)
            .with_seed(99)
            .verbose(true)
            .with_rules(RuleSet::default().with_jail_sentence(3));

        assert_eq!(config.player_count, 2);
        assert_eq!(config.turn_count, 10);
        assert_eq!(config.seed, Some(99));
        assert!(config.verbose);
        assert_eq!(config.rules.max_jail_sentence, 3);
    }

    #[test]
    fn test_zero_players_rejected() {
        let err = SimulationConfig::new(0, 10).validate().unwrap_err();
        assert!(matches!(err, SimError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_too_many_players_rejected() {
        let err = SimulationConfig::new(256, 10).validate().unwrap_err();
        assert!(err.to_string().contains("256"));
    }

    #[test]
    fn test_zero_doubles_limit_rejected() {
        let config = SimulationConfig::new(2, 1)
            .with_rules(RuleSet::default().with_consecutive_doubles(0));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_rounds_is_valid() {
        assert!(SimulationConfig::new(1, 0).validate().is_ok());
    }

    #[test]
    fn test_output_path() {
        assert_eq!(
            SimulationConfig::new(3, 50).output_path(),
            PathBuf::from("output/3p50r.out")
        );
        assert_eq!(
            SimulationConfig::new(3, 50).with_seed(12).output_path(),
            PathBuf::from("output/3p50r12s.out")
        );
    }

    #[test]
    fn test_config_serialization() {
        let config = SimulationConfig::new(4, 20).with_seed(5);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: SimulationConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
