//! Running whole simulations.
//!
//! ## Key Types
//!
//! - `Simulator`: Drives rounds of turns over one seeded dice stream
//! - `SimulationReport`: Per-space landing counts and final player positions

pub mod report;
pub mod simulator;

pub use report::{write_narrative, PlayerSummary, SimulationReport, SpaceStats};
pub use simulator::Simulator;
