//! End-of-run statistics and text output.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::board::SpaceId;
use crate::cards::DeckKind;
use crate::core::{GameState, NarrativeRecord, PlayerId, SimError, TurnEvent};

const RULE: &str = "|================================|";

/// Landing count for one space.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpaceStats {
    pub id: SpaceId,
    pub name: String,
    pub landed_count: u64,
}

/// Where a player finished.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSummary {
    pub player: PlayerId,
    pub location: SpaceId,
    pub detained: bool,
    pub turns_in_jail: u32,
    pub holds_chance_jail_card: bool,
    pub holds_community_chest_jail_card: bool,
}

/// Result of a simulation run.
///
/// `landings` is in board order, one entry per space.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationReport {
    /// Seed the dice were drawn from; rerun with it to replay.
    pub seed: u64,
    pub rounds: u32,
    pub players: usize,
    pub landings: Vec<SpaceStats>,
    pub player_summaries: Vec<PlayerSummary>,
}

impl SimulationReport {
    /// Snapshot the counters of `state`.
    #[must_use]
    pub fn from_state(state: &GameState, seed: u64, rounds: u32) -> Self {
        let landings = state
            .board
            .iter()
            .map(|space| SpaceStats {
                id: space.id(),
                name: space.name().to_string(),
                landed_count: space.landed_count(),
            })
            .collect();

        let player_summaries = state
            .players
            .iter()
            .map(|(player, p)| PlayerSummary {
                player,
                location: p.location(),
                detained: p.is_detained(),
                turns_in_jail: p.turns_in_jail(),
                holds_chance_jail_card: p.holds_jail_card(DeckKind::Chance),
                holds_community_chest_jail_card: p.holds_jail_card(DeckKind::CommunityChest),
            })
            .collect();

        Self {
            seed,
            rounds,
            players: state.player_count(),
            landings,
            player_summaries,
        }
    }

    /// Sum of every space's landing count.
    #[must_use]
    pub fn total_landings(&self) -> u64 {
        self.landings.iter().map(|s| s.landed_count).sum()
    }

    /// Landing count of the space at `id`.
    #[must_use]
    pub fn landed_count(&self, id: SpaceId) -> u64 {
        self.landings[id.index()].landed_count
    }

    /// The boxed per-space statistics table.
    pub fn write_table<W: Write>(&self, out: &mut W) -> Result<(), SimError> {
        writeln!(out, "{RULE}")?;
        writeln!(out, "|       Property Statistics      |")?;
        writeln!(out, "{RULE}")?;
        writeln!(out)?;
        for stats in &self.landings {
            writeln!(out, "{:<22}{:>11}", format!(" {}", stats.name), stats.landed_count)?;
        }
        Ok(())
    }

    pub fn to_json(&self) -> Result<String, SimError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn write_json<W: Write>(&self, out: &mut W) -> Result<(), SimError> {
        serde_json::to_writer_pretty(&mut *out, self)?;
        writeln!(out)?;
        Ok(())
    }
}

/// Write narrative records as text, one event per line.
///
/// A round opens with a boxed label and turns are separated by a blank line.
pub fn write_narrative<'a, W: Write>(
    out: &mut W,
    records: impl IntoIterator<Item = &'a NarrativeRecord>,
) -> Result<(), SimError> {
    let mut in_turn = false;
    for record in records {
        match &record.event {
            TurnEvent::RoundStarted { round } => {
                if in_turn {
                    writeln!(out)?;
                    in_turn = false;
                }
                writeln!(out, "{RULE}")?;
                writeln!(out, "|        Starting Round {round:<9}|")?;
                writeln!(out, "{RULE}")?;
                writeln!(out)?;
            }
            TurnEvent::TurnStarted { .. } => {
                if in_turn {
                    writeln!(out)?;
                }
                in_turn = true;
                writeln!(out, " {}", record.event)?;
            }
            event => writeln!(out, " {event}")?,
        }
    }
    if in_turn {
        writeln!(out)?;
    }
    Ok(())
}
