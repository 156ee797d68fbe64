use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use carcassonne::{Color, Coords, MoveOutcome, Rotation};
use serde::{Deserialize, Serialize};

/// Collects the moves of one game, and writes them out as JSON.
pub struct Recorder {
    path: PathBuf,
    recording: GameRecording,
}

impl Recorder {
    pub fn new(path: PathBuf, seed: u64) -> anyhow::Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.is_dir() {
                anyhow::bail!("Directory '{}' does not exist", parent.display());
            }
        }
        Ok(Self {
            path,
            recording: GameRecording {
                seed,
                moves: Vec::new(),
            },
        })
    }

    pub fn store_move(&mut self, rotation: Rotation, outcome: &MoveOutcome) {
        self.recording.moves.push(MoveRecord {
            turn: self.recording.moves.len() + 1,
            player: outcome.player,
            position: outcome.position,
            rotation,
            tile: outcome.tile.to_string(),
            path_closed: outcome.path_closed,
            pawns_placed: outcome.pawns_placed.clone(),
        });
    }

    pub fn recording(&self) -> &GameRecording {
        &self.recording
    }

    pub fn write_game_recording(&self) -> anyhow::Result<()> {
        let mut writer = BufWriter::new(File::create(&self.path)?);
        serde_json::to_writer_pretty(&mut writer, &self.recording)?;
        writeln!(writer)?;
        writer.flush()?;
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecording {
    pub seed: u64,
    pub moves: Vec<MoveRecord>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Starts at 1.
    pub turn: usize,
    pub player: Color,
    pub position: Coords,
    pub rotation: Rotation,
    /// The placed tile, after rotation.
    pub tile: String,
    pub path_closed: bool,
    pub pawns_placed: Vec<Color>,
}
