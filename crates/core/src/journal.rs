//! Frame-indexed input recording. Key records are written only when the held
//! set changes; replay carries the last one forward.

use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::types::{FrameInput, InputKeys};

pub const JOURNAL_FORMAT_VERSION: u16 = 1;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InputJournal {
    pub format_version: u16,
    pub seed: u64,
    pub config: GameConfig,
    /// Number of frames the recorded session ran for.
    pub total_frames: u64,
    pub inputs: Vec<InputRecord>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InputRecord {
    pub frame: u64,
    pub payload: InputPayload,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputPayload {
    Keys(InputKeys),
    Action,
    Restart,
}

impl InputJournal {
    pub fn new(seed: u64, config: GameConfig) -> Self {
        Self {
            format_version: JOURNAL_FORMAT_VERSION,
            seed,
            config,
            total_frames: 0,
            inputs: Vec::new(),
        }
    }

    /// Records the input fed to the next frame.
    pub fn record(&mut self, input: FrameInput) {
        let frame = self.total_frames;
        if input.keys != self.held_keys() {
            self.inputs.push(InputRecord { frame, payload: InputPayload::Keys(input.keys) });
        }
        if input.action {
            self.inputs.push(InputRecord { frame, payload: InputPayload::Action });
        }
        if input.restart {
            self.inputs.push(InputRecord { frame, payload: InputPayload::Restart });
        }
        self.total_frames += 1;
    }

    /// Keys in effect after the last recorded change.
    pub fn held_keys(&self) -> InputKeys {
        self.inputs
            .iter()
            .rev()
            .find_map(|record| match record.payload {
                InputPayload::Keys(keys) => Some(keys),
                _ => None,
            })
            .unwrap_or(InputKeys::NONE)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}
