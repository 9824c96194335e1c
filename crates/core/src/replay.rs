use std::error::Error;
use std::fmt;

use crate::{
    config::ConfigError,
    game::Game,
    journal::{InputJournal, InputPayload},
    types::{FrameInput, InputKeys, RunStatus},
};

#[derive(Debug, PartialEq)]
pub enum ReplayError {
    InvalidConfig(ConfigError),
    OutOfOrder { index: usize, frame: u64, previous: u64 },
    PastEnd { frame: u64, total_frames: u64 },
}

impl fmt::Display for ReplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfig(err) => write!(f, "journal config is invalid: {err}"),
            Self::OutOfOrder { index, frame, previous } => {
                write!(f, "record {index} at frame {frame} comes after frame {previous}")
            }
            Self::PastEnd { frame, total_frames } => {
                write!(f, "record at frame {frame} is past the end ({total_frames} frames)")
            }
        }
    }
}

impl Error for ReplayError {}

impl From<ConfigError> for ReplayError {
    fn from(err: ConfigError) -> Self {
        Self::InvalidConfig(err)
    }
}

#[derive(Debug, PartialEq)]
pub struct ReplayResult {
    pub final_status: RunStatus,
    pub final_snapshot_hash: u64,
    pub final_frame: u64,
}

/// Checks frame ordering before anything is simulated.
pub fn validate_journal(journal: &InputJournal) -> Result<(), ReplayError> {
    let mut previous = 0;
    for (index, record) in journal.inputs.iter().enumerate() {
        if record.frame < previous {
            return Err(ReplayError::OutOfOrder { index, frame: record.frame, previous });
        }
        if record.frame >= journal.total_frames {
            return Err(ReplayError::PastEnd {
                frame: record.frame,
                total_frames: journal.total_frames,
            });
        }
        previous = record.frame;
    }
    Ok(())
}

/// Expands the journal back into one `FrameInput` per frame.
pub fn replay_journal_inputs(journal: &InputJournal) -> Result<Vec<FrameInput>, ReplayError> {
    validate_journal(journal)?;
    let mut frames = Vec::new();
    let mut records = journal.inputs.iter().peekable();
    let mut keys = InputKeys::NONE;
    for frame in 0..journal.total_frames {
        let mut input = FrameInput::default();
        while let Some(record) = records.next_if(|record| record.frame == frame) {
            match record.payload {
                InputPayload::Keys(held) => keys = held,
                InputPayload::Action => input.action = true,
                InputPayload::Restart => input.restart = true,
            }
        }
        input.keys = keys;
        frames.push(input);
    }
    Ok(frames)
}

pub fn replay_to_end(journal: &InputJournal) -> Result<ReplayResult, ReplayError> {
    let frames = replay_journal_inputs(journal)?;
    let mut game = Game::with_config(journal.seed, journal.config.clone())?;
    for input in frames {
        game.frame(input);
    }
    Ok(ReplayResult {
        final_status: game.status(),
        final_snapshot_hash: game.snapshot_hash(),
        final_frame: game.frame_count(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::journal::InputRecord;
    use crate::types::Direction;

    fn scripted_inputs() -> Vec<FrameInput> {
        let walk = [Direction::Right, Direction::Down, Direction::Left, Direction::Up];
        (0..400)
            .map(|i| FrameInput {
                keys: InputKeys::only(walk[(i / 37) % walk.len()]),
                action: i % 53 == 0,
                restart: false,
            })
            .collect()
    }

    #[test]
    fn replay_matches_the_recorded_session() {
        let config = GameConfig::default();
        let mut game = Game::with_config(12, config.clone()).unwrap();
        let mut journal = InputJournal::new(12, config);
        for input in scripted_inputs() {
            journal.record(input);
            game.frame(input);
        }

        let result = replay_to_end(&journal).unwrap();
        assert_eq!(result.final_snapshot_hash, game.snapshot_hash());
        assert_eq!(result.final_frame, 400);
        assert_eq!(result.final_status, game.status());
    }

    #[test]
    fn expanded_inputs_carry_held_keys_forward() {
        let mut journal = InputJournal::new(1, GameConfig::default());
        for input in scripted_inputs() {
            journal.record(input);
        }
        assert_eq!(replay_journal_inputs(&journal).unwrap(), scripted_inputs());
    }

    #[test]
    fn out_of_order_records_are_rejected() {
        let mut journal = InputJournal::new(1, GameConfig::default());
        journal.total_frames = 10;
        journal.inputs = vec![
            InputRecord { frame: 5, payload: InputPayload::Action },
            InputRecord { frame: 2, payload: InputPayload::Action },
        ];
        assert_eq!(
            replay_to_end(&journal),
            Err(ReplayError::OutOfOrder { index: 1, frame: 2, previous: 5 })
        );
    }

    #[test]
    fn records_past_the_end_are_rejected() {
        let mut journal = InputJournal::new(1, GameConfig::default());
        journal.total_frames = 3;
        journal.inputs = vec![InputRecord { frame: 3, payload: InputPayload::Restart }];
        assert_eq!(
            replay_to_end(&journal),
            Err(ReplayError::PastEnd { frame: 3, total_frames: 3 })
        );
    }

    #[test]
    fn invalid_config_surfaces_as_replay_error() {
        let config = GameConfig { spawn_interval: 0, ..GameConfig::default() };
        let journal = InputJournal::new(1, config);
        assert!(matches!(replay_to_end(&journal), Err(ReplayError::InvalidConfig(_))));
    }
}
