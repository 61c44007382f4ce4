//! Checkpoint and resume functionality for calculator sessions.
//!
//! A checkpoint captures the engine state and the history tape so a
//! session can survive process restarts: the operand being typed, the
//! pending operation, and every recorded calculation come back exactly as
//! left. JSON and compact binary codecs are provided.

use crate::core::{CalcState, Engine, Tape};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod error;

pub use error::CheckpointError;

/// Version identifier for the checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// Serializable checkpoint of one calculator session.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Checkpoint {
    /// Checkpoint format version
    pub version: u32,

    /// Unique checkpoint identifier
    pub id: String,

    /// When the checkpoint was captured
    pub timestamp: DateTime<Utc>,

    /// The engine state at capture time
    pub state: CalcState,

    /// The history tape at capture time
    pub tape: Tape,
}

impl Checkpoint {
    /// Capture the given engine and tape.
    pub fn capture(engine: &Engine, tape: &Tape) -> Self {
        Self {
            version: CHECKPOINT_VERSION,
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            state: engine.state().clone(),
            tape: tape.clone(),
        }
    }

    /// Validate and convert back into an engine and tape.
    pub fn restore(self) -> Result<(Engine, Tape), CheckpointError> {
        self.validate()?;
        Ok((Engine::from_state(self.state), self.tape))
    }

    /// Encode as JSON.
    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string(self)
            .map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    /// Decode from JSON, rejecting unsupported versions.
    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        let checkpoint: Self = serde_json::from_str(json)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))?;
        checkpoint.check_version()?;
        Ok(checkpoint)
    }

    /// Encode as compact binary.
    pub fn to_bytes(&self) -> Result<Vec<u8>, CheckpointError> {
        bincode::serialize(self)
            .map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    /// Decode from compact binary, rejecting unsupported versions.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CheckpointError> {
        let checkpoint: Self = bincode::deserialize(bytes)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))?;
        checkpoint.check_version()?;
        Ok(checkpoint)
    }

    /// Validate the checkpoint: version and operand-text invariant.
    /// Engine mutations cannot produce malformed state, but a checkpoint
    /// arrives from outside the process and is checked before it is
    /// trusted.
    pub fn validate(&self) -> Result<(), CheckpointError> {
        self.check_version()?;
        if !self.state.is_well_formed() {
            return Err(CheckpointError::ValidationFailed(format!(
                "operand text {:?} is not a valid numeral",
                self.state.current
            )));
        }
        Ok(())
    }

    fn check_version(&self) -> Result<(), CheckpointError> {
        if self.version != CHECKPOINT_VERSION {
            return Err(CheckpointError::UnsupportedVersion {
                found: self.version,
                supported: CHECKPOINT_VERSION,
            });
        }
        Ok(())
    }
}
