use thiserror::Error;

/// Why a single execution unit failed to produce a transformed chunk
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UnitFault {
    /// The transform panicked inside the unit
    #[error("{0}")]
    Panicked(String),

    /// The unit's thread could not be started
    #[error("failed to spawn worker: {0}")]
    SpawnFailed(String),

    /// The unit went away without reporting anything
    #[error("worker stopped unexpectedly")]
    StoppedUnexpectedly,
}

/// Aggregate failure of a whole dispatch
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    #[error("chunk {index} failed: {fault}")]
    Unit { index: usize, fault: UnitFault },
}

impl DispatchError {
    /// Index of the chunk that caused the failure
    pub fn index(&self) -> usize {
        match self {
            DispatchError::Unit { index, .. } => *index,
        }
    }

    pub fn fault(&self) -> &UnitFault {
        match self {
            DispatchError::Unit { fault, .. } => fault,
        }
    }
}
