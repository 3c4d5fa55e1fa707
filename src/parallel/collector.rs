use crossbeam::channel::Receiver;

use super::error::{DispatchError, UnitFault};
use super::unit::UnitReport;

/// Index-keyed accumulator of transformed payloads
///
/// Filled out of order as reports arrive. Only a complete buffer can be
/// assembled into output.
#[derive(Debug)]
pub struct AssemblyBuffer {
    slots: Vec<Option<String>>,
    filled: usize,
}

impl AssemblyBuffer {
    pub fn new(expected: usize) -> Self {
        Self {
            slots: vec![None; expected],
            filled: 0,
        }
    }

    pub fn expected(&self) -> usize {
        self.slots.len()
    }

    pub fn filled(&self) -> usize {
        self.filled
    }

    pub fn is_complete(&self) -> bool {
        self.filled == self.slots.len()
    }

    /// Store a transformed payload; returns `false` for an unknown or already filled index
    pub fn insert(&mut self, index: usize, transformed: String) -> bool {
        match self.slots.get_mut(index) {
            Some(slot) if slot.is_none() => {
                *slot = Some(transformed);
                self.filled += 1;
                true
            }
            _ => false,
        }
    }

    /// Lowest index that has not received a payload yet
    pub fn first_missing(&self) -> Option<usize> {
        self.slots.iter().position(Option::is_none)
    }

    /// Concatenate all payloads in index order, or `None` if incomplete
    pub fn assemble(self) -> Option<String> {
        if !self.is_complete() {
            return None;
        }

        let capacity = self.slots.iter().flatten().map(String::len).sum();
        let mut output = String::with_capacity(capacity);
        for payload in self.slots.into_iter().flatten() {
            output.push_str(&payload);
        }
        Some(output)
    }
}

/// Drain reports from `report_rx` until every chunk has arrived or one fails
///
/// Returns as soon as the first failure is seen. Reports still in flight at
/// that point are never awaited.
pub fn collect_reports(
    report_rx: &Receiver<UnitReport>,
    expected: usize,
) -> Result<String, DispatchError> {
    let mut buffer = AssemblyBuffer::new(expected);

    while !buffer.is_complete() {
        let Ok(report) = report_rx.recv() else {
            // Every sender is gone but some chunks never reported
            let index = buffer.first_missing().unwrap_or_default();
            tracing::warn!("Worker for chunk {} exited without a result", index);
            return Err(DispatchError::Unit {
                index,
                fault: UnitFault::StoppedUnexpectedly,
            });
        };

        match report.outcome {
            Ok(transformed) => {
                if !buffer.insert(report.index, transformed) {
                    tracing::warn!("Ignoring duplicate or unknown report for chunk {}", report.index);
                    continue;
                }
                tracing::trace!(
                    "Chunk {} arrived ({}/{})",
                    report.index,
                    buffer.filled(),
                    buffer.expected()
                );
            }
            Err(fault) => {
                tracing::warn!("Chunk {} failed: {}", report.index, fault);
                return Err(DispatchError::Unit {
                    index: report.index,
                    fault,
                });
            }
        }
    }

    // Loop only exits once complete
    Ok(buffer.assemble().unwrap_or_default())
}
