use crossbeam::channel::{Receiver, Sender, unbounded};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Instant;

use super::chunk::ChunkSequence;
use super::collector::collect_reports;
use super::error::DispatchError;
use super::unit::{UnitReport, spawn_unit};
use crate::transform::{Transform, Uppercase};

/// Fans a text out to one execution unit per chunk and reassembles the results
pub struct Dispatcher {
    transform: Arc<dyn Transform>,
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new(Uppercase)
    }
}

impl Dispatcher {
    pub fn new(transform: impl Transform) -> Self {
        Self {
            transform: Arc::new(transform),
        }
    }

    /// Transform `input` chunk by chunk in parallel
    ///
    /// Returns the transformed chunks concatenated in original order, or the
    /// first chunk failure observed. On failure, units that are still running
    /// are left to finish on their own and their reports are discarded.
    pub fn process(&self, input: &str) -> Result<String, DispatchError> {
        let chunks = ChunkSequence::split(input);
        let total = chunks.len();
        if total == 0 {
            tracing::debug!("Empty input, nothing to dispatch");
            return Ok(String::new());
        }

        let start_time = Instant::now();
        tracing::debug!("Dispatching {} chunks, one worker each", total);

        // Single collection point for every unit
        let (report_tx, report_rx): (Sender<UnitReport>, Receiver<UnitReport>) = unbounded();
        let mut handles: Vec<JoinHandle<()>> = Vec::with_capacity(total);

        for chunk in chunks {
            let index = chunk.index();
            match spawn_unit(chunk, Arc::clone(&self.transform), report_tx.clone()) {
                Ok(handle) => handles.push(handle),
                Err(fault) => {
                    tracing::warn!("Could not start worker for chunk {}: {}", index, fault);
                    return Err(DispatchError::Unit { index, fault });
                }
            }
        }

        // Drop our own sender so a silent unit exit shows up as a disconnect
        drop(report_tx);

        let output = collect_reports(&report_rx, total)?;

        for handle in handles {
            // Every unit has already reported, so this only reaps the thread
            if handle.join().is_err() {
                tracing::warn!("Worker panicked after reporting its result");
            }
        }

        tracing::debug!(
            "Reassembled {} chunks in {:.2}ms",
            total,
            start_time.elapsed().as_secs_f64() * 1000.0
        );

        Ok(output)
    }
}
