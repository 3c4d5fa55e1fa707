use crossbeam::channel::Sender;
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use super::chunk::Chunk;
use super::error::UnitFault;
use crate::transform::Transform;

/// Exactly one report per execution unit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitReport {
    pub index: usize,
    pub outcome: Result<String, UnitFault>,
}

impl UnitReport {
    pub fn success(index: usize, transformed: impl Into<String>) -> Self {
        Self {
            index,
            outcome: Ok(transformed.into()),
        }
    }

    pub fn failure(index: usize, fault: UnitFault) -> Self {
        Self {
            index,
            outcome: Err(fault),
        }
    }
}

/// Start one isolated execution unit for `chunk`
///
/// The unit owns `report_tx` and drops it on exit, so a unit that dies
/// without reporting is visible to the collector as a disconnect.
pub fn spawn_unit(
    chunk: Chunk,
    transform: Arc<dyn Transform>,
    report_tx: Sender<UnitReport>,
) -> Result<JoinHandle<()>, UnitFault> {
    let name = format!("chunkmill-unit-{}", chunk.index());

    thread::Builder::new()
        .name(name)
        .spawn(move || {
            let report = run_unit(chunk, transform.as_ref());
            let index = report.index;
            if report_tx.send(report).is_err() {
                // Dispatcher already gave up on this run
                tracing::trace!("Discarding late report for chunk {}", index);
            }
        })
        .map_err(|e| UnitFault::SpawnFailed(e.to_string()))
}

/// Apply `transform` to one chunk inside a panic boundary
pub fn run_unit(chunk: Chunk, transform: &dyn Transform) -> UnitReport {
    let (index, payload) = chunk.into_parts();

    match panic::catch_unwind(AssertUnwindSafe(|| transform.apply(&payload))) {
        Ok(transformed) => UnitReport::success(index, transformed),
        Err(panic_payload) => {
            UnitReport::failure(index, UnitFault::Panicked(panic_message(panic_payload.as_ref())))
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "worker panicked".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::Uppercase;
    use crossbeam::channel::unbounded;

    #[test]
    fn test_run_unit_success() {
        let report = run_unit(Chunk::new(3, "abc"), &Uppercase);
        assert_eq!(report, UnitReport::success(3, "ABC"));
    }

    #[test]
    fn test_run_unit_captures_str_panic() {
        let boom = |_: &str| -> String { panic!("boom") };
        let report = run_unit(Chunk::new(1, "abc"), &boom);
        assert_eq!(report.index, 1);
        assert_eq!(report.outcome, Err(UnitFault::Panicked("boom".to_string())));
    }

    #[test]
    fn test_run_unit_captures_formatted_panic() {
        let boom = |s: &str| -> String { panic!("bad payload {s}") };
        let report = run_unit(Chunk::new(0, "xy"), &boom);
        assert_eq!(
            report.outcome,
            Err(UnitFault::Panicked("bad payload xy".to_string()))
        );
    }

    #[test]
    fn test_spawned_unit_reports_once() {
        let (tx, rx) = unbounded();
        let handle = spawn_unit(Chunk::new(7, "hi"), Arc::new(Uppercase), tx).unwrap();
        handle.join().unwrap();

        assert_eq!(rx.recv().unwrap(), UnitReport::success(7, "HI"));
        // The unit's sender is gone, nothing else can arrive
        assert!(rx.recv().is_err());
    }

    #[test]
    fn test_unit_survives_dropped_receiver() {
        let (tx, rx) = unbounded();
        drop(rx);
        let handle = spawn_unit(Chunk::new(0, "late"), Arc::new(Uppercase), tx).unwrap();
        assert!(handle.join().is_ok());
    }
}
