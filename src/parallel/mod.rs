//! Parallel chunk dispatch and collection
//!
//! This module is the engine of chunkmill: it splits a text into chunks, runs
//! every chunk on its own isolated execution unit, and rebuilds the output in
//! original order from results that arrive in any order.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐    ┌──────────────────┐    ┌─────────────────┐
//! │   Dispatcher    │    │   Execution      │    │   Collector     │
//! │                 │───▶│   Units          │───▶│                 │
//! │ • Split chunks  │    │ • One thread     │    │ • Single channel│
//! │ • Spawn units   │    │   per chunk      │    │ • Index-keyed   │
//! │                 │    │ • Panic boundary │    │   buffer        │
//! │                 │    │ • One report     │    │ • Fail-fast     │
//! └─────────────────┘    └──────────────────┘    └─────────────────┘
//! ```
//!
//! # Guarantees
//! - Output order comes only from chunk indices, never from arrival order
//! - Empty input spawns no units
//! - The first failed chunk fails the whole dispatch; no partial output is returned
//! - A unit that exits without reporting is detected through channel disconnect
//!
//! # Failure path
//!
//! On failure the dispatcher stops waiting immediately. Units still running
//! are not joined; when they finish, their sends fail against the dropped
//! receiver and the result is discarded.
//!
//! # Example Usage
//!
//! ```rust
//! use chunkmill::parallel::Dispatcher;
//!
//! let dispatcher = Dispatcher::default();
//! let output = dispatcher.process("hello world").unwrap();
//! assert_eq!(output, "HELLO WORLD");
//! ```

pub mod chunk;
pub mod collector;
pub mod dispatcher;
pub mod error;
pub mod unit;

// Re-export main types for easier access
pub use chunk::{Chunk, ChunkSequence, MAX_CHUNK_SIZE};
pub use collector::{AssemblyBuffer, collect_reports};
pub use dispatcher::Dispatcher;
pub use error::{DispatchError, UnitFault};
pub use unit::{UnitReport, spawn_unit};
