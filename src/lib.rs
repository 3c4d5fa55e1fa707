//! # chunkmill - Parallel, order-preserving text transformation
//!
//! chunkmill reads a whole text file, splits it into fixed-size chunks, hands
//! every chunk to its own isolated worker thread, and stitches the transformed
//! chunks back together in their original order.
//!
//! ## Features
//!
//! - **One unit per chunk**: every chunk runs on a dedicated thread, no pooling
//! - **Fault isolation**: a panicking transform fails only its own unit
//! - **Fail-fast**: the first failed chunk aborts the whole run, never partial output
//! - **Deterministic**: output depends on input and transform, not arrival order
//!
//! ## Quick Start
//!
//! ```bash
//! # Uppercase ./large-input.txt into ./processed-output.txt
//! chunkmill
//!
//! # Same, with debug logging
//! chunkmill -vv
//! ```

pub mod cli;
pub mod config;
pub mod io;
pub mod parallel;
pub mod pipeline;
pub mod transform;

pub use cli::{Cli, Output};
pub use config::ChunkmillConfig;
pub use parallel::{DispatchError, Dispatcher, MAX_CHUNK_SIZE};
pub use transform::{Transform, Uppercase};

/// Result type alias for chunkmill application glue
pub type Result<T> = anyhow::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
pub const PKG_DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
