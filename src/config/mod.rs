//! Configuration management for chunkmill
//!
//! Configuration is layered with figment: embedded defaults, then a TOML file
//! (`--config <FILE>` or `chunkmill.toml`), then `CHUNKMILL_` environment
//! variables. Only the input and output paths are configurable; the chunk
//! size and transform are fixed.

pub mod core;

pub use self::core::{ChunkmillConfig, ENV_PREFIX, IoConfig, LOCAL_CONFIG_FILE};
