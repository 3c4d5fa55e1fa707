//! Chunk transforms
//!
//! A transform maps one chunk payload to its transformed text. Transforms are
//! shared by every execution unit at once, so they must be stateless.

/// Pure text mapping applied to each chunk payload
pub trait Transform: Send + Sync + 'static {
    fn apply(&self, payload: &str) -> String;
}

/// Default transform: Unicode uppercase
#[derive(Debug, Clone, Copy, Default)]
pub struct Uppercase;

impl Transform for Uppercase {
    fn apply(&self, payload: &str) -> String {
        payload.to_uppercase()
    }
}

impl<F> Transform for F
where
    F: Fn(&str) -> String + Send + Sync + 'static,
{
    fn apply(&self, payload: &str) -> String {
        self(payload)
    }
}
