//! Deferred serialization wrapper for built carrier requests.

use std::fmt;

use super::WireError;

/// A structured carrier request paired with its serialization function.
///
/// The wrapper lets callers and tests inspect the built request before any
/// bytes are produced; `serialize` is only invoked when the transport is
/// about to transmit.
pub struct Serializable<T> {
    value: T,
    serializer: Box<dyn Fn(&T) -> Result<String, WireError> + Send + Sync>,
}

impl<T> Serializable<T> {
    pub fn new(
        value: T,
        serializer: impl Fn(&T) -> Result<String, WireError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            value,
            serializer: Box::new(serializer),
        }
    }

    /// The structured request, for inspection before transmission.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Produce the wire body.
    pub fn serialize(&self) -> Result<String, WireError> {
        (self.serializer)(&self.value)
    }
}

impl<T: fmt::Debug> fmt::Debug for Serializable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Serializable")
            .field("value", &self.value)
            .finish_non_exhaustive()
    }
}
