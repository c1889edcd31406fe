//! Container configuration parameters.

use crate::error::DynArrayError;

/// What a fail-fast path does once it has decided to fail.
///
/// Fail-fast paths are the ones without a `Result` in their signature:
/// [`DynArray::at`](crate::DynArray::at), indexing, and the infallible
/// constructors and appends when capacity overflows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FatalMode {
    /// Panic with the diagnostic. Unwinds, so tests can observe it.
    #[default]
    Panic,
    /// Print the diagnostic to stderr and exit the process with status 1.
    Exit,
}

/// Configuration for a [`DynArray`](crate::DynArray).
///
/// Validated by [`DynArray::with_config`](crate::DynArray::with_config);
/// the fatal mode is carried by the array for its whole lifetime.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArrayConfig {
    /// Number of slots allocated at initialization.
    ///
    /// Default: 1. Must be at least 1 so growth never starts from zero.
    pub initial_capacity: usize,

    /// Behaviour of fail-fast paths.
    ///
    /// Default: [`FatalMode::Panic`].
    pub fatal_mode: FatalMode,
}

impl ArrayConfig {
    /// Default slot count at initialization.
    pub const DEFAULT_INITIAL_CAPACITY: usize = 1;

    /// Create a config with default values.
    pub fn new() -> Self {
        Self {
            initial_capacity: Self::DEFAULT_INITIAL_CAPACITY,
            fatal_mode: FatalMode::Panic,
        }
    }

    /// Set the initial slot count.
    pub fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    /// Set the fail-fast behaviour.
    pub fn with_fatal_mode(mut self, fatal_mode: FatalMode) -> Self {
        self.fatal_mode = fatal_mode;
        self
    }

    /// Check that every field is in range.
    pub fn validate(&self) -> Result<(), DynArrayError> {
        if self.initial_capacity == 0 {
            return Err(DynArrayError::InvalidConfig {
                reason: "initial_capacity must be at least 1".into(),
            });
        }
        Ok(())
    }
}

impl Default for ArrayConfig {
    fn default() -> Self {
        Self::new()
    }
}
