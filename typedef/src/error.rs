use std::error::Error;

use thiserror::Error;

/// Text that could not be parsed into a strong typedef.
///
/// Carries the wrapper's name and the rejected input; the primitive's own
/// parse error (`ParseIntError`, `ParseFloatError`) is the [`Error::source`].
#[derive(Debug, Error)]
#[error("invalid {type_name} value {input:?}: {source}")]
pub struct ParseTypedefError {
    type_name: &'static str,
    input: String,
    #[source]
    source: Box<dyn Error + Send + Sync + 'static>,
}

impl ParseTypedefError {
    #[must_use]
    pub fn new(
        type_name: &'static str,
        input: &str,
        source: impl Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            type_name,
            input: input.to_owned(),
            source: Box::new(source),
        }
    }

    /// Name of the wrapper that rejected the input.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}
