use serde::{Deserialize, Serialize};

use crate::error::EntityError;

/// Sentinel for `max_url_length` that turns off display truncation.
pub const UNLIMITED_URL_LENGTH: i64 = -1;

/// Engine settings, fixed for the lifetime of a [`Parser`](crate::Parser).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserOptions {
    /// Maximum visible length of a rendered URL label, or `-1` for no limit.
    /// Only affects the HTML; extracted URLs are never shortened.
    pub max_url_length: i64,
    /// Attach character spans to every extracted entity.
    pub include_spans: bool,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            max_url_length: 30,
            include_spans: false,
        }
    }
}

impl ParserOptions {
    pub fn with_spans(mut self, include_spans: bool) -> Self {
        self.include_spans = include_spans;
        self
    }

    pub fn with_max_url_length(mut self, max_url_length: i64) -> Self {
        self.max_url_length = max_url_length;
        self
    }

    pub fn validate(&self) -> Result<(), EntityError> {
        self.url_length_limit().map(|_| ())
    }

    /// The truncation limit in characters, `None` meaning unlimited.
    pub(crate) fn url_length_limit(&self) -> Result<Option<usize>, EntityError> {
        match self.max_url_length {
            UNLIMITED_URL_LENGTH => Ok(None),
            n => usize::try_from(n)
                .map(Some)
                .map_err(|_| EntityError::InvalidConfiguration {
                    field: "max_url_length",
                    reason: format!("must be -1 or non-negative, got {n}"),
                }),
        }
    }
}
