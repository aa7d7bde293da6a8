use thiserror::Error;

/// Why a time lookup produced no time. The display text is what the caller is shown.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimeLookupError {
    #[error("Error: Timezone '{0}' not found. Please use a valid IANA timezone name.")]
    InvalidTimezone(String),

    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}
