use std::time::{SystemTime, UNIX_EPOCH};

use chrono::{DateTime, Utc};

use super::TimeLookupError;

/// Source of the current instant.
pub trait Clock: Send + Sync {
    fn now(&self) -> Result<DateTime<Utc>, TimeLookupError>;
}

/// Reads the host clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Result<DateTime<Utc>, TimeLookupError> {
        let elapsed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|e| TimeLookupError::Unexpected(format!("system clock error: {e}")))?;
        let secs = i64::try_from(elapsed.as_secs())
            .map_err(|e| TimeLookupError::Unexpected(format!("system clock error: {e}")))?;

        DateTime::from_timestamp(secs, elapsed.subsec_nanos()).ok_or_else(|| {
            TimeLookupError::Unexpected("system clock is outside the supported range".into())
        })
    }
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> Result<DateTime<Utc>, TimeLookupError> {
        Ok(self.0)
    }
}
