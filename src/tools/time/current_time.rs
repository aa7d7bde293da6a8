use std::{error::Error, sync::Arc};

use async_trait::async_trait;
use chrono_tz::Tz;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::tools::{Tool, ToolError, ToolOutput};

use super::{Clock, SystemClock, TimeLookupError};

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S %Z";

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
#[schemars(description = "The timezone to report the current time for")]
pub struct CurrentTimeInput {
    #[serde(alias = "timezone_str")]
    #[schemars(description = "The IANA timezone name (e.g., 'Asia/Taipei', 'America/New_York')")]
    pub timezone: String,
}

/// Result record of a time lookup. Both variants carry their text under `report`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum TimeReport {
    Success { report: String },
    Error { report: String },
}

impl TimeReport {
    pub fn is_success(&self) -> bool {
        matches!(self, TimeReport::Success { .. })
    }

    pub fn report(&self) -> &str {
        match self {
            TimeReport::Success { report } | TimeReport::Error { report } => report,
        }
    }
}

impl From<Result<String, TimeLookupError>> for TimeReport {
    fn from(result: Result<String, TimeLookupError>) -> Self {
        match result {
            Ok(report) => TimeReport::Success { report },
            Err(e) => TimeReport::Error {
                report: e.to_string(),
            },
        }
    }
}

impl From<TimeReport> for ToolOutput {
    fn from(report: TimeReport) -> Self {
        match serde_json::to_value(&report) {
            Ok(value) => ToolOutput::Json(value),
            Err(e) => {
                log::warn!("Failed to serialize time report: {e}");
                ToolOutput::Text(report.report().to_owned())
            }
        }
    }
}

/// Reports the current wall-clock time in an IANA timezone.
#[derive(Clone)]
pub struct CurrentTime {
    clock: Arc<dyn Clock>,
}

impl CurrentTime {
    pub fn new() -> Self {
        Self {
            clock: Arc::new(SystemClock),
        }
    }

    pub fn with_clock<C: Clock + 'static>(mut self, clock: C) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    /// The report sentence for `timezone`, e.g.
    /// `The current time in Asia/Taipei is 2025-05-01 14:03:00 CST.`
    pub fn lookup(&self, timezone: &str) -> Result<String, TimeLookupError> {
        let tz: Tz = timezone
            .parse()
            .map_err(|_| TimeLookupError::InvalidTimezone(timezone.to_owned()))?;
        let local = self.clock.now()?.with_timezone(&tz);

        Ok(format!(
            "The current time in {timezone} is {}.",
            local.format(TIME_FORMAT)
        ))
    }

    pub fn report(&self, timezone: &str) -> TimeReport {
        let result = self.lookup(timezone);
        if let Err(e) = &result {
            log::warn!("Time lookup for {timezone:?} failed: {e}");
        }
        result.into()
    }
}

impl Default for CurrentTime {
    fn default() -> Self {
        Self::new()
    }
}

/// Current time in `timezone` according to the host clock.
pub fn get_current_time(timezone: &str) -> TimeReport {
    CurrentTime::new().report(timezone)
}

#[async_trait]
impl Tool for CurrentTime {
    type Input = CurrentTimeInput;
    type Output = TimeReport;

    fn name(&self) -> String {
        "get_current_time".into()
    }

    fn description(&self) -> String {
        "Returns the current time in a specified IANA timezone.".into()
    }

    async fn parse_input(&self, input: Value) -> Result<Self::Input, ToolError> {
        if input.is_object() {
            return Ok(serde_json::from_value::<CurrentTimeInput>(input)?);
        }

        let timezone = serde_json::from_value::<String>(input)?;
        Ok(CurrentTimeInput { timezone })
    }

    async fn run(&self, input: Self::Input) -> Result<Self::Output, Box<dyn Error + Send + Sync>> {
        Ok(self.report(&input.timezone))
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    use super::*;
    use crate::tools::{FixedClock, ToolDyn};

    struct BrokenClock;

    impl Clock for BrokenClock {
        fn now(&self) -> Result<chrono::DateTime<Utc>, TimeLookupError> {
            Err(TimeLookupError::Unexpected("clock unavailable".into()))
        }
    }

    fn fixed_tool() -> CurrentTime {
        let instant = Utc.with_ymd_and_hms(2025, 1, 15, 6, 30, 0).unwrap();
        CurrentTime::new().with_clock(FixedClock(instant))
    }

    #[test]
    fn test_lookup_formats_local_time() {
        let tool = fixed_tool();

        assert_eq!(
            tool.lookup("Asia/Taipei").unwrap(),
            "The current time in Asia/Taipei is 2025-01-15 14:30:00 CST."
        );
        assert_eq!(
            tool.lookup("America/New_York").unwrap(),
            "The current time in America/New_York is 2025-01-15 01:30:00 EST."
        );
    }

    #[test]
    fn test_unknown_timezone_names_input() {
        let report = fixed_tool().report("Not/AZone");

        assert_eq!(
            report,
            TimeReport::Error {
                report: "Error: Timezone 'Not/AZone' not found. Please use a valid IANA timezone name."
                    .into()
            }
        );
    }

    #[test]
    fn test_clock_failure_is_reported() {
        let report = CurrentTime::new().with_clock(BrokenClock).report("UTC");

        assert!(!report.is_success());
        assert_eq!(report.report(), "An unexpected error occurred: clock unavailable");
    }

    #[test]
    fn test_host_clock_date() {
        let tz: Tz = "Asia/Taipei".parse().unwrap();
        let before = Utc::now().with_timezone(&tz).format("%Y-%m-%d").to_string();
        let report = get_current_time("Asia/Taipei");
        let after = Utc::now().with_timezone(&tz).format("%Y-%m-%d").to_string();

        assert!(report.is_success());
        assert!(report.report().contains(&before) || report.report().contains(&after));
    }

    #[test]
    fn test_report_serialization() {
        let value = serde_json::to_value(fixed_tool().report("UTC")).unwrap();

        assert_eq!(
            value,
            json!({
                "status": "success",
                "report": "The current time in UTC is 2025-01-15 06:30:00 UTC."
            })
        );
    }

    #[tokio::test]
    async fn test_call_accepts_object_alias_and_string() {
        let tool = fixed_tool();

        for input in [
            json!({"timezone": "Europe/London"}),
            json!({"timezone_str": "Europe/London"}),
            json!("Europe/London"),
        ] {
            let output = tool.call(input).await.unwrap().into_value();
            assert_eq!(output["status"], "success");
            assert_eq!(
                output["report"],
                "The current time in Europe/London is 2025-01-15 06:30:00 GMT."
            );
        }
    }

    #[tokio::test]
    async fn test_call_rejects_malformed_input() {
        let result = fixed_tool().call(json!({"zone": 42})).await;

        let Err(ToolError::InputParseError(e)) = result else {
            panic!("expected an input parse error, got {result:?}");
        };
        assert!(e.to_string().contains("unknown field `zone`"), "{e}");
    }

    #[test]
    fn test_parameters_schema() {
        let declaration = ToolDyn::declaration(&fixed_tool());

        assert_eq!(declaration.name, "get_current_time");
        assert_eq!(declaration.parameters["type"], "object");
        assert_eq!(declaration.parameters["required"], json!(["timezone"]));
        assert!(declaration.parameters["properties"]["timezone"]["description"]
            .as_str()
            .unwrap()
            .contains("IANA"));
    }
}
