// ============================================================
// Layer 3 — Run Timestamp
// ============================================================
// The last segment of every run id: the UTC time the run's
// configuration was built, as `YYMMDD-HH:MM:SS`.
//
// It is captured once per process by the caller and passed into
// `TrainConfig::new`, which keeps the rest of the id derivation a
// pure function of its settings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// strftime pattern for run timestamps.
pub const TIMESTAMP_FORMAT: &str = "%y%m%d-%H:%M:%S";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RunTimestamp(String);

impl RunTimestamp {
    /// Current UTC time.
    pub fn now() -> Self {
        Self::from_datetime(Utc::now())
    }

    pub fn from_datetime(at: DateTime<Utc>) -> Self {
        Self(at.format(TIMESTAMP_FORMAT).to_string())
    }

    /// Wrap an already formatted timestamp, e.g. one read back
    /// from a run snapshot.
    pub fn from_string(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RunTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format() {
        let at = Utc.with_ymd_and_hms(2018, 11, 16, 13, 9, 44).unwrap();
        assert_eq!(RunTimestamp::from_datetime(at).as_str(), "181116-13:09:44");
    }

    #[test]
    fn test_now_has_fixed_width() {
        // YYMMDD-HH:MM:SS
        assert_eq!(RunTimestamp::now().as_str().len(), 15);
    }
}
