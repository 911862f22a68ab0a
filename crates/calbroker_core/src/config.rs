//! Engine configuration.
//!
//! # Responsibility
//! - Hold the business-hours window and caller-omitted defaults.
//! - Validate settings before a service accepts them.
//!
//! # Invariants
//! - `business_hours.start_hour < business_hours.end_hour <= 24`.
//! - Default day count and slot duration are non-zero.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Last representable hour bound; `24` means next-day midnight.
pub const MAX_HOUR: u32 = 24;

const DEFAULT_START_HOUR: u32 = 9;
const DEFAULT_END_HOUR: u32 = 17;
const DEFAULT_DAY_COUNT: u32 = 5;
const DEFAULT_DURATION_MINUTES: u32 = 60;

/// Work-day window `[start_hour:00, end_hour:00]` used for slot search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BusinessHours {
    pub start_hour: u32,
    pub end_hour: u32,
}

impl Default for BusinessHours {
    fn default() -> Self {
        Self {
            start_hour: DEFAULT_START_HOUR,
            end_hour: DEFAULT_END_HOUR,
        }
    }
}

impl BusinessHours {
    pub fn new(start_hour: u32, end_hour: u32) -> Self {
        Self {
            start_hour,
            end_hour,
        }
    }

    /// Applies per-call overrides, clamping each bound into `0..=24`.
    pub fn with_overrides(self, start_hour: Option<u32>, end_hour: Option<u32>) -> Self {
        Self {
            start_hour: start_hour.unwrap_or(self.start_hour).min(MAX_HOUR),
            end_hour: end_hour.unwrap_or(self.end_hour).min(MAX_HOUR),
        }
    }

    /// Whether the window spans at least one hour.
    pub fn is_open(&self) -> bool {
        self.start_hour < self.end_hour
    }
}

/// Scheduling engine settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub business_hours: BusinessHours,
    pub default_day_count: u32,
    pub default_duration_minutes: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            business_hours: BusinessHours::default(),
            default_day_count: DEFAULT_DAY_COUNT,
            default_duration_minutes: DEFAULT_DURATION_MINUTES,
        }
    }
}

impl EngineConfig {
    /// Rejects settings the engine cannot honor.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let hours = self.business_hours;
        if hours.end_hour > MAX_HOUR {
            return Err(ConfigError::HourOutOfRange(hours.end_hour));
        }
        if !hours.is_open() {
            return Err(ConfigError::EmptyBusinessHours {
                start_hour: hours.start_hour,
                end_hour: hours.end_hour,
            });
        }
        if self.default_day_count == 0 {
            return Err(ConfigError::ZeroDayCount);
        }
        if self.default_duration_minutes == 0 {
            return Err(ConfigError::ZeroDuration);
        }
        Ok(())
    }
}

/// Configuration validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    HourOutOfRange(u32),
    EmptyBusinessHours { start_hour: u32, end_hour: u32 },
    ZeroDayCount,
    ZeroDuration,
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::HourOutOfRange(hour) => {
                write!(f, "hour {hour} is out of range; expected 0..={MAX_HOUR}")
            }
            Self::EmptyBusinessHours {
                start_hour,
                end_hour,
            } => write!(
                f,
                "business hours start ({start_hour}) must be before end ({end_hour})"
            ),
            Self::ZeroDayCount => write!(f, "default day count must be positive"),
            Self::ZeroDuration => write!(f, "default slot duration must be positive"),
        }
    }
}

impl Error for ConfigError {}
