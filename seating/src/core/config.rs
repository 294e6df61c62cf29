use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

/// Default capacity of the seating event channel
pub const DEFAULT_EVENT_CAPACITY: usize = 1024;

/// What a departure does to the waiting queue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DrainPolicy {
    /// Never re-evaluate the queue
    Disabled,
    /// Seat from the head in arrival order, stop at the first group that does not fit
    HeadOfLine,
    /// Seat every waiting group that fits, in arrival order
    #[default]
    FirstFit,
}

/// What happens to a group's record once it leaves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DepartedPolicy {
    /// Drop the record; the id becomes unknown
    #[default]
    Forget,
    /// Keep the record as departed
    Retain,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {kind}: {value:?}")]
pub struct ParsePolicyError {
    kind: &'static str,
    value: String,
}

impl FromStr for DrainPolicy {
    type Err = ParsePolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "disabled" | "off" | "none" => Ok(Self::Disabled),
            "head_of_line" | "fifo" => Ok(Self::HeadOfLine),
            "first_fit" => Ok(Self::FirstFit),
            _ => Err(ParsePolicyError {
                kind: "drain policy",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for DrainPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Disabled => write!(f, "disabled"),
            Self::HeadOfLine => write!(f, "head_of_line"),
            Self::FirstFit => write!(f, "first_fit"),
        }
    }
}

impl FromStr for DepartedPolicy {
    type Err = ParsePolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "forget" => Ok(Self::Forget),
            "retain" => Ok(Self::Retain),
            _ => Err(ParsePolicyError {
                kind: "departed policy",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for DepartedPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Forget => write!(f, "forget"),
            Self::Retain => write!(f, "retain"),
        }
    }
}

/// Seating engine configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | SEATING_DRAIN_POLICY | first_fit | disabled / head_of_line / first_fit |
/// | SEATING_DEPARTED_POLICY | forget | forget / retain |
/// | SEATING_EVENT_CAPACITY | 1024 | event channel buffer |
/// | LOG_LEVEL | info | default log filter when RUST_LOG is unset |
/// | LOG_DIR | (unset) | daily-rolling log file directory |
///
/// Unparsable values fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatingConfig {
    pub drain_policy: DrainPolicy,
    pub departed_policy: DepartedPolicy,
    pub event_capacity: usize,
    pub log_level: String,
    pub log_dir: Option<String>,
}

impl Default for SeatingConfig {
    fn default() -> Self {
        Self {
            drain_policy: DrainPolicy::default(),
            departed_policy: DepartedPolicy::default(),
            event_capacity: DEFAULT_EVENT_CAPACITY,
            log_level: "info".into(),
            log_dir: None,
        }
    }
}

impl SeatingConfig {
    /// Load `.env` (if present) and read the environment
    pub fn load() -> Self {
        dotenv::dotenv().ok();
        Self::from_env()
    }

    /// Load a specific env file, then read the environment.
    ///
    /// Variables already set in the process take precedence over the file.
    pub fn load_from(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if let Err(e) = dotenv::from_path(path) {
            tracing::warn!(path = %path.display(), error = %e, "Env file not loaded");
        }
        Self::from_env()
    }

    /// Read configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            drain_policy: parse_or(&lookup, "SEATING_DRAIN_POLICY", defaults.drain_policy),
            departed_policy: parse_or(&lookup, "SEATING_DEPARTED_POLICY", defaults.departed_policy),
            event_capacity: lookup("SEATING_EVENT_CAPACITY")
                .and_then(|v| v.parse().ok())
                .filter(|&n: &usize| n > 0)
                .unwrap_or(defaults.event_capacity),
            log_level: lookup("LOG_LEVEL").unwrap_or(defaults.log_level),
            log_dir: lookup("LOG_DIR").filter(|d| !d.is_empty()),
        }
    }

    pub fn with_drain_policy(mut self, policy: DrainPolicy) -> Self {
        self.drain_policy = policy;
        self
    }

    pub fn with_departed_policy(mut self, policy: DepartedPolicy) -> Self {
        self.departed_policy = policy;
        self
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T
where
    T: FromStr<Err = ParsePolicyError>,
{
    match lookup(key).map(|v| v.parse::<T>()) {
        Some(Ok(value)) => value,
        Some(Err(e)) => {
            tracing::warn!(key, error = %e, "Ignoring invalid config value");
            default
        }
        None => default,
    }
}
