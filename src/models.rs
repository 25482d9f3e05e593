//! Frontend Models
//!
//! Data structures matching the check42 API payloads.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Check item identifier
///
/// The API emits numeric ids, but string ids are accepted so an item
/// round-trips unchanged either way.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CheckId {
    Number(i64),
    Text(String),
}

impl fmt::Display for CheckId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckId::Number(n) => write!(f, "{}", n),
            CheckId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for CheckId {
    fn from(n: i64) -> Self {
        CheckId::Number(n)
    }
}

/// Check item (one toggleable row)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckItem {
    pub id: CheckId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub enabled: bool,
}

/// Fallback text for items without a description
pub const NO_DESCRIPTION: &str = "No description available";

impl CheckItem {
    /// DOM id of the item's toggle control
    pub fn toggle_dom_id(&self) -> String {
        format!("toggle-{}", self.id)
    }

    /// Description or the fixed placeholder
    pub fn description_or_placeholder(&self) -> &str {
        match self.description.as_deref() {
            Some(d) if !d.is_empty() => d,
            _ => NO_DESCRIPTION,
        }
    }
}

/// Schedule frequency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Daily,
    Weekly,
}

/// Frequency options as (value, label)
pub const FREQUENCIES: &[(&str, &str)] = &[
    ("daily", "Daily"),
    ("weekly", "Weekly (Sunday)"),
];

impl Frequency {
    pub fn as_str(self) -> &'static str {
        match self {
            Frequency::Daily => "daily",
            Frequency::Weekly => "weekly",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "daily" => Some(Frequency::Daily),
            "weekly" => Some(Frequency::Weekly),
            _ => None,
        }
    }
}

impl<'de> Deserialize<'de> for Frequency {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        use serde::de::Error;

        let raw = String::deserialize(deserializer)?;
        Frequency::parse(&raw).ok_or_else(|| D::Error::custom(format!("unknown frequency: {:?}", raw)))
    }
}

/// Recurrence descriptor for the scheduled check run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    pub frequency: Frequency,
    #[serde(default, deserialize_with = "lenient_u8")]
    pub hour: u8,
    #[serde(default, deserialize_with = "lenient_u8")]
    pub minute: u8,
}

/// Accept `7`, `7.0` and `"07"` alike
fn lenient_u8<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u8, D::Error> {
    use serde::de::Error;

    match Value::deserialize(deserializer)? {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| {
                n.as_f64()
                    .filter(|f| *f >= 0.0 && f.fract() == 0.0)
                    .map(|f| f as u64)
            })
            .and_then(|v| u8::try_from(v).ok())
            .ok_or_else(|| D::Error::custom(format!("out of range: {}", n))),
        Value::String(s) => s
            .trim()
            .parse::<u8>()
            .map_err(|e| D::Error::custom(format!("invalid number {:?}: {}", s, e))),
        Value::Null => Ok(0),
        other => Err(D::Error::custom(format!("expected number, got {}", other))),
    }
}

/// Schedule block as stored in settings
///
/// Older records keep only the frequency string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum StoredSchedule {
    Full(Schedule),
    FrequencyOnly(Frequency),
}

impl StoredSchedule {
    pub fn into_schedule(self) -> Schedule {
        match self {
            StoredSchedule::Full(s) => s,
            StoredSchedule::FrequencyOnly(frequency) => Schedule { frequency, hour: 0, minute: 0 },
        }
    }
}

/// Account settings (extra fields are ignored)
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub subscriber: Option<String>,
    #[serde(default)]
    pub sender: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default, deserialize_with = "lenient_schedule")]
    pub schedule: Option<StoredSchedule>,
}

/// An unreadable schedule is dropped so the rest of the settings still load
fn lenient_schedule<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<StoredSchedule>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }
    match serde_json::from_value::<StoredSchedule>(value.clone()) {
        Ok(schedule) => Ok(Some(schedule)),
        Err(_) => {
            #[cfg(target_arch = "wasm32")]
            web_sys::console::error_1(&format!("[SETTINGS] Ignoring unreadable schedule: {}", value).into());
            Ok(None)
        }
    }
}

impl Settings {
    pub fn has_password(&self) -> bool {
        self.password.as_deref().is_some_and(|p| !p.is_empty())
    }

    pub fn schedule(&self) -> Option<Schedule> {
        self.schedule.clone().map(StoredSchedule::into_schedule)
    }
}

/// Zero-padded two-digit form used by the hour/minute selectors
pub fn two_digits(value: u8) -> String {
    format!("{:02}", value)
}

/// Hour selector options, "00" to "23"
pub fn hour_options() -> Vec<String> {
    (0..24).map(two_digits).collect()
}

/// Minute selector options, "00" to "59"
pub fn minute_options() -> Vec<String> {
    (0..60).map(two_digits).collect()
}
