//! Task domain types

use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::value::RawValue;
use thiserror::Error;

/// Snapshot of a remote asynchronous task.
///
/// Long-running API operations hand back a task id; fetching the task returns
/// a fresh, disconnected snapshot of its state. The record has no identity
/// beyond the server-assigned id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Opaque identifier assigned by the server.
    pub id: String,
    /// Current execution status.
    pub status: TaskStatus,
    /// Creation timestamp as reported by the server. Informational only.
    pub created: String,
    /// Raw result payload, unset until the task leaves the pending state.
    ///
    /// A `result` key that is present but `null` still populates this field
    /// with the literal `null` payload; only an absent key leaves it unset.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "raw_value_present"
    )]
    pub result: Option<Box<RawValue>>,
}

impl Task {
    /// Returns `true` once the task has left the pending state.
    ///
    /// Success and failure both count as completed; callers that need to tell
    /// them apart branch on [`Task::status`].
    pub fn is_completed(&self) -> bool {
        self.status.is_terminal()
    }
}

// Routes an explicit `null` into the RawValue rather than the Option, so a
// present-but-null field stays distinguishable from an absent key.
fn raw_value_present<'de, D>(deserializer: D) -> Result<Option<Box<RawValue>>, D::Error>
where
    D: Deserializer<'de>,
{
    Box::<RawValue>::deserialize(deserializer).map(Some)
}

/// Task execution status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    Pending,
    Success,
    Failed,
}

impl TaskStatus {
    /// Canonical wire form of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "PENDING",
            TaskStatus::Success => "SUCCESS",
            TaskStatus::Failed => "FAILED",
        }
    }

    /// Returns `true` if the task is in a terminal state (won't transition
    /// further). Both success and failure are terminal.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, TaskStatus::Pending)
    }
}

/// Error returned when a status string matches none of the known states.
#[derive(Debug, Clone, Error)]
#[error("unknown task status: {0}")]
pub struct UnknownStatus(pub String);

impl FromStr for TaskStatus {
    type Err = UnknownStatus;

    /// Parses a wire status string. Comparison is case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("PENDING") {
            Ok(TaskStatus::Pending)
        } else if s.eq_ignore_ascii_case("SUCCESS") {
            Ok(TaskStatus::Success)
        } else if s.eq_ignore_ascii_case("FAILED") {
            Ok(TaskStatus::Failed)
        } else {
            Err(UnknownStatus(s.to_string()))
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for TaskStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TaskStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(D::Error::custom)
    }
}
