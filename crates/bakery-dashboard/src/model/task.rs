//! Baking tasks on the weekly schedule.
//!
//! # Store Framework
//! [`BakingTask`] implements the [`StoreEntity`](store_framework::StoreEntity) trait,
//! allowing it to be owned by a [`StoreActor`](store_framework::StoreActor).
//!
//! See [`impl StoreEntity for BakingTask`](BakingTask#impl-StoreEntity-for-BakingTask) for
//! details on:
//! - Creation parameters ([`TaskCreate`])

use crate::model::Tone;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// Type-safe identifier for baking tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskId(pub u32);

impl From<u32> for TaskId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "task_{}", self.0)
    }
}

/// The seven schedule lanes, Monday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }
}

impl Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Text that is not one of the seven day names.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown day: {0:?}")]
pub struct UnknownDay(pub String);

impl FromStr for Weekday {
    type Err = UnknownDay;

    /// Exact match on the full English day name, as submitted by the day picker.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Weekday::ALL
            .into_iter()
            .find(|day| day.as_str() == s)
            .ok_or_else(|| UnknownDay(s.to_string()))
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(day: chrono::Weekday) -> Self {
        match day {
            chrono::Weekday::Mon => Weekday::Monday,
            chrono::Weekday::Tue => Weekday::Tuesday,
            chrono::Weekday::Wed => Weekday::Wednesday,
            chrono::Weekday::Thu => Weekday::Thursday,
            chrono::Weekday::Fri => Weekday::Friday,
            chrono::Weekday::Sat => Weekday::Saturday,
            chrono::Weekday::Sun => Weekday::Sunday,
        }
    }
}

/// Progress of a bake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    Pending,
    InProgress,
    Completed,
}

impl TaskStatus {
    /// Wire form: `pending`, `in-progress`, `completed`.
    pub fn as_str(self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::InProgress => "in-progress",
            TaskStatus::Completed => "completed",
        }
    }

    /// Badge text.
    pub fn label(self) -> &'static str {
        match self {
            TaskStatus::Pending => "Pending",
            TaskStatus::InProgress => "In progress",
            TaskStatus::Completed => "Completed",
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            TaskStatus::Pending => Tone::Info,
            TaskStatus::InProgress => Tone::Warning,
            TaskStatus::Completed => Tone::Success,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BakingTask {
    pub id: TaskId,
    pub product_name: String,
    pub quantity: u32,
    /// Free text, e.g. "06:00 AM".
    pub scheduled_time: String,
    pub status: TaskStatus,
    pub day: Weekday,
}

impl BakingTask {
    /// Creates a new BakingTask instance.
    ///
    /// # Arguments
    /// * `id` - Unique identifier (allocated by the store)
    /// * `product_name` - What is being baked
    /// * `quantity` - How many units
    /// * `scheduled_time` - Free-text start time
    /// * `day` - Schedule lane
    ///
    /// # Notes
    /// The task starts out `Pending`.
    pub fn new(
        id: TaskId,
        product_name: impl Into<String>,
        quantity: u32,
        scheduled_time: impl Into<String>,
        day: Weekday,
    ) -> Self {
        Self {
            id,
            product_name: product_name.into(),
            quantity,
            scheduled_time: scheduled_time.into(),
            status: TaskStatus::Pending,
            day,
        }
    }

    /// Same task with a different status. Only seed data uses this.
    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }
}

/// Payload submitted by the "Create New Baking Task" form.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskCreate {
    pub product_name: String,
    pub quantity: u32,
    pub scheduled_time: String,
    pub day: Weekday,
}
