//! Task wire model and display projections.
//!
//! # Responsibility
//! - Mirror the record shape exchanged with the task service (camelCase on
//!   the wire).
//! - Derive the priority label and urgency band the list display uses.
//!
//! # Invariants
//! - `name` is non-empty after trim.
//! - `due_date` matches the `datetime-local` shape `YYYY-MM-DDTHH:MM`,
//!   optionally with seconds.
//! - `priority` stays within 1..=5; 1 is the highest urgency.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Highest-urgency priority value.
pub const PRIORITY_MIN: u8 = 1;
/// Lowest-urgency priority value.
pub const PRIORITY_MAX: u8 = 5;
/// Priority preselected by a reset form.
pub const DEFAULT_PRIORITY: u8 = 3;

static DUE_DATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{4}-\d{2}-\d{2}T\d{2}:\d{2}(:\d{2})?$").expect("valid due date regex")
});

/// Validation error for task records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskValidationError {
    /// Name is blank after trim.
    EmptyName,
    /// Due date does not match the expected timestamp shape.
    InvalidDueDate(String),
    /// Priority falls outside 1..=5.
    PriorityOutOfRange(u8),
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "task name must not be blank"),
            Self::InvalidDueDate(value) => write!(f, "invalid due date: `{value}`"),
            Self::PriorityOutOfRange(value) => write!(
                f,
                "priority {value} outside allowed range {PRIORITY_MIN}..={PRIORITY_MAX}"
            ),
        }
    }
}

impl Error for TaskValidationError {}

/// Urgency band derived from priority for display accents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrgencyMarker {
    /// Priority 1.
    High,
    /// Priority 2.
    Elevated,
    /// Priority 3..=5.
    Normal,
}

impl UrgencyMarker {
    /// Stable lowercase tag for logs and textual rendering.
    pub fn label(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Elevated => "elevated",
            Self::Normal => "normal",
        }
    }
}

/// One scheduled task as exchanged with the task service.
///
/// Records are displayed in server-returned order; the client neither
/// sorts nor re-orders them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub name: String,
    pub due_date: String,
    pub priority: u8,
    #[serde(default)]
    pub description: String,
}

impl Task {
    /// Creates a record from raw field values; call [`validate`] before
    /// handing it to a write path.
    ///
    /// [`validate`]: Task::validate
    pub fn new(
        name: impl Into<String>,
        due_date: impl Into<String>,
        priority: u8,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            due_date: due_date.into(),
            priority,
            description: description.into(),
        }
    }

    /// Checks the record against the model invariants.
    pub fn validate(&self) -> Result<(), TaskValidationError> {
        if self.name.trim().is_empty() {
            return Err(TaskValidationError::EmptyName);
        }
        if !DUE_DATE_RE.is_match(&self.due_date) {
            return Err(TaskValidationError::InvalidDueDate(self.due_date.clone()));
        }
        if !(PRIORITY_MIN..=PRIORITY_MAX).contains(&self.priority) {
            return Err(TaskValidationError::PriorityOutOfRange(self.priority));
        }
        Ok(())
    }

    /// Display label, e.g. `Priority 1`.
    pub fn priority_label(&self) -> String {
        format!("Priority {}", self.priority)
    }

    /// Urgency band for the display accent.
    pub fn urgency(&self) -> UrgencyMarker {
        match self.priority {
            1 => UrgencyMarker::High,
            2 => UrgencyMarker::Elevated,
            _ => UrgencyMarker::Normal,
        }
    }

    /// Due date with the `T` separator replaced for display.
    pub fn due_display(&self) -> String {
        self.due_date.replace('T', " ")
    }
}

#[cfg(test)]
mod tests {
    use super::{Task, TaskValidationError, UrgencyMarker};

    fn valid_task() -> Task {
        Task::new("Ship report", "2025-01-01T10:00", 1, "final")
    }

    #[test]
    fn valid_record_passes_validation() {
        valid_task().validate().expect("record should validate");
    }

    #[test]
    fn blank_name_is_rejected() {
        let mut task = valid_task();
        task.name = "   ".to_string();
        assert_eq!(task.validate(), Err(TaskValidationError::EmptyName));
    }

    #[test]
    fn malformed_due_date_is_rejected() {
        let mut task = valid_task();
        task.due_date = "tomorrow".to_string();
        assert!(matches!(
            task.validate(),
            Err(TaskValidationError::InvalidDueDate(_))
        ));
    }

    #[test]
    fn due_date_with_seconds_is_accepted() {
        let mut task = valid_task();
        task.due_date = "2025-01-01T10:00:30".to_string();
        task.validate().expect("seconds suffix should validate");
    }

    #[test]
    fn out_of_range_priority_is_rejected() {
        for priority in [0u8, 6] {
            let mut task = valid_task();
            task.priority = priority;
            assert_eq!(
                task.validate(),
                Err(TaskValidationError::PriorityOutOfRange(priority))
            );
        }
    }

    #[test]
    fn urgency_bands_follow_priority() {
        let mut task = valid_task();
        assert_eq!(task.urgency(), UrgencyMarker::High);
        task.priority = 2;
        assert_eq!(task.urgency(), UrgencyMarker::Elevated);
        task.priority = 4;
        assert_eq!(task.urgency(), UrgencyMarker::Normal);
    }

    #[test]
    fn display_projections_format_as_expected() {
        let task = valid_task();
        assert_eq!(task.priority_label(), "Priority 1");
        assert_eq!(task.due_display(), "2025-01-01 10:00");
        assert_eq!(task.urgency().label(), "high");
    }
}
