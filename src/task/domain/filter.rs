//! Derived-view parameters for searching and filtering tasks.

use super::{ParseFilterError, Task, TaskPriority, TaskStatus};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Text used for the catch-all choice.
const ALL_KEYWORD: &str = "all";

/// Either every value or one specific value of a task attribute.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterChoice<T> {
    /// Matches any value.
    #[default]
    All,
    /// Matches exactly this value.
    Only(T),
}

impl<T: PartialEq> FilterChoice<T> {
    /// Returns `true` when `value` passes this choice.
    #[must_use]
    pub fn admits(&self, value: &T) -> bool {
        match self {
            Self::All => true,
            Self::Only(expected) => expected == value,
        }
    }
}

impl<T> From<T> for FilterChoice<T> {
    fn from(value: T) -> Self {
        Self::Only(value)
    }
}

/// Status dimension of a [`TaskFilter`].
pub type StatusFilter = FilterChoice<TaskStatus>;

/// Priority dimension of a [`TaskFilter`].
pub type PriorityFilter = FilterChoice<TaskPriority>;

impl TryFrom<&str> for StatusFilter {
    type Error = ParseFilterError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        parse_choice(value, |raw| TaskStatus::try_from(raw).ok())
    }
}

impl TryFrom<&str> for PriorityFilter {
    type Error = ParseFilterError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        parse_choice(value, |raw| TaskPriority::try_from(raw).ok())
    }
}

fn parse_choice<T>(
    value: &str,
    parse: impl FnOnce(&str) -> Option<T>,
) -> Result<FilterChoice<T>, ParseFilterError> {
    if value.trim().eq_ignore_ascii_case(ALL_KEYWORD) {
        return Ok(FilterChoice::All);
    }
    parse(value)
        .map(FilterChoice::Only)
        .ok_or_else(|| ParseFilterError(value.to_owned()))
}

impl<T: fmt::Display> fmt::Display for FilterChoice<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(ALL_KEYWORD),
            Self::Only(value) => write!(f, "{value}"),
        }
    }
}

/// Search and filter parameters for a derived task view.
///
/// The default value is the identity view: empty query, every status, every
/// priority.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFilter {
    query: String,
    status: StatusFilter,
    priority: PriorityFilter,
}

impl TaskFilter {
    /// Creates the identity view.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the free-text query. Surrounding whitespace is ignored and
    /// matching is case-insensitive.
    #[must_use]
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into().trim().to_lowercase();
        self
    }

    /// Restricts the view by status.
    #[must_use]
    pub const fn with_status(mut self, status: StatusFilter) -> Self {
        self.status = status;
        self
    }

    /// Restricts the view by priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: PriorityFilter) -> Self {
        self.priority = priority;
        self
    }

    /// Returns the normalized query.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Returns the status dimension.
    #[must_use]
    pub const fn status(&self) -> StatusFilter {
        self.status
    }

    /// Returns the priority dimension.
    #[must_use]
    pub const fn priority(&self) -> PriorityFilter {
        self.priority
    }

    /// Returns `true` when the view places no restriction on tasks.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.query.is_empty()
            && self.status == FilterChoice::All
            && self.priority == FilterChoice::All
    }

    /// Returns `true` when `task` belongs in this view.
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        self.matches_query(task)
            && self.status.admits(&task.status())
            && self.priority.admits(&task.priority())
    }

    fn matches_query(&self, task: &Task) -> bool {
        if self.query.is_empty() {
            return true;
        }
        self.matches_field(task.title().as_str()) || self.matches_field(task.description())
    }

    fn matches_field(&self, value: &str) -> bool {
        value.to_lowercase().contains(&self.query)
    }
}
