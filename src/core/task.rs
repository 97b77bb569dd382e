//! Task classification enums
//!
//! Priorities and statuses are what the theme engine colours semantically.
//! Both are stored as their position in `all()`.

use serde::{Deserialize, Serialize};

/// How urgent a task is
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Priority {
    #[default]
    Low,
    Medium,
    High,
    Urgent,
}

impl Priority {
    /// Human-readable label
    pub fn display_name(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
            Priority::Urgent => "Urgent",
        }
    }

    /// All priorities, lowest first
    pub fn all() -> &'static [Priority] {
        &[
            Priority::Low,
            Priority::Medium,
            Priority::High,
            Priority::Urgent,
        ]
    }

    /// Stored integer form
    pub fn index(&self) -> i64 {
        *self as i64
    }

    pub fn from_index(index: i64) -> Option<Priority> {
        usize::try_from(index)
            .ok()
            .and_then(|i| Self::all().get(i).copied())
    }

    /// Parse a display name or kebab-case key, case-insensitively
    pub fn parse(value: &str) -> Option<Priority> {
        let wanted = value.trim().to_ascii_lowercase();
        Self::all()
            .iter()
            .copied()
            .find(|p| p.display_name().to_ascii_lowercase() == wanted)
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Where a task is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    #[default]
    New,
    InProgress,
    OnHold,
    Pending,
    Closed,
    Done,
}

impl Status {
    /// Human-readable label
    pub fn display_name(&self) -> &'static str {
        match self {
            Status::New => "New",
            Status::InProgress => "In Progress",
            Status::OnHold => "On Hold",
            Status::Pending => "Pending",
            Status::Closed => "Closed",
            Status::Done => "Done",
        }
    }

    /// Whether the task needs no further work
    pub fn is_finished(&self) -> bool {
        matches!(self, Status::Closed | Status::Done)
    }

    /// All statuses in workflow order
    pub fn all() -> &'static [Status] {
        &[
            Status::New,
            Status::InProgress,
            Status::OnHold,
            Status::Pending,
            Status::Closed,
            Status::Done,
        ]
    }

    /// Stored integer form
    pub fn index(&self) -> i64 {
        *self as i64
    }

    pub fn from_index(index: i64) -> Option<Status> {
        usize::try_from(index)
            .ok()
            .and_then(|i| Self::all().get(i).copied())
    }

    /// Parse a display name ("On Hold") or key ("on-hold"), case-insensitively
    pub fn parse(value: &str) -> Option<Status> {
        let wanted = value.trim().to_ascii_lowercase().replace('-', " ");
        Self::all()
            .iter()
            .copied()
            .find(|s| s.display_name().to_ascii_lowercase() == wanted)
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names() {
        assert_eq!(Priority::Urgent.to_string(), "Urgent");
        assert_eq!(Status::InProgress.to_string(), "In Progress");
        assert_eq!(Status::OnHold.to_string(), "On Hold");
    }

    #[test]
    fn test_finished_statuses() {
        let finished: Vec<_> = Status::all().iter().filter(|s| s.is_finished()).collect();
        assert_eq!(finished, vec![&Status::Closed, &Status::Done]);
    }

    #[test]
    fn test_index_matches_position() {
        for (i, p) in Priority::all().iter().enumerate() {
            assert_eq!(p.index(), i as i64);
            assert_eq!(Priority::from_index(i as i64), Some(*p));
        }
        assert_eq!(Status::Done.index(), 5);
        assert_eq!(Status::from_index(1), Some(Status::InProgress));
        assert_eq!(Status::from_index(6), None);
        assert_eq!(Priority::from_index(-1), None);
    }

    #[test]
    fn test_parse_accepts_names_and_keys() {
        assert_eq!(Priority::parse("HIGH"), Some(Priority::High));
        assert_eq!(Status::parse("in-progress"), Some(Status::InProgress));
        assert_eq!(Status::parse("On Hold"), Some(Status::OnHold));
        assert_eq!(Status::parse("finished"), None);
    }

    #[test]
    fn test_priorities_are_ordered() {
        assert!(Priority::Low < Priority::Medium);
        assert!(Priority::High < Priority::Urgent);
    }
}
