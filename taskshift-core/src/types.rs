use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Lifecycle state of a task on the workflow board.
///
/// The five states map 1:1 onto board sections; the mapping is fixed
/// configuration, not document data. Transitions are driven entirely by
/// the caller, so any state is reachable from any other in one move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskState {
    Unclaimed,
    InProgress,
    InReview,
    AddressingFeedback,
    Completed,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown state label: {0}")]
pub struct ParseStateError(pub String);

impl TaskState {
    /// All states, in the board's top-to-bottom section order.
    pub const ALL: [TaskState; 5] = [
        TaskState::Unclaimed,
        TaskState::InProgress,
        TaskState::InReview,
        TaskState::AddressingFeedback,
        TaskState::Completed,
    ];

    /// Canonical label as used by callers and in serialized reports.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unclaimed => "UNCLAIMED",
            Self::InProgress => "IN_PROGRESS",
            Self::InReview => "IN_REVIEW",
            Self::AddressingFeedback => "ADDRESSING_FEEDBACK",
            Self::Completed => "COMPLETED",
        }
    }

    /// Section header fragment this state's tasks live under.
    /// Sections are matched by substring containment, so the decorative
    /// emoji prefix does not have to match character-for-character.
    pub const fn section_name(self) -> &'static str {
        match self {
            Self::Unclaimed => "⏭️ NEXT UP",
            Self::InProgress => "🔨 IN PROGRESS",
            Self::InReview => "🔍 IN REVIEW",
            Self::AddressingFeedback => "🔧 ADDRESSING FEEDBACK",
            Self::Completed => "✅ RECENTLY COMPLETED",
        }
    }
}

impl std::fmt::Display for TaskState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for TaskState {
    type Error = ParseStateError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_uppercase();
        match normalized.as_str() {
            "UNCLAIMED" => Ok(Self::Unclaimed),
            "IN_PROGRESS" => Ok(Self::InProgress),
            "IN_REVIEW" => Ok(Self::InReview),
            "ADDRESSING_FEEDBACK" => Ok(Self::AddressingFeedback),
            "COMPLETED" => Ok(Self::Completed),
            _ => Err(ParseStateError(value.to_owned())),
        }
    }
}
