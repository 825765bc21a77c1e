//! Request lifecycle state — idle → loading → (success | error).

/// The state of one query over its request lifecycle.
///
/// `Success` data persists until the next `Loading` transition for the same
/// key; errors carry the message text raised by the fetch layer unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum QueryState<T> {
    #[default]
    Idle,
    Loading,
    Success(T),
    Error(String),
}

impl<T> QueryState<T> {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// True only while a fetch is in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// True only after a failed fetch.
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// The fetched data, populated only in the success state.
    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Success(data) => Some(data),
            _ => None,
        }
    }

    /// The error message, populated only in the error state.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Error(msg) => Some(msg),
            _ => None,
        }
    }
}
