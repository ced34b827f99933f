use std::fmt;

use thiserror::Error;

/// Kind of tree node an order value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Activity,
    Entry,
    RoundQuestion,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Activity => write!(f, "activity"),
            EntityKind::Entry => write!(f, "question or round"),
            EntityKind::RoundQuestion => write!(f, "round question"),
        }
    }
}

/// Violations of the per-container order rules.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum OrderError {
    #[error("{kind} order must be a positive integer")]
    Zero { kind: EntityKind },

    #[error("duplicate {kind} order {order}")]
    Duplicate { kind: EntityKind, order: u32 },
}

/// Errors raised while turning a raw quiz document into a `Quiz`.
///
/// Paths follow the document shape, e.g. `activities[1].questions[0]`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DocumentError {
    #[error("quiz document is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{path}: missing field `{field}`")]
    MissingField { path: String, field: &'static str },

    #[error("{path}: `round_title` must be a string")]
    InvalidRoundTitle { path: String },

    #[error("{path}: {source}")]
    InvalidTree {
        path: String,
        #[source]
        source: OrderError,
    },
}

impl DocumentError {
    pub(crate) fn tree(path: impl Into<String>, source: OrderError) -> Self {
        Self::InvalidTree {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_error_names_the_entity() {
        let err = OrderError::Duplicate {
            kind: EntityKind::RoundQuestion,
            order: 3,
        };
        assert_eq!(err.to_string(), "duplicate round question order 3");
    }

    #[test]
    fn tree_error_is_prefixed_with_path() {
        let err = DocumentError::tree(
            "activities[0]",
            OrderError::Zero {
                kind: EntityKind::Activity,
            },
        );
        assert_eq!(
            err.to_string(),
            "activities[0]: activity order must be a positive integer"
        );
    }
}
