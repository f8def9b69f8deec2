use thiserror::Error;

use crate::component::ComponentId;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CollectError {
    #[error("Artifact set id {id} skips ahead of the {slots} recorded slot(s)")]
    IdOutOfOrder { id: usize, slots: usize },

    #[error("Callback '{callback}' invoked after the collector was completed")]
    AfterComplete { callback: &'static str },

    #[error("Component '{id}' is not a project component")]
    IdentifierKindMismatch { id: ComponentId },
}

impl CollectError {
    /// Both out-of-order ids and late callbacks mean the traversal driver
    /// broke the visitor protocol.
    pub fn is_protocol_violation(&self) -> bool {
        matches!(
            self,
            CollectError::IdOutOfOrder { .. } | CollectError::AfterComplete { .. }
        )
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Couldn't parse collector configuration.\n{0}")]
    Json(#[from] serde_json::Error),
}
