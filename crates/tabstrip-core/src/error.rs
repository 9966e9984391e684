//! Core error types

use tabstrip_group::TabId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Group error: {0}")]
    Group(#[from] tabstrip_group::GroupError),

    #[error("Tab not found: {0}")]
    TabNotFound(TabId),

    #[error("Tab already exists: {0}")]
    DuplicateTab(TabId),

    #[error("No recently closed tab")]
    NothingToReopen,

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}
