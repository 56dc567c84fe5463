use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snippet {
    pub keyword: String,
    pub message: String,
    pub hidden: bool,
}

impl Snippet {
    pub fn new(keyword: impl Into<String>, message: impl Into<String>, hidden: bool) -> Self {
        Snippet {
            keyword: keyword.into(),
            message: message.into(),
            hidden,
        }
    }

    /// Maps a `keyword, message, hidden` row.
    pub(crate) fn from_row(row: &rusqlite::Row) -> rusqlite::Result<Self> {
        Ok(Snippet {
            keyword: row.get(0)?,
            message: row.get(1)?,
            hidden: row.get(2)?,
        })
    }
}

/// Whether a put created a new row or rewrote an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PutOutcome {
    Created,
    Updated,
}

impl PutOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            PutOutcome::Created => "created",
            PutOutcome::Updated => "updated",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stored {
    pub snippet: Snippet,
    pub outcome: PutOutcome,
}
