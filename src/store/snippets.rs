use rusqlite::{ffi, params, OptionalExtension, TransactionBehavior};

use super::Store;
use crate::error::Result;
use crate::snippet::{PutOutcome, Snippet, Stored};

/// True for a PRIMARY KEY / UNIQUE violation. Other constraint failures
/// (NOT NULL, CHECK) must not be turned into an update.
fn is_unique_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _)
            if e.extended_code == ffi::SQLITE_CONSTRAINT_PRIMARYKEY
                || e.extended_code == ffi::SQLITE_CONSTRAINT_UNIQUE
    )
}

impl Store {
    /// Store a snippet under `keyword`, overwriting message and hidden flag
    /// if the keyword already exists.
    pub fn put(&mut self, keyword: &str, message: &str, hidden: bool) -> Result<Stored> {
        tracing::info!(keyword, message, hidden, "storing snippet");

        // IMMEDIATE takes the write lock up front so the insert and the
        // fallback update cannot interleave with another writer
        let mut tx = self.conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

        let outcome = {
            let sp = tx.savepoint()?;
            match sp.execute(
                "INSERT INTO snippets (keyword, message, hidden) VALUES (?1, ?2, ?3)",
                params![keyword, message, hidden],
            ) {
                Ok(_) => {
                    sp.commit()?;
                    PutOutcome::Created
                }
                // dropping the savepoint rolls the failed insert back
                Err(e) if is_unique_violation(&e) => PutOutcome::Updated,
                Err(e) => return Err(e.into()),
            }
        };

        if outcome == PutOutcome::Updated {
            tracing::debug!(keyword, "keyword exists, updating in place");
            tx.execute(
                "UPDATE snippets SET message = ?1, hidden = ?2 WHERE keyword = ?3",
                params![message, hidden, keyword],
            )?;
        }

        tx.commit()?;

        tracing::debug!(keyword, outcome = outcome.as_str(), "snippet stored successfully");
        Ok(Stored {
            snippet: Snippet::new(keyword, message, hidden),
            outcome,
        })
    }

    /// Keywords of every visible snippet, ascending
    pub fn catalog(&mut self) -> Result<Vec<String>> {
        tracing::info!("retrieving keywords");

        let tx = self.conn.transaction()?;
        let keywords = {
            let mut stmt = tx.prepare(
                "SELECT keyword FROM snippets
                 WHERE NOT hidden
                 ORDER BY keyword",
            )?;
            let rows = stmt.query_map([], |row| row.get(0))?;
            rows.collect::<rusqlite::Result<Vec<String>>>()?
        };
        tx.commit()?;

        tracing::debug!(count = keywords.len(), "keywords retrieved successfully");
        Ok(keywords)
    }

    /// Visible snippets whose message matches `pattern` under LIKE.
    ///
    /// `%` and `_` in the pattern are wildcards; they are not escaped.
    pub fn search(&mut self, pattern: &str) -> Result<Vec<Snippet>> {
        tracing::info!(pattern, "searching snippets");

        let tx = self.conn.transaction()?;
        let matches = {
            let mut stmt = tx.prepare(
                "SELECT keyword, message, hidden FROM snippets
                 WHERE NOT hidden AND message LIKE ?1",
            )?;
            let rows = stmt.query_map(params![pattern], Snippet::from_row)?;
            rows.collect::<rusqlite::Result<Vec<_>>>()?
        };
        tx.commit()?;

        tracing::debug!(count = matches.len(), "snippets retrieved successfully");
        Ok(matches)
    }

    /// Message stored under `keyword`, hidden snippets included.
    /// `None` when no snippet has that name.
    pub fn get(&mut self, keyword: &str) -> Result<Option<String>> {
        tracing::info!(keyword, "retrieving snippet");

        let tx = self.conn.transaction()?;
        let message = tx
            .query_row(
                "SELECT message FROM snippets WHERE keyword = ?1",
                params![keyword],
                |row| row.get(0),
            )
            .optional()?;
        tx.commit()?;

        tracing::debug!(keyword, found = message.is_some(), "snippet lookup finished");
        Ok(message)
    }
}
