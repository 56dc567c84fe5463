pub mod json;
pub mod text;

use crate::error::Result;
use crate::snippet::Snippet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Text,
    Json,
}

impl Format {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            Format::Json
        } else {
            Format::Text
        }
    }
}

pub fn catalog(keywords: &[String], format: Format) -> Result<String> {
    match format {
        Format::Text => Ok(text::catalog(keywords)),
        Format::Json => Ok(format!("{}\n", json::catalog(keywords)?)),
    }
}

pub fn search(matches: &[Snippet], format: Format) -> Result<String> {
    match format {
        Format::Text => Ok(text::search(matches)),
        Format::Json => Ok(format!("{}\n", json::search(matches)?)),
    }
}
