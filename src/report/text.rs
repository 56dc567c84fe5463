//! Plain text rendering for command results.
//!
//! Search results are laid out as a two column table, long messages are
//! truncated and newlines flattened so each match stays on one line.

use crate::snippet::{Snippet, Stored};

pub const NOT_FOUND: &str = "Snippet not found";

const KEYWORD_WIDTH: usize = 20;
const MESSAGE_WIDTH: usize = 56;

pub fn stored(stored: &Stored) -> String {
    let snippet = &stored.snippet;
    let suffix = if snippet.hidden { " (hidden)" } else { "" };
    format!("Stored {:?} as {:?}{suffix}\n", snippet.message, snippet.keyword)
}

pub fn catalog(keywords: &[String]) -> String {
    if keywords.is_empty() {
        return String::from("No snippets stored.\n");
    }

    let mut output = String::from("Keywords:\n");
    for keyword in keywords {
        output.push_str(&format!("  {keyword}\n"));
    }
    output
}

pub fn search(matches: &[Snippet]) -> String {
    if matches.is_empty() {
        return String::from("No matching snippets.\n");
    }

    let mut output = format!("{:KEYWORD_WIDTH$} {}\n", "KEYWORD", "MESSAGE");
    output.push_str(&"-".repeat(KEYWORD_WIDTH + 1 + MESSAGE_WIDTH));
    output.push('\n');

    for snippet in matches {
        output.push_str(&format!(
            "{:KEYWORD_WIDTH$} {}\n",
            truncate(&snippet.keyword, KEYWORD_WIDTH),
            truncate(&one_line(&snippet.message), MESSAGE_WIDTH)
        ));
    }

    output.push_str(&format!("\n{} match(es)\n", matches.len()));
    output
}

pub fn get(message: Option<&str>) -> String {
    match message {
        Some(text) => format!("{text}\n"),
        None => format!("{NOT_FOUND}\n"),
    }
}

fn one_line(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_len - 3).collect();
        format!("{truncated}...")
    }
}
