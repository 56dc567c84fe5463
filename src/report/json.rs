//! JSON output for scripting and piping.

use crate::snippet::Snippet;

pub fn catalog(keywords: &[String]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(keywords)
}

pub fn search(matches: &[Snippet]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(matches)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_serializes_full_rows() {
        let out = search(&[Snippet::new("beta", "foo bar", false)]).unwrap();
        let parsed: Vec<Snippet> = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed, vec![Snippet::new("beta", "foo bar", false)]);
    }

    #[test]
    fn empty_catalog_is_empty_array() {
        assert_eq!(catalog(&[]).unwrap(), "[]");
    }
}
