//! Tag pattern compilation.
//!
//! Each tag becomes one regex matching the comment prefix, an optional
//! single space, then the literal tag text. Both prefix and tag are
//! escaped so arbitrary literal text is accepted as a tag. Compilation
//! errors are fatal for the whole run; a broken matcher would silently
//! produce an incomplete scan.

use regex::Regex;

/// A compiled matcher for one tag. Immutable after construction and
/// shared read-only across concurrent scans.
#[derive(Debug)]
pub struct TagPattern {
    pub tag: String,
    pub regex: Regex,
}

/// Compile the tag set against a comment prefix (e.g. `#`).
///
/// Tags are deduplicated preserving first-occurrence order, so matching
/// iteration order is deterministic. An empty tag is a configuration
/// error; the first offending input is named in the message.
pub fn compile(tags: &[String], comment: &str) -> Result<Vec<TagPattern>, String> {
    let mut seen: Vec<&str> = Vec::new();
    let mut compiled: Vec<TagPattern> = Vec::new();
    for tag in tags {
        let tag = tag.trim();
        if tag.is_empty() {
            return Err("empty tag in tag set".to_string());
        }
        if seen.contains(&tag) {
            continue;
        }
        seen.push(tag);
        let pattern = format!("{} ?{}", regex::escape(comment), regex::escape(tag));
        let regex = Regex::new(&pattern)
            .map_err(|e| format!("cannot compile pattern for tag '{}': {}", tag, e))?;
        compiled.push(TagPattern {
            tag: tag.to_string(),
            regex,
        });
    }
    Ok(compiled)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_compile_matches_prefixed_tag() {
        let pats = compile(&tags(&["TODO"]), "#").unwrap();
        assert_eq!(pats.len(), 1);
        assert!(pats[0].regex.is_match("# TODO: fix"));
        assert!(pats[0].regex.is_match("#TODO fix"));
        assert!(!pats[0].regex.is_match("TODO without prefix"));
    }

    #[test]
    fn test_compile_escapes_literal_text() {
        // Regex metacharacters in a tag must be treated literally.
        let pats = compile(&tags(&["C++?"]), "#").unwrap();
        assert!(pats[0].regex.is_match("# C++? port this"));
        assert!(!pats[0].regex.is_match("# C"));
    }

    #[test]
    fn test_compile_deduplicates_preserving_order() {
        let pats = compile(&tags(&["TODO", "BUG", "TODO"]), "#").unwrap();
        let names: Vec<&str> = pats.iter().map(|p| p.tag.as_str()).collect();
        assert_eq!(names, vec!["TODO", "BUG"]);
    }

    #[test]
    fn test_compile_rejects_empty_tag() {
        let err = compile(&tags(&["TODO", ""]), "#").unwrap_err();
        assert!(err.contains("empty tag"));
    }

    #[test]
    fn test_compile_custom_comment_prefix() {
        let pats = compile(&tags(&["FIXME"]), "//").unwrap();
        assert!(pats[0].regex.is_match("// FIXME later"));
        assert!(!pats[0].regex.is_match("# FIXME later"));
    }
}
