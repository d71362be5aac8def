/// The resolved replacement for one include directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub content: String,
    /// Byte offset of the directive in the including document.
    pub start: usize,
    /// Byte length of the directive.
    pub len: usize,
}

/// Replaces every directive span with its fragment's content.
///
/// `fragments` must be disjoint and sorted by `start`. They are applied
/// last to first so earlier offsets stay valid while later spans are
/// rewritten.
///
/// A non-empty fragment loses one trailing `\n`, since the directive line
/// already supplies its own line break. An empty fragment removes the
/// directive line entirely, taking one adjacent line break with it, and
/// collapses the blank lines around it into one when it sat between two
/// blank lines.
pub fn splice(text: &str, fragments: &[Fragment]) -> String {
    let mut result = text.to_string();

    for fragment in fragments.iter().rev() {
        let start = fragment.start;
        let end = fragment.start + fragment.len;
        let bytes = result.as_bytes();
        let newline_at = |i: Option<usize>| i.and_then(|i| bytes.get(i)) == Some(&b'\n');

        let (from, to) = if fragment.content.is_empty() {
            let len = bytes.len();
            let trim_after = end < len && newline_at(Some(end));
            let trim_before = end == len && newline_at(start.checked_sub(1));
            let trim_more = start > 0
                && end < len
                && newline_at(start.checked_sub(2))
                && newline_at(Some(end + 1));
            (
                start - usize::from(trim_before) - usize::from(trim_more),
                end + usize::from(trim_after),
            )
        } else {
            (start, end)
        };

        result.replace_range(from..to, trim_last_newline(&fragment.content));
    }

    result
}

fn trim_last_newline(content: &str) -> &str {
    content.strip_suffix('\n').unwrap_or(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fragment_for(text: &str, directive: &str, content: &str) -> Fragment {
        let start = text.find(directive).unwrap();
        Fragment {
            content: content.to_string(),
            start,
            len: directive.len(),
        }
    }

    #[test]
    fn test_no_fragments_returns_text() {
        assert_eq!(splice("abc\n", &[]), "abc\n");
    }

    #[test]
    fn test_non_empty_fragment_drops_one_trailing_newline() {
        let text = "A\n[[[b.md]]]\nC\n";
        let f = fragment_for(text, "[[[b.md]]]", "B\n\n");
        assert_eq!(splice(text, &[f]), "A\nB\n\nC\n");

        let f = fragment_for(text, "[[[b.md]]]", "B");
        assert_eq!(splice(text, &[f]), "A\nB\nC\n");
    }

    #[test]
    fn test_empty_fragment_mid_document() {
        let text = "A\n[[[b.md]]]\nC\n";
        let f = fragment_for(text, "[[[b.md]]]", "");
        assert_eq!(splice(text, &[f]), "A\nC\n");
    }

    #[test]
    fn test_empty_fragment_at_start() {
        let text = "[[[b.md]]]\nC\n";
        let f = fragment_for(text, "[[[b.md]]]", "");
        assert_eq!(splice(text, &[f]), "C\n");
    }

    #[test]
    fn test_empty_fragment_at_end() {
        let text = "A\n[[[b.md]]]";
        let f = fragment_for(text, "[[[b.md]]]", "");
        assert_eq!(splice(text, &[f]), "A");
    }

    #[test]
    fn test_empty_fragment_is_whole_document() {
        let text = "[[[b.md]]]";
        let f = fragment_for(text, "[[[b.md]]]", "");
        assert_eq!(splice(text, &[f]), "");
    }

    #[test]
    fn test_empty_fragment_between_blank_lines() {
        let text = "A\n\n[[[b.md]]]\n\nC\n";
        let f = fragment_for(text, "[[[b.md]]]", "");
        assert_eq!(splice(text, &[f]), "A\n\nC\n");
    }

    #[test]
    fn test_fragments_apply_in_reverse_order() {
        let text = "[[[a.md]]]\nmid\n[[[b.md]]]\n";
        let a = fragment_for(text, "[[[a.md]]]", "first line\nsecond line\n");
        let b = fragment_for(text, "[[[b.md]]]", "x");
        assert_eq!(
            splice(text, &[a, b]),
            "first line\nsecond line\nmid\nx\n"
        );
    }

    #[test]
    fn test_consecutive_empty_fragments() {
        let text = "A\n[[[a.md]]]\n[[[b.md]]]\nC\n";
        let a = fragment_for(text, "[[[a.md]]]", "");
        let b = fragment_for(text, "[[[b.md]]]", "");
        assert_eq!(splice(text, &[a, b]), "A\nC\n");
    }
}
