use regex::{CaptureMatches, Regex};
use std::sync::LazyLock;

/// Matches a whole line of the form `[[[ path ]]]`. Leading and trailing
/// spaces on the line are allowed; the path may contain single spaces
/// between non-blank runs.
static INCLUDE_DIRECTIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?mR)^ *\[{3}\s*([^\s\]\n\r]+(?: +[^\s\]\n\r]+)*)\s*\]{3} *$")
        .expect("include directive pattern is valid")
});

/// An include directive found in a document's raw text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive<'a> {
    /// The referenced path, trimmed.
    pub path: &'a str,
    /// Byte offset of the first character of the matched directive text.
    pub start: usize,
    /// Byte length of the matched directive text.
    pub len: usize,
}

impl Directive<'_> {
    pub fn end(&self) -> usize {
        self.start + self.len
    }
}

/// Iterator over the include directives of a document, in document order.
pub struct Directives<'a> {
    captures: CaptureMatches<'static, 'a>,
}

impl<'a> Iterator for Directives<'a> {
    type Item = Directive<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let caps = self.captures.next()?;
        let whole = caps.get(0)?;
        let path = caps.get(1)?.as_str().trim();
        Some(Directive {
            path,
            start: whole.start(),
            len: whole.len(),
        })
    }
}

/// Scans `text` for include directives. The scan is lazy and yields
/// matches from top to bottom.
pub fn directives(text: &str) -> Directives<'_> {
    Directives {
        captures: INCLUDE_DIRECTIVE.captures_iter(text),
    }
}
