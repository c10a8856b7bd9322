/// A content file split at its frontmatter fences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frontmatter<'a> {
    pub yaml: &'a str,
    pub body: &'a str,
}

const FENCE: &str = "---";

/// Splits `---\n<yaml>\n---\n<body>`. `None` when the file does not open
/// with a fence or the block is never closed.
pub fn split_frontmatter(source: &str) -> Option<Frontmatter<'_>> {
    let source = source.strip_prefix('\u{feff}').unwrap_or(source);
    let rest = after_opening_fence(source)?;

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end_matches(|c| c == '\r' || c == '\n') == FENCE {
            return Some(Frontmatter {
                yaml: &rest[..offset],
                body: &rest[offset + line.len()..],
            });
        }
        offset += line.len();
    }
    None
}

fn after_opening_fence(source: &str) -> Option<&str> {
    let (first, rest) = match source.find('\n') {
        Some(i) => (&source[..i], &source[i + 1..]),
        None => (source, ""),
    };
    (first.trim_end_matches('\r') == FENCE).then_some(rest)
}
