//! Bullet-list extraction from pull request bodies.

/// Header introducing the regular changelog bullets.
pub const CHANGELOG_HEADER: &str = "## Changelog";

/// Header introducing the breaking-change bullets.
pub const BREAKING_CHANGES_HEADER: &str = "### Breaking Changes";

/// Splits a body into lines and removes their common leading indentation.
///
/// Blank lines do not count towards the common indentation. A blank first or
/// last line is dropped.
#[must_use]
pub fn trim_indent(body: &str) -> Vec<String> {
    let lines: Vec<&str> = body.lines().collect();

    let indent = lines
        .iter()
        .filter(|line| !line.trim().is_empty())
        .map(|line| indent_width(line))
        .min()
        .unwrap_or(0);

    let last = lines.len().saturating_sub(1);
    lines
        .iter()
        .enumerate()
        .filter(|(index, line)| !((*index == 0 || *index == last) && line.trim().is_empty()))
        .map(|(_, line)| drop_chars(line, indent).to_string())
        .collect()
}

/// Number of leading whitespace characters.
fn indent_width(line: &str) -> usize {
    line.chars().take_while(|c| c.is_whitespace()).count()
}

/// Drops the first `count` characters, or everything if the line is shorter.
fn drop_chars(line: &str, count: usize) -> &str {
    match line.char_indices().nth(count) {
        Some((offset, _)) => &line[offset..],
        None => "",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Scanning,
    Collecting,
}

/// Returns the bullet items directly following the first line equal to `header`.
///
/// Collection stops at the first line that is not a bullet, including blank
/// lines. Later occurrences of the header are ignored.
#[must_use]
pub fn extract_bullets<S: AsRef<str>>(lines: &[S], header: &str) -> Vec<String> {
    let mut state = State::Scanning;
    let mut bullets = Vec::new();

    for line in lines {
        let line: &str = line.as_ref();
        match state {
            State::Scanning => {
                if line == header {
                    state = State::Collecting;
                }
            }
            State::Collecting => {
                if !line.trim().starts_with('-') {
                    break;
                }
                bullets.push(line.replacen('-', "", 1).trim().to_string());
            }
        }
    }

    bullets
}
