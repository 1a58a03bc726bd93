use serde::Serialize;

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
/// Raw metrics gathered from source code analysis.
pub struct RawMetrics {
    /// Total lines of code.
    pub loc: usize,
    /// Logical lines of code (code lines; approximated as SLOC).
    pub lloc: usize,
    /// Source lines of code (lines containing code).
    pub sloc: usize,
    /// Number of full-line `//` comments.
    pub comments: usize,
    /// Number of lines inside `/* */` blocks (without code).
    pub multi: usize,
    /// Number of blank lines.
    pub blank: usize,
    /// Number of `//` comments, full-line and trailing.
    pub single_comments: usize,
}

/// Per-line scanner state. Strings and character literals mask comment
/// markers; block comments span lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Normal,
    InString,
    InChar,
    InBlockComment,
}

/// Analyzes raw metrics (LOC, SLOC, comments) from Java source code.
#[must_use]
pub fn analyze_raw(code: &str) -> RawMetrics {
    let mut metrics = RawMetrics::default();
    let mut state = ScanState::Normal;

    for line in code.lines() {
        metrics.loc += 1;

        if line.trim().is_empty() && state != ScanState::InBlockComment {
            metrics.blank += 1;
            continue;
        }

        let mut saw_code = false;
        let mut saw_line_comment = false;
        let mut saw_block_comment = state == ScanState::InBlockComment;

        let bytes = line.as_bytes();
        let mut i = 0;
        while i < bytes.len() {
            let c = bytes[i];
            match state {
                ScanState::Normal => match c {
                    b'/' if bytes.get(i + 1) == Some(&b'/') => {
                        saw_line_comment = true;
                        break;
                    }
                    b'/' if bytes.get(i + 1) == Some(&b'*') => {
                        saw_block_comment = true;
                        state = ScanState::InBlockComment;
                        i += 1;
                    }
                    b'"' => {
                        saw_code = true;
                        state = ScanState::InString;
                    }
                    b'\'' => {
                        saw_code = true;
                        state = ScanState::InChar;
                    }
                    c if !c.is_ascii_whitespace() => saw_code = true,
                    _ => {}
                },
                ScanState::InString => match c {
                    b'\\' => i += 1,
                    b'"' => state = ScanState::Normal,
                    _ => {}
                },
                ScanState::InChar => match c {
                    b'\\' => i += 1,
                    b'\'' => state = ScanState::Normal,
                    _ => {}
                },
                ScanState::InBlockComment => {
                    if c == b'*' && bytes.get(i + 1) == Some(&b'/') {
                        state = ScanState::Normal;
                        i += 1;
                    }
                }
            }
            i += 1;
        }

        // Strings do not continue across lines; a dangling state here means
        // malformed source, reset rather than poison the rest of the file
        if matches!(state, ScanState::InString | ScanState::InChar) {
            state = ScanState::Normal;
        }

        if saw_code {
            metrics.sloc += 1;
            if saw_line_comment {
                metrics.single_comments += 1;
            }
        } else if saw_line_comment {
            metrics.comments += 1;
            metrics.single_comments += 1;
        } else if saw_block_comment {
            metrics.multi += 1;
        } else {
            metrics.blank += 1;
        }
    }

    metrics.lloc = metrics.sloc;
    metrics
}
