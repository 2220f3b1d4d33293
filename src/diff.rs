use log::debug;

/// A character position where expected and actual text disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mismatch {
    pub position: usize,
    pub expected: char,
    pub actual: char,
}

/// A line where expected and actual text disagree. `None` means the line only
/// exists on the other side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineMismatch {
    pub line: usize,
    pub expected: Option<String>,
    pub actual: Option<String>,
}

/// Compares two texts character by character.
///
/// Only positions below the shorter length are compared; a length difference
/// on its own produces no mismatch.
pub fn char_mismatches(expected: &str, actual: &str) -> Vec<Mismatch> {
    let mismatches: Vec<Mismatch> = expected
        .chars()
        .zip(actual.chars())
        .enumerate()
        .filter(|(_, (e, a))| e != a)
        .map(|(position, (expected, actual))| Mismatch {
            position,
            expected,
            actual,
        })
        .collect();
    debug!("char_mismatches found {} differing positions.", mismatches.len());
    mismatches
}

/// Compares two texts line by line, reporting trailing lines missing on
/// either side.
pub fn line_mismatches(expected: &str, actual: &str) -> Vec<LineMismatch> {
    let expected_lines: Vec<&str> = expected.split('\n').collect();
    let actual_lines: Vec<&str> = actual.split('\n').collect();
    let total = expected_lines.len().max(actual_lines.len());

    let mut mismatches = Vec::new();
    for line in 0..total {
        let e = expected_lines.get(line).copied();
        let a = actual_lines.get(line).copied();
        if e != a {
            mismatches.push(LineMismatch {
                line,
                expected: e.map(str::to_string),
                actual: a.map(str::to_string),
            });
        }
    }
    debug!("line_mismatches found {} differing lines.", mismatches.len());
    mismatches
}
