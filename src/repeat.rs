use std::fmt;

use log::debug;

/// Counts occurrences of `needle` in `haystack`, overlapping matches included.
pub fn count_occurrences(haystack: &[char], needle: &[char]) -> usize {
    if needle.is_empty() || needle.len() > haystack.len() {
        return 0;
    }
    haystack.windows(needle.len()).filter(|w| *w == needle).count()
}

// Same as `count_occurrences(..) > 1`, but stops scanning at the second hit.
fn repeats(haystack: &[char], needle: &[char]) -> bool {
    haystack
        .windows(needle.len())
        .filter(|w| *w == needle)
        .take(2)
        .count()
        > 1
}

/// Finds the longest substring of `s` that occurs at least twice.
///
/// Every slice `s[i..j]` is checked in order of increasing `i`, then `j`, and
/// only a strictly longer repeat replaces the current best, so the earliest
/// starting substring wins a tie. Returns an empty string when nothing repeats.
pub fn longest_repeated_substring(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let n = chars.len();
    let mut best: &[char] = &[];

    for i in 0..n {
        for j in (i + 1)..=n {
            let candidate = &chars[i..j];
            if candidate.len() > best.len() && repeats(&chars, candidate) {
                best = candidate;
            }
        }
    }

    debug!("Longest repeated substring has {} chars.", best.len());
    best.iter().collect()
}

/// Returns the shortest prefix whose repetition rebuilds `s` exactly, or `s`
/// itself when no prefix of at most half the length does.
pub fn smallest_repeating_unit(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let n = chars.len();

    for size in 1..=n / 2 {
        if n % size != 0 {
            continue;
        }
        let unit = &chars[..size];
        if chars.chunks(size).all(|chunk| chunk == unit) {
            debug!("Found repeating unit of size {} ({} repetitions).", size, n / size);
            return unit.iter().collect();
        }
    }

    debug!("No repeating unit; the input is its own unit.");
    s.to_string()
}

/// Result of running both repetition finders over one input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepetitionReport {
    pub length: usize,
    pub longest_repeat: String,
    pub unit: String,
}

pub fn analyze(s: &str) -> RepetitionReport {
    RepetitionReport {
        length: s.chars().count(),
        longest_repeat: longest_repeated_substring(s),
        unit: smallest_repeating_unit(s),
    }
}

impl fmt::Display for RepetitionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "input length: {}", self.length)?;
        writeln!(
            f,
            "longest repeated substring: {:?} (length: {})",
            self.longest_repeat,
            self.longest_repeat.chars().count()
        )?;
        write!(
            f,
            "smallest repeating unit: {:?} (length: {})",
            self.unit,
            self.unit.chars().count()
        )
    }
}
