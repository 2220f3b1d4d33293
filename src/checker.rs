use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use log::{debug, info, warn};

use crate::diff::{char_mismatches, line_mismatches, LineMismatch, Mismatch};
use crate::digest::sha256_hex;
use crate::error::{ProbeError, Result};

pub const INDEX_PLACEHOLDER: &str = "{index}";
pub const DEFAULT_EXPECTED_TEMPLATE: &str = "challenge/challenge{index}.out";
pub const DEFAULT_CANDIDATE_TEMPLATE: &str = "output/20000_out{index}.txt";
pub const DEFAULT_CASES: usize = 10;

/// Where the expected answers and candidate outputs live, as path templates
/// containing `{index}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerLayout {
    pub expected: String,
    pub candidate: String,
}

impl Default for AnswerLayout {
    fn default() -> Self {
        Self {
            expected: DEFAULT_EXPECTED_TEMPLATE.to_string(),
            candidate: DEFAULT_CANDIDATE_TEMPLATE.to_string(),
        }
    }
}

impl AnswerLayout {
    pub fn new(expected: impl Into<String>, candidate: impl Into<String>) -> Self {
        Self {
            expected: expected.into(),
            candidate: candidate.into(),
        }
    }

    pub fn expected_path(&self, index: usize) -> PathBuf {
        expand(&self.expected, index)
    }

    pub fn candidate_path(&self, index: usize) -> PathBuf {
        expand(&self.candidate, index)
    }
}

fn expand(template: &str, index: usize) -> PathBuf {
    PathBuf::from(template.replace(INDEX_PLACEHOLDER, &index.to_string()))
}

/// Which cases a run should check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Single(usize),
    All,
}

impl Selection {
    /// Interprets one line of user input. Anything other than a plain run of
    /// ASCII digits selects every case.
    pub fn from_input(line: &str) -> Self {
        let line = line.trim_end_matches(['\n', '\r']);
        if line.is_empty() || !line.bytes().all(|b| b.is_ascii_digit()) {
            return Selection::All;
        }
        match line.parse() {
            Ok(index) => Selection::Single(index),
            Err(_) => Selection::All,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The candidate file could not be opened; only the answer was hashed.
    Missing {
        expected_digest: String,
        candidate_path: PathBuf,
    },
    Compared {
        expected_digest: String,
        candidate_digest: String,
        expected_len: usize,
        candidate_len: usize,
        equal: bool,
        mismatches: Vec<Mismatch>,
        line_mismatches: Vec<LineMismatch>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseReport {
    pub index: usize,
    pub outcome: Outcome,
}

impl CaseReport {
    pub fn is_correct(&self) -> bool {
        matches!(self.outcome, Outcome::Compared { equal: true, .. })
    }
}

impl fmt::Display for CaseReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            Outcome::Missing {
                expected_digest,
                candidate_path,
            } => {
                writeln!(
                    f,
                    "{}.txt could not be opened: {} does not exist.",
                    self.index,
                    candidate_path.display()
                )?;
                writeln!(f, "{}", expected_digest)
            }
            Outcome::Compared {
                expected_digest,
                candidate_digest,
                expected_len,
                candidate_len,
                equal,
                mismatches,
                line_mismatches,
            } => {
                writeln!(f, "mine:  {}", candidate_digest)?;
                writeln!(f, "answ:  {}", expected_digest)?;
                writeln!(f, "len mine:{}", candidate_len)?;
                write!(f, " len answ:{}", expected_len)?;
                if *equal {
                    return write!(f, "\ncorrect!!");
                }
                write!(f, "\nincorrect.")?;
                for m in mismatches {
                    write!(f, "\n{} {} {}", m.position, m.expected, m.actual)?;
                }
                for m in line_mismatches {
                    write!(
                        f,
                        "\nline {}: expected {:?}, got {:?}",
                        m.line,
                        m.expected.as_deref().unwrap_or("<none>"),
                        m.actual.as_deref().unwrap_or("<none>")
                    )?;
                }
                Ok(())
            }
        }
    }
}

/// Compares one expected/candidate pair that is already in memory.
pub fn compare(index: usize, expected: &str, candidate: &str, by_line: bool) -> CaseReport {
    let equal = expected == candidate;
    let (mismatches, lines) = if equal {
        (Vec::new(), Vec::new())
    } else if by_line {
        (
            char_mismatches(expected, candidate),
            line_mismatches(expected, candidate),
        )
    } else {
        (char_mismatches(expected, candidate), Vec::new())
    };

    CaseReport {
        index,
        outcome: Outcome::Compared {
            expected_digest: sha256_hex(expected),
            candidate_digest: sha256_hex(candidate),
            expected_len: expected.chars().count(),
            candidate_len: candidate.chars().count(),
            equal,
            mismatches,
            line_mismatches: lines,
        },
    }
}

/// Checks candidate outputs against expected answers laid out by `layout`.
#[derive(Debug, Clone)]
pub struct Checker {
    pub layout: AnswerLayout,
    pub cases: usize,
    pub by_line: bool,
}

impl Default for Checker {
    fn default() -> Self {
        Self {
            layout: AnswerLayout::default(),
            cases: DEFAULT_CASES,
            by_line: false,
        }
    }
}

impl Checker {
    pub fn new(layout: AnswerLayout) -> Self {
        Self {
            layout,
            ..Self::default()
        }
    }

    /// Checks a single case.
    ///
    /// A candidate that is missing or not permitted to open yields
    /// [`Outcome::Missing`]. Any other candidate failure is
    /// [`ProbeError::Candidate`]; an unreadable answer is
    /// [`ProbeError::Expected`].
    pub fn check_one(&self, index: usize) -> Result<CaseReport> {
        let expected_path = self.layout.expected_path(index);
        debug!("Reading expected answer: {}", expected_path.display());
        let expected = fs::read_to_string(&expected_path).map_err(|source| ProbeError::Expected {
            path: expected_path.clone(),
            source,
        })?;
        let expected = expected.trim_end();

        let candidate_path = self.layout.candidate_path(index);
        debug!("Reading candidate output: {}", candidate_path.display());
        let candidate = match fs::read_to_string(&candidate_path) {
            Ok(content) => content,
            Err(e)
                if matches!(
                    e.kind(),
                    io::ErrorKind::NotFound | io::ErrorKind::PermissionDenied
                ) =>
            {
                warn!("Candidate {} unavailable: {}", candidate_path.display(), e);
                return Ok(CaseReport {
                    index,
                    outcome: Outcome::Missing {
                        expected_digest: sha256_hex(expected),
                        candidate_path,
                    },
                });
            }
            Err(source) => {
                return Err(ProbeError::Candidate {
                    path: candidate_path,
                    source,
                })
            }
        };

        Ok(compare(index, expected, candidate.trim_end(), self.by_line))
    }

    /// Runs the selected cases in ascending order, writing each report to
    /// `out`. Candidate failures are written as diagnostics and the run
    /// continues; answer failures stop it.
    pub fn run<W: Write>(&self, selection: Selection, out: &mut W) -> Result<Vec<CaseReport>> {
        let indices: Vec<usize> = match selection {
            Selection::Single(index) => vec![index],
            Selection::All => (0..self.cases).collect(),
        };
        info!("Checking {} case(s).", indices.len());

        let mut reports = Vec::with_capacity(indices.len());
        for index in indices {
            match self.check_one(index) {
                Ok(report) => {
                    writeln!(out, "{}", report)?;
                    reports.push(report);
                }
                Err(e @ ProbeError::Candidate { .. }) => {
                    warn!("Case {} skipped: {}", index, e);
                    writeln!(out, "{}", e)?;
                }
                Err(e) => return Err(e),
            }
        }

        let passed = reports.iter().filter(|r| r.is_correct()).count();
        info!("{} of {} checked case(s) correct.", passed, reports.len());
        Ok(reports)
    }
}
