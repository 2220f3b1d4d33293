use std::fs;
use std::path::Path;

use tempfile::TempDir;
use textprobe::checker::{compare, AnswerLayout, Checker, Outcome, Selection};
use textprobe::digest::sha256_hex;
use textprobe::error::ProbeError;

fn layout_in(dir: &Path) -> AnswerLayout {
    AnswerLayout::new(
        dir.join("challenge/challenge{index}.out").to_string_lossy(),
        dir.join("output/20000_out{index}.txt").to_string_lossy(),
    )
}

fn write(dir: &Path, rel: &str, content: &str) {
    let path = dir.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

#[test]
fn test_selection_from_input() {
    assert_eq!(Selection::from_input("3\n"), Selection::Single(3));
    assert_eq!(Selection::from_input("0"), Selection::Single(0));
    assert_eq!(Selection::from_input("\n"), Selection::All);
    assert_eq!(Selection::from_input("all\n"), Selection::All);
    assert_eq!(Selection::from_input("-1\n"), Selection::All);
    assert_eq!(Selection::from_input(" 2\n"), Selection::All);
    assert_eq!(Selection::from_input("99999999999999999999999999\n"), Selection::All);
}

#[test]
fn test_layout_paths() {
    let layout = AnswerLayout::default();
    assert_eq!(
        layout.expected_path(7),
        Path::new("challenge/challenge7.out")
    );
    assert_eq!(
        layout.candidate_path(7),
        Path::new("output/20000_out7.txt")
    );
}

#[test]
fn test_compare_equal() {
    let report = compare(0, "hello\nworld", "hello\nworld", false);
    assert!(report.is_correct());
    match &report.outcome {
        Outcome::Compared {
            expected_digest,
            candidate_digest,
            expected_len,
            candidate_len,
            mismatches,
            ..
        } => {
            assert_eq!(expected_digest, candidate_digest);
            assert_eq!(*expected_len, 11);
            assert_eq!(*candidate_len, 11);
            assert!(mismatches.is_empty());
        }
        other => panic!("unexpected outcome {:?}", other),
    }
    assert!(report.to_string().ends_with("correct!!"));
}

#[test]
fn test_compare_unequal_reports_positions() {
    let report = compare(1, "hello\nworld", "hella\nworld", false);
    assert!(!report.is_correct());
    match &report.outcome {
        Outcome::Compared {
            mismatches,
            line_mismatches,
            ..
        } => {
            assert_eq!(mismatches.len(), 1);
            assert_eq!(mismatches[0].position, 4);
            assert_eq!(mismatches[0].expected, 'o');
            assert_eq!(mismatches[0].actual, 'a');
            assert!(line_mismatches.is_empty());
        }
        other => panic!("unexpected outcome {:?}", other),
    }
    let text = report.to_string();
    assert!(text.contains("incorrect."));
    assert!(text.ends_with("\n4 o a"));
}

#[test]
fn test_compare_by_line() {
    let report = compare(1, "hello\nworld", "hella\nworld", true);
    match &report.outcome {
        Outcome::Compared {
            line_mismatches, ..
        } => {
            assert_eq!(line_mismatches.len(), 1);
            assert_eq!(line_mismatches[0].line, 0);
        }
        other => panic!("unexpected outcome {:?}", other),
    }
}

#[test]
fn test_check_one_strips_trailing_whitespace() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "challenge/challenge0.out", "42\n");
    write(dir.path(), "output/20000_out0.txt", "42  \n\n");

    let checker = Checker::new(layout_in(dir.path()));
    let report = checker.check_one(0).unwrap();
    assert!(report.is_correct());
}

#[test]
fn test_check_one_missing_candidate() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "challenge/challenge2.out", "answer\n");

    let checker = Checker::new(layout_in(dir.path()));
    let report = checker.check_one(2).unwrap();
    match &report.outcome {
        Outcome::Missing {
            expected_digest, ..
        } => assert_eq!(expected_digest, &sha256_hex("answer")),
        other => panic!("unexpected outcome {:?}", other),
    }
    assert!(!report.is_correct());
    assert!(report.to_string().contains("does not exist"));
}

#[test]
fn test_check_one_missing_expected_is_fatal() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "output/20000_out0.txt", "x");

    let checker = Checker::new(layout_in(dir.path()));
    let err = checker.check_one(0).unwrap_err();
    assert!(matches!(err, ProbeError::Expected { .. }));
}

#[test]
fn test_check_one_unreadable_candidate_is_distinct_error() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "challenge/challenge0.out", "ok");
    let candidate = dir.path().join("output/20000_out0.txt");
    fs::create_dir_all(candidate.parent().unwrap()).unwrap();
    fs::write(&candidate, b"\xff\xfe\xfd").unwrap();

    let checker = Checker::new(layout_in(dir.path()));
    let err = checker.check_one(0).unwrap_err();
    assert!(matches!(err, ProbeError::Candidate { .. }));
}

#[test]
fn test_run_batch_continues_past_failures() {
    let dir = TempDir::new().unwrap();
    for i in 0..10 {
        write(dir.path(), &format!("challenge/challenge{i}.out"), "same");
    }
    write(dir.path(), "output/20000_out0.txt", "same");
    write(dir.path(), "output/20000_out5.txt", "sane");
    let bad = dir.path().join("output/20000_out7.txt");
    fs::write(&bad, b"\xff").unwrap();

    let checker = Checker::new(layout_in(dir.path()));
    let mut out = Vec::new();
    let reports = checker.run(Selection::All, &mut out).unwrap();

    // case 7 is an unreadable candidate and yields no report
    assert_eq!(reports.len(), 9);
    let indices: Vec<usize> = reports.iter().map(|r| r.index).collect();
    assert_eq!(indices, vec![0, 1, 2, 3, 4, 5, 6, 8, 9]);
    assert!(reports[0].is_correct());
    assert!(!reports[5].is_correct());
    assert!(matches!(reports[1].outcome, Outcome::Missing { .. }));

    let text = String::from_utf8(out).unwrap();
    assert_eq!(text.matches("correct!!").count(), 1);
    assert_eq!(text.matches("incorrect.").count(), 1);
    assert!(text.contains("2 m n"));
    assert!(text.contains("unreadable"));
}

#[test]
fn test_run_single() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "challenge/challenge3.out", "abc");
    write(dir.path(), "output/20000_out3.txt", "abc");

    let checker = Checker::new(layout_in(dir.path()));
    let mut out = Vec::new();
    let reports = checker.run(Selection::Single(3), &mut out).unwrap();
    assert_eq!(reports.len(), 1);
    assert!(reports[0].is_correct());
}

#[test]
fn test_run_aborts_on_missing_expected() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "challenge/challenge0.out", "abc");

    let checker = Checker::new(layout_in(dir.path()));
    let mut out = Vec::new();
    let err = checker.run(Selection::All, &mut out).unwrap_err();
    assert!(matches!(err, ProbeError::Expected { .. }));
}
