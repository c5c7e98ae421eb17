//! End-to-end scoring scenarios: dataset and prediction streams in memory,
//! report captured in a buffer.

use accuracy_core::{Accumulator, AccuracySnapshot, ColorRule, CounterPair, CounterTriple};
use predict_analyzer::pairs::{MismatchPolicy, PairReader};
use predict_analyzer::render::{TerminalRenderer, TerminalWidth};
use predict_analyzer::runner::{run, RunSummary};
use std::io::Cursor;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

struct Scored {
    summary: RunSummary,
    report: String,
    dataset_offset: u64,
}

fn score(dataset: &str, predictions: &str, rule: ColorRule, policy: MismatchPolicy) -> Scored {
    let mut pairs = PairReader::new(
        Cursor::new(dataset.as_bytes()),
        Cursor::new(predictions.as_bytes()),
        policy,
    );
    let mut accumulator = Accumulator::new(rule);
    let mut renderer = TerminalRenderer::new(Vec::new(), TerminalWidth::Fixed(80));
    let lines = dataset.lines().count() as u64;

    let summary = run(&mut pairs, &mut accumulator, &mut renderer, lines).unwrap();
    let (expected, _) = pairs.into_inner();

    Scored {
        summary,
        report: String::from_utf8(renderer.into_inner()).unwrap(),
        dataset_offset: expected.position(),
    }
}

fn score_exact(dataset: &str, predictions: &str) -> AccuracySnapshot {
    score(dataset, predictions, ColorRule::Exact, MismatchPolicy::Pad)
        .summary
        .snapshot
}

/// A dataset line: a FEN followed by the label and optional color token.
fn line(label: &str, color: Option<&str>) -> String {
    let fen = "4k3/8/8/8/8/8/8/4K2R w - - 0 1";
    match color {
        Some(c) => format!("{fen} {label} {c}\n"),
        None => format!("{fen} {label}\n"),
    }
}

// ---------------------------------------------------------------------------
// Scenarios
// ---------------------------------------------------------------------------

#[test]
fn nothing_matched_by_nothing() {
    let snap = score_exact("a b c d e f Nothing\n", "Nothing\n");
    assert_eq!(snap.global.total, 1);
    assert_eq!(snap.global.correct, 1);
    assert_eq!(snap.nothing, CounterPair { total: 1, correct: 1 });
}

#[test]
fn check_answered_with_checkmate_is_a_family_hit() {
    let snap = score_exact("a b c d e f Check 1\n", "Checkmate 1\n");
    assert_eq!(snap.global.total, 1);
    assert_eq!(snap.global.correct, 0);
    assert_eq!(snap.check_family.total, 1);
    assert_eq!(snap.check_family.correct, 1);
}

#[test]
fn dataset_lines_past_last_prediction_are_never_read() {
    let dataset: String = (0..5).map(|_| line("Nothing", None)).collect();
    let scored = score(&dataset, "Nothing\nNothing\nCheck\n", ColorRule::Exact, MismatchPolicy::Pad);

    assert_eq!(scored.summary.processed, 3);
    assert_eq!(scored.summary.snapshot.global.total, 3);
    assert_eq!(scored.dataset_offset as usize, line("Nothing", None).len() * 3);
}

#[test]
fn progress_bar_at_quarter_of_dataset() {
    let dataset: String = (0..200).map(|_| line("Nothing", None)).collect();
    let predictions = "Nothing\n".repeat(50);
    let scored = score(&dataset, &predictions, ColorRule::Exact, MismatchPolicy::Pad);

    // Last redraw before the final block
    let last_frame = scored.report.rsplit("\x1b[H\x1b[J").nth(1).unwrap();
    let bar = last_frame.lines().next().unwrap();
    assert_eq!(bar.matches('|').count(), 19);
    assert_eq!(bar.matches(' ').count(), 78 - 19);
}

#[test]
fn category_totals_never_exceed_global() {
    let dataset = [
        line("Nothing", None),
        line("Check", Some("White")),
        line("Checkmate", Some("Black")),
        line("Stalemate", None),
        line("Check", Some("Black")),
    ]
    .concat();
    let snap = score_exact(&dataset, "Nothing\nCheck White\nCheck Black\nNothing\nCheckmate White\n");

    assert_eq!(snap.global.total, 5);
    assert_eq!(snap.nothing.total + snap.check.total + snap.checkmate.total, 4);
    assert_eq!(snap.check, CounterTriple { total: 2, correct: 1, correct_with_color: 1 });
    assert_eq!(snap.checkmate, CounterTriple { total: 1, correct: 0, correct_with_color: 0 });
    assert_eq!(snap.check_family, CounterTriple { total: 3, correct: 3, correct_with_color: 2 });
}

#[test]
fn rerunning_same_streams_is_idempotent() {
    let dataset = [
        line("Check", Some("White")),
        line("Nothing", None),
        line("Checkmate", Some("White")),
    ]
    .concat();
    let predictions = "Check White\nCheck\nCheckmate Black\n";

    let first = score_exact(&dataset, predictions);
    let second = score_exact(&dataset, predictions);
    assert_eq!(first, second);
}

// ---------------------------------------------------------------------------
// Color rules
// ---------------------------------------------------------------------------

#[test]
fn exact_rule_credits_matching_color_tokens() {
    let dataset = [line("Check", Some("White")), line("Checkmate", Some("Black"))].concat();
    let snap = score_exact(&dataset, "Check White\nCheckmate White\n");

    assert_eq!(snap.global, CounterTriple { total: 2, correct: 2, correct_with_color: 1 });
}

#[test]
fn legacy_rule_credits_expected_literal_one() {
    let dataset = [line("Check", Some("1")), line("Checkmate", Some("Black"))].concat();
    let scored = score(
        &dataset,
        "Check 0\nCheckmate Black\n",
        ColorRule::Legacy,
        MismatchPolicy::Pad,
    );

    let snap = scored.summary.snapshot;
    assert_eq!(snap.global, CounterTriple { total: 2, correct: 2, correct_with_color: 1 });
    assert_eq!(snap.check.correct_with_color, 1);
    assert_eq!(snap.checkmate.correct_with_color, 0);
}

// ---------------------------------------------------------------------------
// Stream mismatches and malformed input
// ---------------------------------------------------------------------------

#[test]
fn padding_scores_extra_predictions_globally() {
    let scored = score(&line("Check", None), "Check\nCheck\n", ColorRule::Exact, MismatchPolicy::Pad);

    assert_eq!(scored.summary.padded, 1);
    assert_eq!(scored.summary.snapshot.global, CounterTriple { total: 2, correct: 1, correct_with_color: 0 });
    assert_eq!(scored.summary.snapshot.check.total, 1);
}

#[test]
fn truncation_stops_at_dataset_end() {
    let scored = score(&line("Check", None), "Check\nCheck\n", ColorRule::Exact, MismatchPolicy::Truncate);

    assert!(scored.summary.truncated);
    assert_eq!(scored.summary.processed, 1);
    assert!(scored.report.contains("RESULTS:"));
}

#[test]
fn malformed_dataset_line_is_skipped() {
    let dataset = format!("not enough fields\n{}", line("Nothing", None));
    let scored = score(&dataset, "Nothing\nNothing\n", ColorRule::Exact, MismatchPolicy::Pad);

    assert_eq!(scored.summary.skipped, 1);
    assert_eq!(scored.summary.processed, 1);
    assert_eq!(scored.summary.snapshot.nothing, CounterPair { total: 1, correct: 1 });
}
