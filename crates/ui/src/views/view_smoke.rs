use chrono::Duration;
use river_core::model::{AnswerKind, AnswerRecord, GameOutcome, GameSummary};
use river_core::time::fixed_now;

use super::test_harness::{
    ViewKind, quick_rules, setup_view_harness, setup_view_harness_with_rules,
};
use crate::vm::{GameIntent, SummaryVm};

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_rules_and_start() {
    let mut harness = setup_view_harness(ViewKind::Home);
    harness.rebuild();
    let html = harness.render();
    assert!(
        html.contains("Professor Dave&#39;s River Adventure")
            || html.contains("Professor Dave's River Adventure"),
        "missing title in {html}"
    );
    assert!(html.contains("Start Adventure"), "missing start in {html}");
    assert!(html.contains("You have 3 lives"), "missing lives rule in {html}");
    assert!(html.contains("30 seconds"), "missing timer rule in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn play_view_smoke_renders_first_question() {
    let mut harness = setup_view_harness(ViewKind::Play);
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Question 1 of 8"), "missing question label in {html}");
    assert!(html.contains("0 / 8"), "missing score in {html}");
    assert!(html.contains("0:30"), "missing timer in {html}");
    assert!(html.contains("🐸"), "missing frog in {html}");
    assert!(html.contains("🏁"), "missing goal in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn play_view_correct_answer_shows_feedback() {
    let mut harness = setup_view_harness(ViewKind::Play);
    harness.rebuild();
    harness.drive_async().await;

    let option = harness.correct_option();
    harness.dispatch(GameIntent::Choose(option));
    let html = harness.render();
    assert!(html.contains("Great job!"), "missing feedback in {html}");
    assert!(html.contains("1 / 8"), "missing updated score in {html}");
    assert!(html.contains("option--correct"), "missing highlight in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn play_view_wrong_answer_then_pause() {
    let mut harness = setup_view_harness(ViewKind::Play);
    harness.rebuild();
    harness.drive_async().await;

    let option = harness.wrong_option();
    harness.dispatch(GameIntent::Choose(option));
    let html = harness.render();
    assert!(html.contains("Oops!"), "missing wrong feedback in {html}");
    assert!(html.contains("option--wrong"), "missing highlight in {html}");

    harness.dispatch(GameIntent::TogglePause);
    let html = harness.render();
    assert!(html.contains("Paused. Press P or Space to resume."), "missing pause banner in {html}");
    assert!(html.contains("Resume"), "missing resume button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn play_view_advances_after_feedback_delay() {
    let mut harness = setup_view_harness_with_rules(ViewKind::Play, quick_rules());
    harness.rebuild();
    harness.drive_async().await;

    let option = harness.correct_option();
    harness.dispatch(GameIntent::Choose(option));
    tokio::time::sleep(std::time::Duration::from_millis(150)).await;
    for _ in 0..4 {
        harness.drive_async().await;
    }

    let html = harness.render();
    assert!(html.contains("Question 2 of 8"), "did not advance in {html}");
    assert!(!html.contains("Great job!"), "stale feedback in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn play_view_reset_starts_over() {
    let mut harness = setup_view_harness(ViewKind::Play);
    harness.rebuild();
    harness.drive_async().await;

    let option = harness.correct_option();
    harness.dispatch(GameIntent::Choose(option));
    harness.dispatch(GameIntent::Reset);
    let html = harness.render();
    assert!(html.contains("Question 1 of 8"), "missing fresh question in {html}");
    assert!(html.contains("0 / 8"), "score not reset in {html}");
    assert!(!html.contains("Great job!"), "stale feedback in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn preferences_panel_smoke_renders_toggles() {
    let mut harness = setup_view_harness(ViewKind::Preferences);
    harness.rebuild();
    let html = harness.render();
    for label in ["Reduced motion", "High contrast", "Sound effects", "Read questions aloud"] {
        assert!(html.contains(label), "missing {label} in {html}");
    }
    assert!(html.contains("Text size"), "missing font size in {html}");
    assert!(html.contains("Medium"), "missing font tier in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn summary_card_smoke_renders_win() {
    let start = fixed_now();
    let records: Vec<_> = (0..8)
        .map(|index| AnswerRecord::new(index, AnswerKind::Correct, start))
        .collect();
    let summary = GameSummary::from_records(
        GameOutcome::Won,
        8,
        3,
        start,
        start + Duration::seconds(95),
        &records,
    )
    .unwrap();

    let mut harness = setup_view_harness(ViewKind::Summary(SummaryVm::from(&summary)));
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Congratulations!"), "missing title in {html}");
    assert!(
        html.contains("You answered 8 out of 8 questions correctly!"),
        "missing score in {html}"
    );
    assert!(html.contains("1m 35s"), "missing duration in {html}");
    assert!(html.contains("Play Again"), "missing replay in {html}");
}
