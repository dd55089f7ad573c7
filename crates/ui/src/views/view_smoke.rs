use std::time::Duration;

use quiz_core::QuizSettings;
use services::{QuizPhase, TimerKind};

use crate::vm::QuizIntent;

use super::test_harness::{ViewHarness, setup_view_harness, setup_view_harness_with_settings};

fn expression(harness: &ViewHarness) -> String {
    harness.with_vm(|vm| vm.state().current_problem().expression())
}

fn correct_text(harness: &ViewHarness) -> String {
    harness.with_vm(|vm| vm.state().current_problem().correct_answer().to_string())
}

#[tokio::test(flavor = "current_thread")]
async fn start_screen_smoke_renders_title_and_start() {
    let harness = setup_view_harness(1, false);
    let html = harness.render();
    assert!(html.contains("Math-o-Matic"), "missing title in {html}");
    assert!(html.contains("Start"), "missing start in {html}");
    assert!(html.contains("hidden"), "input should be hidden in {html}");
    assert!(!html.contains("problem-container"), "unexpected problem in {html}");
    assert!(!html.contains("Check Answer"), "unexpected controls in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn started_quiz_smoke_renders_problem_and_controls() {
    let mut harness = setup_view_harness(2, false);
    harness.dispatch(QuizIntent::Start);

    let expression = expression(&harness);
    let html = harness.render();
    assert!(html.contains(&expression), "missing {expression} in {html}");
    assert!(html.contains("Check Answer"), "missing submit in {html}");
    assert!(html.contains("New Problem"), "missing new problem in {html}");
    assert!(!html.contains("Math-o-Matic"), "title should be gone in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn wrong_answer_smoke_shows_banner_and_arms_banner_timer() {
    let mut harness = setup_view_harness(3, false);
    harness.dispatch(QuizIntent::Start);
    harness.dispatch(QuizIntent::EditResponse("-999".to_string()));
    harness.dispatch(QuizIntent::Submit);

    let html = harness.render();
    assert!(html.contains("Too Low."), "missing banner in {html}");
    assert!(html.contains("too-low"), "missing banner class in {html}");

    let tickets = harness.timer_tickets();
    assert_eq!(tickets.len(), 1);
    assert_eq!(tickets[0].kind(), TimerKind::ClearFeedback);
}

#[tokio::test(flavor = "current_thread")]
async fn correct_answer_smoke_locks_new_problem_until_advance() {
    let mut harness = setup_view_harness(4, false);
    harness.dispatch(QuizIntent::Start);
    let answer = correct_text(&harness);
    harness.dispatch(QuizIntent::EditResponse(answer));
    harness.dispatch(QuizIntent::Submit);

    let html = harness.render();
    assert!(html.contains("Correct!"), "missing banner in {html}");
    assert!(html.contains("input-accepted"), "missing accepted input in {html}");
    assert_eq!(
        harness.with_vm(|vm| vm.phase()),
        QuizPhase::CorrectPendingAdvance
    );
    assert_eq!(harness.timer_tickets().len(), 2);

    let before = harness.with_vm(|vm| vm.state().clone());
    harness.dispatch(QuizIntent::NewProblem);
    assert_eq!(harness.with_vm(|vm| vm.state().clone()), before);
}

#[tokio::test(flavor = "current_thread")]
async fn new_problem_smoke_cancels_banner_task() {
    let mut harness = setup_view_harness(5, false);
    harness.dispatch(QuizIntent::Start);
    harness.dispatch(QuizIntent::EditResponse("abc".to_string()));
    harness.dispatch(QuizIntent::Submit);
    assert!(harness.render().contains("Invalid Input."));

    harness.dispatch(QuizIntent::NewProblem);
    let html = harness.render();
    assert!(!html.contains("Invalid Input."), "stale banner in {html}");
    assert!(harness.timer_tickets().is_empty());
}

#[tokio::test(flavor = "current_thread")]
async fn debug_panel_smoke_renders_snapshot() {
    let mut harness = setup_view_harness(6, true);
    harness.dispatch(QuizIntent::Start);
    let html = harness.render();
    assert!(html.contains("States as of"), "missing snapshot in {html}");
    assert!(html.contains("game_started = true"), "missing field in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn timer_tasks_smoke_hide_banner_then_advance() {
    let settings = QuizSettings::new(20, 60).unwrap();
    let mut harness = setup_view_harness_with_settings(7, settings);
    harness.dispatch(QuizIntent::Start);
    let answer = correct_text(&harness);
    harness.dispatch(QuizIntent::EditResponse(answer));
    harness.dispatch(QuizIntent::Submit);
    let solved = harness.with_vm(|vm| vm.state().current_problem().clone());

    let banner_hidden = harness
        .run_until(Duration::from_secs(2), |h| {
            h.with_vm(|vm| !vm.state().feedback_visible())
        })
        .await;
    assert!(banner_hidden, "clear-feedback task never fired");
    assert!(harness.with_vm(|vm| vm.state().correct_answer_pending()));
    assert!(!harness.render().contains("Correct!"));

    let advanced = harness
        .run_until(Duration::from_secs(2), |h| {
            h.with_vm(|vm| !vm.state().correct_answer_pending())
        })
        .await;
    assert!(advanced, "auto-advance task never fired");

    harness.with_vm(|vm| {
        let state = vm.state();
        assert_ne!(state.current_problem(), &solved);
        assert_eq!(state.current_problem().submitted_answer(), None);
        assert!(!state.feedback_visible());
        assert_eq!(state.feedback_kind(), None);
        assert_eq!(state.response_text(), "");
        assert_eq!(vm.phase(), QuizPhase::Active);
    });
    assert!(harness.timer_tickets().is_empty());
    assert!(!harness.with_vm(|vm| vm.render().controls_disabled));
    let html = harness.render();
    assert!(!html.contains("input-accepted"), "stale accepted class in {html}");
}
