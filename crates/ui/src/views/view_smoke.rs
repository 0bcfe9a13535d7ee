use crate::context::StudyPreload;

use super::test_harness::{ViewKind, sample_flashcards, sample_quiz, setup_view_harness, test_service};

#[tokio::test(flavor = "current_thread")]
async fn study_view_smoke_renders_preloaded_flashcards() {
    let preload = StudyPreload {
        source: "Ownership moves values".to_string(),
        flashcards: sample_flashcards(),
        quiz: Vec::new(),
    };
    let mut harness = setup_view_harness(ViewKind::Study, preload, true);

    harness.rebuild();
    let html = harness.render();
    for expected in [
        "Words: 3",
        "Card 1 of 2",
        "Click the card to reveal the answer",
        "Generate Flashcards",
        "Generate Quiz",
    ] {
        assert!(html.contains(expected), "missing {expected} in {html}");
    }
    assert!(html.contains("mutable"), "missing card text in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn study_view_smoke_opens_quiz_tab_for_quiz_only_preload() {
    let preload = StudyPreload {
        quiz: sample_quiz(),
        ..StudyPreload::default()
    };
    let mut harness = setup_view_harness(ViewKind::Study, preload, true);

    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Question 1 of 2"), "missing progress in {html}");
    assert!(html.contains("Q1:"), "missing question number in {html}");
    assert!(html.contains("Submit Answer"), "missing submit in {html}");
    assert!(!html.contains("Your Score"), "score shown too early in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn study_view_smoke_explains_disabled_generation() {
    let mut harness = setup_view_harness(ViewKind::Study, StudyPreload::default(), false);

    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("SMARTCARDS_AI_API_KEY"), "missing notice in {html}");
    assert!(html.contains("No flashcards yet"), "missing empty state in {html}");
    assert!(html.contains("Words: 0"), "missing word count in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn flashcards_panel_smoke_renders_revealed_last_card() {
    let mut session = test_service().load_flashcards(sample_flashcards());
    session.jump_to(1).unwrap();
    session.toggle_reveal().unwrap();
    let mut harness = setup_view_harness(ViewKind::Flashcards(session), StudyPreload::default(), true);

    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Card 2 of 2"), "missing progress in {html}");
    assert!(html.contains("card--flipped"), "missing flipped card in {html}");
    assert!(html.contains("Click the card to see the question"), "missing hint in {html}");
    assert!(html.contains("pip pip--current"), "missing current pip in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn flashcards_panel_smoke_marks_pending_slide() {
    let mut session = test_service().load_flashcards(sample_flashcards());
    assert!(session.go_next().is_some());
    let mut harness = setup_view_harness(ViewKind::Flashcards(session), StudyPreload::default(), true);

    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("slide-out-right"), "missing slide class in {html}");
    assert!(html.contains("Card 1 of 2"), "slide committed early in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_panel_smoke_renders_feedback_and_score() {
    let mut session = test_service().load_quiz(sample_quiz());
    session.jump_to(1).unwrap();
    session.select_option("match").unwrap();
    session.submit_answer().unwrap();
    let mut harness = setup_view_harness(ViewKind::Quiz(session), StudyPreload::default(), true);

    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Correct!"), "missing feedback in {html}");
    assert!(html.contains("Your Score: 1 / 2"), "missing score in {html}");
    assert!(html.contains("Reset Quiz"), "missing reset in {html}");
    assert!(html.contains("option-1"), "missing radio group in {html}");
    assert!(!html.contains("Submit Answer"), "submit offered on answered question in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_panel_smoke_names_correct_answer_on_miss() {
    let mut session = test_service().load_quiz(sample_quiz());
    session.select_option("u8").unwrap();
    session.submit_answer().unwrap();
    let mut harness = setup_view_harness(ViewKind::Quiz(session), StudyPreload::default(), true);

    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Wrong! Correct answer: Vec"), "missing feedback in {html}");
    assert!(!html.contains("Your Score"), "score shown too early in {html}");
}
