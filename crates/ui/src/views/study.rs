use dioxus::prelude::*;
use study_core::model::MAX_ITEM_COUNT;

use super::flashcards::FlashcardsPanel;
use super::quiz::QuizPanel;
use super::state::{GenerateState, ViewError};
use crate::context::AppContext;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum StudyTab {
    Flashcards,
    Quiz,
}

fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Parse a count input, keeping the previous value for junk.
fn parse_count(raw: &str, previous: u32) -> u32 {
    raw.trim()
        .parse::<u32>()
        .map_or(previous, |count| count.clamp(1, MAX_ITEM_COUNT))
}

#[component]
pub fn StudyView() -> Element {
    let ctx = use_context::<AppContext>();
    let service = ctx.study_service();
    let preload = ctx.preload();
    let settings = ctx.settings();
    let generation_enabled = ctx.generation_enabled();

    let mut source = use_signal(|| preload.source.clone());
    let flashcards = use_signal(|| {
        (!preload.flashcards.is_empty()).then(|| service.load_flashcards(preload.flashcards.clone()))
    });
    let quiz = use_signal(|| {
        (!preload.quiz.is_empty()).then(|| service.load_quiz(preload.quiz.clone()))
    });
    let mut flashcard_count = use_signal(|| settings.flashcard_count());
    let mut quiz_count = use_signal(|| settings.quiz_count());
    let mut tab = use_signal(|| {
        if flashcards.peek().is_none() && quiz.peek().is_some() {
            StudyTab::Quiz
        } else {
            StudyTab::Flashcards
        }
    });
    let generate_state = use_signal(GenerateState::default);

    let service_for_cards = service.clone();
    let generate_flashcards = move |_: MouseEvent| {
        let service = service_for_cards.clone();
        let mut flashcards = flashcards;
        let mut generate_state = generate_state;
        let Some(started) = generate_state.peek().begin() else {
            return;
        };
        generate_state.set(started);
        let text = source.read().clone();
        let count = flashcard_count();
        tab.set(StudyTab::Flashcards);
        spawn(async move {
            match service.start_flashcards(&text, count).await {
                Ok(session) => {
                    flashcards.set(Some(session));
                    generate_state.set(GenerateState::Idle);
                }
                Err(err) => {
                    log::warn!("flashcard generation failed: {err}");
                    generate_state.set(GenerateState::Error(ViewError::from(&err)));
                }
            }
        });
    };

    let generate_quiz = move |_: MouseEvent| {
        let service = service.clone();
        let mut quiz = quiz;
        let mut generate_state = generate_state;
        let Some(started) = generate_state.peek().begin() else {
            return;
        };
        generate_state.set(started);
        let text = source.read().clone();
        let count = quiz_count();
        tab.set(StudyTab::Quiz);
        spawn(async move {
            match service.start_quiz(&text, count).await {
                Ok(session) => {
                    quiz.set(Some(session));
                    generate_state.set(GenerateState::Idle);
                }
                Err(err) => {
                    log::warn!("quiz generation failed: {err}");
                    generate_state.set(GenerateState::Error(ViewError::from(&err)));
                }
            }
        });
    };

    let words = word_count(&source.read());
    let state = generate_state();
    let busy = state.is_busy() || !generation_enabled;
    let disabled_message = ViewError::GenerationDisabled.message();

    rsx! {
        div { class: "page study-page",
            header { class: "view-header",
                h2 { class: "view-title", "SmartCards" }
                p { class: "view-subtitle", "Paste your notes and turn them into flashcards or a quiz." }
            }
            div { class: "view-divider" }
            div { class: "study-layout",
                section { class: "panel source-panel",
                    label { class: "field-label", r#for: "source", "Study text" }
                    textarea {
                        id: "source",
                        class: "source-input",
                        rows: "14",
                        placeholder: "Paste the text you want to study...",
                        value: "{source}",
                        oninput: move |evt| source.set(evt.value()),
                    }
                    p { class: "word-count", "Words: {words}" }
                    div { class: "count-row",
                        label { class: "field-label", "Flashcards"
                            input {
                                r#type: "number",
                                min: "1",
                                max: "{MAX_ITEM_COUNT}",
                                value: "{flashcard_count}",
                                oninput: move |evt| {
                                    let next = parse_count(&evt.value(), flashcard_count());
                                    flashcard_count.set(next);
                                },
                            }
                        }
                        label { class: "field-label", "Quiz questions"
                            input {
                                r#type: "number",
                                min: "1",
                                max: "{MAX_ITEM_COUNT}",
                                value: "{quiz_count}",
                                oninput: move |evt| {
                                    let next = parse_count(&evt.value(), quiz_count());
                                    quiz_count.set(next);
                                },
                            }
                        }
                    }
                    div { class: "generate-row",
                        button {
                            class: "btn btn-primary",
                            r#type: "button",
                            disabled: busy,
                            onclick: generate_flashcards,
                            "Generate Flashcards"
                        }
                        button {
                            class: "btn btn-primary",
                            r#type: "button",
                            disabled: busy,
                            onclick: generate_quiz,
                            "Generate Quiz"
                        }
                    }
                    if !generation_enabled {
                        p { class: "notice", "{disabled_message}" }
                    }
                    match state {
                        GenerateState::Generating => rsx! {
                            p { class: "notice", "Generating..." }
                        },
                        GenerateState::Error(err) => rsx! {
                            p { class: "notice notice--error", "{err.message()}" }
                        },
                        GenerateState::Idle => rsx! {},
                    }
                }
                section { class: "study-output",
                    nav { class: "tabs",
                        button {
                            class: if tab() == StudyTab::Flashcards { "tab tab--active" } else { "tab" },
                            r#type: "button",
                            onclick: move |_| tab.set(StudyTab::Flashcards),
                            "Flashcards"
                        }
                        button {
                            class: if tab() == StudyTab::Quiz { "tab tab--active" } else { "tab" },
                            r#type: "button",
                            onclick: move |_| tab.set(StudyTab::Quiz),
                            "Quiz"
                        }
                    }
                    match tab() {
                        StudyTab::Flashcards => rsx! { FlashcardsPanel { session: flashcards } },
                        StudyTab::Quiz => rsx! { QuizPanel { session: quiz } },
                    }
                }
            }
        }
    }
}
