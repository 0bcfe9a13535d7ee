use dioxus::prelude::*;
use services::QuizSession;

use super::flashcards::PipGrid;
use super::state::ViewError;
use crate::vm::{QuizIntent, QuizVm, apply_quiz_intent, map_quiz_session};

/// Apply `intent`; a rejection is kept in `notice` until the next accepted intent.
fn dispatch(
    mut session: Signal<Option<QuizSession>>,
    mut notice: Signal<Option<ViewError>>,
    intent: QuizIntent,
) {
    let mut guard = session.write();
    let Some(active) = guard.as_mut() else {
        return;
    };
    match apply_quiz_intent(active, intent.clone()) {
        Ok(()) => notice.set(None),
        Err(err) => {
            log::debug!("quiz intent {intent:?} rejected: {err}");
            notice.set(Some(ViewError::from(err)));
        }
    }
}

#[component]
pub fn QuizPanel(session: Signal<Option<QuizSession>>) -> Element {
    let mut focus_mode = use_signal(|| false);
    let vm = session.read().as_ref().and_then(map_quiz_session);

    let Some(vm) = vm else {
        return rsx! {
            section { class: "panel quiz-panel",
                h3 { class: "panel-title", "Quiz" }
                p { class: "panel-empty", "No quiz yet. Generate one from your text." }
            }
        };
    };

    rsx! {
        section { class: "panel quiz-panel",
            header { class: "panel-header",
                h3 { class: "panel-title", "Quiz" }
                button {
                    class: "btn btn-ghost",
                    r#type: "button",
                    onclick: move |_| focus_mode.set(true),
                    "Focus"
                }
            }
            QuizStage { session, vm: vm.clone() }
            if focus_mode() {
                div { class: "focus-overlay",
                    div { class: "focus-frame",
                        button {
                            class: "btn btn-ghost focus-close",
                            r#type: "button",
                            onclick: move |_| focus_mode.set(false),
                            "Exit focus"
                        }
                        QuizStage { session, vm }
                    }
                }
            }
        }
    }
}

#[component]
fn QuizStage(session: Signal<Option<QuizSession>>, vm: QuizVm) -> Element {
    let notice = use_signal(|| None::<ViewError>);
    let locked = vm.locked;
    let options = vm.options.iter().map(|option| {
        let label = option.label.clone();
        let value = option.label.clone();
        let name = vm.radio_name.clone();
        rsx! {
            label { key: "{label}", class: "quiz-option",
                input {
                    r#type: "radio",
                    name: "{name}",
                    value: "{value}",
                    checked: option.checked,
                    disabled: locked,
                    onchange: move |_| dispatch(session, notice, QuizIntent::Select(value.clone())),
                }
                span { "{label}" }
            }
        }
    });

    rsx! {
        div { class: "quiz-stage",
            p { class: "progress-label", "{vm.progress_label}" }
            div { class: "quiz-question",
                span { class: "quiz-number", "{vm.question_number}" }
                div { class: "card-text", dangerous_inner_html: "{vm.question_html}" }
            }
            fieldset { class: "quiz-options", disabled: locked,
                {options}
            }
            if let Some(feedback) = vm.feedback.as_ref() {
                p {
                    class: if feedback.correct { "quiz-feedback quiz-feedback--correct" } else { "quiz-feedback quiz-feedback--wrong" },
                    "{feedback.message}"
                }
            }
            if let Some(err) = notice() {
                p { class: "notice notice--error", "{err.message()}" }
            }
            div { class: "stage-nav",
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    disabled: !vm.can_prev,
                    onclick: move |_| dispatch(session, notice, QuizIntent::Prev),
                    "Previous"
                }
                if !locked {
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        onclick: move |_| dispatch(session, notice, QuizIntent::Submit),
                        "Submit Answer"
                    }
                }
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    disabled: !vm.can_next,
                    onclick: move |_| dispatch(session, notice, QuizIntent::Next),
                    "Next"
                }
            }
            PipGrid {
                pips: vm.pips.clone(),
                on_jump: move |index| dispatch(session, notice, QuizIntent::Jump(index)),
            }
            if let Some(score) = vm.score_label.as_ref() {
                div { class: "quiz-score",
                    p { class: "quiz-score-label", "{score}" }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| dispatch(session, notice, QuizIntent::Reset),
                        "Reset Quiz"
                    }
                }
            }
        }
    }
}
