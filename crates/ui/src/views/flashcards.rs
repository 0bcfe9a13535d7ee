use dioxus::prelude::*;
use services::FlashcardSession;

use crate::vm::{
    FlashcardIntent, FlashcardVm, PipVm, apply_flashcard_intent, flashcard_intent_for_key,
    map_flashcard_session,
};

/// Apply `intent` and schedule the deferred commit of any slide it starts.
fn navigate(mut session: Signal<Option<FlashcardSession>>, intent: FlashcardIntent) {
    let ticket = {
        let mut guard = session.write();
        let Some(active) = guard.as_mut() else {
            return;
        };
        match apply_flashcard_intent(active, intent) {
            Ok(ticket) => ticket,
            Err(err) => {
                log::debug!("flashcard intent {intent:?} rejected: {err}");
                return;
            }
        }
    };

    if let Some(ticket) = ticket {
        spawn(async move {
            tokio::time::sleep(ticket.sleep_for()).await;
            if let Some(active) = session.write().as_mut() {
                active.complete_transition(ticket);
            }
        });
    }
}

fn on_stage_key(session: Signal<Option<FlashcardSession>>, evt: &KeyboardEvent) {
    let Some(intent) = flashcard_intent_for_key(&evt.data.key()) else {
        return;
    };
    evt.prevent_default();
    navigate(session, intent);
}

#[component]
pub fn FlashcardsPanel(session: Signal<Option<FlashcardSession>>) -> Element {
    let mut focus_mode = use_signal(|| false);
    let vm = session.read().as_ref().and_then(map_flashcard_session);

    let Some(vm) = vm else {
        return rsx! {
            section { class: "panel flashcards-panel",
                h3 { class: "panel-title", "Flashcards" }
                p { class: "panel-empty", "No flashcards yet. Generate some from your text." }
            }
        };
    };

    rsx! {
        section { class: "panel flashcards-panel",
            header { class: "panel-header",
                h3 { class: "panel-title", "Flashcards" }
                button {
                    class: "btn btn-ghost",
                    r#type: "button",
                    onclick: move |_| focus_mode.set(true),
                    "Focus"
                }
            }
            FlashcardStage { session, vm: vm.clone() }
            if focus_mode() {
                div { class: "focus-overlay",
                    div { class: "focus-frame",
                        button {
                            class: "btn btn-ghost focus-close",
                            r#type: "button",
                            onclick: move |_| focus_mode.set(false),
                            "Exit focus"
                        }
                        FlashcardStage { session, vm }
                    }
                }
            }
        }
    }
}

#[component]
fn FlashcardStage(session: Signal<Option<FlashcardSession>>, vm: FlashcardVm) -> Element {
    let flip_class = if vm.revealed { "card card--flipped" } else { "card" };
    let stack = (0..vm.stack_depth).map(|depth| {
        let class = format!("card-shadow card-shadow--{}", depth + 1);
        rsx! {
            div { key: "{depth}", class: "{class}" }
        }
    });

    rsx! {
        div {
            class: "flashcard-stage",
            tabindex: "0",
            onkeydown: move |evt| on_stage_key(session, &evt),
            p { class: "progress-label", "{vm.progress_label}" }
            div { class: "card-stack {vm.slide_class}",
                {stack}
                div {
                    class: "{flip_class}",
                    onclick: move |_| navigate(session, FlashcardIntent::Flip),
                    div { class: "card-face card-face--front",
                        div { class: "card-text", dangerous_inner_html: "{vm.question_html}" }
                    }
                    div { class: "card-face card-face--back",
                        div { class: "card-text", dangerous_inner_html: "{vm.answer_html}" }
                    }
                }
            }
            p { class: "card-hint",
                if vm.revealed {
                    "Click the card to see the question"
                } else {
                    "Click the card to reveal the answer"
                }
            }
            div { class: "stage-nav",
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    disabled: !vm.can_prev,
                    onclick: move |_| navigate(session, FlashcardIntent::Prev),
                    "Previous"
                }
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    disabled: !vm.can_next,
                    onclick: move |_| navigate(session, FlashcardIntent::Next),
                    "Next"
                }
            }
            PipGrid {
                pips: vm.pips,
                on_jump: move |index| navigate(session, FlashcardIntent::Jump(index)),
            }
        }
    }
}

#[component]
pub fn PipGrid(pips: Vec<PipVm>, on_jump: EventHandler<usize>) -> Element {
    rsx! {
        div { class: "pip-grid",
            for pip in pips {
                button {
                    key: "{pip.index}",
                    class: if pip.current { "pip pip--current" } else { "pip" },
                    r#type: "button",
                    onclick: move |_| on_jump.call(pip.index),
                    "{pip.label}"
                }
            }
        }
    }
}
