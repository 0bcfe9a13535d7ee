use std::sync::Arc;

use async_trait::async_trait;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use services::{
    Clock, FlashcardSession, GenerationError, QuizSession, StudyService, StudySetGenerator,
};
use study_core::model::{Flashcard, GenerationSettings, QuizQuestion};
use study_core::time::fixed_now;

use crate::context::{StudyPreload, UiApp, build_app_context};
use crate::views::StudyView;
use crate::views::flashcards::FlashcardsPanel;
use crate::views::quiz::QuizPanel;

struct CannedGenerator;

#[async_trait]
impl StudySetGenerator for CannedGenerator {
    async fn flashcards(&self, _text: &str, _count: u32) -> Result<Vec<Flashcard>, GenerationError> {
        Ok(sample_flashcards())
    }

    async fn quiz(&self, _text: &str, _count: u32) -> Result<Vec<QuizQuestion>, GenerationError> {
        Ok(sample_quiz())
    }
}

#[derive(Clone)]
struct TestApp {
    generation_enabled: bool,
    preload: StudyPreload,
    study_service: Arc<StudyService>,
}

impl UiApp for TestApp {
    fn settings(&self) -> GenerationSettings {
        GenerationSettings::default()
    }

    fn generation_enabled(&self) -> bool {
        self.generation_enabled
    }

    fn preload(&self) -> StudyPreload {
        self.preload.clone()
    }

    fn study_service(&self) -> Arc<StudyService> {
        Arc::clone(&self.study_service)
    }
}

pub fn sample_flashcards() -> Vec<Flashcard> {
    vec![
        Flashcard::new("What does `&mut` grant?", "Exclusive **mutable** access"),
        Flashcard::new("What does `Drop` run?", "Cleanup when a value goes out of scope"),
    ]
}

pub fn sample_quiz() -> Vec<QuizQuestion> {
    vec![
        QuizQuestion::new(
            "Which type is growable?",
            ["[u8; 4]", "Vec<u8>", "&[u8]", "u8"],
            "Vec<u8>",
        ),
        QuizQuestion::new(
            "Which keyword starts a pattern match?",
            ["if", "match", "loop", "where"],
            "match",
        ),
    ]
}

#[derive(Clone)]
pub enum ViewKind {
    Study,
    Flashcards(FlashcardSession),
    Quiz(QuizSession),
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view.clone());
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Study => rsx! { StudyView {} },
        ViewKind::Flashcards(_) => rsx! { FlashcardsHarness {} },
        ViewKind::Quiz(_) => rsx! { QuizHarness {} },
    }
}

#[component]
fn FlashcardsHarness() -> Element {
    let view = use_context::<ViewKind>();
    let session = use_signal(move || match view {
        ViewKind::Flashcards(session) => Some(session),
        _ => None,
    });
    rsx! { FlashcardsPanel { session } }
}

#[component]
fn QuizHarness() -> Element {
    let view = use_context::<ViewKind>();
    let session = use_signal(move || match view {
        ViewKind::Quiz(session) => Some(session),
        _ => None,
    });
    rsx! { QuizPanel { session } }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn test_service() -> StudyService {
    StudyService::new(Clock::fixed(fixed_now()), Arc::new(CannedGenerator))
}

pub fn setup_view_harness(view: ViewKind, preload: StudyPreload, generation_enabled: bool) -> ViewHarness {
    let app = Arc::new(TestApp {
        generation_enabled,
        preload,
        study_service: Arc::new(test_service()),
    });

    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { app, view });
    ViewHarness { dom }
}
