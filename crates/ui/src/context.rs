use std::sync::Arc;

use services::StudyService;
use study_core::model::{Flashcard, GenerationSettings, QuizQuestion};

/// Study material handed to the UI at launch, e.g. from files on the command line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StudyPreload {
    pub source: String,
    pub flashcards: Vec<Flashcard>,
    pub quiz: Vec<QuizQuestion>,
}

pub trait UiApp: Send + Sync {
    fn settings(&self) -> GenerationSettings;
    fn generation_enabled(&self) -> bool;
    fn preload(&self) -> StudyPreload;

    fn study_service(&self) -> Arc<StudyService>;
}

#[derive(Clone)]
pub struct AppContext {
    settings: GenerationSettings,
    generation_enabled: bool,
    preload: StudyPreload,

    study_service: Arc<StudyService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            settings: app.settings(),
            generation_enabled: app.generation_enabled(),
            preload: app.preload(),
            study_service: app.study_service(),
        }
    }

    #[must_use]
    pub fn settings(&self) -> &GenerationSettings {
        &self.settings
    }

    #[must_use]
    pub fn generation_enabled(&self) -> bool {
        self.generation_enabled
    }

    #[must_use]
    pub fn preload(&self) -> &StudyPreload {
        &self.preload
    }

    #[must_use]
    pub fn study_service(&self) -> Arc<StudyService> {
        Arc::clone(&self.study_service)
    }
}

// Provided by the composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
