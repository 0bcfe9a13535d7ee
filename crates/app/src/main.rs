use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::Parser;
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{Clock, OpenAiGenerator, StudyService, settings_from_env};
use study_core::model::{GenerationSettings, GenerationSettingsDraft, parse_flashcards, parse_quiz};
use ui::{App, StudyPreload, UiApp, build_app_context};

/// Turn study text into flashcards and quizzes.
#[derive(Parser, Debug)]
#[command(name = "smartcards", version, about, long_about = None)]
struct Args {
    /// Text file to prefill the study text with.
    #[arg(long)]
    source: Option<PathBuf>,
    /// JSON list of `{question, answer}` objects to open as flashcards.
    #[arg(long)]
    flashcards: Option<PathBuf>,
    /// JSON list of `{question, options, correct_answer}` objects to open as a quiz.
    #[arg(long)]
    quiz: Option<PathBuf>,
    /// Flashcards to request per generation (1-50). Overrides SMARTCARDS_FLASHCARD_COUNT.
    #[arg(long)]
    flashcard_count: Option<u32>,
    /// Quiz questions to request per generation (1-50). Overrides SMARTCARDS_QUIZ_COUNT.
    #[arg(long)]
    quiz_count: Option<u32>,
    /// Chat model name. Overrides SMARTCARDS_AI_MODEL.
    #[arg(long)]
    model: Option<String>,
    /// OpenAI-compatible API base URL. Overrides SMARTCARDS_AI_BASE_URL.
    #[arg(long)]
    base_url: Option<String>,
}

impl Args {
    fn settings_draft(&self) -> GenerationSettingsDraft {
        GenerationSettingsDraft {
            api_key: None,
            api_model: self.model.clone(),
            api_base_url: self.base_url.clone(),
            flashcard_count: self.flashcard_count,
            quiz_count: self.quiz_count,
        }
    }
}

struct DesktopApp {
    settings: GenerationSettings,
    generation_enabled: bool,
    preload: StudyPreload,
    study_service: Arc<StudyService>,
}

impl UiApp for DesktopApp {
    fn settings(&self) -> GenerationSettings {
        self.settings.clone()
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

fn read_file(path: &Path) -> Result<String, Box<dyn std::error::Error>> {
    fs::read_to_string(path).map_err(|err| format!("cannot read {}: {err}", path.display()).into())
}

fn load_preload(args: &Args) -> Result<StudyPreload, Box<dyn std::error::Error>> {
    let mut preload = StudyPreload::default();

    if let Some(path) = args.source.as_deref() {
        preload.source = read_file(path)?;
    }
    if let Some(path) = args.flashcards.as_deref() {
        preload.flashcards = parse_flashcards(&read_file(path)?)
            .map_err(|err| format!("invalid flashcards in {}: {err}", path.display()))?;
        log::info!("loaded {} flashcards from {}", preload.flashcards.len(), path.display());
    }
    if let Some(path) = args.quiz.as_deref() {
        preload.quiz = parse_quiz(&read_file(path)?)
            .map_err(|err| format!("invalid quiz in {}: {err}", path.display()))?;
        log::info!("loaded {} quiz questions from {}", preload.quiz.len(), path.display());
    }

    Ok(preload)
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let settings = args.settings_draft().or(settings_from_env()).validate()?;
    let preload = load_preload(&args)?;

    let generator = OpenAiGenerator::new(&settings);
    let generation_enabled = generator.enabled();
    if !generation_enabled {
        log::warn!("SMARTCARDS_AI_API_KEY is not set; generation is disabled");
    }
    let study_service = Arc::new(StudyService::new(Clock::default(), Arc::new(generator)));

    let app = DesktopApp {
        settings,
        generation_enabled,
        preload,
        study_service,
    };
    let app: Arc<dyn UiApp> = Arc::new(app);
    let context = build_app_context(&app);

    // Some window managers default dioxus/tao windows to always-on-top.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("SmartCards")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    env_logger::init();

    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
