use services::GenerationError;
use study_core::{SessionError, TransitionRejection};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    GenerationDisabled,
    EmptySource,
    Generation,
    Parse,
    NoSelection,
    Session,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::GenerationDisabled => {
                "Generation is not configured. Set SMARTCARDS_AI_API_KEY and restart."
            }
            Self::EmptySource => "Paste some text to study first.",
            Self::Generation => "Generation failed. Please try again.",
            Self::Parse => "The generator answered with something unreadable. Please try again.",
            Self::NoSelection => "Choose an answer before submitting.",
            Self::Session => "That action is not available right now.",
        }
    }
}

impl From<&GenerationError> for ViewError {
    fn from(err: &GenerationError) -> Self {
        match err {
            GenerationError::Disabled => Self::GenerationDisabled,
            GenerationError::EmptySource => Self::EmptySource,
            GenerationError::Parse(_) => Self::Parse,
            _ => Self::Generation,
        }
    }
}

impl From<SessionError> for ViewError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::InvalidTransition(TransitionRejection::NoSelection) => Self::NoSelection,
            _ => Self::Session,
        }
    }
}

/// Progress of one generate request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GenerateState {
    #[default]
    Idle,
    Generating,
    Error(ViewError),
}

impl GenerateState {
    #[must_use]
    pub fn is_busy(self) -> bool {
        self == Self::Generating
    }

    /// State to show once a generate click is accepted; `None` while a
    /// request is already running.
    #[must_use]
    pub fn begin(self) -> Option<Self> {
        (!self.is_busy()).then_some(Self::Generating)
    }
}
