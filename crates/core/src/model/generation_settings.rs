use thiserror::Error;
use url::Url;

/// Items requested per generation when nothing else is configured.
pub const DEFAULT_ITEM_COUNT: u32 = 5;
pub const MAX_ITEM_COUNT: u32 = 50;

/// Validated configuration for the study-set generator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerationSettings {
    api_key: Option<String>,
    api_model: Option<String>,
    api_base_url: Option<String>,
    flashcard_count: u32,
    quiz_count: u32,
}

/// Raw, user- or environment-provided settings.
#[derive(Clone, Debug, Default)]
pub struct GenerationSettingsDraft {
    pub api_key: Option<String>,
    pub api_model: Option<String>,
    pub api_base_url: Option<String>,
    pub flashcard_count: Option<u32>,
    pub quiz_count: Option<u32>,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GenerationSettingsError {
    #[error("invalid base URL")]
    InvalidBaseUrl,
    #[error("item count must be between 1 and 50, got {0}")]
    InvalidCount(u32),
}

impl GenerationSettingsDraft {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fill unset fields from `fallback`.
    #[must_use]
    pub fn or(self, fallback: Self) -> Self {
        Self {
            api_key: self.api_key.or(fallback.api_key),
            api_model: self.api_model.or(fallback.api_model),
            api_base_url: self.api_base_url.or(fallback.api_base_url),
            flashcard_count: self.flashcard_count.or(fallback.flashcard_count),
            quiz_count: self.quiz_count.or(fallback.quiz_count),
        }
    }

    /// Trim text fields, drop empty ones, and check URL and counts.
    ///
    /// # Errors
    ///
    /// Returns `GenerationSettingsError` if the base URL is present but invalid,
    /// or a count falls outside `1..=MAX_ITEM_COUNT`.
    pub fn validate(self) -> Result<GenerationSettings, GenerationSettingsError> {
        let api_key = normalize_optional(self.api_key);
        let api_model = normalize_optional(self.api_model);
        let api_base_url = normalize_optional(self.api_base_url);

        if let Some(url) = api_base_url.as_ref() {
            if Url::parse(url).is_err() {
                return Err(GenerationSettingsError::InvalidBaseUrl);
            }
        }

        Ok(GenerationSettings {
            api_key,
            api_model,
            api_base_url,
            flashcard_count: validate_count(self.flashcard_count)?,
            quiz_count: validate_count(self.quiz_count)?,
        })
    }
}

impl GenerationSettings {
    #[must_use]
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    #[must_use]
    pub fn api_model(&self) -> Option<&str> {
        self.api_model.as_deref()
    }

    #[must_use]
    pub fn api_base_url(&self) -> Option<&str> {
        self.api_base_url.as_deref()
    }

    #[must_use]
    pub fn flashcard_count(&self) -> u32 {
        self.flashcard_count
    }

    #[must_use]
    pub fn quiz_count(&self) -> u32 {
        self.quiz_count
    }
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            api_model: None,
            api_base_url: None,
            flashcard_count: DEFAULT_ITEM_COUNT,
            quiz_count: DEFAULT_ITEM_COUNT,
        }
    }
}

fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|val| val.trim().to_string())
        .filter(|val| !val.is_empty())
}

fn validate_count(count: Option<u32>) -> Result<u32, GenerationSettingsError> {
    match count {
        None => Ok(DEFAULT_ITEM_COUNT),
        Some(n) if (1..=MAX_ITEM_COUNT).contains(&n) => Ok(n),
        Some(n) => Err(GenerationSettingsError::InvalidCount(n)),
    }
}
