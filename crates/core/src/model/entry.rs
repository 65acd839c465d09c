use serde::Deserialize;
use thiserror::Error;

use crate::model::audio::{AudioRef, AudioRefError};

//
// ─── ENTRY TYPES ───────────────────────────────────────────────────────────────
//

/// Raw, deserializable form of a catalog entry, as found in catalog files.
///
/// Drafts are validated into [`CatalogEntry`] at the loading boundary; the
/// engine itself only ever sees validated entries.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EntryDraft {
    pub source_text: String,
    pub target_text: String,
    #[serde(default)]
    pub audio_ref: Option<String>,
}

impl EntryDraft {
    pub fn new(source_text: impl Into<String>, target_text: impl Into<String>) -> Self {
        Self {
            source_text: source_text.into(),
            target_text: target_text.into(),
            audio_ref: None,
        }
    }

    pub fn with_audio(
        source_text: impl Into<String>,
        target_text: impl Into<String>,
        audio_ref: impl Into<String>,
    ) -> Self {
        Self {
            source_text: source_text.into(),
            target_text: target_text.into(),
            audio_ref: Some(audio_ref.into()),
        }
    }

    /// Validate the draft into an immutable [`CatalogEntry`].
    pub fn validate(self) -> Result<CatalogEntry, EntryValidationError> {
        if self.source_text.trim().is_empty() {
            return Err(EntryValidationError::EmptySourceText);
        }
        if self.target_text.trim().is_empty() {
            return Err(EntryValidationError::EmptyTargetText);
        }

        let audio = match self.audio_ref {
            None => None,
            Some(raw) => Some(AudioRef::parse(raw)?),
        };

        Ok(CatalogEntry {
            source_text: self.source_text,
            target_text: self.target_text,
            audio,
        })
    }
}

/// One vocabulary entry: prompt text, answer text, optional audio.
///
/// Immutable once validated; identity is positional (see `EntryIndex`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    source_text: String,
    target_text: String,
    audio: Option<AudioRef>,
}

impl CatalogEntry {
    /// The prompt side shown when browsing or asking.
    #[must_use]
    pub fn source_text(&self) -> &str {
        &self.source_text
    }

    /// The answer side; quiz options are drawn from these.
    #[must_use]
    pub fn target_text(&self) -> &str {
        &self.target_text
    }

    #[must_use]
    pub fn audio(&self) -> Option<&AudioRef> {
        self.audio.as_ref()
    }

    #[must_use]
    pub fn has_audio(&self) -> bool {
        self.audio.is_some()
    }
}

//
// ─── ENTRY VALIDATION ERRORS ───────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EntryValidationError {
    #[error("source text cannot be empty")]
    EmptySourceText,

    #[error("target text cannot be empty")]
    EmptyTargetText,

    #[error("invalid audio reference: {0}")]
    Audio(#[from] AudioRefError),
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
