use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;
use url::Url;

//
// ─── ERRORS (domain validation) ────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AudioRefError {
    #[error("audio reference cannot be empty")]
    Empty,

    #[error("audio reference is not a valid URL: {0}")]
    InvalidUrl(String),
}

//
// ─── AUDIO REFERENCE ───────────────────────────────────────────────────────────
//

/// Locator for a playable audio resource attached to a catalog entry.
///
/// The engine never performs playback; it only hands this reference to the
/// caller (or reports its absence, which disables the caller's play action).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AudioRef {
    FilePath(PathBuf),
    Url(Url),
}

impl AudioRef {
    /// Parse a raw reference string.
    ///
    /// Strings carrying a scheme separator (`://`) must parse as URLs;
    /// everything else is treated as a file path. The bundled catalog uses
    /// relative paths such as `audio/ngi_ho.m4a`.
    pub fn parse(raw: impl AsRef<str>) -> Result<Self, AudioRefError> {
        let s = raw.as_ref().trim();
        if s.is_empty() {
            return Err(AudioRefError::Empty);
        }
        if s.contains("://") {
            let u = Url::parse(s).map_err(|_| AudioRefError::InvalidUrl(s.to_owned()))?;
            return Ok(AudioRef::Url(u));
        }
        Ok(AudioRef::FilePath(PathBuf::from(s)))
    }

    pub fn from_file(path: impl Into<PathBuf>) -> Result<Self, AudioRefError> {
        let p = path.into();
        if p.as_os_str().is_empty() {
            return Err(AudioRefError::Empty);
        }
        Ok(AudioRef::FilePath(p))
    }

    pub fn from_url(url: impl AsRef<str>) -> Result<Self, AudioRefError> {
        let s = url.as_ref().trim();
        if s.is_empty() {
            return Err(AudioRefError::Empty);
        }
        let u = Url::parse(s).map_err(|_| AudioRefError::InvalidUrl(s.to_owned()))?;
        Ok(AudioRef::Url(u))
    }

    pub fn as_path(&self) -> Option<&Path> {
        match self {
            AudioRef::FilePath(p) => Some(p.as_path()),
            _ => None,
        }
    }

    pub fn as_url(&self) -> Option<&Url> {
        match self {
            AudioRef::Url(u) => Some(u),
            _ => None,
        }
    }
}

impl fmt::Display for AudioRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AudioRef::FilePath(p) => write!(f, "{}", p.display()),
            AudioRef::Url(u) => write!(f, "{}", u.as_str()),
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
