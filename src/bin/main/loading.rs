use std::{fmt, fs, io, path::Path};

use log::{info, warn};

pub(super) const NOT_FOUND_PLACEHOLDER: &str = "파일을 찾을 수 없습니다.";
pub(super) const UNREADABLE_PLACEHOLDER: &str = "파일을 읽는 중 오류가 발생했습니다.";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum LoadError {
    NotFound,
    Unreadable(io::ErrorKind),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => f.write_str("not found"),
            Self::Unreadable(kind) => write!(f, "unreadable ({kind})"),
        }
    }
}

pub(super) fn read_text_file(path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => LoadError::NotFound,
        kind => LoadError::Unreadable(kind),
    })
}

/// Single read attempt; any failure is logged and replaced by a placeholder
/// so the viewer still has something to show.
pub(super) fn load_text_or_placeholder(path: &Path) -> String {
    match read_text_file(path) {
        Ok(text) => {
            info!("text: loaded {} bytes from {}", text.len(), path.display());
            text
        }
        Err(LoadError::NotFound) => {
            warn!("text: file '{}' not found", path.display());
            NOT_FOUND_PLACEHOLDER.to_owned()
        }
        Err(err) => {
            warn!("text: error reading '{}': {}", path.display(), err);
            UNREADABLE_PLACEHOLDER.to_owned()
        }
    }
}
