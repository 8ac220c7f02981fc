use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use std::path::Path;
use time::{OffsetDateTime, UtcOffset, format_description::FormatItem, macros::format_description};

const MESSAGE_TIME_FORMAT: &[FormatItem<'static>] =
    format_description!("[hour repr:12 padding:zero]:[minute padding:zero] [period case:upper]");

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
    pub timestamp: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self::stamped(Role::User, content.into())
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::stamped(Role::Assistant, content.into())
    }

    fn stamped(role: Role, content: String) -> Self {
        Self {
            role,
            content,
            timestamp: format_message_timestamp(OffsetDateTime::now_utc()),
        }
    }

    pub fn is_user(&self) -> bool {
        matches!(self.role, Role::User)
    }
}

static LOCAL_OFFSET: OnceCell<UtcOffset> = OnceCell::new();

/// The local UTC offset, read once and reused for every bubble.
///
/// Native processes can only read it while single-threaded, so `main` calls
/// this before launching the runtime. A failed read falls back to UTC.
pub fn local_offset() -> UtcOffset {
    *LOCAL_OFFSET.get_or_init(|| UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC))
}

/// Formats a creation time the way bubbles show it, e.g. `09:41 AM`.
pub fn format_message_timestamp(timestamp: OffsetDateTime) -> String {
    timestamp
        .to_offset(local_offset())
        .format(MESSAGE_TIME_FORMAT)
        .unwrap_or_default()
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// Reads a stored preference. Anything but `dark` is light.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("dark") => ThemeMode::Dark,
            _ => ThemeMode::Light,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, ThemeMode::Dark)
    }
}

/// A file picked by the user, held only until its upload settles.
#[derive(Clone, Debug, PartialEq)]
pub struct UploadFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }

    /// Builds an upload from a picker path, keeping only the file name.
    pub fn from_picked(path: &str, bytes: Vec<u8>) -> Self {
        Self::new(display_file_name(path), bytes)
    }

    pub fn content_type(&self) -> String {
        mime_guess::from_path(&self.name)
            .first_or_octet_stream()
            .to_string()
    }
}

pub fn display_file_name(path: &str) -> String {
    Path::new(path)
        .file_name()
        .and_then(|stem| stem.to_str())
        .unwrap_or(path)
        .to_string()
}
