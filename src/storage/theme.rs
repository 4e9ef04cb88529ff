use crate::storage::connection::Database;
use crate::storage::prefs;
use std::fmt;

pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stored preference, falling back to light when absent or unrecognized.
pub fn load(db: &Database) -> Theme {
    match prefs::get(db, THEME_KEY) {
        Ok(Some(raw)) => Theme::parse(&raw).unwrap_or(Theme::Light),
        Ok(None) => Theme::Light,
        Err(e) => {
            eprintln!("Failed to read theme preference: {e}");
            Theme::Light
        }
    }
}

/// Best-effort write; the session keeps its in-memory theme either way.
pub fn save(db: &Database, theme: Theme) {
    if let Err(e) = prefs::set(db, THEME_KEY, theme.as_str()) {
        eprintln!("Failed to persist theme preference: {e}");
    }
}
