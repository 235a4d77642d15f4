//! Compile-time application settings.

pub const APP_NAME: &str = "TaskFlow";

/// Local storage key holding the theme flag (`light` or `dark`).
pub const THEME_STORAGE_KEY: &str = "theme";

pub const PREFERS_DARK_QUERY: &str = "(prefers-color-scheme: dark)";

/// Number of cards shown in each dashboard section.
pub const DASHBOARD_PREVIEW_LIMIT: usize = 4;

/// Tasks due within this many days after today count as upcoming.
pub const UPCOMING_WINDOW_DAYS: i64 = 7;

pub const SEARCH_DEBOUNCE_MS: u32 = 250;

/// Format of `<input type="date">` values.
pub const INPUT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Short date shown on task cards, e.g. "May 10".
pub const CARD_DATE_FORMAT: &str = "%b %-d";
