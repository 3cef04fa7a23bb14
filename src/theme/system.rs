//! The terminal's own light/dark preference.

use std::env;

use super::Theme;

/// Explicit override, `light` or `dark`.
pub const COLOR_SCHEME_ENV: &str = "FOLIO_COLOR_SCHEME";

/// `fg;bg` color indices exported by rxvt, Konsole and friends.
const COLORFGBG_ENV: &str = "COLORFGBG";

pub struct SystemPreference;

impl SystemPreference {
    /// Read the preference from the environment.
    pub fn detect() -> Option<Theme> {
        Self::from_vars(
            env::var(COLOR_SCHEME_ENV).ok().as_deref(),
            env::var(COLORFGBG_ENV).ok().as_deref(),
        )
    }

    /// Resolve a preference from raw variable values.
    ///
    /// The override wins when it holds a valid theme. Otherwise the last
    /// `COLORFGBG` field is the background index: 7 and 15 are light
    /// backgrounds, any other number is dark.
    pub fn from_vars(scheme: Option<&str>, colorfgbg: Option<&str>) -> Option<Theme> {
        if let Some(theme) = scheme.and_then(|s| s.trim().to_lowercase().parse().ok()) {
            return Some(theme);
        }

        let background: u8 = colorfgbg?.rsplit(';').next()?.trim().parse().ok()?;
        Some(match background {
            7 | 15 => Theme::Light,
            _ => Theme::Dark,
        })
    }
}
