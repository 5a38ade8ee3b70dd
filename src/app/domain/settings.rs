/// File name of the persisted settings store.
pub const STORE_FILE_NAME: &str = "app-settings.dat";

/// Store key holding the color scheme.
pub const THEME_KEY: &str = "theme";

/// Store key holding the active locale code.
pub const LANGUAGE_KEY: &str = "language";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored or received theme value. Only the exact lowercase
    /// names are accepted.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Locales with bundled UI texts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    #[default]
    English,
    Portuguese,
}

impl Locale {
    pub fn code(&self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Portuguese => "pt",
        }
    }

    /// Get all supported locales, in cycling order
    pub fn all() -> &'static [Locale] {
        &[Self::English, Self::Portuguese]
    }

    /// Exact lookup of a locale code as written to the store or sent on the bus.
    pub fn from_code(raw: &str) -> Option<Self> {
        Self::all().iter().copied().find(|l| l.code() == raw)
    }

    /// Lenient lookup for environment values such as `pt_BR.UTF-8` or `EN-us`.
    pub fn normalize(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }
        if let Some(exact) = Self::from_code(raw) {
            return Some(exact);
        }

        let lowered = raw.to_ascii_lowercase();
        Self::all()
            .iter()
            .copied()
            .find(|l| lowered.starts_with(l.code()))
    }

    /// The locale after this one, wrapping around.
    pub fn next(self) -> Self {
        let all = Self::all();
        let index = all.iter().position(|l| *l == self).unwrap_or(0);
        all[(index + 1) % all.len()]
    }

    /// Short label shown on language buttons
    pub fn label(&self) -> String {
        self.code().to_ascii_uppercase()
    }
}

/// The theme/language pair persisted in the settings store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PersistedSettings {
    pub theme: ThemeMode,
    pub language: Locale,
}

impl PersistedSettings {
    pub fn new(theme: ThemeMode, language: Locale) -> Self {
        Self { theme, language }
    }

    /// First-run values: light theme and the configured default locale.
    pub fn with_default_locale(language: Locale) -> Self {
        Self {
            theme: ThemeMode::Light,
            language,
        }
    }
}

impl Default for PersistedSettings {
    fn default() -> Self {
        Self::with_default_locale(Locale::default())
    }
}
