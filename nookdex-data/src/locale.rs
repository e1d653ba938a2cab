//! Localized name tables embedded in raw records.

use serde::{Deserialize, Serialize};

/// Language/region pair used as a key into a [`Translation`] table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Locale {
    EuDe,
    EuEn,
    EuIt,
    EuNl,
    EuRu,
    EuFr,
    EuEs,
    UsEn,
    UsFr,
    UsEs,
    JpJa,
    KrKo,
    TwZh,
    #[default]
    CnZh,
}

const ALL_LOCALES: &[Locale] = &[
    Locale::EuDe,
    Locale::EuEn,
    Locale::EuIt,
    Locale::EuNl,
    Locale::EuRu,
    Locale::EuFr,
    Locale::EuEs,
    Locale::UsEn,
    Locale::UsFr,
    Locale::UsEs,
    Locale::JpJa,
    Locale::KrKo,
    Locale::TwZh,
    Locale::CnZh,
];

impl Locale {
    /// Field name used in the dataset (`"cNzh"`, `"uSen"`, ...).
    pub fn code(&self) -> &'static str {
        match self {
            Self::EuDe => "eUde",
            Self::EuEn => "eUen",
            Self::EuIt => "eUit",
            Self::EuNl => "eUnl",
            Self::EuRu => "eUru",
            Self::EuFr => "eUfr",
            Self::EuEs => "eUes",
            Self::UsEn => "uSen",
            Self::UsFr => "uSfr",
            Self::UsEs => "uSes",
            Self::JpJa => "jPja",
            Self::KrKo => "kRko",
            Self::TwZh => "tWzh",
            Self::CnZh => "cNzh",
        }
    }

    pub fn all() -> &'static [Locale] {
        ALL_LOCALES
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Error returned when a string is not a known locale field name.
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown locale: '{0}'")]
pub struct LocaleParseError(pub String);

impl std::str::FromStr for Locale {
    type Err = LocaleParseError;

    /// Accepts the dataset field name in any case (`cNzh`, `cnzh`, `CN-zh`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| c.is_ascii_alphabetic())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        ALL_LOCALES
            .iter()
            .copied()
            .find(|l| l.code().to_ascii_lowercase() == key)
            .ok_or_else(|| LocaleParseError(s.to_string()))
    }
}

/// Per-locale names for one record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Translation {
    #[serde(default)]
    pub e_ude: Option<String>,
    #[serde(default)]
    pub e_uen: Option<String>,
    #[serde(default)]
    pub e_uit: Option<String>,
    #[serde(default)]
    pub e_unl: Option<String>,
    #[serde(default)]
    pub e_uru: Option<String>,
    #[serde(default)]
    pub e_ufr: Option<String>,
    #[serde(default)]
    pub e_ues: Option<String>,
    #[serde(default)]
    pub u_sen: Option<String>,
    #[serde(default)]
    pub u_sfr: Option<String>,
    #[serde(default)]
    pub u_ses: Option<String>,
    #[serde(default)]
    pub j_pja: Option<String>,
    #[serde(default)]
    pub k_rko: Option<String>,
    #[serde(default)]
    pub t_wzh: Option<String>,
    #[serde(default)]
    pub c_nzh: Option<String>,
}

impl Translation {
    /// The name for `locale`, if present and non-empty.
    pub fn get(&self, locale: Locale) -> Option<&str> {
        let value = match locale {
            Locale::EuDe => &self.e_ude,
            Locale::EuEn => &self.e_uen,
            Locale::EuIt => &self.e_uit,
            Locale::EuNl => &self.e_unl,
            Locale::EuRu => &self.e_uru,
            Locale::EuFr => &self.e_ufr,
            Locale::EuEs => &self.e_ues,
            Locale::UsEn => &self.u_sen,
            Locale::UsFr => &self.u_sfr,
            Locale::UsEs => &self.u_ses,
            Locale::JpJa => &self.j_pja,
            Locale::KrKo => &self.k_rko,
            Locale::TwZh => &self.t_wzh,
            Locale::CnZh => &self.c_nzh,
        };
        value.as_deref().filter(|s| !s.is_empty())
    }
}

/// Pick the localized name from an optional table, falling back to `fallback`.
pub fn localized<'a>(
    translations: Option<&'a Translation>,
    locale: Locale,
    fallback: &'a str,
) -> &'a str {
    translations
        .and_then(|t| t.get(locale))
        .unwrap_or(fallback)
}
