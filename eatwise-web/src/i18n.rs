//! Language selection and per-caller translation tables.
//!
//! There is no remote catalog: every caller supplies its own table of
//! translations for the key it renders. Lookup degrades from the active
//! language to English to the literal key, and never fails.

use std::fmt;
use std::str::FromStr;

const STORAGE_KEY: &str = "app_language";

/// Supported interface languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lang {
    #[default]
    En,
    Hi,
    Bn,
    Te,
    Mr,
    Ta,
    Gu,
    Kn,
    Ml,
    Pa,
    Or,
}

impl Lang {
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Hi => "hi",
            Self::Bn => "bn",
            Self::Te => "te",
            Self::Mr => "mr",
            Self::Ta => "ta",
            Self::Gu => "gu",
            Self::Kn => "kn",
            Self::Ml => "ml",
            Self::Pa => "pa",
            Self::Or => "or",
        }
    }

    /// Native-script name for the language picker.
    #[must_use]
    pub const fn native_name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Hi => "हिन्दी (Hindi)",
            Self::Bn => "বাংলা (Bengali)",
            Self::Te => "తెలుగు (Telugu)",
            Self::Mr => "मराठी (Marathi)",
            Self::Ta => "தமிழ் (Tamil)",
            Self::Gu => "ગુજરાતી (Gujarati)",
            Self::Kn => "ಕನ್ನಡ (Kannada)",
            Self::Ml => "മലയാളം (Malayalam)",
            Self::Pa => "ਪੰਜਾਬੀ (Punjabi)",
            Self::Or => "ଓଡ଼ିଆ (Odia)",
        }
    }

    #[must_use]
    pub const fn all() -> [Self; 11] {
        [
            Self::En,
            Self::Hi,
            Self::Bn,
            Self::Te,
            Self::Mr,
            Self::Ta,
            Self::Gu,
            Self::Kn,
            Self::Ml,
            Self::Pa,
            Self::Or,
        ]
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Lang {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .into_iter()
            .find(|lang| lang.code() == s)
            .ok_or(())
    }
}

/// One translation table, supplied inline at each call site.
pub type Table<'a> = &'a [(Lang, &'a str)];

/// Resolve a key against a per-key table: active language first, then
/// English, then the key itself.
#[must_use]
pub fn tr(lang: Lang, key: &str, table: Table<'_>) -> String {
    table
        .iter()
        .find(|(l, _)| *l == lang)
        .or_else(|| table.iter().find(|(l, _)| *l == Lang::En))
        .map_or_else(|| key.to_string(), |(_, text)| (*text).to_string())
}

/// Read the persisted selection, defaulting to English on a missing,
/// unrecognized, or unreadable value.
#[must_use]
pub fn load_saved() -> Lang {
    #[cfg(all(not(test), target_arch = "wasm32"))]
    {
        web_sys::window()
            .and_then(|win| win.local_storage().ok().flatten())
            .and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten())
            .and_then(|code| code.parse().ok())
            .unwrap_or_default()
    }

    #[cfg(any(test, not(target_arch = "wasm32")))]
    {
        Lang::default()
    }
}

/// Persist the selection. Storage failures are logged and swallowed;
/// persistence is a convenience, not a guarantee.
pub fn persist(lang: Lang) {
    #[cfg(target_arch = "wasm32")]
    {
        let stored = web_sys::window()
            .and_then(|win| win.local_storage().ok().flatten())
            .map(|storage| storage.set_item(STORAGE_KEY, lang.code()));
        if !matches!(stored, Some(Ok(()))) {
            log::warn!("failed to persist language selection");
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = lang;
    }
}

/// Mirror the selection onto `<html lang>`.
pub fn apply_document_lang(lang: Lang) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
        {
            let _ = el.set_attribute("lang", lang.code());
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = lang;
    }
}

/// Change the active language: persist it and update the document.
pub fn set_lang(lang: Lang) {
    persist(lang);
    apply_document_lang(lang);
}

#[cfg(test)]
mod tests {
    use super::{Lang, load_saved, tr};
    use std::str::FromStr;

    #[test]
    fn codes_round_trip() {
        for lang in Lang::all() {
            assert_eq!(Lang::from_str(lang.code()), Ok(lang));
        }
        assert!(Lang::from_str("xx").is_err());
    }

    #[test]
    fn tr_prefers_active_language() {
        let table = [(Lang::En, "Welcome"), (Lang::Hi, "स्वागत है")];
        assert_eq!(tr(Lang::Hi, "welcome", &table), "स्वागत है");
        assert_eq!(tr(Lang::En, "welcome", &table), "Welcome");
    }

    #[test]
    fn tr_falls_back_to_english_then_key() {
        let table = [(Lang::En, "Welcome"), (Lang::Hi, "स्वागत है")];
        assert_eq!(tr(Lang::Ta, "welcome", &table), "Welcome");
        let hi_only = [(Lang::Hi, "स्वागत है")];
        assert_eq!(tr(Lang::Ta, "welcome", &hi_only), "welcome");
        assert_eq!(tr(Lang::Ta, "welcome", &[]), "welcome");
    }

    #[test]
    fn saved_language_defaults_off_wasm() {
        assert_eq!(load_saved(), Lang::En);
    }
}
