//! Internationalization (i18n) support
//! Page copy in Portuguese (default) and English
//!
//! Structure:
//! - i18n.rs: Core types (Language, Key, Locale) and translation lookup
//! - pt.rs: Portuguese translations
//! - en.rs: English translations

mod en;
mod pt;

use std::collections::HashMap;

/// Supported languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    Portuguese,
    English,
}

impl Language {
    /// Get language code
    pub fn code(&self) -> &'static str {
        match self {
            Language::Portuguese => "pt",
            Language::English => "en",
        }
    }

    /// Resolve a settings language code, falling back to Portuguese
    pub fn from_code(code: &str) -> Self {
        Self::all()
            .iter()
            .copied()
            .find(|lang| lang.code().eq_ignore_ascii_case(code.trim()))
            .unwrap_or_default()
    }

    /// All available languages
    pub fn all() -> &'static [Language] {
        &[Language::Portuguese, Language::English]
    }
}

/// Translation keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    // App
    AppName,
    AppTagline,

    // Navigation
    NavHome,
    NavAbout,
    NavServices,
    NavProjects,
    NavProcess,
    NavContact,
    NavQuote,
    MenuOpen,
    MenuClose,

    // Hero
    HeroEyebrow,
    HeroTitle,
    HeroSubtitle,
    HeroCta,
    HeroSecondaryCta,

    // About
    AboutTitle,
    AboutBody,

    // Services
    ServicesTitle,
    ServiceKitchensTitle,
    ServiceKitchensBody,
    ServiceClosetsTitle,
    ServiceClosetsBody,
    ServiceCommercialTitle,
    ServiceCommercialBody,

    // Projects
    ProjectsTitle,
    ProjectsSubtitle,
    CarouselResidential,
    CarouselCommercial,
    CarouselPrevious,
    CarouselNext,
    ImageMissing,

    // Process
    ProcessTitle,
    ProcessBriefingTitle,
    ProcessBriefingBody,
    ProcessDesignTitle,
    ProcessDesignBody,
    ProcessBuildTitle,
    ProcessBuildBody,
    ProcessInstallTitle,
    ProcessInstallBody,

    // Contact
    ContactTitle,
    ContactBody,
    ContactCta,
    ContactAddress,

    // Footer
    FooterNote,

    // Floating controls
    MiniCtaText,
    MiniCtaAction,
    MiniCtaClose,
    BackToTop,
}

/// Get translation for a key in the specified language
pub fn t(lang: Language, key: Key) -> &'static str {
    let translations: &HashMap<Key, &'static str> = match lang {
        Language::Portuguese => pt::translations(),
        Language::English => en::translations(),
    };

    translations.get(&key).copied().unwrap_or("???")
}

/// Localization context that can be passed around
#[derive(Debug, Clone, Copy, Default)]
pub struct Locale {
    pub language: Language,
}

impl Locale {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    /// Get translation for a key
    pub fn get(&self, key: Key) -> &'static str {
        t(self.language, key)
    }
}
