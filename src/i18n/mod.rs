//! Run-time language selection for bilingual pages.
//!
//! Pages carry parallel fragments tagged `data-lang="en"` / `data-lang="vi"` and
//! switch controls tagged `data-lang-switch="<code>"`. The controller shows the
//! fragments of one language at a time and keeps the reader's choice in the
//! preference store.

pub mod controller;
pub mod document;
pub mod language;
pub mod storage;

pub use controller::{ClickEvent, I18nSettings, LanguageChange, LanguageController, ListenerId};
pub use document::{Document, Element, ElementId, Page};
pub use language::{detect_browser_language, Language, UnsupportedLanguage, DEFAULT_LANGUAGE, SUPPORTED_LANGUAGES};
pub use storage::{MemoryStore, PreferenceStore};
