use serde::Deserialize;
use spdlog::{debug, info, warn};

use crate::i18n::document::{Document, ElementId};
use crate::i18n::language::{detect_browser_language, Language, DEFAULT_LANGUAGE};
use crate::i18n::storage::PreferenceStore;

pub const STORAGE_KEY: &str = "blog-language";
pub const LANG_ATTRIBUTE: &str = "data-lang";
pub const SWITCH_ATTRIBUTE: &str = "data-lang-switch";
pub const ACTIVE_CLASS: &str = "active";
pub const ARIA_PRESSED: &str = "aria-pressed";
pub const HIDDEN_ATTRIBUTE: &str = "hidden";

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct I18nSettings {
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
}

fn default_storage_key() -> String {
    STORAGE_KEY.to_string()
}

impl Default for I18nSettings {
    fn default() -> Self {
        I18nSettings {
            storage_key: default_storage_key(),
        }
    }
}

/// Broadcast after every language application.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LanguageChange {
    pub language: Language,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListenerId(usize);

type Listener = Box<dyn FnMut(&LanguageChange)>;

pub struct ClickEvent {
    pub target: ElementId,
    default_prevented: bool,
}

impl ClickEvent {
    pub fn new(target: ElementId) -> Self {
        ClickEvent {
            target,
            default_prevented: false,
        }
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

struct SwitchBinding {
    element: ElementId,
    target: String,
}

/// Stored preference if it is a supported code, then the browser language, then the default.
pub fn resolve_language<S: PreferenceStore>(store: &S, storage_key: &str, browser_language: Option<&str>) -> Language {
    if let Some(lang) = store.get_item(storage_key).as_deref().and_then(Language::from_code) {
        return lang;
    }
    detect_browser_language(browser_language)
}

/// Keeps the page showing exactly one language and remembers the reader's choice.
pub struct LanguageController<D: Document, S: PreferenceStore> {
    document: D,
    store: S,
    settings: I18nSettings,
    current: Language,
    switches: Vec<SwitchBinding>,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener: usize,
}

impl<D: Document, S: PreferenceStore> LanguageController<D, S> {
    /// Nothing is applied until `init` is called, so listeners can subscribe first.
    pub fn new(document: D, store: S, settings: I18nSettings) -> Self {
        LanguageController {
            document,
            store,
            settings,
            current: DEFAULT_LANGUAGE,
            switches: vec![],
            listeners: vec![],
            next_listener: 0,
        }
    }

    /// Resolves the initial language, applies it and binds the switch controls present on the page.
    /// The resolved language is not written back to the store.
    pub fn init(&mut self, browser_language: Option<&str>) -> Language {
        let language = resolve_language(&self.store, &self.settings.storage_key, browser_language);
        self.apply(language);

        let document = &self.document;
        self.switches = document.elements_with_attribute(SWITCH_ATTRIBUTE)
            .into_iter()
            .filter_map(|element| {
                document.attribute(element, SWITCH_ATTRIBUTE).map(|target| SwitchBinding {
                    element,
                    target: target.to_string(),
                })
            })
            .collect();

        info!("Language initialized to {} with {} switch control(s)", language, self.switches.len());
        language
    }

    pub fn language(&self) -> Language {
        self.current
    }

    /// Unsupported codes fall back to the default language with a warning.
    pub fn set_language(&mut self, lang: &str) -> Language {
        let language = match Language::from_code(lang) {
            Some(language) => language,
            None => {
                warn!("Unsupported language: {}. Using default.", lang);
                DEFAULT_LANGUAGE
            }
        };
        self.set(language)
    }

    pub fn set(&mut self, language: Language) -> Language {
        self.store.set_item(&self.settings.storage_key, language.code());
        self.apply(language);
        language
    }

    pub fn toggle_language(&mut self) -> Language {
        self.set(self.current.next())
    }

    /// Click handler of the switch controls bound by `init`. Clicks elsewhere are ignored.
    pub fn handle_click(&mut self, event: &mut ClickEvent) -> Option<Language> {
        let target = self.switches.iter()
            .find(|binding| binding.element == event.target)
            .map(|binding| binding.target.clone())?;

        event.prevent_default();
        Some(self.set_language(&target))
    }

    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&LanguageChange) + 'static,
    {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: ListenerId) {
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_parts(self) -> (D, S) {
        (self.document, self.store)
    }

    fn apply(&mut self, language: Language) {
        let code = language.code();
        self.document.set_language(code);

        for element in self.document.elements_with_attribute(LANG_ATTRIBUTE) {
            if self.document.attribute(element, LANG_ATTRIBUTE) == Some(code) {
                self.document.set_display(element, None);
                self.document.remove_attribute(element, HIDDEN_ATTRIBUTE);
            } else {
                self.document.set_display(element, Some("none"));
                self.document.set_attribute(element, HIDDEN_ATTRIBUTE, "");
            }
        }

        for element in self.document.elements_with_attribute(SWITCH_ATTRIBUTE) {
            let active = self.document.attribute(element, SWITCH_ATTRIBUTE) == Some(code);
            self.document.toggle_class(element, ACTIVE_CLASS, active);
            self.document.set_attribute(element, ARIA_PRESSED, if active { "true" } else { "false" });
        }

        self.current = language;
        self.broadcast(LanguageChange { language });
    }

    fn broadcast(&mut self, change: LanguageChange) {
        debug!("Broadcasting language change to {} listener(s): {}", self.listeners.len(), change.language);
        for (_, listener) in self.listeners.iter_mut() {
            listener(&change);
        }
    }
}
