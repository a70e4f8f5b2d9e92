use dioxus::prelude::*;

/// UI languages supported by the platform.
///
/// Arabic is the primary audience and the default when no preference has
/// been stored yet.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Lang {
    #[default]
    Ar,
    En,
}

/// Both languages in switcher display order.
pub const ALL_LANGS: &[Lang] = &[Lang::Ar, Lang::En];

impl Lang {
    /// Internal key used for the cookie and the `lang` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            Lang::Ar => "ar",
            Lang::En => "en",
        }
    }

    /// Parse a stored language key, falling back to Arabic.
    ///
    /// A malformed cookie value degrades to the default rather than
    /// erroring; a bad stored value must never take the page down.
    pub fn from_key(s: &str) -> Self {
        match s {
            "en" => Lang::En,
            _ => Lang::Ar,
        }
    }

    /// Document text direction for this language.
    pub fn dir(&self) -> &'static str {
        match self {
            Lang::Ar => "rtl",
            Lang::En => "ltr",
        }
    }

    /// Native-script name for the language switcher.
    pub fn native_name(&self) -> &'static str {
        match self {
            Lang::Ar => "العربية",
            Lang::En => "English",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Lang::Ar => Lang::En,
            Lang::En => Lang::Ar,
        }
    }
}

/// Language state shared through context by the application root.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocaleState {
    pub lang: Signal<Lang>,
}

/// Inline script that applies the persisted language before first paint.
///
/// Reads the `lang` cookie and sets `dir`/`lang` on the document element
/// so an Arabic user never sees a left-to-right flash while hydrating.
#[component]
pub fn LocaleSeed() -> Element {
    use_hook(|| {
        document::eval(
            r#"
            (function() {
                var match = document.cookie.match(/(?:^|;\s*)lang=([^;]*)/);
                var lang = match && match[1] === 'en' ? 'en' : 'ar';
                var el = document.documentElement;
                el.setAttribute('lang', lang);
                el.setAttribute('dir', lang === 'ar' ? 'rtl' : 'ltr');
            })();
            "#,
        );
    });

    rsx! {}
}

/// Switch the active language, persisting to a cookie and updating the
/// document direction. Uses BroadcastChannel to sync across tabs when
/// available.
pub fn set_lang(lang: Lang) {
    let key = lang.as_str();
    let dir = lang.dir();
    document::eval(&format!(
        r#"
        (function() {{
            document.cookie = 'lang={key};path=/;max-age=31536000;SameSite=Lax';
            var el = document.documentElement;
            el.setAttribute('lang', '{key}');
            el.setAttribute('dir', '{dir}');
            try {{
                var bc = new BroadcastChannel('lang-sync');
                bc.postMessage('{key}');
                bc.close();
            }} catch(e) {{}}
        }})();
        "#,
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_arabic() {
        assert_eq!(Lang::default(), Lang::Ar);
    }

    #[test]
    fn key_roundtrip() {
        for lang in ALL_LANGS {
            assert_eq!(Lang::from_key(lang.as_str()), *lang);
        }
    }

    #[test]
    fn malformed_key_falls_back_to_arabic() {
        assert_eq!(Lang::from_key("fr"), Lang::Ar);
        assert_eq!(Lang::from_key(""), Lang::Ar);
        assert_eq!(Lang::from_key("EN"), Lang::Ar);
    }

    #[test]
    fn direction_mapping() {
        assert_eq!(Lang::Ar.dir(), "rtl");
        assert_eq!(Lang::En.dir(), "ltr");
    }

    #[test]
    fn toggle_flips_language() {
        assert_eq!(Lang::Ar.toggled(), Lang::En);
        assert_eq!(Lang::En.toggled(), Lang::Ar);
        assert_eq!(Lang::Ar.toggled().dir(), "ltr");
    }
}
