//! Internationalization support for `agriguard-ui`.
//!
//! Wires together `i18n-embed` (language selection + asset loading),
//! `fluent` (message formatting), `rust-embed` (compile-time embedding
//! of `.ftl` files) and `i18n-embed-fl` (compile-checked `fl!` lookups).
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n/
//!   en-US/agriguard-ui.ftl   (fallback/reference)
//!   es-ES/agriguard-ui.ftl
//!   fr-FR/agriguard-ui.ftl
//! ```
//!
//! Marketing chrome (navbar, home page, page titles) goes through
//! `t!`; strings inside the diagnostic tool and dashboard are product
//! copy and stay as literals.
//!
//! To add a locale: copy `en-US/agriguard-ui.ftl` to
//! `i18n/<lang-id>/agriguard-ui.ftl`, translate the values (keep ids
//! and placeholders identical), and run the completeness test.

use std::sync::Once;

use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl; // Re-export for convenience.

/// Ergonomic translation macro:
///     t!("nav-home")
///     t!("hello-user", name = "Emma")
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent "domain"; the fallback file must live at
/// `i18n/en-US/{DOMAIN}.ftl`.
const DOMAIN: &str = "agriguard-ui";

/// Embed all locale folders under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// Global language loader used with the `fl!` macro.
pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = "en-US".parse().expect("valid fallback language identifier");
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

/// Initialize i18n (idempotent).
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        if let Err(err) = i18n_embed::select(&*LOADER, &Localizations, &requested) {
            eprintln!("[i18n] Failed selecting languages ({err}); continuing with fallback");
        }
    });
}

/// Switch language at runtime. Unparseable tags are ignored.
pub fn set_language(tag: &str) -> Result<(), i18n_embed::I18nEmbedError> {
    let lang: LanguageIdentifier = match tag.parse() {
        Ok(l) => l,
        Err(_) => return Ok(()),
    };
    i18n_embed::select(&*LOADER, &Localizations, &[lang]).map(|_| ())
}

/// List available (embedded) language identifiers.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}
