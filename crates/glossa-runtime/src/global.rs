//! Process-wide translation entry point.

use glossa_core::{
    catalog::Key,
    format::{substitute, Arg},
    overrides::OverrideTable,
};
use std::sync::OnceLock;

use crate::resolver::Resolver;

static GLOBAL: OnceLock<Resolver> = OnceLock::new();
static BUILTIN: OnceLock<OverrideTable> = OnceLock::new();

/// Make `resolver` the target of [`translate`]. Only the first call wins;
/// returns `false` if a resolver was already installed.
pub fn install(resolver: Resolver) -> bool {
    GLOBAL.set(resolver).is_ok()
}

/// The installed resolver, if any.
pub fn installed() -> Option<&'static Resolver> {
    GLOBAL.get()
}

/// Resolve `key` through the installed resolver. Before anything is
/// installed only the built-in override table is consulted, and every other
/// key resolves to itself.
pub fn translate(key: &str, args: &[Arg<'_>]) -> String {
    if let Some(resolver) = GLOBAL.get() {
        return resolver.resolve(key, args);
    }
    let builtin = BUILTIN.get_or_init(OverrideTable::default);
    match builtin
        .for_language(builtin.default_language())
        .and_then(|table| table.lookup(Key::new(key)))
    {
        Some(text) => substitute(text, args),
        None => key.to_string(),
    }
}

/// `t!("greet", name)` is `translate("greet", &[&name])`.
#[macro_export]
macro_rules! t {
    ($key:expr) => {
        $crate::translate($key, &[])
    };
    ($key:expr, $($arg:expr),+ $(,)?) => {
        $crate::translate($key, &[$(&$arg as &dyn ::std::fmt::Display),+])
    };
}
