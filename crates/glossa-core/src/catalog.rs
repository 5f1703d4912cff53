//! Immutable nested string catalogs and dot-path navigation.
//!
//! A catalog is a JSON-shaped tree: objects map segments to either string
//! leaves or nested objects. Any other leaf type is carried but never
//! resolves.

use serde_json::{Map, Value};
use std::sync::Arc;

use crate::error::GlossaError;
use crate::language::LanguageId;

/// A dot-delimited lookup path such as `nav.home`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Key<'a>(&'a str);

impl<'a> Key<'a> {
    pub fn new(raw: &'a str) -> Self {
        Self(raw)
    }

    pub fn as_str(&self) -> &'a str {
        self.0
    }

    /// Ordered path segments.
    pub fn segments(&self) -> std::str::Split<'a, char> {
        self.0.split('.')
    }
}

impl<'a> From<&'a str> for Key<'a> {
    fn from(raw: &'a str) -> Self {
        Self(raw)
    }
}

/// Walk `root` along `key`, returning the string leaf at the end.
///
/// Stops at the first segment that is missing or whose parent is not an
/// object. A non-string value at the end of the path is a miss.
pub fn navigate<'v>(root: &'v Value, key: Key<'_>) -> Option<&'v str> {
    let mut node = root;
    for segment in key.segments() {
        node = node.as_object()?.get(segment)?;
    }
    node.as_str()
}

/// Recursively merge `overlay` into `base`. Objects merge key by key;
/// anything else in `overlay` replaces what `base` held.
pub fn merge(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Object(base), Value::Object(overlay)) => {
            for (k, v) in overlay {
                match base.get_mut(&k) {
                    Some(existing) => merge(existing, v),
                    None => {
                        base.insert(k, v);
                    }
                }
            }
        }
        (base, overlay) => *base = overlay,
    }
}

/// Translation data for one language. Cheap to clone; never mutated.
#[derive(Debug, Clone)]
pub struct Catalog {
    root: Arc<Value>,
}

impl Catalog {
    /// Wrap an arbitrary value. Non-object roots simply never resolve.
    pub fn from_value(root: Value) -> Self {
        Self {
            root: Arc::new(root),
        }
    }

    /// A catalog with no entries.
    pub fn empty() -> Self {
        Self::from_value(Value::Object(Map::new()))
    }

    /// Accept `root` only if it is a mapping.
    pub fn from_root(language: &LanguageId, root: Value) -> Result<Self, GlossaError> {
        if root.is_object() {
            Ok(Self::from_value(root))
        } else {
            Err(GlossaError::Parse {
                language: language.clone(),
                reason: "catalog root is not an object".to_string(),
            })
        }
    }

    /// Parse catalog JSON fetched for `language`.
    pub fn from_json_slice(language: &LanguageId, bytes: &[u8]) -> Result<Self, GlossaError> {
        let root: Value = serde_json::from_slice(bytes).map_err(|e| GlossaError::Parse {
            language: language.clone(),
            reason: e.to_string(),
        })?;
        Self::from_root(language, root)
    }

    pub fn lookup(&self, key: Key<'_>) -> Option<&str> {
        navigate(&self.root, key)
    }

    pub fn as_value(&self) -> &Value {
        &self.root
    }

    /// Whether both handles share the same underlying data.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.root, &other.root)
    }

    /// Number of string leaves reachable from the root.
    pub fn leaf_count(&self) -> usize {
        fn count(v: &Value) -> usize {
            match v {
                Value::String(_) => 1,
                Value::Object(m) => m.values().map(count).sum(),
                _ => 0,
            }
        }
        count(&self.root)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::empty()
    }
}

impl PartialEq for Catalog {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || self.root == other.root
    }
}
