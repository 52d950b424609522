//! Typed, memoized access to rule options.
//!
//! Rules ask for options by their camelCase name (`contentEmitters`,
//! `allowedCompositionLocals`, ...). A [`ConfigSource`] maps that name to
//! its own key convention and returns the raw string; [`ConfigResolver`]
//! converts it and remembers the answer for the rest of the run.

use std::borrow::Cow;
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::path::Path;

use tracing::debug;

use crate::utils::naming::camel_to_snake;

/// A backend holding raw option strings.
pub trait ConfigSource {
    /// Maps a camelCase option name to this backend's key.
    fn translate_key<'k>(&self, key: &'k str) -> Cow<'k, str> {
        Cow::Borrowed(key)
    }

    /// Raw lookup by an already translated key.
    fn lookup(&self, key: &str) -> Option<String>;

    /// Looks up a camelCase option name.
    fn resolve(&self, key: &str) -> Option<String> {
        self.lookup(&self.translate_key(key))
    }
}

/// The source with no options at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOptions;

impl ConfigSource for NoOptions {
    fn lookup(&self, _key: &str) -> Option<String> {
        None
    }
}

/// Options keyed by their camelCase names, as in the `[compose]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapSource {
    values: HashMap<String, String>,
}

impl MapSource {
    /// Creates an empty source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an option.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Flattens a TOML table; arrays become comma-separated strings.
    #[must_use]
    pub fn from_toml(table: &toml::Table) -> Self {
        fn flatten(value: &toml::Value) -> String {
            match value {
                toml::Value::String(s) => s.clone(),
                toml::Value::Array(items) => items.iter().map(flatten).collect::<Vec<_>>().join(","),
                other => other.to_string(),
            }
        }
        table
            .iter()
            .map(|(key, value)| (key.clone(), flatten(value)))
            .collect()
    }

    /// Whether no options are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MapSource {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl ConfigSource for MapSource {
    fn lookup(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}

/// Properties read from an `.editorconfig` file.
///
/// Option `contentEmitters` is stored as `compose_content_emitters`. Only
/// sections that apply to Kotlin sources are read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditorConfigSource {
    properties: HashMap<String, String>,
}

fn section_applies_to_kotlin(glob: &str) -> bool {
    matches!(glob, "*" | "**")
        || glob.contains(".kt")
        || glob.contains("{kt")
        || glob.contains(",kt")
}

impl EditorConfigSource {
    /// Parses `.editorconfig` content. Later sections override earlier ones.
    #[must_use]
    pub fn parse(content: &str) -> Self {
        let mut properties = HashMap::new();
        let mut active = true;

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
                continue;
            }
            if let Some(glob) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
                active = section_applies_to_kotlin(glob.trim());
                continue;
            }
            if !active {
                continue;
            }
            if let Some((key, value)) = line.split_once('=') {
                properties.insert(key.trim().to_ascii_lowercase(), value.trim().to_owned());
            }
        }
        Self { properties }
    }

    /// Reads and parses an `.editorconfig` file.
    ///
    /// # Errors
    ///
    /// Returns the I/O error if the file cannot be read.
    pub fn from_file(path: &Path) -> std::io::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        debug!(path = %path.display(), "Loaded editorconfig");
        Ok(Self::parse(&content))
    }

    /// Whether no `compose_*` property was found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.properties.keys().any(|k| k.starts_with("compose_"))
    }
}

impl ConfigSource for EditorConfigSource {
    fn translate_key<'k>(&self, key: &'k str) -> Cow<'k, str> {
        Cow::Owned(format!("compose_{}", camel_to_snake(key)))
    }

    fn lookup(&self, key: &str) -> Option<String> {
        self.properties.get(key).cloned()
    }
}

/// Consults several sources in order; the first hit wins.
#[derive(Default)]
pub struct ChainedSource {
    sources: Vec<Box<dyn ConfigSource + Send + Sync>>,
}

impl ChainedSource {
    /// Creates an empty chain.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a lower-priority source.
    #[must_use]
    pub fn with(mut self, source: impl ConfigSource + Send + Sync + 'static) -> Self {
        self.sources.push(Box::new(source));
        self
    }

    /// Number of chained sources.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// Whether the chain is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

impl std::fmt::Debug for ChainedSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChainedSource")
            .field("sources", &self.sources.len())
            .finish()
    }
}

impl ConfigSource for ChainedSource {
    fn lookup(&self, key: &str) -> Option<String> {
        self.sources.iter().find_map(|source| source.lookup(key))
    }

    fn resolve(&self, key: &str) -> Option<String> {
        self.sources.iter().find_map(|source| source.resolve(key))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum ValueKind {
    Int,
    Str,
    List,
    Set,
    Bool,
}

#[derive(Debug, Clone)]
enum Resolved {
    Int(i64),
    Str(String),
    List(Vec<String>),
    Set(HashSet<String>),
    Bool(bool),
}

/// Typed option accessor over a [`ConfigSource`].
///
/// Every `(key, type)` pair is resolved once; later calls return the
/// memoized value even if the backend changes in the meantime. A value that
/// is missing or fails to convert resolves to the supplied default, and that
/// default is what gets memoized.
pub struct ConfigResolver<'s> {
    source: &'s dyn ConfigSource,
    memo: RefCell<HashMap<(ValueKind, String), Resolved>>,
}

impl std::fmt::Debug for ConfigResolver<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigResolver")
            .field("memoized", &self.memo.borrow().len())
            .finish_non_exhaustive()
    }
}

impl Default for ConfigResolver<'static> {
    fn default() -> Self {
        Self::new(&NoOptions)
    }
}

fn split_list(raw: &str) -> impl Iterator<Item = String> + '_ {
    raw.split([',', ';'])
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_owned)
}

fn to_owned_all<'a>(items: &'a [&'a str]) -> impl Iterator<Item = String> + 'a {
    items.iter().map(|s| (*s).to_owned())
}

impl<'s> ConfigResolver<'s> {
    /// Creates a resolver with an empty memo.
    #[must_use]
    pub fn new(source: &'s dyn ConfigSource) -> Self {
        Self {
            source,
            memo: RefCell::new(HashMap::new()),
        }
    }

    fn memoized(&self, kind: ValueKind, key: &str, resolve: impl FnOnce(Option<String>) -> Resolved) -> Resolved {
        let memo_key = (kind, key.to_owned());
        let hit = self.memo.borrow().get(&memo_key).cloned();
        if let Some(hit) = hit {
            return hit;
        }
        let value = resolve(self.source.resolve(key));
        self.memo.borrow_mut().insert(memo_key, value.clone());
        value
    }

    /// Integer option.
    #[must_use]
    pub fn get_int(&self, key: &str, default: i64) -> i64 {
        let resolved = self.memoized(ValueKind::Int, key, |raw| {
            Resolved::Int(raw.and_then(|r| r.trim().parse().ok()).unwrap_or(default))
        });
        match resolved {
            Resolved::Int(value) => value,
            _ => default,
        }
    }

    /// String option, trimmed.
    #[must_use]
    pub fn get_string(&self, key: &str, default: &str) -> String {
        let resolved = self.memoized(ValueKind::Str, key, |raw| {
            Resolved::Str(raw.map_or_else(|| default.to_owned(), |r| r.trim().to_owned()))
        });
        match resolved {
            Resolved::Str(value) => value,
            _ => default.to_owned(),
        }
    }

    /// Boolean option; anything but `true`/`false` yields the default.
    #[must_use]
    pub fn get_bool(&self, key: &str, default: bool) -> bool {
        let resolved = self.memoized(ValueKind::Bool, key, |raw| {
            let parsed = raw.and_then(|r| match r.trim().to_ascii_lowercase().as_str() {
                "true" => Some(true),
                "false" => Some(false),
                _ => None,
            });
            Resolved::Bool(parsed.unwrap_or(default))
        });
        match resolved {
            Resolved::Bool(value) => value,
            _ => default,
        }
    }

    /// List option, split on `,` or `;`. Order and duplicates are kept.
    #[must_use]
    pub fn get_list(&self, key: &str, default: &[&str]) -> Vec<String> {
        let resolved = self.memoized(ValueKind::List, key, |raw| {
            Resolved::List(raw.map_or_else(|| to_owned_all(default).collect(), |r| split_list(&r).collect()))
        });
        match resolved {
            Resolved::List(value) => value,
            _ => to_owned_all(default).collect(),
        }
    }

    /// Set option, split on `,` or `;`.
    #[must_use]
    pub fn get_set(&self, key: &str, default: &[&str]) -> HashSet<String> {
        let resolved = self.memoized(ValueKind::Set, key, |raw| {
            Resolved::Set(raw.map_or_else(|| to_owned_all(default).collect(), |r| split_list(&r).collect()))
        });
        match resolved {
            Resolved::Set(value) => value,
            _ => to_owned_all(default).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Mutable(Mutex<HashMap<String, String>>);

    impl Mutable {
        fn set(&self, key: &str, value: &str) {
            self.0
                .lock()
                .expect("lock")
                .insert(key.to_owned(), value.to_owned());
        }
    }

    impl ConfigSource for Mutable {
        fn lookup(&self, key: &str) -> Option<String> {
            self.0.lock().expect("lock").get(key).cloned()
        }
    }

    #[test]
    fn values_are_memoized_per_run() {
        let source = Mutable::default();
        source.set("maxDepth", "10");
        let config = ConfigResolver::new(&source);

        assert_eq!(config.get_int("maxDepth", 0), 10);
        source.set("maxDepth", "100");
        assert_eq!(config.get_int("maxDepth", 0), 10);

        let fresh = ConfigResolver::new(&source);
        assert_eq!(fresh.get_int("maxDepth", 0), 100);
    }

    #[test]
    fn defaults_are_memoized_too() {
        let source = Mutable::default();
        let config = ConfigResolver::new(&source);
        assert!(!config.get_bool("enabled", false));
        source.set("enabled", "true");
        assert!(!config.get_bool("enabled", false));
    }

    #[test]
    fn lists_keep_duplicates_and_sets_do_not() {
        let source: MapSource = [("names", "a , b , c,a")].into_iter().collect();
        let config = ConfigResolver::new(&source);

        assert_eq!(config.get_list("names", &[]), vec!["a", "b", "c", "a"]);
        let set = config.get_set("names", &[]);
        assert_eq!(set.len(), 3);
        assert!(set.contains("a") && set.contains("b") && set.contains("c"));
    }

    #[test]
    fn semicolons_also_separate_items() {
        let source: MapSource = [("names", "Foo;Bar")].into_iter().collect();
        let config = ConfigResolver::new(&source);
        assert_eq!(config.get_list("names", &["x"]), vec!["Foo", "Bar"]);
        assert_eq!(config.get_list("other", &["x"]), vec!["x"]);
    }

    #[test]
    fn malformed_values_fall_back_to_default() {
        let source: MapSource = [("count", "many"), ("flag", "yes")].into_iter().collect();
        let config = ConfigResolver::new(&source);
        assert_eq!(config.get_int("count", 3), 3);
        assert!(config.get_bool("flag", true));
    }

    #[test]
    fn editorconfig_keys_are_snake_case_with_prefix() {
        let source = EditorConfigSource::parse(
            r"
root = true

[*.md]
compose_content_emitters = Ignored

[*.{kt,kts}]
compose_content_emitters = MyButton, MyCard
compose_disallow_material2 = true
",
        );
        assert_eq!(
            source.translate_key("contentEmitters"),
            "compose_content_emitters"
        );
        let config = ConfigResolver::new(&source);
        assert_eq!(
            config.get_list("contentEmitters", &[]),
            vec!["MyButton", "MyCard"]
        );
        assert!(config.get_bool("disallowMaterial2", false));
    }

    #[test]
    fn chained_sources_prefer_the_first_hit() {
        let toml: MapSource = [("contentEmitters", "FromToml")].into_iter().collect();
        let editorconfig = EditorConfigSource::parse(
            "[*]\ncompose_content_emitters = FromEditorconfig\ncompose_view_model_factories = make\n",
        );
        let chain = ChainedSource::new().with(toml).with(editorconfig);
        let config = ConfigResolver::new(&chain);

        assert_eq!(config.get_string("contentEmitters", ""), "FromToml");
        assert_eq!(config.get_string("viewModelFactories", ""), "make");
    }

    #[test]
    fn toml_arrays_flatten_to_lists() {
        let table: toml::Table = toml::from_str("allowedCompositionLocals = [\"LocalA\", \"LocalB\"]\nmax = 3\n")
            .expect("toml");
        let source = MapSource::from_toml(&table);
        let config = ConfigResolver::new(&source);
        assert_eq!(
            config.get_list("allowedCompositionLocals", &[]),
            vec!["LocalA", "LocalB"]
        );
        assert_eq!(config.get_int("max", 0), 3);
    }
}
