use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

pub const DEFAULT_THEME: &str = "bootstrap3";
pub const DEFAULT_ICONLIB: &str = "fontawesome4";

/// Flat, insertion-ordered options forwarded to the client editor alongside
/// the schema. Starts from the fixed defaults; caller entries merged on top
/// win on key collision.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RenderingOptions {
    entries: IndexMap<String, Value>,
}

impl RenderingOptions {
    pub fn new() -> Self {
        let mut entries = IndexMap::new();
        entries.insert("theme".to_string(), Value::from(DEFAULT_THEME));
        entries.insert("iconlib".to_string(), Value::from(DEFAULT_ICONLIB));
        Self { entries }
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(key, value);
        self
    }

    pub fn merge(&mut self, overrides: impl IntoIterator<Item = (String, Value)>) {
        for (key, value) in overrides {
            self.entries.insert(key, value);
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn entries(&self) -> &IndexMap<String, Value> {
        &self.entries
    }

    /// Theme name the client editor is configured with; the asset manifest
    /// keys off its prefix.
    pub fn theme(&self) -> &str {
        self.entries
            .get("theme")
            .and_then(Value::as_str)
            .unwrap_or("")
    }
}

impl Default for RenderingOptions {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::RenderingOptions;
    use serde_json::{Value, json};

    #[test]
    fn defaults_cover_theme_and_iconlib() {
        let options = RenderingOptions::default();
        assert_eq!(options.theme(), "bootstrap3");
        assert_eq!(options.get("iconlib"), Some(&json!("fontawesome4")));
    }

    #[test]
    fn caller_entries_win_on_collision() {
        let mut options = RenderingOptions::new();
        options.merge(vec![
            ("theme".to_string(), Value::from("foundation")),
            ("disable_edit_json".to_string(), Value::from(true)),
        ]);

        assert_eq!(options.theme(), "foundation");
        assert_eq!(options.get("disable_edit_json"), Some(&json!(true)));
    }

    #[test]
    fn insertion_order_is_preserved() {
        let options = RenderingOptions::new()
            .with("disable_collapse", true)
            .with("no_additional_properties", false);

        let keys: Vec<&str> = options.entries().keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            ["theme", "iconlib", "disable_collapse", "no_additional_properties"],
        );
    }

    #[test]
    fn overriding_theme_keeps_its_original_position() {
        let options = RenderingOptions::new().with("theme", "html");
        let keys: Vec<&str> = options.entries().keys().map(String::as_str).collect();
        assert_eq!(keys, ["theme", "iconlib"]);
        assert_eq!(options.theme(), "html");
    }

    #[test]
    fn missing_or_non_string_theme_reads_as_empty() {
        let options = RenderingOptions::new().with("theme", 3);
        assert_eq!(options.theme(), "");
    }
}
