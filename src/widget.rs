use std::fmt;

use indexmap::IndexMap;
use serde_json::{Value, json};

use crate::assets::AssetManifest;
use crate::markup::{self, Markup};
use crate::normalize::normalize;
use crate::options::RenderingOptions;
use crate::schema::{Schema, SchemaSource};

/// Per-instance settings, fixed at construction. Producer schema sources
/// receive this as their context.
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetConfig {
    pub collapsed: bool,
    pub rich_text: bool,
    pub options: RenderingOptions,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            collapsed: true,
            rich_text: false,
            options: RenderingOptions::default(),
        }
    }
}

/// Form-field widget embedding a schema-driven JSON editor. Owns a schema
/// source and the render settings; each render resolves the schema fresh and
/// emits one self-contained markup fragment.
#[derive(Debug)]
pub struct EditorWidget {
    source: SchemaSource,
    config: WidgetConfig,
}

impl EditorWidget {
    pub fn new(source: impl Into<SchemaSource>) -> Self {
        Self {
            source: source.into(),
            config: WidgetConfig::default(),
        }
    }

    pub fn from_producer(
        producer: impl Fn(&WidgetConfig) -> Schema + Send + Sync + 'static,
    ) -> Self {
        Self::new(SchemaSource::producer(producer))
    }

    pub fn with_collapsed(mut self, collapsed: bool) -> Self {
        self.config.collapsed = collapsed;
        self
    }

    pub fn with_rich_text(mut self, rich_text: bool) -> Self {
        self.config.rich_text = rich_text;
        self
    }

    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.config.options.set(key, value);
        self
    }

    pub fn with_options(mut self, overrides: impl IntoIterator<Item = (String, Value)>) -> Self {
        self.config.options.merge(overrides);
        self
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    /// Renders the widget for one field: resolves and normalizes the schema,
    /// overwrites `title` and `options`, serializes the editor payload, and
    /// wraps it in trusted markup together with the raw current value.
    pub fn render(&self, name: &str, value: Option<&str>) -> Result<Markup, RenderError> {
        let mut schema = self.source.resolve(&self.config);
        normalize(&mut schema);

        // The editor surface has no use for a caller title; both keys are
        // always overwritten.
        schema.insert("title".to_string(), Value::from(" "));
        schema.insert(
            "options".to_string(),
            json!({ "collapsed": self.config.collapsed as i64 }),
        );

        let mut payload: IndexMap<String, Value> = IndexMap::new();
        for (key, entry) in self.config.options.entries() {
            payload.insert(key.clone(), entry.clone());
        }
        // Injected last: a caller-supplied "schema" option must never shadow
        // the field schema.
        payload.insert("schema".to_string(), Value::Object(schema));

        let payload_json = serde_json::to_string(&payload)?;
        tracing::debug!(field = name, bytes = payload_json.len(), "rendered editor payload");

        Ok(markup::editor_fragment(
            name,
            value,
            &payload_json,
            self.config.rich_text,
        ))
    }

    /// Assets this instance needs on the page, derived from the configured
    /// theme and the rich-text flag. Recomputed per query.
    pub fn asset_manifest(&self) -> AssetManifest {
        AssetManifest::for_widget(self.config.options.theme(), self.config.rich_text)
    }
}

#[derive(Debug)]
pub struct RenderError {
    message: String,
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message.as_str())
    }
}

impl std::error::Error for RenderError {}

impl From<serde_json::Error> for RenderError {
    fn from(err: serde_json::Error) -> Self {
        Self {
            message: format!("payload serialization failed: {err}"),
        }
    }
}
