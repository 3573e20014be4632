pub mod assets;
pub mod markup;
pub mod normalize;
pub mod options;
pub mod schema;
pub mod widget;

pub use assets::AssetManifest;
pub use markup::Markup;
pub use normalize::normalize;
pub use options::RenderingOptions;
pub use schema::{
    Schema, SchemaError, SchemaProducer, SchemaSource, schema_for, schema_from_json,
    schema_from_value, schema_from_yaml,
};
pub use widget::{EditorWidget, RenderError, WidgetConfig};
