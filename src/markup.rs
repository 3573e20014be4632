use std::fmt;

use crate::assets::AssetManifest;

/// HTML that has already been escaped and is safe to embed as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Markup(String);

impl Markup {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.as_str())
    }
}

pub fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Escapes serialized JSON for a `<script>` body. The rewrite stays valid
/// JSON describing the same value, so consumers parse the block unchanged.
pub fn escape_json_script(json: &str) -> String {
    json.replace('&', "\\u0026")
        .replace('<', "\\u003c")
        .replace('>', "\\u003e")
}

/// One widget instance: an editor mount point, the hidden form control
/// carrying the raw value, and the serialized editor options.
pub(crate) fn editor_fragment(
    name: &str,
    value: Option<&str>,
    payload_json: &str,
    rich_text: bool,
) -> Markup {
    let name = escape_html(name);
    let value = value.map(escape_html).unwrap_or_default();
    let payload = escape_json_script(payload_json);
    let rich_text = rich_text as u8;

    let mut html = String::new();
    html.push_str(&format!(
        "<div class=\"jsonedit-widget\" data-rich-text=\"{rich_text}\">\n"
    ));
    html.push_str(&format!(
        "<div class=\"jsonedit-frame\" id=\"{name}_editor\"></div>\n"
    ));
    html.push_str(&format!(
        "<textarea hidden class=\"jsonedit-value\" name=\"{name}\" id=\"id_{name}\">{value}</textarea>\n"
    ));
    html.push_str(&format!(
        "<script type=\"application/json\" class=\"jsonedit-options\" id=\"{name}_options\">{payload}</script>\n"
    ));
    html.push_str("</div>");
    Markup(html)
}

/// Standalone page shell around a rendered widget, with the manifest inlined
/// as `<link>` and `<script>` tags in load order.
pub fn document(title: &str, manifest: &AssetManifest, body: &Markup) -> Markup {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str(&format!("<title>{}</title>\n", escape_html(title)));
    for href in manifest.stylesheets() {
        html.push_str(&format!(
            "<link rel=\"stylesheet\" href=\"{}\">\n",
            escape_html(href)
        ));
    }
    html.push_str("</head>\n<body>\n");
    html.push_str(body.as_str());
    html.push('\n');
    for src in manifest.scripts() {
        html.push_str(&format!("<script src=\"{}\"></script>\n", escape_html(src)));
    }
    html.push_str("</body>\n</html>\n");
    Markup(html)
}
