pub const ICON_FONT_CSS: &str = "jsonedit/fontawesome/css/font-awesome.min.css";
pub const EDITOR_CSS: &str = "jsonedit/style.css";
pub const BOOTSTRAP_CSS: &str = "jsonedit/bootstrap/css/bootstrap.min.css";
pub const RICH_TEXT_CSS: &str = "jsonedit/sceditor/themes/default.min.css";

pub const DOM_UTILITY_JS: &str = "jsonedit/jquery/jquery.min.js";
pub const UI_FRAMEWORK_JS: &str = "jsonedit/bootstrap/js/bootstrap.min.js";
pub const JSON_EDITOR_JS: &str = "jsonedit/jsoneditor/jsoneditor.min.js";
pub const RICH_TEXT_JS: &str = "jsonedit/sceditor/jquery.sceditor.bbcode.min.js";

/// Static assets one widget needs on the page. Sequences are in load order;
/// the consuming page must include them as given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetManifest {
    stylesheets: Vec<&'static str>,
    scripts: Vec<&'static str>,
}

impl AssetManifest {
    pub fn for_widget(theme: &str, rich_text: bool) -> Self {
        let mut stylesheets = vec![ICON_FONT_CSS, EDITOR_CSS];
        let mut scripts = vec![DOM_UTILITY_JS, UI_FRAMEWORK_JS, JSON_EDITOR_JS];

        if theme.starts_with("bootstrap") {
            stylesheets.push(BOOTSTRAP_CSS);
        }
        if rich_text {
            stylesheets.push(RICH_TEXT_CSS);
            scripts.push(RICH_TEXT_JS);
        }

        Self {
            stylesheets,
            scripts,
        }
    }

    pub fn stylesheets(&self) -> &[&'static str] {
        self.stylesheets.as_slice()
    }

    pub fn scripts(&self) -> &[&'static str] {
        self.scripts.as_slice()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bootstrap_theme_appends_framework_styles_last() {
        let manifest = AssetManifest::for_widget("bootstrap3", false);

        assert_eq!(
            manifest.stylesheets(),
            [ICON_FONT_CSS, EDITOR_CSS, BOOTSTRAP_CSS],
        );
        assert_eq!(
            manifest.scripts(),
            [DOM_UTILITY_JS, UI_FRAMEWORK_JS, JSON_EDITOR_JS],
        );
    }

    #[test]
    fn non_bootstrap_theme_skips_framework_styles() {
        let manifest = AssetManifest::for_widget("foundation", false);

        assert_eq!(manifest.stylesheets(), [ICON_FONT_CSS, EDITOR_CSS]);
        assert_eq!(
            manifest.scripts(),
            [DOM_UTILITY_JS, UI_FRAMEWORK_JS, JSON_EDITOR_JS],
        );
    }

    #[test]
    fn bootstrap_prefix_match_is_literal() {
        let manifest = AssetManifest::for_widget("bootstrap4", false);
        assert_eq!(manifest.stylesheets().last(), Some(&BOOTSTRAP_CSS));

        let manifest = AssetManifest::for_widget("Bootstrap3", false);
        assert_eq!(manifest.stylesheets(), [ICON_FONT_CSS, EDITOR_CSS]);
    }

    #[test]
    fn rich_text_appends_one_stylesheet_and_one_script() {
        let manifest = AssetManifest::for_widget("bootstrap3", true);

        assert_eq!(
            manifest.stylesheets(),
            [ICON_FONT_CSS, EDITOR_CSS, BOOTSTRAP_CSS, RICH_TEXT_CSS],
        );
        assert_eq!(
            manifest.scripts(),
            [DOM_UTILITY_JS, UI_FRAMEWORK_JS, JSON_EDITOR_JS, RICH_TEXT_JS],
        );
    }
}
