use csslit_css::CssTransformOptions;

/// Include patterns applied when the caller does not configure any,
/// mirroring the common `src/components` layout for component styles
pub const DEFAULT_INCLUDE: &[&str] = &[
    "**/src/components/*.{js,ts}",
    "**/src/components/**/*.{js,ts}",
];

/// Options surface exposed to the host build pipeline.
#[derive(Clone)]
pub struct RewriteOptions {
    /// Glob patterns selecting the files to scan; empty means every file
    pub include: Vec<String>,
    /// Glob patterns excluding files from scanning, taking precedence
    pub exclude: Vec<String>,
    /// Pass-through configuration for the CSS transformer. Minification is
    /// enabled by default; caller settings override the defaults wholesale.
    pub css: CssTransformOptions,
}

impl Default for RewriteOptions {
    fn default() -> Self {
        Self {
            include: DEFAULT_INCLUDE.iter().map(|s| s.to_string()).collect(),
            exclude: Vec::new(),
            css: Default::default(),
        }
    }
}
