#[derive(Clone, Copy, clap::ValueEnum)]
pub(crate) enum OutputFormat {
    /// JSON format (pretty-printed)
    Json,
    /// YAML format
    Yaml,
}
