//! Build-time settings for the browser app.

/// Element the app mounts into; falls back to `<body>` when missing.
pub const MOUNT_ID: &str = "app";

/// `tracing` filter directive, overridable at build time with `TREEMAP_LOG`.
pub const LOG_DIRECTIVE: &str = match option_env!("TREEMAP_LOG") {
    Some(directive) => directive,
    None => "info",
};

/// Where the sales hierarchy is fetched from, overridable with `TREEMAP_DATASET_URL`.
pub const DATASET_URL: &str = match option_env!("TREEMAP_DATASET_URL") {
    Some(url) => url,
    None => treemap_shared::config::DATASET_URL,
};
