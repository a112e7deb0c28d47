pub(crate) const DEFAULT_USER_AGENT: &str = concat!(
    "volley/",
    env!("CARGO_PKG_VERSION"),
    " (+https://github.com/volley-rs/volley)"
);

pub(super) const DEFAULT_CONCURRENCY: &str = "100";

pub(super) const DEFAULT_REQUEST_TIMEOUT: &str = "30s";
