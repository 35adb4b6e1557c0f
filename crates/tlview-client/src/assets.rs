//! Asset URL resolution
//!
//! Records carry asset paths relative to the asset host. Empty paths mean
//! "no asset" and resolve to nothing.

use tlview_core::prelude::*;
use url::Url;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetResolver {
    base: Url,
}

impl AssetResolver {
    /// Build a resolver for `base`. A missing trailing slash is added so the
    /// last path segment is kept when joining.
    pub fn new(base: &str) -> Result<Self> {
        let mut normalized = base.trim().to_string();
        if !normalized.ends_with('/') {
            normalized.push('/');
        }
        let base =
            Url::parse(&normalized).map_err(|e| Error::invalid_url(base, e.to_string()))?;
        if base.cannot_be_a_base() {
            return Err(Error::invalid_url(normalized, "cannot be used as a base"));
        }
        Ok(Self { base })
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    /// Absolute URL for `path`, or `None` when the record has no asset.
    ///
    /// Absolute URLs pass through untouched.
    pub fn resolve(&self, path: &str) -> Option<String> {
        let path = path.trim();
        if path.is_empty() {
            return None;
        }
        if let Ok(absolute) = Url::parse(path) {
            return Some(absolute.to_string());
        }
        match self.base.join(path.trim_start_matches('/')) {
            Ok(url) => Some(url.to_string()),
            Err(e) => {
                warn!("Could not resolve asset path '{}': {}", path, e);
                None
            }
        }
    }

    /// Last path segment of an asset path, used as a compact cell label.
    pub fn file_name(path: &str) -> &str {
        path.trim()
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .unwrap_or_default()
    }
}

impl Default for AssetResolver {
    fn default() -> Self {
        Self {
            base: Url::parse(crate::DEFAULT_ASSET_BASE).expect("default asset base is a valid URL"),
        }
    }
}
