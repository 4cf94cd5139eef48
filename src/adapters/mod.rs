pub mod ghostty;
pub mod warp;

use std::sync::Arc;

use crate::color::ThemeColors;

pub use ghostty::GhosttyAdapter;
pub use warp::WarpAdapter;

/// A terminal theme source format.
///
/// Adapters are stateless and permissive: `parse` never fails, any field it
/// cannot find resolves to a default.
pub trait ThemeAdapter: Send + Sync {
    /// Identifying name, also the registry key.
    fn name(&self) -> &str;

    /// File extensions this adapter handles, without the leading dot.
    fn extensions(&self) -> &[&str];

    /// Parse raw file content into canonical theme colors.
    fn parse(&self, content: &str) -> ThemeColors;

    fn handles(&self, extension: &str) -> bool {
        self.extensions().contains(&extension)
    }
}

/// Every adapter shipped with the crate, in registration order.
pub fn builtin_adapters() -> Vec<Arc<dyn ThemeAdapter>> {
    vec![Arc::new(GhosttyAdapter), Arc::new(WarpAdapter)]
}

/// Remove at most one leading and one trailing quote character.
pub(crate) fn strip_quotes<'a>(value: &'a str, quotes: &[char]) -> &'a str {
    let value = value.strip_prefix(|c: char| quotes.contains(&c)).unwrap_or(value);
    value.strip_suffix(|c: char| quotes.contains(&c)).unwrap_or(value)
}

/// Treat empty values the same as missing keys.
pub(crate) fn non_empty(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|v| !v.is_empty())
}
