//! Category icon configuration

use std::collections::HashMap;

/// Glyph shown for categories with no explicit mapping
pub const FALLBACK_ICON: &str = "\u{1f4e6}"; // 📦

/// Mapping from category slug to a display glyph
///
/// Passed into the builder as explicit configuration so the catalog taxonomy
/// can evolve without recompiling the tool. `IconMap::default()` carries the
/// stock taxonomy; entries can be added or replaced with [`IconMap::with_icon`].
#[derive(Debug, Clone)]
pub struct IconMap {
    icons: HashMap<String, String>,
    fallback: String,
}

impl Default for IconMap {
    fn default() -> Self {
        let icons = [
            ("system-integrations", "\u{1f50c}"),     // 🔌
            ("ai-media-generation", "\u{1f3a8}"),     // 🎨
            ("ai-utilities", "\u{1f916}"),            // 🤖
            ("realtime-audio", "\u{1f399}\u{fe0f}"),  // 🎙️
            ("productivity", "\u{1f4cb}"),            // 📋
            ("health", "\u{1f49a}"),                  // 💚
            ("research", "\u{1f52c}"),                // 🔬
            ("finance", "\u{1f4b0}"),                 // 💰
            ("smart-home", "\u{1f3e0}"),              // 🏠
            ("miscellaneous", "\u{1f3b2}"),           // 🎲
            ("skill-testing", "\u{1f9ea}"),           // 🧪
            ("github", "\u{1f419}"),                  // 🐙
            ("github-copilot", "\u{1f916}"),          // 🤖
            ("image-gen", "\u{1f5bc}\u{fe0f}"),       // 🖼️
        ]
        .into_iter()
        .map(|(slug, icon)| (slug.to_string(), icon.to_string()))
        .collect();

        Self {
            icons,
            fallback: FALLBACK_ICON.to_string(),
        }
    }
}

impl IconMap {
    /// An icon map with no entries (every category gets the fallback)
    #[must_use]
    pub fn empty() -> Self {
        Self {
            icons: HashMap::new(),
            fallback: FALLBACK_ICON.to_string(),
        }
    }

    /// Add or replace a category glyph
    #[must_use]
    pub fn with_icon(mut self, slug: impl Into<String>, icon: impl Into<String>) -> Self {
        self.icons.insert(slug.into(), icon.into());
        self
    }

    /// Replace the fallback glyph
    #[must_use]
    pub fn with_fallback(mut self, icon: impl Into<String>) -> Self {
        self.fallback = icon.into();
        self
    }

    /// Look up the glyph for a category slug
    #[must_use]
    pub fn get(&self, slug: &str) -> &str {
        self.icons.get(slug).map_or(&self.fallback, String::as_str)
    }
}
