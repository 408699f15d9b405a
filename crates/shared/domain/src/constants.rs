//! Well-known identifiers shared across crates.

// OpenAPI tags
pub const SYSTEM_TAG: &str = "System";
pub const THEMES_TAG: &str = "Themes";
pub const COMPONENTS_TAG: &str = "Components";

// Built-in component keys
pub const HEADER: &str = "header";
pub const HERO: &str = "hero";
pub const RICH_TEXT: &str = "rich-text";
pub const GALLERY: &str = "gallery";
pub const FOOTER: &str = "footer";

// Capability tags
pub const RESPONSIVE: &str = "responsive";
pub const NAVIGATION: &str = "navigation";
pub const MEDIA: &str = "media";
pub const TEXT: &str = "text";
pub const LAZY_LOAD: &str = "lazy-load";
pub const STICKY: &str = "sticky";

/// Settings document expected inside every theme directory.
pub const THEME_SETTINGS_FILE: &str = "settings.json";
