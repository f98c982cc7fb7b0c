//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.
//! Data assets are loaded at compile time using `include_str!`.

// =============================================================================
// Data Assets (loaded at compile time)
// =============================================================================

/// Bundled catalog shown alongside admin-added items.
pub const PRESET_CATALOG: &str = include_str!("../assets/catalog/presets.json");

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name displayed in the header.
pub const APP_NAME: &str = "DayZ 模组中心";

/// Application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Tagline under the title.
pub const APP_TAGLINE: &str = "社区模组 · 按分类与模块浏览";

// =============================================================================
// Logging
// =============================================================================

/// Maximum level forwarded to the console.
pub const LOG_LEVEL: log::LevelFilter = if cfg!(debug_assertions) {
    log::LevelFilter::Debug
} else {
    log::LevelFilter::Info
};

// =============================================================================
// Catalog Configuration
// =============================================================================

/// Items per grid page.
pub const PAGE_SIZE: usize = 12;

/// Delay before a typed search term is applied (milliseconds).
pub const SEARCH_DEBOUNCE_MS: u32 = 200;

/// Fallbacks for item records missing display metadata.
pub const DEFAULT_ITEM_VERSION: &str = "v1.0.0";
pub const DEFAULT_ITEM_SIZE: &str = "0KB";
pub const DEFAULT_ITEM_IMAGE: &str = "images/weapon-mod.png";

// =============================================================================
// Storage Configuration
// =============================================================================

/// localStorage keys.
pub mod storage_keys {
    /// Admin-added catalog items.
    pub const ITEMS: &str = "dayz_mods_production";
    /// Registered accounts.
    pub const ACCOUNTS: &str = "dayz_users";
    /// Id of the signed-in account.
    pub const SESSION: &str = "dayz_user";
}

// =============================================================================
// Accounts
// =============================================================================

/// Minimum password length accepted at registration.
pub const MIN_PASSWORD_LEN: usize = 6;

// =============================================================================
// UI Configuration
// =============================================================================

/// How long a toast stays visible (milliseconds).
pub const NOTIFICATION_MS: u32 = 3000;

/// Media query below which the pagination bar collapses.
pub const COMPACT_LAYOUT_QUERY: &str = "(max-width: 768px)";

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
/// Change this value to switch icon styles globally.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
