//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuArrowDownWideNarrow as Sort, LuArrowLeft as Back, LuCalendar as Calendar,
        LuChevronLeft as ChevronLeft, LuChevronRight as ChevronRight, LuCircleAlert as Error,
        LuCircleCheck as Success, LuDownload as Download, LuHardDrive as Size, LuInfo as Info,
        LuLayoutGrid as Grid, LuLogOut as Logout, LuPackage as Empty, LuRotateCcw as Reset,
        LuSearch as Search, LuShieldCheck as Admin, LuTag as Version, LuUser as User, LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsArrowCounterclockwise as Reset, BsArrowLeft as Back, BsBoxArrowRight as Logout,
        BsBoxSeam as Empty, BsCalendar3 as Calendar, BsCheckCircle as Success,
        BsChevronLeft as ChevronLeft, BsChevronRight as ChevronRight, BsDownload as Download,
        BsExclamationCircle as Error, BsGrid as Grid, BsHdd as Size, BsInfoCircle as Info,
        BsPerson as User, BsSearch as Search, BsShieldLock as Admin, BsSortDown as Sort,
        BsTag as Version, BsXLg as Close,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(CHEVRON_LEFT, ChevronLeft);
themed_icon!(CHEVRON_RIGHT, ChevronRight);
themed_icon!(BACK, Back);
themed_icon!(SEARCH, Search);
themed_icon!(SORT, Sort);
themed_icon!(RESET, Reset);
themed_icon!(GRID, Grid);
themed_icon!(EMPTY, Empty);
themed_icon!(CLOSE, Close);
themed_icon!(USER, User);
themed_icon!(ADMIN, Admin);
themed_icon!(LOGOUT, Logout);
themed_icon!(DOWNLOAD, Download);
themed_icon!(CALENDAR, Calendar);
themed_icon!(SIZE, Size);
themed_icon!(VERSION, Version);
themed_icon!(SUCCESS, Success);
themed_icon!(ERROR, Error);
themed_icon!(INFO, Info);
