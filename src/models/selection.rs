//! Filter selection and the snapshot attached to history entries.

use serde::{Deserialize, Serialize};

use super::taxonomy::{Category, Module, is_valid_module};

/// Result ordering for the catalog grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Lexicographic by name (default)
    #[default]
    Name,
    /// Newest first
    Date,
    /// Most downloaded first
    Popularity,
    /// Largest first
    Size,
}

impl SortKey {
    pub const LIST: [SortKey; 4] = [
        SortKey::Name,
        SortKey::Date,
        SortKey::Popularity,
        SortKey::Size,
    ];

    /// Value carried by the sort control.
    pub fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Date => "date",
            Self::Popularity => "popularity",
            Self::Size => "size",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "按名称",
            Self::Date => "最新发布",
            Self::Popularity => "最受欢迎",
            Self::Size => "文件大小",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::LIST
            .into_iter()
            .find(|key| key.key().eq_ignore_ascii_case(raw))
    }
}

/// Current catalog selection.
///
/// Only `FilterState` hands these out; a clone can be inspected freely
/// without affecting the live state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterSelection {
    pub category: Category,
    pub module: Module,
    /// Normalized (NFKC, trimmed, lowercase) search term.
    pub search_term: String,
    pub sort: SortKey,
    /// 1-based page number.
    pub page: usize,
}

impl Default for FilterSelection {
    fn default() -> Self {
        Self {
            category: Category::All,
            module: Module::ALL,
            search_term: String::new(),
            sort: SortKey::Name,
            page: 1,
        }
    }
}

impl FilterSelection {
    /// Check the taxonomy invariants: the module belongs to the category,
    /// and the `All` category only pairs with `Module::ALL`.
    pub fn is_consistent(&self) -> bool {
        is_valid_module(self.module, self.category)
            && (!self.category.is_all() || self.module.is_all())
            && self.page >= 1
    }

    /// Whether two selections map to the same address.
    pub fn same_address(&self, other: &FilterSelection) -> bool {
        self.category == other.category && self.module == other.module
    }
}

/// State recorded with every pushed history entry.
///
/// The timestamp is informational; ordering never depends on it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistorySnapshot {
    pub category: Category,
    pub module: Module,
    pub timestamp: f64,
}

impl HistorySnapshot {
    pub fn of(selection: &FilterSelection, timestamp: f64) -> Self {
        Self {
            category: selection.category,
            module: selection.module,
            timestamp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_selection() {
        let selection = FilterSelection::default();
        assert_eq!(selection.category, Category::All);
        assert_eq!(selection.module, Module::ALL);
        assert_eq!(selection.page, 1);
        assert!(selection.is_consistent());
    }

    #[test]
    fn test_inconsistent_selections() {
        let mut selection = FilterSelection {
            category: Category::All,
            module: Module::parse("汽车").unwrap(),
            ..FilterSelection::default()
        };
        assert!(!selection.is_consistent());

        selection.category = Category::Weapons;
        assert!(!selection.is_consistent());

        selection.category = Category::Vehicles;
        assert!(selection.is_consistent());

        selection.page = 0;
        assert!(!selection.is_consistent());
    }

    #[test]
    fn test_sort_key_parse() {
        assert_eq!(SortKey::parse("size"), Some(SortKey::Size));
        assert_eq!(SortKey::parse("Popularity"), Some(SortKey::Popularity));
        assert_eq!(SortKey::parse("random"), None);
    }

    #[test]
    fn test_snapshot_json_shape() {
        let selection = FilterSelection {
            category: Category::Weapons,
            module: Module::parse("配件").unwrap(),
            ..FilterSelection::default()
        };
        let snapshot = HistorySnapshot::of(&selection, 42.0);
        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["category"], "武器");
        assert_eq!(json["module"], "配件");
        assert_eq!(json["timestamp"], 42.0);

        let back: HistorySnapshot = serde_json::from_value(json).unwrap();
        assert_eq!(back, snapshot);
    }
}
