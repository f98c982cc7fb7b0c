//! Query-string codec for the catalog address.
//!
//! Only the category and module live in the address:
//! - `?cat=武器&mod=配件` - specific category and module
//! - `?cat=武器` - category with its default module
//! - `?mod=全部&cat=武器` - explicit module wildcard under a category
//! - (empty) - everything
//!
//! `item` selects the detail view and is never written by the filter.

use url::form_urlencoded;

use crate::models::taxonomy::{Category, Module, default_module, is_valid_module};
use crate::models::FilterSelection;

pub const PARAM_CATEGORY: &str = "cat";
pub const PARAM_MODULE: &str = "mod";
pub const PARAM_ITEM: &str = "item";

/// Raw address parameters, unvalidated.
///
/// Values are percent-decoded. The first occurrence of a key wins and
/// empty values count as absent.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AddressParams {
    pub category: Option<String>,
    pub module: Option<String>,
    pub item: Option<String>,
}

impl AddressParams {
    /// Parse a query string, with or without the leading `?`.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut params = Self::default();

        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            let value = value.trim();
            if value.is_empty() {
                continue;
            }
            let slot = match key.as_ref() {
                PARAM_CATEGORY => &mut params.category,
                PARAM_MODULE => &mut params.module,
                PARAM_ITEM => &mut params.item,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.to_string());
            }
        }

        params
    }

    /// Resolve to a consistent `(category, module)` pair.
    ///
    /// An unknown or missing category collapses to `(All, ALL)` and the
    /// module is ignored. A known category keeps the module only when it
    /// is valid for it, otherwise the category default is used.
    pub fn resolve(&self) -> (Category, Module) {
        let Some(category) = self.category.as_deref().and_then(Category::parse) else {
            return (Category::All, Module::ALL);
        };
        if category.is_all() {
            return (Category::All, Module::ALL);
        }

        let module = self
            .module
            .as_deref()
            .and_then(Module::parse)
            .filter(|m| is_valid_module(*m, category))
            .unwrap_or_else(|| default_module(category));

        (category, module)
    }
}

/// Serialize the addressable part of a selection.
///
/// Returns an empty string for `(All, ALL)`, otherwise a query with the
/// leading `?`. The module is left out when it equals the category default.
pub fn to_query(selection: &FilterSelection) -> String {
    if selection.category.is_all() {
        return String::new();
    }

    let mut serializer = form_urlencoded::Serializer::new(String::new());
    serializer.append_pair(PARAM_CATEGORY, selection.category.key());
    if selection.module != default_module(selection.category) {
        serializer.append_pair(PARAM_MODULE, selection.module.key());
    }
    format!("?{}", serializer.finish())
}
