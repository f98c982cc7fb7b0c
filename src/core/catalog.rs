//! Catalog query: filtering, sorting and pagination over item records.

use std::cmp::Ordering;
use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use crate::models::{Category, FilterSelection, Item, Module, SortKey};

/// `<number> <unit>` with KB/MB/GB, case-insensitive.
static SIZE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i-u)(\d+(?:\.\d+)?)\s*(KB|MB|GB)").expect("valid size pattern")
});

/// Normalize text for matching: NFKC, trimmed, lowercase.
pub fn normalize_search_term(raw: &str) -> String {
    raw.nfkc().collect::<String>().trim().to_lowercase()
}

/// Whether an item passes the category, module and search filters.
///
/// `search_term` is expected to be normalized already.
pub fn matches(item: &Item, selection: &FilterSelection) -> bool {
    matches_category(item, selection.category)
        && matches_module(item, selection.module)
        && matches_search(item, &selection.search_term)
}

fn matches_category(item: &Item, category: Category) -> bool {
    category.is_all() || Category::parse(&item.category) == Some(category)
}

fn matches_module(item: &Item, module: Module) -> bool {
    module.is_all() || Module::parse(&item.module) == Some(module)
}

fn matches_search(item: &Item, term: &str) -> bool {
    term.is_empty()
        || normalize_search_term(&item.name).contains(term)
        || normalize_search_term(&item.description).contains(term)
}

/// Parse a human-readable size into kilobytes.
///
/// Unparsable input counts as 0.
pub fn parse_size_kb(raw: &str) -> f64 {
    let Some(caps) = SIZE_RE.captures(raw) else {
        return 0.0;
    };
    let value: f64 = caps[1].parse().unwrap_or(0.0);
    match caps[2].to_ascii_uppercase().as_str() {
        "GB" => value * 1024.0 * 1024.0,
        "MB" => value * 1024.0,
        _ => value,
    }
}

/// Sort in place. Every ordering is stable.
pub fn sort_items(items: &mut [&Item], key: SortKey) {
    match key {
        SortKey::Name => items.sort_by(|a, b| a.name.cmp(&b.name)),
        SortKey::Date => items.sort_by(|a, b| compare_dates_desc(a, b)),
        SortKey::Popularity => {
            items.sort_by(|a, b| b.downloads.unwrap_or(0).cmp(&a.downloads.unwrap_or(0)))
        }
        SortKey::Size => items.sort_by(|a, b| {
            parse_size_kb(b.size_or_default()).total_cmp(&parse_size_kb(a.size_or_default()))
        }),
    }
}

/// Newest first; items without a date go last.
fn compare_dates_desc(a: &Item, b: &Item) -> Ordering {
    match (a.created_at.as_deref(), b.created_at.as_deref()) {
        (Some(a), Some(b)) => b.cmp(a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Number of pages for `total` items, at least 1.
pub fn page_count(total: usize, page_size: usize) -> usize {
    total.div_ceil(page_size.max(1)).max(1)
}

/// Clamp a 1-based page into `[1, page_count]`.
#[inline]
pub fn clamp_page(page: usize, page_count: usize) -> usize {
    page.clamp(1, page_count.max(1))
}

/// One page of filtered, sorted results.
#[derive(Debug, PartialEq)]
pub struct QueryResult<'a> {
    pub items: Vec<&'a Item>,
    /// Filtered count before slicing.
    pub total: usize,
    /// Effective (clamped) page.
    pub page: usize,
    pub page_count: usize,
}

/// Filter, sort and slice `items` for a selection.
pub fn query<'a>(items: &'a [Item], selection: &FilterSelection, page_size: usize) -> QueryResult<'a> {
    let mut filtered: Vec<&Item> = items.iter().filter(|item| matches(item, selection)).collect();
    sort_items(&mut filtered, selection.sort);

    let page_size = page_size.max(1);
    let total = filtered.len();
    let page_count = page_count(total, page_size);
    let page = clamp_page(selection.page, page_count);

    let items = filtered
        .into_iter()
        .skip((page - 1) * page_size)
        .take(page_size)
        .collect();

    QueryResult {
        items,
        total,
        page,
        page_count,
    }
}
