//! Pure projection of the filter selection onto what the page shows.

use crate::core::catalog;
use crate::models::taxonomy::valid_modules;
use crate::models::{Category, FilterSelection, Item, Module};

/// A category button.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryControl {
    pub category: Category,
    pub active: bool,
}

/// A module button. Only modules valid for the current category appear.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModuleControl {
    pub module: Module,
    pub active: bool,
}

/// Everything the catalog page renders for one selection.
#[derive(Clone, Debug, PartialEq)]
pub struct CatalogView {
    pub categories: Vec<CategoryControl>,
    pub modules: Vec<ModuleControl>,
    /// Items on the current page.
    pub items: Vec<Item>,
    /// Filtered count across all pages.
    pub total: usize,
    pub page: usize,
    pub page_count: usize,
    pub has_prev: bool,
    pub has_next: bool,
    pub summary: String,
}

impl CatalogView {
    pub fn project(selection: &FilterSelection, items: &[Item], page_size: usize) -> Self {
        let categories = Category::LIST
            .into_iter()
            .map(|category| CategoryControl {
                category,
                active: category == selection.category,
            })
            .collect();

        let modules = valid_modules(selection.category)
            .iter()
            .map(|module| ModuleControl {
                module: *module,
                active: *module == selection.module,
            })
            .collect();

        let result = catalog::query(items, selection, page_size);

        Self {
            categories,
            modules,
            items: result.items.into_iter().cloned().collect(),
            total: result.total,
            page: result.page,
            page_count: result.page_count,
            has_prev: result.page > 1,
            has_next: result.page < result.page_count,
            summary: summary(selection, result.total),
        }
    }

    /// The module bar only makes sense below a specific category.
    pub fn show_modules(&self) -> bool {
        self.modules.len() > 1
    }

    pub fn show_pagination(&self) -> bool {
        self.page_count > 1
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Line above the grid describing the active filter.
pub fn summary(selection: &FilterSelection, count: usize) -> String {
    let FilterSelection {
        category, module, ..
    } = selection;
    if category.is_all() && module.is_all() {
        format!("显示全部模组 ({}个)", count)
    } else if module.is_all() {
        format!("显示{}分类下的所有模组 ({}个)", category, count)
    } else {
        format!("显示{}分类下的{}模块模组 ({}个)", category, module, count)
    }
}

/// Text for the empty-state placeholder.
pub fn empty_message(selection: &FilterSelection) -> String {
    if !selection.search_term.is_empty() {
        return format!("没有找到与“{}”匹配的模组", selection.search_term);
    }
    if selection.category.is_all() {
        return "暂无模组".to_string();
    }
    format!(
        "暂无{}分类下的{}模块模组",
        selection.category,
        selection.module.label()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(n: usize, category: &str, module: &str) -> Vec<Item> {
        (0..n)
            .map(|i| {
                serde_json::from_value(serde_json::json!({
                    "id": format!("{}-{}-{}", category, module, i),
                    "name": format!("item {:03}", i),
                    "category": category,
                    "module": module,
                }))
                .unwrap()
            })
            .collect()
    }

    fn selection(category: Category, module: &str) -> FilterSelection {
        FilterSelection {
            category,
            module: Module::parse(module).unwrap(),
            ..FilterSelection::default()
        }
    }

    #[test]
    fn test_controls_follow_selection() {
        let view = CatalogView::project(&selection(Category::Weapons, "配件"), &[], 12);

        let active: Vec<_> = view.categories.iter().filter(|c| c.active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].category, Category::Weapons);

        let keys: Vec<_> = view.modules.iter().map(|m| m.module.key()).collect();
        assert_eq!(keys, vec!["全部", "枪械", "配件", "近身武器", "投掷武器"]);
        assert!(view.modules[2].active);
        assert_eq!(view.modules.iter().filter(|m| m.active).count(), 1);
        assert!(view.show_modules());
    }

    #[test]
    fn test_all_category_hides_modules() {
        let view = CatalogView::project(&FilterSelection::default(), &[], 12);
        assert_eq!(view.modules.len(), 1);
        assert!(!view.show_modules());
    }

    #[test]
    fn test_pagination_flags() {
        let data = items(30, "武器", "枪械");
        let mut sel = selection(Category::Weapons, "枪械");

        let view = CatalogView::project(&sel, &data, 12);
        assert_eq!((view.page, view.page_count), (1, 3));
        assert!(!view.has_prev && view.has_next);
        assert!(view.show_pagination());
        assert_eq!(view.items.len(), 12);

        sel.page = 3;
        let view = CatalogView::project(&sel, &data, 12);
        assert!(view.has_prev && !view.has_next);
        assert_eq!(view.items.len(), 6);
    }

    #[test]
    fn test_empty_result_lands_on_page_one() {
        let data = items(30, "武器", "枪械");
        let mut sel = selection(Category::Weapons, "配件");
        sel.page = 3;

        let view = CatalogView::project(&sel, &data, 12);
        assert!(view.is_empty());
        assert_eq!(view.page, 1);
        assert!(!view.show_pagination());
        assert_eq!(view.summary, "显示武器分类下的配件模块模组 (0个)");
    }

    #[test]
    fn test_summary_texts() {
        assert_eq!(summary(&FilterSelection::default(), 5), "显示全部模组 (5个)");
        assert_eq!(
            summary(&selection(Category::Vehicles, "全部"), 2),
            "显示载具分类下的所有模组 (2个)"
        );
    }

    #[test]
    fn test_empty_message() {
        assert_eq!(
            empty_message(&selection(Category::Tools, "医疗工具")),
            "暂无工具分类下的医疗工具模块模组"
        );
        let mut sel = FilterSelection::default();
        sel.search_term = "xyz".into();
        assert_eq!(empty_message(&sel), "没有找到与“xyz”匹配的模组");
    }
}
