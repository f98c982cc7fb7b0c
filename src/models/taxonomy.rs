//! Two-level catalog taxonomy: categories and the modules scoped to them.
//!
//! The table is static. Categories form a closed enum; modules are
//! identified by a stable key (the label used in addresses and item
//! records), so display text never takes part in matching.

use serde::{Deserialize, Deserializer, Serialize};

// ============================================================================
// Category
// ============================================================================

/// Top-level taxonomy bucket.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Category {
    /// Wildcard matching every category.
    #[default]
    All,
    Weapons,
    Clothing,
    Vehicles,
    Building,
    Tools,
    Features,
}

impl Category {
    /// Every category in display order, `All` first.
    pub const LIST: [Category; 7] = [
        Category::All,
        Category::Weapons,
        Category::Clothing,
        Category::Vehicles,
        Category::Building,
        Category::Tools,
        Category::Features,
    ];

    /// Stable key used in addresses and item records.
    pub fn key(self) -> &'static str {
        match self {
            Self::All => "全部",
            Self::Weapons => "武器",
            Self::Clothing => "服装",
            Self::Vehicles => "载具",
            Self::Building => "建筑",
            Self::Tools => "工具",
            Self::Features => "功能",
        }
    }

    /// ASCII alias accepted when parsing.
    pub fn slug(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Weapons => "weapons",
            Self::Clothing => "clothing",
            Self::Vehicles => "vehicles",
            Self::Building => "building",
            Self::Tools => "tools",
            Self::Features => "features",
        }
    }

    /// Text shown on the category control.
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "全部分类",
            other => other.key(),
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::All => "📦",
            Self::Weapons => "🔫",
            Self::Clothing => "👕",
            Self::Vehicles => "🚗",
            Self::Building => "🏠",
            Self::Tools => "🔧",
            Self::Features => "⚙️",
        }
    }

    /// Parse a category from its key or slug.
    ///
    /// Surrounding whitespace is ignored; slugs match case-insensitively.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::LIST
            .into_iter()
            .find(|c| c.key() == raw || c.slug().eq_ignore_ascii_case(raw))
    }

    #[inline]
    pub fn is_all(self) -> bool {
        self == Self::All
    }
}

impl TryFrom<String> for Category {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value).ok_or_else(|| format!("unknown category '{}'", value))
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.key().to_string()
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

// ============================================================================
// Module
// ============================================================================

/// Second-level taxonomy bucket.
///
/// Only the values in the static table exist; construct them through
/// [`Module::parse`] or the taxonomy lookups.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub struct Module {
    key: &'static str,
}

impl Module {
    /// Wildcard module, valid under every category.
    pub const ALL: Module = Module::new("全部");

    const fn new(key: &'static str) -> Self {
        Self { key }
    }

    /// Stable key used in addresses and item records.
    #[inline]
    pub fn key(self) -> &'static str {
        self.key
    }

    #[inline]
    pub fn is_all(self) -> bool {
        self == Self::ALL
    }

    /// Text shown on the module control.
    pub fn label(self) -> &'static str {
        if self.is_all() { "全部模块" } else { self.key }
    }

    pub fn icon(self) -> &'static str {
        MODULE_ICONS
            .iter()
            .find(|(key, _)| *key == self.key)
            .map(|(_, icon)| *icon)
            .unwrap_or("📦")
    }

    /// Parse any known module key.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw == Self::ALL.key {
            return Some(Self::ALL);
        }
        TAXONOMY
            .iter()
            .flat_map(|entry| entry.modules.iter())
            .find(|m| m.key == raw)
            .copied()
    }
}

impl TryFrom<String> for Module {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value).ok_or_else(|| format!("unknown module '{}'", value))
    }
}

// Not derived: the `&'static str` field would tie `'de` to `'static`.
impl<'de> Deserialize<'de> for Module {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Module::try_from(raw).map_err(serde::de::Error::custom)
    }
}

impl From<Module> for String {
    fn from(module: Module) -> Self {
        module.key.to_string()
    }
}

impl std::fmt::Display for Module {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key)
    }
}

// ============================================================================
// Static Table
// ============================================================================

struct TaxonomyEntry {
    category: Category,
    default: Module,
    /// Valid modules in display order, `Module::ALL` first.
    modules: &'static [Module],
}

const fn m(key: &'static str) -> Module {
    Module::new(key)
}

static TAXONOMY: [TaxonomyEntry; 7] = [
    TaxonomyEntry {
        category: Category::All,
        default: Module::ALL,
        modules: &[Module::ALL],
    },
    TaxonomyEntry {
        category: Category::Weapons,
        default: m("枪械"),
        modules: &[Module::ALL, m("枪械"), m("配件"), m("近身武器"), m("投掷武器")],
    },
    TaxonomyEntry {
        category: Category::Clothing,
        default: m("套装"),
        modules: &[
            Module::ALL,
            m("套装"),
            m("头盔"),
            m("眼镜"),
            m("面具"),
            m("上衣"),
            m("防弹衣"),
            m("手套"),
            m("背包"),
            m("腰带"),
            m("裤子"),
            m("鞋子"),
        ],
    },
    TaxonomyEntry {
        category: Category::Vehicles,
        default: m("汽车"),
        modules: &[Module::ALL, m("汽车"), m("摩托车"), m("直升机"), m("船只")],
    },
    TaxonomyEntry {
        category: Category::Building,
        default: m("房屋"),
        modules: &[Module::ALL, m("房屋"), m("围栏"), m("门"), m("楼梯"), m("装饰")],
    },
    TaxonomyEntry {
        category: Category::Tools,
        default: m("修理工具"),
        modules: &[
            Module::ALL,
            m("修理工具"),
            m("医疗工具"),
            m("烹饪工具"),
            m("采集工具"),
        ],
    },
    TaxonomyEntry {
        category: Category::Features,
        default: m("天气系统"),
        modules: &[
            Module::ALL,
            m("天气系统"),
            m("任务系统"),
            m("经济系统"),
            m("AI系统"),
            m("特殊功能"),
            m("交互系统"),
            m("娱乐组件"),
        ],
    },
];

const MODULE_ICONS: &[(&str, &str)] = &[
    ("全部", "📋"),
    ("枪械", "🔫"),
    ("配件", "🔧"),
    ("近身武器", "⚔️"),
    ("投掷武器", "💣"),
    ("套装", "👕"),
    ("头盔", "⛑️"),
    ("眼镜", "👓"),
    ("面具", "🎭"),
    ("上衣", "👔"),
    ("防弹衣", "🛡️"),
    ("手套", "🧤"),
    ("背包", "🎒"),
    ("腰带", "🧵"),
    ("裤子", "👖"),
    ("鞋子", "👟"),
    ("汽车", "🚗"),
    ("摩托车", "🏍️"),
    ("直升机", "🚁"),
    ("船只", "⛵"),
    ("房屋", "🏠"),
    ("围栏", "🚧"),
    ("门", "🚪"),
    ("楼梯", "🪜"),
    ("装饰", "🎨"),
    ("修理工具", "🔧"),
    ("医疗工具", "💊"),
    ("烹饪工具", "🍳"),
    ("采集工具", "⛏️"),
    ("天气系统", "🌦️"),
    ("任务系统", "📋"),
    ("经济系统", "💰"),
    ("AI系统", "🤖"),
    ("特殊功能", "✨"),
    ("交互系统", "🔄"),
    ("娱乐组件", "🎮"),
];

fn entry(category: Category) -> &'static TaxonomyEntry {
    // LIST and TAXONOMY share the same order.
    &TAXONOMY[category as usize]
}

// ============================================================================
// Lookups
// ============================================================================

/// Valid modules for a category in display order, `Module::ALL` first.
pub fn valid_modules(category: Category) -> &'static [Module] {
    entry(category).modules
}

/// Module selected when a category is chosen without an explicit module.
pub fn default_module(category: Category) -> Module {
    entry(category).default
}

/// Default module for a raw category key, `Module::ALL` when unrecognized.
pub fn default_module_for(raw: &str) -> Module {
    Category::parse(raw)
        .map(default_module)
        .unwrap_or(Module::ALL)
}

pub fn is_valid_category(raw: &str) -> bool {
    Category::parse(raw).is_some()
}

pub fn is_valid_module(module: Module, category: Category) -> bool {
    valid_modules(category).contains(&module)
}

/// Category owning a module. `Module::ALL` belongs to `Category::All`.
pub fn category_for_module(module: Module) -> Option<Category> {
    if module.is_all() {
        return Some(Category::All);
    }
    TAXONOMY
        .iter()
        .find(|entry| entry.modules.contains(&module))
        .map(|entry| entry.category)
}
