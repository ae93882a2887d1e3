//! Process-wide page registry.
//!
//! The registry is built once from [`PAGE_TABLE`] and is read-only
//! afterwards, so any number of threads can share [`PAGES`] without locking.
//!
//! # Shipped Pages
//!
//! | Key        | Type       | Title   | Section |
//! |------------|------------|---------|---------|
//! | `home`     | `Home`     |         |         |
//! | `category` | `Category` | "Notes" | `NOTES` |
//! | `abcd`     | `Static`   | "ABCD"  |         |
//!
//! Adding a page means adding a row to [`PAGE_TABLE`]; there is no runtime
//! registration.

use crate::error::RegistryError;
use crate::page::{PageDescriptor, PageType, Section};
use rustc_hash::FxHashMap;
use std::{fmt, sync::LazyLock};

/// Literal page table backing [`PAGES`].
pub const PAGE_TABLE: &[(&str, PageDescriptor)] = &[
    ("home", PageDescriptor::new(PageType::Home)),
    (
        "category",
        PageDescriptor::new(PageType::Category)
            .with_section(Section::Notes)
            .with_title("Notes"),
    ),
    ("abcd", PageDescriptor::new(PageType::Static).with_title("ABCD")),
];

/// Global page registry, initialized on first access.
pub static PAGES: LazyLock<PageRegistry> =
    LazyLock::new(|| PageRegistry::from_entries(PAGE_TABLE));

// ============================================================================
// Registry
// ============================================================================

/// Immutable mapping from page identifier to [`PageDescriptor`].
///
/// Keeps the literal table for ordered iteration and a hash index for lookup.
#[derive(Debug)]
pub struct PageRegistry {
    entries: &'static [(&'static str, PageDescriptor)],
    index: FxHashMap<&'static str, usize>,
}

impl PageRegistry {
    /// Build a registry over a literal table.
    ///
    /// If a key appears twice, the first row wins.
    pub fn from_entries(entries: &'static [(&'static str, PageDescriptor)]) -> Self {
        let mut index = FxHashMap::default();
        for (pos, (key, _)) in entries.iter().enumerate() {
            index.entry(*key).or_insert(pos);
        }
        Self { entries, index }
    }

    /// Look up a page, reporting a miss as [`RegistryError::NotFound`].
    ///
    /// Keys match exactly: no case folding, no trimming.
    pub fn get(&self, page_id: &str) -> Result<&PageDescriptor, RegistryError> {
        self.lookup(page_id)
            .ok_or_else(|| RegistryError::NotFound(page_id.to_owned()))
    }

    /// Look up a page, returning `None` on a miss.
    pub fn lookup(&self, page_id: &str) -> Option<&PageDescriptor> {
        self.index.get(page_id).map(|&pos| &self.entries[pos].1)
    }

    pub fn contains(&self, page_id: &str) -> bool {
        self.index.contains_key(page_id)
    }

    /// All registered identifiers.
    ///
    /// Currently in table order, but callers should treat the order as unspecified.
    pub fn list_keys(&self) -> Vec<&'static str> {
        self.iter().map(|(key, _)| key).collect()
    }

    /// Iterate `(key, descriptor)` pairs, skipping shadowed duplicates.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &PageDescriptor)> + '_ {
        self.entries
            .iter()
            .enumerate()
            .filter(|(pos, (key, _))| self.index.get(key) == Some(pos))
            .map(|(_, (key, desc))| (*key, desc))
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Pages classified under `section`.
    pub fn by_section(&self, section: Section) -> Vec<(&'static str, &PageDescriptor)> {
        self.iter()
            .filter(|(_, desc)| desc.section == Some(section))
            .collect()
    }

    /// Pages rendered with `page_type`.
    pub fn by_type(&self, page_type: PageType) -> Vec<(&'static str, &PageDescriptor)> {
        self.iter()
            .filter(|(_, desc)| desc.page_type == page_type)
            .collect()
    }

    /// Report entries whose optional fields don't follow the usual shape.
    ///
    /// The checks are advisory. Every descriptor is still served by [`get`](Self::get).
    pub fn check(&self) -> Vec<ConventionWarning> {
        self.iter()
            .flat_map(|(key, desc)| {
                check_descriptor(desc)
                    .into_iter()
                    .map(move |kind| ConventionWarning { key, kind })
            })
            .collect()
    }
}

// ============================================================================
// Convention Checks
// ============================================================================

/// An entry that breaks the page table's conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConventionWarning {
    pub key: &'static str,
    pub kind: WarningKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningKind {
    /// `section` set on a page that doesn't list posts
    SectionOnNonCategory(PageType),
    /// `Category` page without a section to list
    CategoryWithoutSection,
    /// `Home` page with a title (the front page uses the site title)
    TitleOnHome,
    /// `Category`/`Static` page without a title
    MissingTitle(PageType),
}

impl fmt::Display for ConventionWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key = self.key;
        match self.kind {
            WarningKind::SectionOnNonCategory(ty) => {
                write!(f, "`{key}`: section is ignored on {ty} pages")
            }
            WarningKind::CategoryWithoutSection => {
                write!(f, "`{key}`: category page has no section")
            }
            WarningKind::TitleOnHome => write!(f, "`{key}`: home page has a title"),
            WarningKind::MissingTitle(ty) => write!(f, "`{key}`: {ty} page has no title"),
        }
    }
}

fn check_descriptor(desc: &PageDescriptor) -> Vec<WarningKind> {
    let mut warnings = Vec::new();

    match (desc.page_type, desc.section) {
        (PageType::Category, None) => warnings.push(WarningKind::CategoryWithoutSection),
        (ty @ (PageType::Home | PageType::Static), Some(_)) => {
            warnings.push(WarningKind::SectionOnNonCategory(ty));
        }
        _ => {}
    }

    match (desc.page_type, desc.title) {
        (PageType::Home, Some(_)) => warnings.push(WarningKind::TitleOnHome),
        (ty @ (PageType::Category | PageType::Static), None) => {
            warnings.push(WarningKind::MissingTitle(ty));
        }
        _ => {}
    }

    warnings
}

// ============================================================================
// Tests
// ============================================================================
