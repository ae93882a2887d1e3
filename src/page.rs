//! Page descriptor types.
//!
//! A [`PageDescriptor`] tells the renderer how to draw one page:
//!
//! | Field       | Type              | Notes                                   |
//! |-------------|-------------------|-----------------------------------------|
//! | `page_type` | [`PageType`]      | Mandatory, selects the rendering path   |
//! | `title`     | `Option<&str>`    | Page metadata title                     |
//! | `section`   | `Option<Section>` | Feed/navigation class, `Category` only  |
//!
//! # Wire Form
//!
//! Descriptors serialize the way the front-end spells them, with absent
//! fields omitted:
//!
//! ```json
//! { "type": "category", "title": "Notes", "section": "NOTES" }
//! ```

use crate::error::ParseError;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

// ============================================================================
// Page Type
// ============================================================================

/// Rendering strategy for a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageType {
    /// Front page (featured post, latest posts, section blocks)
    Home,
    /// Listing of posts in one section
    Category,
    /// Fixed content page
    Static,
}

impl PageType {
    /// Every page type, in declaration order.
    pub const ALL: [Self; 3] = [Self::Home, Self::Category, Self::Static];

    /// Lowercase key used in the wire form
    pub const fn key(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Category => "category",
            Self::Static => "static",
        }
    }
}

impl fmt::Display for PageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for PageType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|ty| ty.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseError::PageType(s.to_owned()))
    }
}

// ============================================================================
// Section
// ============================================================================

/// Content section a category page lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Section {
    Editorial,
    Notes,
    Diary,
}

impl Section {
    /// Every section, in navigation order.
    pub const ALL: [Self; 3] = [Self::Editorial, Self::Notes, Self::Diary];

    /// Uppercase key used in the wire form and by the posts API
    pub const fn key(self) -> &'static str {
        match self {
            Self::Editorial => "EDITORIAL",
            Self::Notes => "NOTES",
            Self::Diary => "DIARY",
        }
    }

    /// Human-readable name shown in navigation
    pub const fn label(self) -> &'static str {
        match self {
            Self::Editorial => "Editorial",
            Self::Notes => "Notes",
            Self::Diary => "Diary",
        }
    }

    /// URL path segment of the section listing
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Editorial => "editorial",
            Self::Notes => "notes",
            Self::Diary => "diary",
        }
    }

    /// One-line summary shown on the section listing
    pub const fn description(self) -> &'static str {
        match self {
            Self::Editorial => "Long-form analysis and commentary",
            Self::Notes => "Quick thoughts and observations",
            Self::Diary => "Personal reflections and daily entries",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Accepts the key (`NOTES`) or the slug (`notes`), case-insensitively.
impl FromStr for Section {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|section| section.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseError::Section(s.to_owned()))
    }
}

// ============================================================================
// Page Descriptor
// ============================================================================

/// Rendering descriptor for one registered page.
///
/// Built with `const fn`s so the page table can be a plain literal:
///
/// ```
/// use pagecfg::{PageDescriptor, PageType, Section};
///
/// const NOTES: PageDescriptor = PageDescriptor::new(PageType::Category)
///     .with_title("Notes")
///     .with_section(Section::Notes);
///
/// assert_eq!(NOTES.title, Some("Notes"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PageDescriptor {
    #[serde(rename = "type")]
    pub page_type: PageType,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<&'static str>,

    /// Only meaningful when `page_type` is [`PageType::Category`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section: Option<Section>,
}

impl PageDescriptor {
    /// Descriptor with no title and no section
    pub const fn new(page_type: PageType) -> Self {
        Self {
            page_type,
            title: None,
            section: None,
        }
    }

    /// Set the metadata title. `""` is kept as an empty title, not treated as absent.
    pub const fn with_title(self, title: &'static str) -> Self {
        Self {
            title: Some(title),
            ..self
        }
    }

    /// Classify the page under `section`
    pub const fn with_section(self, section: Section) -> Self {
        Self {
            section: Some(section),
            ..self
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
