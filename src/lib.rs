//! pagecfg - static page registry for a blog front-end.
//!
//! Maps page identifiers (route slugs) to a [`PageDescriptor`] that tells the
//! renderer which layout to use, what title to show and which content
//! [`Section`] a listing page draws from.
//!
//! ```
//! use pagecfg::{PAGES, PageType, RegistryError};
//!
//! let page = PAGES.get("home")?;
//! assert_eq!(page.page_type, PageType::Home);
//!
//! assert!(matches!(PAGES.get("missing"), Err(RegistryError::NotFound(_))));
//! # Ok::<(), RegistryError>(())
//! ```

pub mod error;
pub mod page;
pub mod registry;

pub use error::{ParseError, RegistryError};
pub use page::{PageDescriptor, PageType, Section};
pub use registry::{ConventionWarning, PAGE_TABLE, PAGES, PageRegistry, WarningKind};
