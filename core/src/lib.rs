//! Domain state for the `folio` terminal portfolio viewer.
//!
//! Everything here is plain data and state machines: which section is
//! visible, the sidebar overlay state on narrow terminals, the filterable
//! skills catalog and the portfolio document itself. None of it knows about
//! the terminal — rendering is a projection of this state and lives in
//! `folio-tui`, which keeps every property here testable headless.

pub mod catalog;
pub mod data;
pub mod menu;
pub mod nav;
pub mod section;

pub use catalog::{CatalogEntry, CatalogGroup, CategoryFilter, EntryKind, FilterState};
pub use data::{DataError, PortfolioDoc, ProjectKind};
pub use menu::{SidebarMenu, SIDEBAR_BREAKPOINT};
pub use nav::Navigator;
pub use section::SectionId;
