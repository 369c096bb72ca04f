//! Bookstore core: pure pagination state machines shared by every screen.
mod filters;
mod page;
mod paged;

pub use filters::{FilterSet, FilterValue};
pub use page::{PageRequest, PageResult};
pub use paged::{ListItem, LoadPhase, PageApplied, PagedList, PagingSummary};
