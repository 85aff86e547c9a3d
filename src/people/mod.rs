pub mod controls;
pub mod filter;
pub mod model;
pub mod parents;
pub mod sort;
pub mod state;

pub use filter::{apply, filter_people, Criteria};
pub use model::{Person, Sex};
pub use parents::{find_parent, NameIndex, ParentRef};
pub use sort::{icon_for, toggle, SortField, SortIcon, SortOrder, SortUpdate};
pub use state::{no_matches, LoadState, Panel};
