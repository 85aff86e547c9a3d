mod loader;
mod navbar;
mod people_filters;
mod people_link;
mod people_table;

pub use loader::Loader;
pub use navbar::Navbar;
pub use people_filters::PeopleFilters;
pub use people_link::PeopleLink;
pub use people_table::PeopleTable;
