mod home;
mod not_found;
mod people;

pub use home::Home;
pub use not_found::NotFound;
pub use people::{People, PeopleLayout, PeopleResource, SelectedPerson};
