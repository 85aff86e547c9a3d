pub mod api;
pub mod app;
pub mod components;
pub mod config;
pub mod i18n;
pub mod people;
pub mod search;
pub mod views;

#[cfg(test)]
mod tests;
