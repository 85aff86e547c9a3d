use dioxus::prelude::*;

pub const DEFAULT_API_URL: &str =
    "https://mate-academy.github.io/react_people-table/api/people.json";

/// Application settings, shared through the component context.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub api_url: String,
}

impl Default for Config {
    fn default() -> Self {
        // Build-time override: PEOPLE_API_URL=http://localhost:8080/people.json dx serve
        Self::with_api_url(option_env!("PEOPLE_API_URL").unwrap_or(DEFAULT_API_URL))
    }
}

impl Config {
    pub fn with_api_url(api_url: impl Into<String>) -> Self {
        let api_url = api_url.into();
        let api_url = if api_url.trim().is_empty() {
            DEFAULT_API_URL.to_string()
        } else {
            api_url.trim().to_string()
        };
        Self { api_url }
    }
}

pub fn provide_config() {
    use_context_provider(Config::default);
}

pub fn use_config() -> Config {
    use_context::<Config>()
}
