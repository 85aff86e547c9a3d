use dioxus::prelude::*;
use dioxus_free_icons::Icon;

use crate::app::Route;
use crate::i18n::{set_lang, t, use_i18n, LANGUAGES};

//Icons
use dioxus_free_icons::icons::hi_solid_icons::HiHome;
use dioxus_free_icons::icons::hi_solid_icons::HiUsers;

#[component]
pub fn Navbar() -> Element {
    let route = use_route::<Route>();
    // Coming back to the list keeps whatever filters were active.
    let params = route.search_params().cloned().unwrap_or_default();

    let home_class = if matches!(route, Route::Home {}) { "navbar-item is-active" } else { "navbar-item" };
    let people_class = if route.search_params().is_some() { "navbar-item is-active" } else { "navbar-item" };

    let i18n = use_i18n();
    let current_lang = i18n.read().lang.clone();
    let lang_buttons: Vec<(&'static str, &'static str)> = LANGUAGES
        .iter()
        .map(|(code, _)| (*code, if *code == current_lang { "lang-button is-active" } else { "lang-button" }))
        .collect();

    rsx! {
        nav { class: "navbar", "data-cy": "nav", role: "navigation",
            Link { to: Route::Home {}, class: home_class,
                Icon {
                    width: 18,
                    height: 18,
                    fill: "currentColor",
                    icon: HiHome,
                },
                span { {t("nav.home")} }
            }
            Link { to: Route::People { params }, class: people_class,
                Icon {
                    width: 18,
                    height: 18,
                    fill: "currentColor",
                    icon: HiUsers,
                },
                span { {t("nav.people")} }
            }
            div { class: "navbar-end",
                for (code, class) in lang_buttons {
                    button {
                        class: class,
                        onclick: move |_| set_lang(i18n, code),
                        {code.to_uppercase()}
                    }
                }
            }
        }

        main { class: "section",
            Outlet::<Route> {}
        }
    }
}
