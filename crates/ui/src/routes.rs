use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::views::{ModeSelectView, QuizView, ResultView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", ModeSelectView)] ModeSelect {},
        #[route("/quiz", QuizView)] Quiz {},
        #[route("/result", ResultView)] Results {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            header { class: "app-header",
                Link { to: Route::ModeSelect {}, h1 { "Image Quiz" } }
            }
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}
