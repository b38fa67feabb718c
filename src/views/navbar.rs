use crate::Route;
use crate::notify::Toasts;
use dioxus::prelude::*;

#[component]
pub fn Navbar() -> Element {
    rsx! {
        div { id: "navbar",
            Link { to: Route::DeviceCatalog {}, "Devices" }
            h1 { "Soldesk" }
        }
        Toasts {}
        Outlet::<Route> {}
    }
}
