use dioxus::prelude::*;

/// Developer-only dump of the session state.
#[component]
pub fn DebugPanel(snapshot: String) -> Element {
    rsx! {
        section { class: "debug-panel",
            h4 { "Session state" }
            pre { "{snapshot}" }
        }
    }
}
