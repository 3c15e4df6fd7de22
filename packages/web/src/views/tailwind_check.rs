use dioxus::prelude::*;
use ui::TailwindCheck;

/// Route wrapper for the stylesheet diagnostic.
#[component]
pub fn TailwindCheckPage() -> Element {
    rsx! {
        TailwindCheck {}
    }
}
