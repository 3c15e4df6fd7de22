//! Side-by-side comparison of Tailwind utilities and the inline styles they
//! should produce. If the two blocks in a row differ, the stylesheet is not
//! being built or served.

use dioxus::prelude::*;

struct StyleCheck {
    label: &'static str,
    class: &'static str,
    style: &'static str,
}

const CHECKS: &[StyleCheck] = &[
    StyleCheck {
        label: "Background color",
        class: "bg-blue-500",
        style: "background-color: #3b82f6;",
    },
    StyleCheck {
        label: "Text color",
        class: "text-red-600",
        style: "color: #dc2626;",
    },
    StyleCheck {
        label: "Padding",
        class: "p-4 bg-neutral-200",
        style: "padding: 1rem; background-color: #e5e5e5;",
    },
    StyleCheck {
        label: "Margin",
        class: "m-4 bg-neutral-200",
        style: "margin: 1rem; background-color: #e5e5e5;",
    },
    StyleCheck {
        label: "Border radius",
        class: "rounded-lg bg-green-500",
        style: "border-radius: 0.5rem; background-color: #22c55e;",
    },
    StyleCheck {
        label: "Gradient",
        class: "bg-gradient-to-r from-purple-500 to-pink-500",
        style: "background-image: linear-gradient(to right, #a855f7, #ec4899);",
    },
];

#[component]
pub fn TailwindCheck() -> Element {
    rsx! {
        div { class: "p-6 space-y-6",
            h1 { class: "text-2xl font-bold", "Tailwind check" }
            for (i, check) in CHECKS.iter().enumerate() {
                section { key: "{i}", class: "space-y-2",
                    h2 { class: "text-sm font-semibold", "{check.label}" }
                    div { class: "grid grid-cols-2 gap-4",
                        div { class: "h-16 {check.class}", "Tailwind" }
                        div { style: "height: 4rem; {check.style}", "Inline" }
                    }
                }
            }
        }
    }
}
