use dioxus::prelude::*;

#[derive(PartialEq, Clone, Props)]
pub struct EmptyStateProps {
    title: String,
    #[props(default)]
    description: Option<String>,
}

/// A dashed notice box shown in place of missing rows.
#[allow(non_snake_case)]
pub fn EmptyState(props: EmptyStateProps) -> Element {
    rsx! {
        div {
            class: "empty-state",
            h4 {
                "{props.title}"
            }
            if let Some(desc) = props.description {
                p {
                    "{desc}"
                }
            }
        }
    }
}
