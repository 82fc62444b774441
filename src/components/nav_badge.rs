use leptos::prelude::*;

/// Where a badge is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgePlacement {
    Inline,
    Tooltip,
}

#[component]
pub fn NavBadge(
    /// The count to show, already known to be positive
    count: u32,
    /// Inside the button or inside the collapsed tooltip
    placement: BadgePlacement,
) -> impl IntoView {
    let class = match placement {
        BadgePlacement::Inline => "nav-badge nav-badge-inline",
        BadgePlacement::Tooltip => "nav-badge nav-badge-tooltip",
    };

    view! { <span class=class>{count}</span> }
}
