//! Collapsible navigation sidebar.
//!
//! The caller owns which page is current and is told about selections
//! through `on_page_change`. The only state kept here is whether the panel
//! is collapsed, seeded once from `default_collapsed`.

use leptos::logging::debug_warn;
use leptos::prelude::*;

use crate::components::nav_badge::{BadgePlacement, NavBadge};
use crate::nav::{validate_nav_items, DisplayState, NavItem};
use crate::theme::{
    panel_class, toggle_class, ButtonClasses, DEFAULT_ACTIVE_BUTTON_CLASS,
    DEFAULT_INACTIVE_BUTTON_CLASS, DEFAULT_LOGO_TEXT,
};

/// Vertical navigation panel that toggles between a wide labelled layout
/// and a narrow icon-only layout with hover tooltips.
#[component]
pub fn CollapsibleSidebar(
    /// Entries, rendered in order, one button each.
    #[prop(into)]
    nav_items: Signal<Vec<NavItem>>,
    /// Index of the entry to highlight.
    #[prop(into)]
    current_page: Signal<i32>,
    /// Invoked with an entry's index when its button is clicked.
    #[prop(into)]
    on_page_change: Callback<i32>,
    /// Rendered before the header text while expanded.
    #[prop(optional, into)]
    logo: Option<ViewFn>,
    #[prop(into, default = DEFAULT_LOGO_TEXT.to_string())]
    logo_text: String,
    /// Initial state only; later changes are ignored.
    #[prop(default = false)]
    default_collapsed: bool,
    /// Extra classes for the outer panel.
    #[prop(optional, into)]
    class_name: String,
    /// Extra classes for every navigation button.
    #[prop(optional, into)]
    button_class: String,
    #[prop(into, default = DEFAULT_ACTIVE_BUTTON_CLASS.to_string())]
    active_button_class: String,
    #[prop(into, default = DEFAULT_INACTIVE_BUTTON_CLASS.to_string())]
    inactive_button_class: String,
) -> impl IntoView {
    let (display, set_display) = signal(DisplayState::from_collapsed(default_collapsed));
    let expanded = move || !display.get().is_collapsed();

    let classes = ButtonClasses {
        extra: button_class,
        active: active_button_class,
        inactive: inactive_button_class,
    };

    Effect::new(move |_| {
        nav_items.with(|items| {
            if let Err(err) = validate_nav_items(items) {
                debug_warn!("CollapsibleSidebar: {}", err);
            }
        });
    });

    view! {
        <aside
            class=move || panel_class(display.get(), &class_name)
            style:width=move || format!("{}px", display.get().width_px())
        >
            <style>{include_str!("collapsible_sidebar.css")}</style>
            <div class="sidebar-header">
                <Show when=expanded>
                    <div class="sidebar-brand">
                        {logo.clone().map(|logo| logo.run())}
                        <span class="sidebar-brand-text">{logo_text.clone()}</span>
                    </div>
                </Show>
                <button
                    type="button"
                    class=move || toggle_class(display.get())
                    aria-label=move || display.get().toggle_label()
                    on:click=move |_| set_display.update(|d| *d = d.toggled())
                >
                    {move || {
                        if display.get().is_collapsed() {
                            view! { <ChevronRight /> }.into_any()
                        } else {
                            view! { <ChevronLeft /> }.into_any()
                        }
                    }}
                </button>
            </div>

            <div class="sidebar-scroll">
                <nav class="sidebar-nav">
                    <For
                        each=move || nav_items.get()
                        key=|item| item.index
                        children=move |item| {
                            view! {
                                <NavEntry
                                    item=item
                                    current_page=current_page
                                    display=display
                                    on_page_change=on_page_change
                                    classes=classes.clone()
                                />
                            }
                        }
                    />
                </nav>
            </div>
        </aside>
    }
}

/// One navigation button plus the tooltip shown in its place while collapsed.
#[component]
fn NavEntry(
    item: NavItem,
    current_page: Signal<i32>,
    display: ReadSignal<DisplayState>,
    on_page_change: Callback<i32>,
    classes: ButtonClasses,
) -> impl IntoView {
    let badge = item.visible_badge();
    let NavItem {
        label, icon, index, ..
    } = item;

    let is_active = move || current_page.get() == index;
    let collapsed = move || display.get().is_collapsed();
    let inline_label = label.clone();
    let tooltip_label = label.clone();

    view! {
        <div class="sidebar-entry">
            <button
                type="button"
                class=move || classes.for_entry(is_active(), display.get())
                aria-label=label
                aria-current=move || is_active().then_some("page")
                on:click=move |_| on_page_change.run(index)
            >
                {icon.run()}
                <Show when=move || !collapsed()>
                    <span class="nav-label">{inline_label.clone()}</span>
                    {badge.map(|count| view! { <NavBadge count=count placement=BadgePlacement::Inline /> })}
                </Show>
            </button>
            <Show when=collapsed>
                <div class="sidebar-tooltip" aria-hidden="true">
                    {tooltip_label.clone()}
                    {badge.map(|count| view! { <NavBadge count=count placement=BadgePlacement::Tooltip /> })}
                </div>
            </Show>
        </div>
    }
}

#[component]
fn ChevronLeft() -> impl IntoView {
    view! {
        <svg class="sidebar-chevron" xmlns="http://www.w3.org/2000/svg" width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            <path d="m15 18-6-6 6-6" />
        </svg>
    }
}

#[component]
fn ChevronRight() -> impl IntoView {
    view! {
        <svg class="sidebar-chevron" xmlns="http://www.w3.org/2000/svg" width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            <path d="m9 18 6-6-6-6" />
        </svg>
    }
}
