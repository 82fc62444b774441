use leptos::logging::log;
use leptos::prelude::*;

use collapsible_sidebar::{CollapsibleSidebar, NavItem};

const PAGES: [(&str, &str); 4] = [
    ("Home", "\u{1F3E0}"),
    ("Inbox", "\u{1F4E5}"),
    ("Reports", "\u{1F4CA}"),
    ("Settings", "\u{2699}\u{FE0F}"),
];

fn demo_items() -> Vec<NavItem> {
    PAGES
        .iter()
        .enumerate()
        .map(|(i, (label, icon))| {
            let icon = *icon;
            let item = NavItem::new(*label, i as i32)
                .with_icon(move || view! { <span class="nav-icon">{icon}</span> });
            match *label {
                "Inbox" => item.with_badge(12),
                "Settings" => item.with_badge(3),
                _ => item,
            }
        })
        .collect()
}

#[component]
pub fn App() -> impl IntoView {
    let (current_page, set_current_page) = signal(0);

    let on_page_change = move |index: i32| {
        log!("page change: {}", index);
        set_current_page.set(index);
    };

    let page_title = move || {
        usize::try_from(current_page.get())
            .ok()
            .and_then(|i| PAGES.get(i))
            .map(|(label, _)| *label)
            .unwrap_or("Unknown")
    };

    view! {
        <div class="app-layout" style="display: flex; height: 100vh;">
            <CollapsibleSidebar
                nav_items=demo_items()
                current_page=current_page
                on_page_change=on_page_change
                logo=|| view! { <span class="logo-mark">"\u{25C6}"</span> }
                logo_text="Sidebar Demo"
            />
            <main class="content" style="flex: 1; padding: 2rem;">
                <h2>{page_title}</h2>
                <p>"Select an entry in the sidebar to switch pages."</p>
            </main>
        </div>
    }
}
