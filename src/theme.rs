use crate::nav::DisplayState;

/// Header text used when the caller does not supply one.
pub const DEFAULT_LOGO_TEXT: &str = "App Name";

/// Filled appearance for the entry matching the current page.
pub const DEFAULT_ACTIVE_BUTTON_CLASS: &str = "nav-button-active";

/// Outlined appearance for every other entry; fills on hover.
pub const DEFAULT_INACTIVE_BUTTON_CLASS: &str = "nav-button-inactive";

/// Caller-supplied classes for the navigation buttons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonClasses {
    /// Applied to every button.
    pub extra: String,
    pub active: String,
    pub inactive: String,
}

impl Default for ButtonClasses {
    fn default() -> Self {
        Self {
            extra: String::new(),
            active: DEFAULT_ACTIVE_BUTTON_CLASS.to_string(),
            inactive: DEFAULT_INACTIVE_BUTTON_CLASS.to_string(),
        }
    }
}

impl ButtonClasses {
    /// Full class list for one navigation button.
    pub fn for_entry(&self, active: bool, display: DisplayState) -> String {
        let variant = if active { &self.active } else { &self.inactive };
        let justify = if display.is_collapsed() {
            "justify-center"
        } else {
            "justify-start"
        };
        join_classes(&["nav-button", variant, justify, &self.extra])
    }
}

/// Full class list for the outer panel.
pub fn panel_class(display: DisplayState, extra: &str) -> String {
    let state = if display.is_collapsed() {
        "sidebar-collapsed"
    } else {
        "sidebar-expanded"
    };
    join_classes(&["collapsible-sidebar", state, extra])
}

pub fn toggle_class(display: DisplayState) -> String {
    let align = if display.is_collapsed() { "mx-auto" } else { "ml-auto" };
    join_classes(&["sidebar-toggle", align])
}

fn join_classes(parts: &[&str]) -> String {
    parts
        .iter()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
