//! A collapsible navigation sidebar for Leptos applications.

pub mod components;
pub mod nav;
pub mod theme;

pub use components::collapsible_sidebar::CollapsibleSidebar;
pub use nav::{DisplayState, NavError, NavItem};
