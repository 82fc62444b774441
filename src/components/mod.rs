pub mod collapsible_sidebar;
pub mod nav_badge;
