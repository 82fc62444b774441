//! Navigation entries and the collapsed/expanded display state.
//!
//! Everything here is plain data so the sidebar's visual rules can be
//! checked without a DOM.

use std::collections::HashSet;

use leptos::prelude::*;
use thiserror::Error;

/// Panel width in pixels while collapsed.
pub const COLLAPSED_WIDTH_PX: u32 = 100;
/// Panel width in pixels while expanded.
pub const EXPANDED_WIDTH_PX: u32 = 250;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NavError {
    #[error("Duplicate navigation index: {0}")]
    DuplicateIndex(i32),
}

/// A single entry in the sidebar.
#[derive(Clone)]
pub struct NavItem {
    /// Text shown inline when expanded and used as the accessible name.
    pub label: String,
    /// Opaque icon renderer, rendered as-is in front of the label.
    pub icon: ViewFn,
    /// Caller-assigned identifier passed back on selection.
    pub index: i32,
    /// Optional count; zero is treated the same as absent.
    pub badge: Option<u32>,
}

impl NavItem {
    pub fn new(label: impl Into<String>, index: i32) -> Self {
        Self {
            label: label.into(),
            icon: ViewFn::default(),
            index,
            badge: None,
        }
    }

    pub fn with_icon(mut self, icon: impl Into<ViewFn>) -> Self {
        self.icon = icon.into();
        self
    }

    pub fn with_badge(mut self, count: u32) -> Self {
        self.badge = Some(count);
        self
    }

    /// The badge count to display, if any.
    pub fn visible_badge(&self) -> Option<u32> {
        self.badge.filter(|count| *count > 0)
    }

    pub fn is_active(&self, current_page: i32) -> bool {
        self.index == current_page
    }
}

impl std::fmt::Debug for NavItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NavItem")
            .field("label", &self.label)
            .field("index", &self.index)
            .field("badge", &self.badge)
            .finish_non_exhaustive()
    }
}

/// Checks that every entry carries a distinct index.
pub fn validate_nav_items(items: &[NavItem]) -> Result<(), NavError> {
    let mut seen = HashSet::with_capacity(items.len());
    for item in items {
        if !seen.insert(item.index) {
            return Err(NavError::DuplicateIndex(item.index));
        }
    }
    Ok(())
}

/// Whether the sidebar is showing labels or only icons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayState {
    Expanded,
    Collapsed,
}

impl DisplayState {
    pub fn from_collapsed(collapsed: bool) -> Self {
        if collapsed {
            Self::Collapsed
        } else {
            Self::Expanded
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Expanded => Self::Collapsed,
            Self::Collapsed => Self::Expanded,
        }
    }

    pub fn is_collapsed(self) -> bool {
        self == Self::Collapsed
    }

    pub fn width_px(self) -> u32 {
        match self {
            Self::Expanded => EXPANDED_WIDTH_PX,
            Self::Collapsed => COLLAPSED_WIDTH_PX,
        }
    }

    /// Accessible name of the toggle button, describing what it will do.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Expanded => "Collapse sidebar",
            Self::Collapsed => "Expand sidebar",
        }
    }
}
