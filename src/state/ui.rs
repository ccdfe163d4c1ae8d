//! Local UI chrome state (sidebar expansion, theme).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of session state so layout
//! controls can evolve independently of the auth lifecycle.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state shared by the console layout and sidebar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UiState {
    pub sidebar_open: bool,
    pub dark_mode: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self { sidebar_open: true, dark_mode: false }
    }
}

impl UiState {
    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    /// Background/text classes for the current theme.
    pub fn surface_class(&self) -> &'static str {
        if self.dark_mode { "bg-black text-white" } else { "bg-white text-black" }
    }

    /// Card background classes for the current theme.
    pub fn card_class(&self) -> &'static str {
        if self.dark_mode { "bg-gray-900" } else { "bg-gray-200" }
    }

    /// Input classes for the current theme.
    pub fn input_class(&self) -> &'static str {
        if self.dark_mode {
            "p-3 rounded w-full border bg-gray-800 border-gray-600 text-white placeholder-gray-400"
        } else {
            "p-3 rounded w-full border bg-white border-gray-300 text-black placeholder-gray-500"
        }
    }
}
