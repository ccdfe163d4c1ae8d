use super::*;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_sidebar_open() {
    assert!(UiState::default().sidebar_open);
}

#[test]
fn ui_state_default_dark_mode_off() {
    assert!(!UiState::default().dark_mode);
}

#[test]
fn toggle_sidebar_flips_expansion() {
    let mut ui = UiState::default();
    ui.toggle_sidebar();
    assert!(!ui.sidebar_open);
    ui.toggle_sidebar();
    assert!(ui.sidebar_open);
}

#[test]
fn theme_classes_follow_dark_mode() {
    let light = UiState::default();
    let dark = UiState { dark_mode: true, ..UiState::default() };
    assert_eq!(light.surface_class(), "bg-white text-black");
    assert_eq!(dark.surface_class(), "bg-black text-white");
    assert_eq!(dark.card_class(), "bg-gray-900");
    assert!(dark.input_class().contains("bg-gray-800"));
    assert!(light.input_class().contains("border-gray-300"));
}
