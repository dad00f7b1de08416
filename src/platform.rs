//! Platform-specific configuration

use crossterm::event::{KeyEvent, KeyModifiers};

/// Platform-appropriate modifier for form shortcuts
/// - macOS: SUPER (Cmd key)
/// - Linux/Windows: CONTROL (Ctrl key)
#[cfg(target_os = "macos")]
pub const SHORTCUT_MODIFIER: KeyModifiers = KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
pub const SHORTCUT_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Ctrl works everywhere, Cmd as well on macOS
pub fn is_shortcut(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) || key.modifiers.contains(SHORTCUT_MODIFIER)
}

/// Submit shortcut display
/// Ctrl+S works on all platforms
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

#[cfg(target_os = "macos")]
pub const NEXT_SHORTCUT: &str = "Cmd+N";
#[cfg(not(target_os = "macos"))]
pub const NEXT_SHORTCUT: &str = "Ctrl+N";

#[cfg(target_os = "macos")]
pub const BACK_SHORTCUT: &str = "Cmd+B";
#[cfg(not(target_os = "macos"))]
pub const BACK_SHORTCUT: &str = "Ctrl+B";

/// Add a co-founder record
#[cfg(target_os = "macos")]
pub const ADD_RECORD_SHORTCUT: &str = "Cmd+A";
#[cfg(not(target_os = "macos"))]
pub const ADD_RECORD_SHORTCUT: &str = "Ctrl+A";

/// Remove the focused co-founder record
#[cfg(target_os = "macos")]
pub const REMOVE_RECORD_SHORTCUT: &str = "Cmd+D";
#[cfg(not(target_os = "macos"))]
pub const REMOVE_RECORD_SHORTCUT: &str = "Ctrl+D";
