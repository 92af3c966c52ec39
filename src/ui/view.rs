// SPDX-License-Identifier: MPL-2.0
//! View-state protocol between the controllers and the host document.
//!
//! Controllers never touch the document directly. They emit
//! [`ViewCommand`]s; the host applies them. Every state enum maps to the CSS
//! class the stylesheet keys on, so styling stays an external collaborator.

use crate::domain::filter::Category;
use crate::domain::page::ElementId;
use crate::domain::validation::Field;
use crate::ui::notifications::{ToastId, ToastKind};
use crate::ui::theming::ThemeMode;
use std::time::Duration;

/// Whether a menu or overlay is open. Open renders as `active`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Openness {
    Open,
    #[default]
    Closed,
}

impl Openness {
    #[must_use]
    pub fn is_open(self) -> bool {
        self == Openness::Open
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Openness::Open => Openness::Closed,
            Openness::Closed => Openness::Open,
        }
    }

    #[must_use]
    pub fn class_name(self) -> Option<&'static str> {
        match self {
            Openness::Open => Some("active"),
            Openness::Closed => None,
        }
    }
}

/// Shown/hidden state of a control or card. Shown renders as `visible`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    Shown,
    #[default]
    Hidden,
}

impl Visibility {
    #[must_use]
    pub fn from_shown(shown: bool) -> Self {
        if shown {
            Visibility::Shown
        } else {
            Visibility::Hidden
        }
    }

    #[must_use]
    pub fn is_shown(self) -> bool {
        self == Visibility::Shown
    }

    #[must_use]
    pub fn class_name(self) -> Option<&'static str> {
        match self {
            Visibility::Shown => Some("visible"),
            Visibility::Hidden => None,
        }
    }
}

/// Validation marker of a form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Validity {
    #[default]
    Unmarked,
    Valid,
    Invalid,
}

impl Validity {
    #[must_use]
    pub fn class_name(self) -> Option<&'static str> {
        match self {
            Validity::Unmarked => None,
            Validity::Valid => Some("valid"),
            Validity::Invalid => Some("invalid"),
        }
    }
}

/// Scroll animation requested from the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollBehavior {
    #[default]
    Smooth,
    Instant,
}

/// Class marking an element prepared for the reveal transition.
pub const REVEAL_CLASS: &str = "reveal";
/// Class marking an element that has been revealed.
pub const REVEALED_CLASS: &str = "revealed";
/// Class set on the body once the window has loaded.
pub const LOADED_CLASS: &str = "loaded";

/// Default lightbox background when a gallery item has none.
pub const DEFAULT_LIGHTBOX_BACKGROUND: &str = "linear-gradient(135deg, #0d4f4f, #1a7a7a)";

/// One filter button in the produced filter bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterButton {
    pub category: Category,
    pub label: String,
    pub active: bool,
}

/// Accessible labels of the produced lightbox controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LightboxLabels {
    pub close: String,
    pub previous: String,
    pub next: String,
}

/// A change the host must apply to the document.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewCommand {
    /// Set the menu and its toggle to the given state.
    NavMenu(Openness),

    InsertScrollTopButton { label: String, title: String },
    ScrollTopButton(Visibility),
    /// Scroll the window to a vertical offset.
    ScrollTo { top: f64, behavior: ScrollBehavior },
    /// Scroll an element to the start of the viewport.
    ScrollIntoView { target: ElementId, behavior: ScrollBehavior },

    InsertThemeToggle { label: String, title: String, icon: &'static str },
    /// Apply the theme to the body and the toggle icon.
    Theme { mode: ThemeMode, icon: &'static str },

    CounterText { target: ElementId, text: String },

    InsertLightbox(LightboxLabels),
    LightboxContent { glyph: String, caption: String, background: String },
    Lightbox(Openness),
    /// Lock (`true`) or restore (`false`) page scrolling.
    PageScrollLock(bool),

    /// Produce an empty inline error slot after the field.
    InsertFieldError { field: Field },
    /// Set a field's marker and its inline error text (empty clears it).
    Field { field: Field, validity: Validity, error: String },
    /// Reset every form control to its initial value.
    ResetForm,
    /// Suppress the default action of the event being handled.
    PreventDefault,

    InsertFilterBar { placeholder: String, buttons: Vec<FilterButton> },
    FilterButton { category: Category, active: bool },
    Card { target: ElementId, visibility: Visibility },

    /// Append a cursor glyph inside the hero accent.
    InsertTypingCursor { glyph: &'static str },

    /// Tag an element `reveal` with a transition delay.
    RevealPrepared { target: ElementId, delay: Duration },
    /// Tag an element `revealed`.
    Revealed { target: ElementId },

    InsertToastContainer,
    InsertToast { id: ToastId, kind: ToastKind, icon: &'static str, text: String },
    Toast { id: ToastId, visibility: Visibility },
    RemoveToast { id: ToastId },

    /// Tag the body `loaded`.
    PageLoaded,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_enums_map_to_stylesheet_classes() {
        assert_eq!(Openness::Open.class_name(), Some("active"));
        assert_eq!(Openness::Closed.class_name(), None);
        assert_eq!(Visibility::Shown.class_name(), Some("visible"));
        assert_eq!(Validity::Valid.class_name(), Some("valid"));
        assert_eq!(Validity::Invalid.class_name(), Some("invalid"));
        assert_eq!(Validity::Unmarked.class_name(), None);
    }

    #[test]
    fn openness_toggles() {
        assert_eq!(Openness::Closed.toggled(), Openness::Open);
        assert_eq!(Openness::Open.toggled().toggled(), Openness::Open);
    }
}
