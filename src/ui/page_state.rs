// SPDX-License-Identifier: MPL-2.0
//! In-memory document model that applies [`ViewCommand`]s.
//!
//! Hosts without a real document (tests, pre-renderers) can feed the
//! command stream into a [`PageState`] and inspect the result.

use crate::domain::filter::Category;
use crate::domain::page::ElementId;
use crate::domain::validation::Field;
use crate::ui::notifications::{ToastId, ToastKind};
use crate::ui::theming::ThemeMode;
use crate::ui::view::{Openness, Validity, ViewCommand, Visibility};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::time::Duration;

/// A toast element as the document sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastElement {
    pub kind: ToastKind,
    pub icon: &'static str,
    pub text: String,
    pub visibility: Visibility,
}

/// A form field's marker and inline error.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldElement {
    pub validity: Validity,
    pub error: String,
}

#[derive(Debug, Clone, Default)]
pub struct PageState {
    pub nav_menu: Openness,
    pub scroll_top_inserted: bool,
    pub scroll_top: Visibility,
    /// Last requested window scroll offset.
    pub scrolled_to: Option<f64>,
    /// Last element scrolled into view.
    pub scrolled_into_view: Option<ElementId>,
    pub theme: ThemeMode,
    pub theme_icon: Option<&'static str>,
    pub counter_texts: HashMap<ElementId, String>,
    pub lightbox_inserted: bool,
    pub lightbox: Openness,
    pub lightbox_glyph: String,
    pub lightbox_caption: String,
    pub lightbox_background: String,
    pub scroll_locked: bool,
    pub fields: BTreeMap<Field, FieldElement>,
    pub form_resets: usize,
    pub prevented_defaults: usize,
    pub filter_bar_inserted: bool,
    pub active_filter: Option<Category>,
    pub hidden_cards: HashSet<ElementId>,
    pub typing_cursors: usize,
    pub reveal_delays: HashMap<ElementId, Duration>,
    pub revealed: HashSet<ElementId>,
    pub toast_container: bool,
    pub toasts: BTreeMap<ToastId, ToastElement>,
    pub loaded: bool,
}

impl PageState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply_all(&mut self, commands: impl IntoIterator<Item = ViewCommand>) {
        for command in commands {
            self.apply(command);
        }
    }

    pub fn apply(&mut self, command: ViewCommand) {
        match command {
            ViewCommand::NavMenu(openness) => self.nav_menu = openness,
            ViewCommand::InsertScrollTopButton { .. } => self.scroll_top_inserted = true,
            ViewCommand::ScrollTopButton(visibility) => self.scroll_top = visibility,
            ViewCommand::ScrollTo { top, .. } => self.scrolled_to = Some(top),
            ViewCommand::ScrollIntoView { target, .. } => self.scrolled_into_view = Some(target),
            ViewCommand::InsertThemeToggle { icon, .. } => self.theme_icon = Some(icon),
            ViewCommand::Theme { mode, icon } => {
                self.theme = mode;
                self.theme_icon = Some(icon);
            }
            ViewCommand::CounterText { target, text } => {
                self.counter_texts.insert(target, text);
            }
            ViewCommand::InsertLightbox(_) => self.lightbox_inserted = true,
            ViewCommand::LightboxContent {
                glyph,
                caption,
                background,
            } => {
                self.lightbox_glyph = glyph;
                self.lightbox_caption = caption;
                self.lightbox_background = background;
            }
            ViewCommand::Lightbox(openness) => self.lightbox = openness,
            ViewCommand::PageScrollLock(locked) => self.scroll_locked = locked,
            ViewCommand::InsertFieldError { field } => {
                self.fields.entry(field).or_default();
            }
            ViewCommand::Field {
                field,
                validity,
                error,
            } => {
                self.fields.insert(field, FieldElement { validity, error });
            }
            ViewCommand::ResetForm => self.form_resets += 1,
            ViewCommand::PreventDefault => self.prevented_defaults += 1,
            ViewCommand::InsertFilterBar { buttons, .. } => {
                self.filter_bar_inserted = true;
                self.active_filter = buttons.iter().find(|b| b.active).map(|b| b.category);
            }
            ViewCommand::FilterButton { category, active } => {
                if active {
                    self.active_filter = Some(category);
                } else if self.active_filter == Some(category) {
                    self.active_filter = None;
                }
            }
            ViewCommand::Card { target, visibility } => {
                if visibility.is_shown() {
                    self.hidden_cards.remove(&target);
                } else {
                    self.hidden_cards.insert(target);
                }
            }
            ViewCommand::InsertTypingCursor { .. } => self.typing_cursors += 1,
            ViewCommand::RevealPrepared { target, delay } => {
                self.reveal_delays.insert(target, delay);
            }
            ViewCommand::Revealed { target } => {
                self.revealed.insert(target);
            }
            ViewCommand::InsertToastContainer => self.toast_container = true,
            ViewCommand::InsertToast {
                id,
                kind,
                icon,
                text,
            } => {
                self.toasts.insert(
                    id,
                    ToastElement {
                        kind,
                        icon,
                        text,
                        visibility: Visibility::Hidden,
                    },
                );
            }
            ViewCommand::Toast { id, visibility } => {
                if let Some(toast) = self.toasts.get_mut(&id) {
                    toast.visibility = visibility;
                }
            }
            ViewCommand::RemoveToast { id } => {
                self.toasts.remove(&id);
            }
            ViewCommand::PageLoaded => self.loaded = true,
        }
    }

    /// Returns whether a card is displayed. Cards never mentioned are shown.
    #[must_use]
    pub fn is_card_shown(&self, target: ElementId) -> bool {
        !self.hidden_cards.contains(&target)
    }

    /// Returns the inline error text of a field, empty when none.
    #[must_use]
    pub fn field_error(&self, field: Field) -> &str {
        self.fields.get(&field).map_or("", |f| f.error.as_str())
    }
}
