// SPDX-License-Identifier: MPL-2.0
//! Mobile navigation toggle.
//!
//! The hamburger toggle opens and closes the menu. Following a navigation
//! link or clicking anywhere outside the toggle and the menu closes it.

use crate::app::context::Context;
use crate::domain::page::NavAnchors;
use crate::ui::view::{Openness, ViewCommand};

/// Messages handled by the navigation menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    ToggleClicked,
    LinkClicked,
    /// A click anywhere in the document, with its position relative to the
    /// toggle and the menu.
    DocumentClicked { inside_toggle: bool, inside_menu: bool },
}

#[derive(Debug, Clone)]
pub struct Navigation {
    anchors: NavAnchors,
    menu: Openness,
}

impl Navigation {
    /// Returns `None` when the page has no toggle or no menu.
    #[must_use]
    pub fn init(anchors: Option<NavAnchors>) -> Option<Self> {
        Some(Self {
            anchors: anchors?,
            menu: Openness::Closed,
        })
    }

    #[must_use]
    pub fn anchors(&self) -> NavAnchors {
        self.anchors
    }

    #[must_use]
    pub fn menu(&self) -> Openness {
        self.menu
    }

    pub fn handle(&mut self, message: Message, ctx: &mut Context<'_>) {
        match message {
            Message::ToggleClicked => self.set(self.menu.toggled(), ctx),
            Message::LinkClicked => self.set(Openness::Closed, ctx),
            Message::DocumentClicked {
                inside_toggle,
                inside_menu,
            } => {
                if !inside_toggle && !inside_menu {
                    self.set(Openness::Closed, ctx);
                }
            }
        }
    }

    fn set(&mut self, menu: Openness, ctx: &mut Context<'_>) {
        if self.menu != menu {
            self.menu = menu;
            ctx.emit(ViewCommand::NavMenu(menu));
        }
    }
}
