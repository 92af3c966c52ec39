// SPDX-License-Identifier: MPL-2.0
//! Smooth scrolling for in-page links.

use crate::app::context::Context;
use crate::domain::page::{ElementId, InPageLink};
use crate::ui::view::{ScrollBehavior, ViewCommand};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    LinkClicked(ElementId),
}

#[derive(Debug, Clone)]
pub struct AnchorLinks {
    /// Link id to the element its fragment names, if any.
    targets: HashMap<ElementId, Option<ElementId>>,
}

impl AnchorLinks {
    /// Returns `None` when the page has no `#` links.
    #[must_use]
    pub fn init(links: &[InPageLink]) -> Option<Self> {
        let targets: HashMap<_, _> = links
            .iter()
            .filter(|link| link.href.starts_with('#'))
            .map(|link| (link.id, link.target))
            .collect();
        (!targets.is_empty()).then_some(Self { targets })
    }

    pub fn handle(&mut self, message: Message, ctx: &mut Context<'_>) {
        match message {
            Message::LinkClicked(link) => {
                let Some(target) = self.targets.get(&link) else {
                    return;
                };
                ctx.emit(ViewCommand::PreventDefault);
                if let Some(target) = *target {
                    ctx.emit(ViewCommand::ScrollIntoView {
                        target,
                        behavior: ScrollBehavior::Smooth,
                    });
                }
            }
        }
    }
}
