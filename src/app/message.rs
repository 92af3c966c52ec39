// SPDX-License-Identifier: MPL-2.0
//! Top-level messages consumed by `Site::handle`.

use crate::domain::geometry::Rect;
use crate::domain::page::ElementId;
use crate::ui::notifications::ToastId;
use crate::ui::{
    anchor_links, contact_form, event_filter, lightbox, navigation, scroll_top, theme_toggle,
};

/// Host events. The variants forward feature messages while keeping a
/// single entry point.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    Navigation(navigation::Message),
    ScrollTop(scroll_top::Message),
    ThemeToggle(theme_toggle::Message),
    Lightbox(lightbox::Message),
    ContactForm(contact_form::Message),
    EventFilter(event_filter::Message),
    AnchorLinks(anchor_links::Message),
    /// A toast's close button was clicked.
    ToastCloseClicked(ToastId),
    /// Layout changed: element rectangles measured against the viewport.
    Viewport {
        viewport: Rect,
        elements: Vec<(ElementId, Rect)>,
    },
    /// The host measured an intersection ratio itself.
    Intersection { target: ElementId, ratio: f64 },
    /// The window finished loading.
    WindowLoaded,
}

impl From<navigation::Message> for Message {
    fn from(message: navigation::Message) -> Self {
        Message::Navigation(message)
    }
}

impl From<scroll_top::Message> for Message {
    fn from(message: scroll_top::Message) -> Self {
        Message::ScrollTop(message)
    }
}

impl From<theme_toggle::Message> for Message {
    fn from(message: theme_toggle::Message) -> Self {
        Message::ThemeToggle(message)
    }
}

impl From<lightbox::Message> for Message {
    fn from(message: lightbox::Message) -> Self {
        Message::Lightbox(message)
    }
}

impl From<contact_form::Message> for Message {
    fn from(message: contact_form::Message) -> Self {
        Message::ContactForm(message)
    }
}

impl From<event_filter::Message> for Message {
    fn from(message: event_filter::Message) -> Self {
        Message::EventFilter(message)
    }
}

impl From<anchor_links::Message> for Message {
    fn from(message: anchor_links::Message) -> Self {
        Message::AnchorLinks(message)
    }
}
