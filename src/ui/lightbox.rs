// SPDX-License-Identifier: MPL-2.0
//! Gallery lightbox viewer.
//!
//! A single overlay shows one gallery item at a time. Previous and next
//! wrap around in both directions. While the overlay is open the page does
//! not scroll, and Escape and the arrow keys drive it.

use crate::app::context::Context;
use crate::domain::page::GalleryItemAnchor;
use crate::i18n::fluent::I18n;
use crate::ui::view::{LightboxLabels, Openness, ViewCommand, DEFAULT_LIGHTBOX_BACKGROUND};

/// Glyph shown for a gallery item without a placeholder.
pub const FALLBACK_GLYPH: &str = "📷";

/// Keys the lightbox reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    ArrowLeft,
    ArrowRight,
    Other,
}

impl Key {
    /// Maps a DOM `KeyboardEvent.key` value.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "Escape" => Key::Escape,
            "ArrowLeft" => Key::ArrowLeft,
            "ArrowRight" => Key::ArrowRight,
            _ => Key::Other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// A gallery item was clicked.
    ItemClicked(usize),
    CloseClicked,
    PreviousClicked,
    NextClicked,
    /// A click on the overlay itself, outside its content.
    BackdropClicked,
    KeyPressed(Key),
}

/// Display data of one gallery item, captured at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryItem {
    pub glyph: String,
    pub caption: String,
    /// Computed background of the placeholder; empty when unknown.
    pub background: String,
}

impl GalleryItem {
    fn from_anchor(index: usize, anchor: &GalleryItemAnchor, i18n: &I18n) -> Self {
        let glyph = match &anchor.placeholder {
            Some(placeholder) => placeholder
                .text
                .trim()
                .split('\n')
                .next()
                .unwrap_or_default()
                .to_string(),
            None => FALLBACK_GLYPH.to_string(),
        };
        let caption = anchor.caption.clone().unwrap_or_else(|| {
            let number = (index + 1).to_string();
            i18n.tr_with_args("gallery-image-fallback", &[("index", number.as_str())])
        });
        let background = anchor
            .placeholder
            .as_ref()
            .and_then(|placeholder| placeholder.background.clone())
            .unwrap_or_default();

        Self {
            glyph,
            caption,
            background,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Lightbox {
    items: Vec<GalleryItem>,
    index: usize,
    openness: Openness,
}

impl Lightbox {
    /// Produces the overlay. Returns `None` when the gallery is empty.
    pub fn init(gallery: &[GalleryItemAnchor], ctx: &mut Context<'_>) -> Option<Self> {
        if gallery.is_empty() {
            return None;
        }

        let items = gallery
            .iter()
            .enumerate()
            .map(|(index, anchor)| GalleryItem::from_anchor(index, anchor, ctx.i18n))
            .collect();
        let labels = LightboxLabels {
            close: ctx.i18n.tr("lightbox-close"),
            previous: ctx.i18n.tr("lightbox-previous"),
            next: ctx.i18n.tr("lightbox-next"),
        };
        ctx.emit(ViewCommand::InsertLightbox(labels));

        Some(Self {
            items,
            index: 0,
            openness: Openness::Closed,
        })
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn openness(&self) -> Openness {
        self.openness
    }

    #[must_use]
    pub fn items(&self) -> &[GalleryItem] {
        &self.items
    }

    pub fn handle(&mut self, message: Message, ctx: &mut Context<'_>) {
        match message {
            Message::ItemClicked(index) => self.open(index, ctx),
            Message::CloseClicked | Message::BackdropClicked => self.close(ctx),
            Message::PreviousClicked => self.previous(ctx),
            Message::NextClicked => self.next(ctx),
            Message::KeyPressed(key) => {
                if !self.openness.is_open() {
                    return;
                }
                match key {
                    Key::Escape => self.close(ctx),
                    Key::ArrowLeft => self.previous(ctx),
                    Key::ArrowRight => self.next(ctx),
                    Key::Other => {}
                }
            }
        }
    }

    fn open(&mut self, index: usize, ctx: &mut Context<'_>) {
        if index >= self.items.len() {
            tracing::debug!(index, len = self.items.len(), "ignoring click on unknown gallery item");
            return;
        }
        self.index = index;
        self.render(ctx);
        self.openness = Openness::Open;
        ctx.emit(ViewCommand::Lightbox(Openness::Open));
        ctx.emit(ViewCommand::PageScrollLock(true));
    }

    fn close(&mut self, ctx: &mut Context<'_>) {
        if !self.openness.is_open() {
            return;
        }
        self.openness = Openness::Closed;
        ctx.emit(ViewCommand::Lightbox(Openness::Closed));
        ctx.emit(ViewCommand::PageScrollLock(false));
    }

    fn previous(&mut self, ctx: &mut Context<'_>) {
        let len = self.items.len();
        self.index = (self.index + len - 1) % len;
        self.render(ctx);
    }

    fn next(&mut self, ctx: &mut Context<'_>) {
        self.index = (self.index + 1) % self.items.len();
        self.render(ctx);
    }

    fn render(&self, ctx: &mut Context<'_>) {
        let item = &self.items[self.index];
        let background = if item.background.is_empty() {
            DEFAULT_LIGHTBOX_BACKGROUND.to_string()
        } else {
            item.background.clone()
        };
        ctx.emit(ViewCommand::LightboxContent {
            glyph: item.glyph.clone(),
            caption: item.caption.clone(),
            background,
        });
    }
}
