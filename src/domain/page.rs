// SPDX-License-Identifier: MPL-2.0
//! Page anchors consumed at startup.
//!
//! The host describes the elements each feature attaches to. Absent
//! sections disable the matching feature. The description is plain data so
//! a host can build it in code or deserialize it from JSON/TOML.

use super::validation::Field;
use serde::{Deserialize, Serialize};

/// Opaque identifier of a page element, assigned by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(u32);

impl ElementId {
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

/// Everything the site layer needs to know about the page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageAnchors {
    /// Mobile navigation toggle and menu.
    pub nav: Option<NavAnchors>,
    /// `.stat-number` elements in document order.
    pub stat_numbers: Vec<TextAnchor>,
    /// `.gallery-item` elements in document order.
    pub gallery: Vec<GalleryItemAnchor>,
    /// The contact form, when the page has one.
    pub contact_form: Option<ContactFormAnchor>,
    /// The events section with its cards.
    pub events: Option<EventsSectionAnchor>,
    /// The hero title.
    pub hero: Option<HeroAnchor>,
    /// Cards, team cards, gallery items and stat items in document order.
    pub reveal_targets: Vec<ElementId>,
    /// Links whose `href` starts with `#`.
    pub in_page_links: Vec<InPageLink>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavAnchors {
    pub toggle: ElementId,
    pub menu: ElementId,
}

/// Element with its initial text content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextAnchor {
    pub id: ElementId,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryItemAnchor {
    pub id: ElementId,
    #[serde(default)]
    pub placeholder: Option<PlaceholderAnchor>,
    #[serde(default)]
    pub caption: Option<String>,
}

/// `.gallery-placeholder` inside a gallery item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceholderAnchor {
    pub text: String,
    /// Computed CSS background, when the host can read it.
    #[serde(default)]
    pub background: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContactFormAnchor {
    /// Fields present in the form, in document order.
    #[serde(default)]
    pub fields: Vec<Field>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EventsSectionAnchor {
    /// Whether the enclosing section has a `.section-title`.
    #[serde(default)]
    pub has_title: bool,
    #[serde(default)]
    pub cards: Vec<EventCardAnchor>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventCardAnchor {
    pub id: ElementId,
    #[serde(default)]
    pub tag: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HeroAnchor {
    /// `.hero-title .text-accent` exists.
    #[serde(default)]
    pub has_accent: bool,
    /// The hero already contains a `.typing-cursor`.
    #[serde(default)]
    pub has_cursor: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InPageLink {
    pub id: ElementId,
    pub href: String,
    /// Element matched by the fragment, if the page has one.
    #[serde(default)]
    pub target: Option<ElementId>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_deserializes_to_defaults() {
        let anchors: PageAnchors = toml::from_str("").expect("empty toml parses");
        assert_eq!(anchors, PageAnchors::default());
    }

    #[test]
    fn anchors_deserialize_from_toml() {
        let source = r#"
            reveal_targets = [10, 11]

            [nav]
            toggle = 1
            menu = 2

            [contact_form]
            fields = ["name", "email"]

            [[stat_numbers]]
            id = 3
            text = "250+"

            [[gallery]]
            id = 4
            caption = "Demo day"

            [gallery.placeholder]
            text = "🚀\nLaunch"
        "#;
        let anchors: PageAnchors = toml::from_str(source).expect("anchors parse");

        assert_eq!(
            anchors.nav,
            Some(NavAnchors {
                toggle: ElementId::new(1),
                menu: ElementId::new(2),
            })
        );
        assert_eq!(anchors.stat_numbers[0].text, "250+");
        assert_eq!(
            anchors.contact_form.map(|form| form.fields),
            Some(vec![Field::Name, Field::Email])
        );
        let placeholder = anchors.gallery[0].placeholder.as_ref().expect("placeholder");
        assert!(placeholder.background.is_none());
        assert_eq!(anchors.reveal_targets, vec![ElementId::new(10), ElementId::new(11)]);
    }
}
