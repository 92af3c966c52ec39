// SPDX-License-Identifier: MPL-2.0
//! Event card filtering.
//!
//! A card is shown when it passes both the category filter and the text
//! filter (AND logic).
//!
//! - Category: `All` matches everything; any other category matches when
//!   the card's lowercased tag *contains* the category key.
//! - Text: matches when the lowercased title or description contains the
//!   lowercased query. An empty query matches everything.

use super::page::{ElementId, EventCardAnchor};
use serde::{Deserialize, Serialize};

/// Event category selectable from the filter bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    All,
    Hackathon,
    Workshop,
    Seminar,
    Networking,
}

impl Category {
    /// Filter buttons in display order.
    pub const ALL: [Category; 5] = [
        Category::All,
        Category::Hackathon,
        Category::Workshop,
        Category::Seminar,
        Category::Networking,
    ];

    /// Lowercase key compared against card tags.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Category::All => "all",
            Category::Hackathon => "hackathon",
            Category::Workshop => "workshop",
            Category::Seminar => "seminar",
            Category::Networking => "networking",
        }
    }

    /// i18n key of the button label.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            Category::All => "filter-all",
            Category::Hackathon => "filter-hackathon",
            Category::Workshop => "filter-workshop",
            Category::Seminar => "filter-seminar",
            Category::Networking => "filter-networking",
        }
    }

    /// Parses a filter key, case-insensitively.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|category| category.key().eq_ignore_ascii_case(key))
    }

    /// Returns `true` if a card with this lowercased tag passes the filter.
    #[must_use]
    pub fn matches_tag(self, lowercase_tag: &str) -> bool {
        self == Category::All || lowercase_tag.contains(self.key())
    }
}

/// Searchable text of one event card, lowercased once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventCard {
    id: ElementId,
    tag: String,
    title: String,
    description: String,
}

impl EventCard {
    #[must_use]
    pub fn new(
        id: ElementId,
        tag: Option<&str>,
        title: Option<&str>,
        description: Option<&str>,
    ) -> Self {
        Self {
            id,
            tag: tag.unwrap_or_default().to_lowercase(),
            title: title.unwrap_or_default().to_lowercase(),
            description: description.unwrap_or_default().to_lowercase(),
        }
    }

    #[must_use]
    pub fn id(&self) -> ElementId {
        self.id
    }

    /// Returns `true` if the card passes the category and the text filter.
    ///
    /// `lowercase_query` must already be lowercased.
    #[must_use]
    pub fn matches(&self, category: Category, lowercase_query: &str) -> bool {
        category.matches_tag(&self.tag)
            && (self.title.contains(lowercase_query) || self.description.contains(lowercase_query))
    }
}

impl From<&EventCardAnchor> for EventCard {
    fn from(anchor: &EventCardAnchor) -> Self {
        Self::new(
            anchor.id,
            anchor.tag.as_deref(),
            anchor.title.as_deref(),
            anchor.description.as_deref(),
        )
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn card(id: u32, tag: &str, title: &str, description: &str) -> EventCard {
        EventCard::new(ElementId::new(id), Some(tag), Some(title), Some(description))
    }

    #[test]
    fn all_category_matches_any_tag() {
        assert!(Category::All.matches_tag(""));
        assert!(Category::All.matches_tag("seminar"));
    }

    #[test]
    fn category_uses_substring_match() {
        assert!(Category::Workshop.matches_tag("hands-on workshop"));
        assert!(!Category::Workshop.matches_tag("seminar"));
    }

    #[test]
    fn card_matches_title_or_description() {
        let c = card(1, "Workshop", "Rust Basics", "Learn ownership");
        assert!(c.matches(Category::All, "rust"));
        assert!(c.matches(Category::All, "ownership"));
        assert!(!c.matches(Category::All, "python"));
    }

    #[test]
    fn empty_query_matches_every_card() {
        let c = card(1, "Seminar", "", "");
        assert!(c.matches(Category::Seminar, ""));
    }

    #[test]
    fn both_filters_must_pass() {
        let c = card(1, "Workshop", "Rust Basics", "");
        assert!(!c.matches(Category::Seminar, "rust"));
        assert!(!c.matches(Category::Workshop, "python"));
        assert!(c.matches(Category::Workshop, "basics"));
    }

    #[test]
    fn card_without_tag_only_passes_all() {
        let c = EventCard::new(ElementId::new(7), None, Some("Meetup"), None);
        assert!(c.matches(Category::All, ""));
        assert!(!c.matches(Category::Networking, ""));
    }

    #[test]
    fn from_key_is_case_insensitive() {
        assert_eq!(Category::from_key("Workshop"), Some(Category::Workshop));
        assert_eq!(Category::from_key("unknown"), None);
    }
}
