// SPDX-License-Identifier: MPL-2.0
//! Event category filter and search.
//!
//! A filter bar is produced after the events section title. Cards are
//! re-filtered on every category click and every search keystroke; the
//! search can optionally be debounced.

use crate::app::context::Context;
use crate::app::timers::TimerEvent;
use crate::domain::filter::{Category, EventCard};
use crate::domain::page::{ElementId, EventsSectionAnchor};
use crate::ui::view::{FilterButton, ViewCommand, Visibility};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// The search box content changed.
    SearchInput(String),
    CategoryClicked(Category),
}

#[derive(Debug, Clone)]
pub struct EventFilter {
    cards: Vec<EventCard>,
    /// Whether each card is currently shown, parallel to `cards`.
    shown: Vec<bool>,
    category: Category,
    /// Lowercased search text.
    query: String,
    debounce: Duration,
    generation: u64,
}

impl EventFilter {
    /// Produces the filter bar. Returns `None` when there are no cards or the
    /// events section has no title to anchor the bar to.
    pub fn init(events: Option<&EventsSectionAnchor>, ctx: &mut Context<'_>) -> Option<Self> {
        let events = events?;
        if events.cards.is_empty() {
            return None;
        }
        if !events.has_title {
            tracing::debug!("events section has no title, filter disabled");
            return None;
        }

        let buttons = Category::ALL
            .into_iter()
            .map(|category| FilterButton {
                category,
                label: ctx.i18n.tr(category.label_key()),
                active: category == Category::All,
            })
            .collect();
        ctx.emit(ViewCommand::InsertFilterBar {
            placeholder: ctx.i18n.tr("filter-search-placeholder"),
            buttons,
        });

        let cards: Vec<EventCard> = events.cards.iter().map(EventCard::from).collect();
        Some(Self {
            shown: vec![true; cards.len()],
            cards,
            category: Category::All,
            query: String::new(),
            debounce: ctx.config.filter.search_debounce(),
            generation: 0,
        })
    }

    #[must_use]
    pub fn category(&self) -> Category {
        self.category
    }

    /// Cards currently shown, in page order.
    pub fn visible_cards(&self) -> impl Iterator<Item = ElementId> + '_ {
        self.cards
            .iter()
            .zip(&self.shown)
            .filter(|(_, shown)| **shown)
            .map(|(card, _)| card.id())
    }

    pub fn handle(&mut self, message: Message, ctx: &mut Context<'_>) {
        match message {
            Message::SearchInput(text) => {
                self.query = text.to_lowercase();
                if self.debounce.is_zero() {
                    self.apply(ctx);
                } else {
                    self.generation += 1;
                    ctx.schedule_after(self.debounce, TimerEvent::SearchDebounce(self.generation));
                }
            }
            Message::CategoryClicked(category) => {
                self.category = category;
                for button in Category::ALL {
                    ctx.emit(ViewCommand::FilterButton {
                        category: button,
                        active: button == category,
                    });
                }
                self.apply(ctx);
            }
        }
    }

    /// Runs a debounced search unless a newer keystroke superseded it.
    pub fn handle_timer(&mut self, generation: u64, ctx: &mut Context<'_>) {
        if generation == self.generation {
            self.apply(ctx);
        }
    }

    fn apply(&mut self, ctx: &mut Context<'_>) {
        for (card, shown) in self.cards.iter().zip(self.shown.iter_mut()) {
            let matches = card.matches(self.category, &self.query);
            if matches != *shown {
                *shown = matches;
                ctx.emit(ViewCommand::Card {
                    target: card.id(),
                    visibility: Visibility::from_shown(matches),
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::domain::page::EventCardAnchor;
    use crate::test_utils::TestRuntime;

    fn section(tags: &[&str]) -> EventsSectionAnchor {
        EventsSectionAnchor {
            has_title: true,
            cards: tags
                .iter()
                .enumerate()
                .map(|(i, tag)| EventCardAnchor {
                    id: ElementId::new(i as u32),
                    tag: Some((*tag).to_string()),
                    title: Some(format!("{tag} night")),
                    description: Some("Open to every student".into()),
                })
                .collect(),
        }
    }

    #[test]
    fn missing_section_cards_or_title_disable_feature() {
        let mut rt = TestRuntime::new();
        assert!(EventFilter::init(None, &mut rt.ctx(0)).is_none());
        assert!(EventFilter::init(Some(&section(&[])), &mut rt.ctx(0)).is_none());

        let mut untitled = section(&["Workshop"]);
        untitled.has_title = false;
        assert!(EventFilter::init(Some(&untitled), &mut rt.ctx(0)).is_none());
        assert!(rt.view.is_empty());
    }

    #[test]
    fn bar_starts_with_all_active() {
        let mut rt = TestRuntime::new();
        EventFilter::init(Some(&section(&["Workshop"])), &mut rt.ctx(0)).unwrap();
        let Some(ViewCommand::InsertFilterBar {
            placeholder,
            buttons,
        }) = rt.view.first()
        else {
            panic!("filter bar not produced");
        };
        assert_eq!(placeholder, "Search events...");
        assert_eq!(buttons.len(), 5);
        assert!(buttons[0].active && buttons[0].label == "All");
        assert!(buttons[1..].iter().all(|b| !b.active));
    }

    #[test]
    fn category_click_shows_matching_cards_only() {
        let mut rt = TestRuntime::new();
        let mut filter =
            EventFilter::init(Some(&section(&["Workshop", "Seminar"])), &mut rt.ctx(0)).unwrap();

        filter.handle(Message::CategoryClicked(Category::Workshop), &mut rt.ctx(0));
        assert_eq!(filter.visible_cards().collect::<Vec<_>>(), vec![ElementId::new(0)]);

        let active: Vec<_> = rt
            .view
            .iter()
            .filter_map(|command| match command {
                ViewCommand::FilterButton {
                    category,
                    active: true,
                } => Some(*category),
                _ => None,
            })
            .collect();
        assert_eq!(active, vec![Category::Workshop]);
    }

    #[test]
    fn query_matching_nothing_hides_every_card() {
        let mut rt = TestRuntime::new();
        let mut filter =
            EventFilter::init(Some(&section(&["Workshop", "Seminar"])), &mut rt.ctx(0)).unwrap();

        filter.handle(Message::SearchInput("QUANTUM".into()), &mut rt.ctx(0));
        assert_eq!(filter.visible_cards().count(), 0);

        filter.handle(Message::SearchInput("SEMINAR".into()), &mut rt.ctx(0));
        assert_eq!(filter.visible_cards().collect::<Vec<_>>(), vec![ElementId::new(1)]);
    }

    #[test]
    fn debounced_search_runs_only_latest_keystroke() {
        let mut config = Config::default();
        config.filter.search_debounce_ms = Some(200);
        let mut rt = TestRuntime::with_config(config);
        let mut filter =
            EventFilter::init(Some(&section(&["Workshop", "Seminar"])), &mut rt.ctx(0)).unwrap();

        filter.handle(Message::SearchInput("sem".into()), &mut rt.ctx(0));
        filter.handle(Message::SearchInput("work".into()), &mut rt.ctx(100));
        assert_eq!(filter.visible_cards().count(), 2);

        let mut runs = 0;
        while let Some((deadline, event)) = rt.next_due(1000) {
            if let TimerEvent::SearchDebounce(generation) = event {
                let before = rt.view.len();
                filter.handle_timer(generation, &mut rt.ctx_at(deadline));
                if rt.view.len() != before {
                    runs += 1;
                }
            }
        }
        assert_eq!(runs, 1);
        assert_eq!(filter.visible_cards().collect::<Vec<_>>(), vec![ElementId::new(0)]);
    }
}
