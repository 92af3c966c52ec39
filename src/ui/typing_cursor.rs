// SPDX-License-Identifier: MPL-2.0
//! Typing cursor decoration for the hero title.

use crate::app::context::Context;
use crate::domain::page::HeroAnchor;
use crate::ui::view::ViewCommand;

pub const CURSOR_GLYPH: &str = "|";

#[derive(Debug, Clone)]
pub struct TypingCursor {
    inserted: bool,
}

impl TypingCursor {
    /// Appends the cursor inside the hero accent. Returns `None` when the
    /// hero has no accent or already carries a cursor.
    pub fn init(hero: Option<HeroAnchor>, ctx: &mut Context<'_>) -> Option<Self> {
        let hero = hero?;
        if hero.has_cursor || !hero.has_accent {
            return None;
        }
        let mut cursor = Self { inserted: false };
        cursor.insert(ctx);
        Some(cursor)
    }

    /// Inserts the cursor unless it is already there.
    pub fn insert(&mut self, ctx: &mut Context<'_>) {
        if !self.inserted {
            self.inserted = true;
            ctx.emit(ViewCommand::InsertTypingCursor {
                glyph: CURSOR_GLYPH,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestRuntime;

    #[test]
    fn cursor_is_inserted_once() {
        let mut rt = TestRuntime::new();
        let hero = HeroAnchor {
            has_accent: true,
            has_cursor: false,
        };
        let mut cursor = TypingCursor::init(Some(hero), &mut rt.ctx(0)).unwrap();
        cursor.insert(&mut rt.ctx(0));
        assert_eq!(
            rt.take_view(),
            vec![ViewCommand::InsertTypingCursor { glyph: "|" }]
        );
    }

    #[test]
    fn existing_cursor_or_missing_accent_disables_feature() {
        let mut rt = TestRuntime::new();
        let with_cursor = HeroAnchor {
            has_accent: true,
            has_cursor: true,
        };
        let without_accent = HeroAnchor {
            has_accent: false,
            has_cursor: false,
        };
        assert!(TypingCursor::init(Some(with_cursor), &mut rt.ctx(0)).is_none());
        assert!(TypingCursor::init(Some(without_accent), &mut rt.ctx(0)).is_none());
        assert!(TypingCursor::init(None, &mut rt.ctx(0)).is_none());
        assert!(rt.view.is_empty());
    }
}
