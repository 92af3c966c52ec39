// SPDX-License-Identifier: MPL-2.0
//! Test utilities shared by the controller unit tests.
//!
//! [`TestRuntime`] owns the runtime services a [`Context`] borrows, with an
//! English locale and an in-memory preference store, and a fixed start
//! instant so tests can address time in milliseconds.

use crate::app::context::Context;
use crate::app::persisted_state::MemoryStore;
use crate::app::timers::{TimerEvent, Timers};
use crate::config::Config;
use crate::i18n::fluent::I18n;
use crate::ui::notifications::NotificationService;
use crate::ui::view::ViewCommand;
use crate::ui::visibility::VisibilityObserver;
use std::time::{Duration, Instant};

pub struct TestRuntime {
    pub start: Instant,
    pub config: Config,
    pub i18n: I18n,
    pub store: MemoryStore,
    pub timers: Timers,
    pub notifications: NotificationService,
    pub visibility: VisibilityObserver,
    pub view: Vec<ViewCommand>,
}

impl TestRuntime {
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(mut config: Config) -> Self {
        config.general.language = Some("en-US".to_string());
        let i18n = I18n::new(&config);
        let mut container = Vec::new();
        let notifications = NotificationService::new(&config.toasts, &mut container);
        Self {
            start: Instant::now(),
            config,
            i18n,
            store: MemoryStore::new(),
            timers: Timers::new(),
            notifications,
            visibility: VisibilityObserver::new(),
            view: Vec::new(),
        }
    }

    pub fn at(&self, ms: u64) -> Instant {
        self.start + Duration::from_millis(ms)
    }

    /// Context for an event happening `ms` after the start.
    pub fn ctx(&mut self, ms: u64) -> Context<'_> {
        let now = self.at(ms);
        self.ctx_at(now)
    }

    pub fn ctx_at(&mut self, now: Instant) -> Context<'_> {
        Context {
            now,
            config: &self.config,
            i18n: &self.i18n,
            store: &mut self.store,
            timers: &mut self.timers,
            notifications: &mut self.notifications,
            visibility: &mut self.visibility,
            view: &mut self.view,
        }
    }

    /// Pops the next timer due at `ms`, with its deadline.
    pub fn next_due(&mut self, ms: u64) -> Option<(Instant, TimerEvent)> {
        let now = self.at(ms);
        self.timers.pop_due(now)
    }

    /// Drains the recorded view commands.
    pub fn take_view(&mut self) -> Vec<ViewCommand> {
        std::mem::take(&mut self.view)
    }
}
