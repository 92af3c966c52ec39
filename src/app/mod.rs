// SPDX-License-Identifier: MPL-2.0
//! Site root state and orchestration between the feature controllers.
//!
//! The [`Site`] struct owns the shared runtime services (timers, visibility
//! observer, notifications, preference store) and one controller per
//! feature. Every entry point takes the current time and returns the view
//! commands the host must apply.

pub mod context;
mod message;
pub mod paths;
pub mod persisted_state;
pub mod timers;

pub use message::Message;

use crate::config::Config;
use crate::domain::page::PageAnchors;
use crate::i18n::fluent::I18n;
use crate::ui::anchor_links::AnchorLinks;
use crate::ui::contact_form::ContactForm;
use crate::ui::counters::Counters;
use crate::ui::event_filter::EventFilter;
use crate::ui::lightbox::Lightbox;
use crate::ui::navigation::Navigation;
use crate::ui::notifications::{NotificationService, ToastKind};
use crate::ui::reveal::Reveal;
use crate::ui::scroll_top::ScrollTop;
use crate::ui::theme_toggle::ThemeToggle;
use crate::ui::theming::ThemeMode;
use crate::ui::typing_cursor::TypingCursor;
use crate::ui::view::ViewCommand;
use crate::ui::visibility::{BecameVisible, Subscriber, VisibilityObserver};
use context::Context;
use persisted_state::{FileStore, PreferenceStore};
use std::fmt;
use std::path::PathBuf;
use std::time::Instant;
use timers::{TimerEvent, Timers};
use unic_langid::LanguageIdentifier;

/// Shared services threaded to controllers through [`Context`].
struct Runtime {
    config: Config,
    i18n: I18n,
    store: Box<dyn PreferenceStore>,
    timers: Timers,
    notifications: NotificationService,
    visibility: VisibilityObserver,
    loaded: bool,
}

impl Runtime {
    fn context<'a>(&'a mut self, now: Instant, view: &'a mut Vec<ViewCommand>) -> Context<'a> {
        Context {
            now,
            config: &self.config,
            i18n: &self.i18n,
            store: self.store.as_mut(),
            timers: &mut self.timers,
            notifications: &mut self.notifications,
            visibility: &mut self.visibility,
            view,
        }
    }
}

/// One controller per feature; `None` means the page lacks its anchors.
struct Features {
    navigation: Option<Navigation>,
    scroll_top: ScrollTop,
    theme_toggle: ThemeToggle,
    counters: Option<Counters>,
    lightbox: Option<Lightbox>,
    contact_form: Option<ContactForm>,
    event_filter: Option<EventFilter>,
    typing_cursor: Option<TypingCursor>,
    reveal: Option<Reveal>,
    anchor_links: Option<AnchorLinks>,
}

/// Root state of the site interactivity layer.
pub struct Site {
    runtime: Runtime,
    features: Features,
}

impl fmt::Debug for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Site")
            .field("theme", &self.features.theme_toggle.mode())
            .field("pending_timers", &self.runtime.timers.len())
            .field("toasts", &self.runtime.notifications.len())
            .finish_non_exhaustive()
    }
}

/// Logs a feature disabled for missing anchors.
fn note_disabled<T>(feature: &'static str, controller: Option<T>) -> Option<T> {
    if controller.is_none() {
        tracing::debug!(feature, "page anchors absent, feature disabled");
    }
    controller
}

impl Site {
    /// Wires every feature against the page anchors.
    ///
    /// Returns the site and the commands that produce its controls and
    /// initial state.
    pub fn init(
        anchors: &PageAnchors,
        config: Config,
        i18n: I18n,
        store: Box<dyn PreferenceStore>,
        now: Instant,
    ) -> (Self, Vec<ViewCommand>) {
        // The toast container is produced last, after every other control.
        let mut container = Vec::new();
        let notifications = NotificationService::new(&config.toasts, &mut container);

        let mut runtime = Runtime {
            config,
            i18n,
            store,
            timers: Timers::new(),
            notifications,
            visibility: VisibilityObserver::new(),
            loaded: false,
        };

        let mut view = Vec::new();
        let features = {
            let mut ctx = runtime.context(now, &mut view);
            Features {
                navigation: note_disabled("navigation", Navigation::init(anchors.nav)),
                scroll_top: ScrollTop::init(&mut ctx),
                theme_toggle: ThemeToggle::init(&mut ctx),
                counters: note_disabled(
                    "counters",
                    Counters::init(&anchors.stat_numbers, &mut ctx),
                ),
                lightbox: note_disabled("lightbox", Lightbox::init(&anchors.gallery, &mut ctx)),
                contact_form: note_disabled(
                    "contact_form",
                    ContactForm::init(anchors.contact_form.as_ref(), &mut ctx),
                ),
                event_filter: note_disabled(
                    "event_filter",
                    EventFilter::init(anchors.events.as_ref(), &mut ctx),
                ),
                typing_cursor: note_disabled(
                    "typing_cursor",
                    TypingCursor::init(anchors.hero, &mut ctx),
                ),
                reveal: note_disabled("reveal", Reveal::init(&anchors.reveal_targets, &mut ctx)),
                anchor_links: note_disabled(
                    "anchor_links",
                    AnchorLinks::init(&anchors.in_page_links),
                ),
            }
        };
        view.extend(container);

        tracing::info!(locale = %runtime.i18n.current_locale(), "all features initialized");
        (Self { runtime, features }, view)
    }

    /// Loads `settings.toml` and the saved preferences from their default
    /// locations, then wires the site.
    pub fn load(anchors: &PageAnchors, now: Instant) -> (Self, Vec<ViewCommand>) {
        Self::load_with_override(anchors, None, None, now)
    }

    /// Like [`Site::load`], with custom config and data directories.
    ///
    /// A settings file or preference file that could not be read is
    /// announced with a warning toast after the initial commands.
    pub fn load_with_override(
        anchors: &PageAnchors,
        config_dir: Option<PathBuf>,
        data_dir: Option<PathBuf>,
        now: Instant,
    ) -> (Self, Vec<ViewCommand>) {
        let (config, config_warning) = crate::config::load_with_override(config_dir);
        let (store, store_warning) = FileStore::open_in(data_dir);
        if let Some(err) = &store_warning {
            tracing::warn!(error = %err, "saved preferences unavailable");
        }

        let i18n = I18n::new(&config);
        let (mut site, mut view) = Self::init(anchors, config, i18n, Box::new(store), now);

        let warnings: Vec<String> = config_warning
            .into_iter()
            .chain(store_warning.map(|err| err.i18n_key().to_string()))
            .collect();
        for key in &warnings {
            view.extend(site.warn(key, now));
        }
        (site, view)
    }

    /// Shows a warning toast with the translation of `key`.
    pub fn warn(&mut self, key: &str, now: Instant) -> Vec<ViewCommand> {
        let mut view = Vec::new();
        self.runtime
            .context(now, &mut view)
            .toast_key(ToastKind::Warning, key);
        view
    }

    /// Switches the language of every string produced from now on.
    ///
    /// Returns `false` and keeps the current language when no translation
    /// exists for `locale`.
    pub fn set_locale(&mut self, locale: LanguageIdentifier) -> bool {
        self.runtime.i18n.set_locale(locale.clone());
        let switched = *self.runtime.i18n.current_locale() == locale;
        if switched {
            self.runtime.config.general.language = Some(locale.to_string());
        } else {
            tracing::debug!(%locale, "no translation available, language unchanged");
        }
        switched
    }

    /// Handles one host event.
    pub fn handle(&mut self, message: Message, now: Instant) -> Vec<ViewCommand> {
        let mut view = Vec::new();
        let features = &mut self.features;

        match message {
            Message::WindowLoaded => {
                if !self.runtime.loaded {
                    self.runtime.loaded = true;
                    view.push(ViewCommand::PageLoaded);
                }
            }
            Message::Viewport { viewport, elements } => {
                let events = self.runtime.visibility.measure(viewport, &elements);
                let mut ctx = self.runtime.context(now, &mut view);
                dispatch_visible(features, &events, &mut ctx);
            }
            Message::Intersection { target, ratio } => {
                let events = self.runtime.visibility.report_ratio(target, ratio);
                let mut ctx = self.runtime.context(now, &mut view);
                dispatch_visible(features, &events, &mut ctx);
            }
            Message::ToastCloseClicked(id) => {
                let runtime = &mut self.runtime;
                runtime
                    .notifications
                    .dismiss(id, now, &mut runtime.timers, &mut view);
            }
            Message::ScrollTop(message) => {
                let mut ctx = self.runtime.context(now, &mut view);
                features.scroll_top.handle(message, &mut ctx);
            }
            Message::ThemeToggle(message) => {
                let mut ctx = self.runtime.context(now, &mut view);
                features.theme_toggle.handle(message, &mut ctx);
            }
            Message::Navigation(message) => {
                if let Some(navigation) = &mut features.navigation {
                    navigation.handle(message, &mut self.runtime.context(now, &mut view));
                }
            }
            Message::Lightbox(message) => {
                if let Some(lightbox) = &mut features.lightbox {
                    lightbox.handle(message, &mut self.runtime.context(now, &mut view));
                }
            }
            Message::ContactForm(message) => {
                if let Some(form) = &mut features.contact_form {
                    form.handle(message, &mut self.runtime.context(now, &mut view));
                }
            }
            Message::EventFilter(message) => {
                if let Some(filter) = &mut features.event_filter {
                    filter.handle(message, &mut self.runtime.context(now, &mut view));
                }
            }
            Message::AnchorLinks(message) => {
                if let Some(links) = &mut features.anchor_links {
                    links.handle(message, &mut self.runtime.context(now, &mut view));
                }
            }
        }
        view
    }

    /// Fires every timer due at `now`, in deadline order.
    ///
    /// Each callback observes its own deadline as the current time, so
    /// periodic timers keep their cadence after a late tick.
    pub fn tick(&mut self, now: Instant) -> Vec<ViewCommand> {
        let mut view = Vec::new();
        while let Some((deadline, event)) = self.runtime.timers.pop_due(now) {
            tracing::trace!(?event, "timer fired");
            let mut ctx = self.runtime.context(deadline, &mut view);
            let features = &mut self.features;
            match event {
                TimerEvent::CounterFrame(target) => {
                    if let Some(counters) = &mut features.counters {
                        counters.handle_timer(target, &mut ctx);
                    }
                }
                TimerEvent::ScrollThrottle => features.scroll_top.handle_timer(&mut ctx),
                TimerEvent::SearchDebounce(generation) => {
                    if let Some(filter) = &mut features.event_filter {
                        filter.handle_timer(generation, &mut ctx);
                    }
                }
                TimerEvent::ToastShow(_) | TimerEvent::ToastExpire(_) | TimerEvent::ToastDetach(_) => {
                    ctx.notifications
                        .handle_timer(event, ctx.now, ctx.timers, ctx.view);
                }
            }
        }
        view
    }

    /// Deadline of the next pending timer, for hosts that sleep until then.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.runtime.timers.next_deadline()
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.runtime.config
    }

    #[must_use]
    pub fn i18n(&self) -> &I18n {
        &self.runtime.i18n
    }

    #[must_use]
    pub fn store(&self) -> &dyn PreferenceStore {
        self.runtime.store.as_ref()
    }

    #[must_use]
    pub fn notifications(&self) -> &NotificationService {
        &self.runtime.notifications
    }

    #[must_use]
    pub fn theme(&self) -> ThemeMode {
        self.features.theme_toggle.mode()
    }

    #[must_use]
    pub fn navigation(&self) -> Option<&Navigation> {
        self.features.navigation.as_ref()
    }

    #[must_use]
    pub fn scroll_top(&self) -> &ScrollTop {
        &self.features.scroll_top
    }

    #[must_use]
    pub fn counters(&self) -> Option<&Counters> {
        self.features.counters.as_ref()
    }

    #[must_use]
    pub fn lightbox(&self) -> Option<&Lightbox> {
        self.features.lightbox.as_ref()
    }

    #[must_use]
    pub fn contact_form(&self) -> Option<&ContactForm> {
        self.features.contact_form.as_ref()
    }

    #[must_use]
    pub fn event_filter(&self) -> Option<&EventFilter> {
        self.features.event_filter.as_ref()
    }

    #[must_use]
    pub fn typing_cursor(&self) -> Option<&TypingCursor> {
        self.features.typing_cursor.as_ref()
    }

    #[must_use]
    pub fn reveal(&self) -> Option<&Reveal> {
        self.features.reveal.as_ref()
    }

    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.runtime.loaded
    }
}

fn dispatch_visible(features: &mut Features, events: &[BecameVisible], ctx: &mut Context<'_>) {
    for event in events {
        match event.subscriber {
            Subscriber::Counters => {
                if let Some(counters) = &mut features.counters {
                    counters.on_visible(event.target, ctx);
                }
            }
            Subscriber::Reveal => {
                if let Some(reveal) = &mut features.reveal {
                    reveal.on_visible(event.target, ctx);
                }
            }
        }
    }
}
