use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use ratatui::backend::Backend;
use ratatui::Terminal;

use crate::color_scheme::ColorScheme;
use crate::input::{self, KeySource};
use crate::system::snapshot::MetricsSnapshot;
use crate::system::store::SnapshotStore;
use crate::ui::{self, layout};

/// UI-side state: the snapshot currently on screen and whether to stop
pub struct App {
    pub snapshot: Arc<MetricsSnapshot>,
    pub failure: Option<String>,
    pub should_quit: bool,
    pub color_scheme: ColorScheme,
    /// Number of redraws so far
    pub tick: u64,
}

impl App {
    pub fn new(store: &SnapshotStore, color_scheme: ColorScheme) -> Self {
        Self {
            snapshot: store.peek(),
            failure: store.failure(),
            should_quit: false,
            color_scheme,
            tick: 0,
        }
    }

    /// Pull a fresh snapshot if the sampler published one since last time.
    /// Returns whether anything changed.
    pub fn refresh(&mut self, store: &SnapshotStore) -> bool {
        match store.consume_if_dirty() {
            Some(update) => {
                self.snapshot = update.snapshot;
                self.failure = update.failure;
                true
            }
            None => false,
        }
    }

    pub fn view(&self) -> layout::View<'_> {
        layout::View {
            snapshot: &self.snapshot,
            failure: self.failure.as_deref(),
        }
    }
}

/// Main UI loop: redraw, then wait up to `poll_timeout` for a key. The
/// terminal size is read on every draw, so resizes need no special event.
pub fn run<B: Backend, K: KeySource>(
    terminal: &mut Terminal<B>,
    keys: &mut K,
    store: &SnapshotStore,
    app: &mut App,
    poll_timeout: Duration,
) -> Result<()> {
    loop {
        if app.refresh(store) {
            tracing::trace!(tick = app.tick, "new snapshot on screen");
        }

        terminal.draw(|f| {
            let size = f.area();
            let dashboard = layout::compute(app.view(), size.width, size.height);
            tracing::trace!(
                width = size.width,
                height = size.height,
                cores_shown = dashboard.cores.len(),
                two_columns = dashboard.cores.iter().any(|c| c.column == 1),
                "redraw"
            );
            ui::draw(f, &dashboard, &app.color_scheme);
        })?;
        app.tick += 1;

        if let Some(key) = keys.next_key(poll_timeout)? {
            input::handle_input(app, key);
        }
        if app.should_quit {
            tracing::info!(redraws = app.tick, "quit requested");
            return Ok(());
        }
    }
}
