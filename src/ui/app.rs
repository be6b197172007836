use std::collections::{HashMap, HashSet};

use ratatui::text::Line;

use crate::api::{ApiError, Layer, LayerId};
use crate::ui::fetcher::FetchSender;
use crate::ui::layer_item::{layer_lines, ItemView};
use crate::ui::layer_list::{LayerListState, ListView};
use crate::ui::lifecycle::LivenessToken;

const PAGE_LINES: u16 = 10;

/// The page: one list view and the item views it owns, in list order.
pub struct App {
    should_quit: bool,
    base_url: String,
    fetches: FetchSender,
    list: ListView,
    items: Vec<ItemView>,
    scroll: u16,
}

impl App {
    pub fn new(base_url: impl Into<String>, fetches: FetchSender) -> Self {
        Self {
            should_quit: false,
            base_url: base_url.into(),
            fetches,
            list: ListView::new(),
            items: Vec::new(),
            scroll: 0,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Mounts the list view, which issues the collection request.
    pub fn mount(&mut self) {
        self.list.mount(&self.fetches);
    }

    /// Remounts the list view. Item views survive until the new list
    /// arrives and are then reconciled by key.
    pub fn refresh(&mut self) {
        tracing::debug!("Refreshing layer list");
        self.list.mount(&self.fetches);
    }

    /// Tears down every view. Responses still in flight are dropped.
    pub fn unmount(&mut self) {
        self.items.clear();
        self.list.unmount();
    }

    pub fn list_state(&self) -> &LayerListState {
        self.list.state()
    }

    pub fn items(&self) -> &[ItemView] {
        &self.items
    }

    pub fn on_layer_ids(&mut self, token: &LivenessToken, result: Result<Vec<LayerId>, ApiError>) {
        if self.list.apply(token, result) {
            let ids = self.list.state().ids().to_vec();
            self.reconcile(&ids);
        }
    }

    pub fn on_layer(&mut self, id: &LayerId, token: &LivenessToken, result: Result<Layer, ApiError>) {
        match self.items.iter_mut().find(|item| item.owns(token)) {
            Some(item) => {
                item.apply(token, result);
            }
            None => {
                tracing::trace!(layer = %id, "Dropping response for an unmounted layer view");
            }
        }
    }

    /// Keeps views whose key is still listed, mounts views for new keys and
    /// drops the rest, which unmounts them.
    fn reconcile(&mut self, ids: &[LayerId]) {
        let mut previous: HashMap<LayerId, ItemView> = self
            .items
            .drain(..)
            .map(|item| (item.id().clone(), item))
            .collect();

        let mut seen = HashSet::with_capacity(ids.len());
        let mut items = Vec::with_capacity(ids.len());
        for id in ids {
            if !seen.insert(id) {
                tracing::warn!(layer = %id, "Duplicate layer id in list response, skipped");
                continue;
            }
            let item = match previous.remove(id) {
                Some(item) => item,
                None => ItemView::mount(id.clone(), &self.fetches),
            };
            items.push(item);
        }

        if !previous.is_empty() {
            tracing::debug!(count = previous.len(), "Unmounting layer views");
        }
        self.items = items;
    }

    pub fn body_lines(&self) -> Vec<Line<'static>> {
        self.items
            .iter()
            .flat_map(|item| layer_lines(item.state()))
            .collect()
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_sub(lines);
    }

    pub fn scroll_down(&mut self, lines: u16) {
        let max = self.content_height().saturating_sub(1);
        self.scroll = self.scroll.saturating_add(lines).min(max);
    }

    pub fn page_up(&mut self) {
        self.scroll_up(PAGE_LINES);
    }

    pub fn page_down(&mut self) {
        self.scroll_down(PAGE_LINES);
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll = 0;
    }

    fn content_height(&self) -> u16 {
        let lines: usize = self
            .items
            .iter()
            .map(|item| layer_lines(item.state()).len())
            .sum();
        u16::try_from(lines).unwrap_or(u16::MAX)
    }
}
