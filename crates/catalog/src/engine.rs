//! Catalog engine: source collection, filter spec, derived view, pagination
//! cursor, and the load lifecycle.

use serde::{Deserialize, Serialize};

use storefront_core::Product;

use crate::filter::{FilterSpec, FilterUpdate};
use crate::view;

/// Load lifecycle as observed by the presentation layer.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogStatus {
    Idle,
    Loading,
    Ready,
    Failed,
}

/// Ties an in-flight product fetch to the engine generation that issued it.
///
/// A completion presented with a stale token (a newer load has begun since)
/// is discarded, so the most recently issued request determines final state.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[must_use = "pass the token back to finish_load"]
pub struct LoadToken {
    generation: u64,
}

/// Products shown per page unless overridden at construction.
pub const DEFAULT_PAGE_SIZE: u32 = 12;

#[derive(Debug, Clone)]
pub struct CatalogEngine {
    source: Vec<Product>,
    spec: FilterSpec,
    view: Vec<Product>,
    categories: Vec<String>,
    status: CatalogStatus,
    error: Option<String>,
    current_page: u32,
    page_size: u32,
    load_generation: u64,
}

impl Default for CatalogEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogEngine {
    pub fn new() -> Self {
        Self::with_page_size(DEFAULT_PAGE_SIZE)
    }

    /// Engine with a custom page size, fixed for the engine's lifetime.
    pub fn with_page_size(page_size: u32) -> Self {
        Self {
            source: Vec::new(),
            spec: FilterSpec::default(),
            view: Vec::new(),
            categories: Vec::new(),
            status: CatalogStatus::Idle,
            error: None,
            current_page: 1,
            page_size: page_size.max(1),
            load_generation: 0,
        }
    }

    pub fn status(&self) -> CatalogStatus {
        self.status
    }

    /// Error recorded by the most recent failed load, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Distinct category list for the filter UI.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn filter(&self) -> &FilterSpec {
        &self.spec
    }

    /// Number of products in the source collection.
    pub fn source_count(&self) -> usize {
        self.source.len()
    }

    /// Number of products satisfying the active filter.
    pub fn filtered_count(&self) -> usize {
        self.view.len()
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Number of pages in the derived view (0 when the view is empty).
    pub fn page_count(&self) -> u32 {
        (self.view.len() as u32).div_ceil(self.page_size)
    }

    /// The full derived view, in display order.
    pub fn derived_view(&self) -> &[Product] {
        &self.view
    }

    /// Slice of the derived view for the current page.
    ///
    /// Always at most `page_size` long; a cursor past the last valid page
    /// yields an empty slice rather than failing.
    pub fn visible_page(&self) -> &[Product] {
        let start = (self.current_page as usize - 1).saturating_mul(self.page_size as usize);
        if start >= self.view.len() {
            return &[];
        }
        let end = (start + self.page_size as usize).min(self.view.len());
        &self.view[start..end]
    }

    /// Start a product load: status becomes `Loading` and any previous error
    /// is cleared. The returned token must be passed back to [`finish_load`].
    ///
    /// Beginning a new load supersedes any still-outstanding one.
    ///
    /// [`finish_load`]: CatalogEngine::finish_load
    pub fn begin_load(&mut self) -> LoadToken {
        self.load_generation += 1;
        self.status = CatalogStatus::Loading;
        self.error = None;
        LoadToken {
            generation: self.load_generation,
        }
    }

    /// Apply a settled load.
    ///
    /// Returns `false` and changes nothing when the token is stale, i.e. a
    /// newer `begin_load` superseded the request. On success the source
    /// collection is replaced wholesale and the view recomputed against the
    /// current filter; on failure the previous catalog stays intact and only
    /// the status/error fields change.
    pub fn finish_load(&mut self, token: LoadToken, outcome: Result<Vec<Product>, String>) -> bool {
        if token.generation != self.load_generation {
            return false;
        }
        match outcome {
            Ok(products) => {
                self.source = products;
                self.status = CatalogStatus::Ready;
                self.error = None;
                self.refresh_view();
            }
            Err(message) => {
                self.status = CatalogStatus::Failed;
                self.error = Some(message);
            }
        }
        true
    }

    /// Replace the distinct category list.
    ///
    /// Independent of the product load lifecycle: a failed categories fetch
    /// is simply never applied here and leaves status untouched.
    pub fn set_categories(&mut self, categories: Vec<String>) {
        self.categories = categories;
    }

    /// Merge a partial update onto the filter spec, recompute the view, and
    /// reset the cursor to page 1.
    ///
    /// An empty update changes no field values but still recomputes and
    /// resets the cursor.
    pub fn update_filter(&mut self, update: FilterUpdate) {
        self.spec.merge(update);
        self.refresh_view();
        self.current_page = 1;
    }

    /// Reset the filter spec to its default, recompute, reset to page 1.
    pub fn clear_filter(&mut self) {
        self.spec = FilterSpec::default();
        self.refresh_view();
        self.current_page = 1;
    }

    /// Move the pagination cursor.
    ///
    /// Not bounds-checked against the view: the presentation layer offers
    /// valid page numbers, and an out-of-range page just renders empty.
    /// A page of 0 is normalized to 1.
    pub fn set_page(&mut self, page: u32) {
        self.current_page = page.max(1);
    }

    fn refresh_view(&mut self) {
        self.view = view::recompute(&self.source, &self.spec);
    }
}
