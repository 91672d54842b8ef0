//! Where view models end up.

use cardcompare_browse::ComparisonTable;

use crate::model::{DetailModel, ListModel};

/// A UI host that displays the latest model for each part of the page.
///
/// Every call replaces what was shown before; nothing is patched in place.
pub trait Surface {
    /// "Last updated" text, or nothing before the catalog has loaded.
    fn show_header(&mut self, last_updated: Option<String>);

    /// Visible card count, or nothing while loading or after a failure.
    fn show_count(&mut self, count: Option<usize>);

    fn show_list(&mut self, list: ListModel);

    fn show_comparison(&mut self, table: ComparisonTable);

    /// Open the detail overlay with `detail`, or close it on `None`.
    fn show_detail(&mut self, detail: Option<DetailModel>);
}

/// Surface that keeps the latest models in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySurface {
    last_updated: Option<String>,
    count: Option<usize>,
    list: ListModel,
    comparison: ComparisonTable,
    detail: Option<DetailModel>,
    writes: usize,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_updated(&self) -> Option<&str> {
        self.last_updated.as_deref()
    }

    pub fn count(&self) -> Option<usize> {
        self.count
    }

    pub fn list(&self) -> &ListModel {
        &self.list
    }

    pub fn comparison(&self) -> &ComparisonTable {
        &self.comparison
    }

    pub fn detail(&self) -> Option<&DetailModel> {
        self.detail.as_ref()
    }

    pub fn is_detail_open(&self) -> bool {
        self.detail.is_some()
    }

    /// Number of list and comparison redraws so far.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl MemorySurface {
    /// Standalone HTML page rendered server-side from the current models.
    pub fn to_document(&self, title: &str) -> String {
        use leptos::*;

        use crate::components::{CardList, ComparisonView, DetailBody};
        use crate::model::{last_updated_text, results_count_text};
        use crate::orchestrator::UiEvent;

        let title = title.to_string();
        let heading = title.clone();
        let last_updated = self.last_updated.as_deref().map(last_updated_text);
        let count = self.count.map(results_count_text);
        let list = self.list.clone();
        let table = self.comparison.clone();
        let detail = self.detail.clone();
        let open = detail.is_some();

        let html = leptos::ssr::render_to_string(move || {
            let on_event = Callback::new(|_: UiEvent| {});
            view! {
                <html lang="en">
                    <head>
                        <meta charset="utf-8"/>
                        <title>{title}</title>
                    </head>
                    <body>
                        <header>
                            <h1>{heading}</h1>
                            <p id="last-updated" class="muted">{last_updated}</p>
                        </header>
                        <main>
                            <p id="results-count" class="muted">{count}</p>
                            <section id="card-list" class="card-grid">
                                <CardList model=list on_event=on_event/>
                            </section>
                            <section id="compare-table-wrap">
                                <ComparisonView table=table/>
                            </section>
                        </main>
                        <dialog id="card-modal" class="card-modal" open=open>
                            <div id="card-modal-content">
                                {detail.map(|detail| view! { <DetailBody detail=detail/> })}
                            </div>
                        </dialog>
                    </body>
                </html>
            }
        });

        format!("<!doctype html>\n{html}\n")
    }
}

impl Surface for MemorySurface {
    fn show_header(&mut self, last_updated: Option<String>) {
        self.last_updated = last_updated;
    }

    fn show_count(&mut self, count: Option<usize>) {
        self.count = count;
    }

    fn show_list(&mut self, list: ListModel) {
        self.list = list;
        self.writes += 1;
    }

    fn show_comparison(&mut self, table: ComparisonTable) {
        self.comparison = table;
        self.writes += 1;
    }

    fn show_detail(&mut self, detail: Option<DetailModel>) {
        self.detail = detail;
    }
}
