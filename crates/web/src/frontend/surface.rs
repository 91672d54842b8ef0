//! Surface backed by Leptos signals.

use leptos::*;

use cardcompare_browse::ComparisonTable;
use cardcompare_view::{DetailModel, ListModel, Surface};

/// One signal per part of the page; the shell's components read them.
#[derive(Debug, Clone, Copy)]
pub struct SignalSurface {
    pub last_updated: RwSignal<Option<String>>,
    pub count: RwSignal<Option<usize>>,
    pub list: RwSignal<ListModel>,
    pub comparison: RwSignal<ComparisonTable>,
    pub detail: RwSignal<Option<DetailModel>>,
}

impl SignalSurface {
    pub fn new() -> Self {
        Self {
            last_updated: create_rw_signal(None),
            count: create_rw_signal(None),
            list: create_rw_signal(ListModel::Loading),
            comparison: create_rw_signal(ComparisonTable::default()),
            detail: create_rw_signal(None),
        }
    }
}

impl Default for SignalSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface for SignalSurface {
    fn show_header(&mut self, last_updated: Option<String>) {
        self.last_updated.set(last_updated);
    }

    fn show_count(&mut self, count: Option<usize>) {
        self.count.set(count);
    }

    fn show_list(&mut self, list: ListModel) {
        self.list.set(list);
    }

    fn show_comparison(&mut self, table: ComparisonTable) {
        self.comparison.set(table);
    }

    fn show_detail(&mut self, detail: Option<DetailModel>) {
        self.detail.set(detail);
    }
}
