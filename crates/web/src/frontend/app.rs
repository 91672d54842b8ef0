//! Static page shell plus event wiring into the orchestrator.

use leptos::*;

use cardcompare_browse::{FilterField, FilterInputs, filter_options};
use cardcompare_view::{
    CardList, ComparisonView, DetailBody, Orchestrator, Presenter, UiEvent, last_updated_text,
    results_count_text,
};

use crate::config::AppConfig;
use crate::frontend::surface::SignalSurface;
use crate::loader::{HttpSource, LoadError, load_catalog, resolve_data_url};

/// Catalog location relative to the page.
pub const BROWSER_DATA_SOURCE: &str = "./data/cards.json";

fn browser_config() -> AppConfig {
    AppConfig {
        data_source: BROWSER_DATA_SOURCE.to_string(),
        ..AppConfig::default()
    }
}

fn page_href() -> Result<String, LoadError> {
    web_sys::window()
        .and_then(|w| w.location().href().ok())
        .ok_or_else(|| LoadError::Address("page location unavailable".to_string()))
}

#[component]
pub fn App() -> impl IntoView {
    let config = browser_config();
    let surface = SignalSurface::new();
    let app = store_value(Orchestrator::new(Presenter::new(config.view_config()), surface));

    let filters = create_rw_signal(FilterInputs::default());
    let categories = create_rw_signal(Vec::<String>::new());
    let reward_types = create_rw_signal(Vec::<String>::new());

    let on_event = Callback::new(move |event: UiEvent| {
        app.update_value(|app| app.dispatch(event));
        filters.set(app.with_value(|app| app.state().inputs().clone()));
    });
    let send = move |event: UiEvent| on_event.call(event);

    spawn_local(async move {
        let url = page_href().and_then(|href| resolve_data_url(&href, &config.data_source));
        let outcome = match url {
            Ok(url) => load_catalog(&HttpSource::new(url)).await,
            Err(err) => Err(err),
        };
        app.update_value(|app| {
            app.finish_loading(outcome);
            if let Some(catalog) = app.state().catalog() {
                categories.set(filter_options(catalog.products(), FilterField::Category));
                reward_types.set(filter_options(catalog.products(), FilterField::RewardType));
            }
        });
    });

    let dialog_ref = create_node_ref::<html::Dialog>();
    let detail = surface.detail;
    create_effect(move |_| {
        let open = detail.with(Option::is_some);
        let Some(dialog) = dialog_ref.get() else {
            return;
        };
        if open && !dialog.open() {
            if let Err(err) = dialog.show_modal() {
                tracing::warn!(?err, "could not open detail dialog");
            }
        } else if !open && dialog.open() {
            dialog.close();
        }
    });

    let text_filter = move |field: FilterField| {
        move |ev: ev::Event| {
            send(UiEvent::FilterChanged {
                field,
                value: event_target_value(&ev),
            })
        }
    };
    let filter_value = move |field: FilterField| move || filters.with(|f| f.get(field).to_string());

    let on_backdrop_click = move |ev: ev::MouseEvent| {
        let target = event_target::<web_sys::Element>(&ev);
        if target.id() == "card-modal" {
            send(UiEvent::CloseDetail);
        }
    };

    view! {
        <div class="app">
            <header>
                <h1>"Card Compare"</h1>
                <p id="last-updated" class="muted">
                    {move || surface.last_updated.get().as_deref().map(last_updated_text)}
                </p>
            </header>

            <main>
                <section class="filters">
                    <input
                        type="search"
                        id=FilterField::Query.control_id()
                        placeholder="Search by name, issuer or partner"
                        prop:value=filter_value(FilterField::Query)
                        on:input=text_filter(FilterField::Query)
                    />
                    <input
                        type="number"
                        min="0"
                        id=FilterField::MaxAnnualFee.control_id()
                        placeholder="Max annual fee"
                        prop:value=filter_value(FilterField::MaxAnnualFee)
                        on:input=text_filter(FilterField::MaxAnnualFee)
                    />
                    <input
                        type="number"
                        min="0"
                        id=FilterField::MaxMinDeposit.control_id()
                        placeholder="Max FD"
                        prop:value=filter_value(FilterField::MaxMinDeposit)
                        on:input=text_filter(FilterField::MaxMinDeposit)
                    />
                    <select
                        id=FilterField::Category.control_id()
                        prop:value=filter_value(FilterField::Category)
                        on:change=text_filter(FilterField::Category)
                    >
                        <option value="">"All categories"</option>
                        {move || categories.get().into_iter().map(|c| view! { <option value=c.clone()>{c}</option> }).collect_view()}
                    </select>
                    <select
                        id=FilterField::RewardType.control_id()
                        prop:value=filter_value(FilterField::RewardType)
                        on:change=text_filter(FilterField::RewardType)
                    >
                        <option value="">"All reward types"</option>
                        {move || reward_types.get().into_iter().map(|r| view! { <option value=r.clone()>{r}</option> }).collect_view()}
                    </select>
                    <button type="button" on:click=move |_| send(UiEvent::ClearFilters)>"Clear filters"</button>
                </section>

                <p id="results-count" class="muted">
                    {move || surface.count.get().map(results_count_text)}
                </p>

                <section id="card-list" class="card-grid">
                    <CardList model=surface.list on_event=on_event/>
                </section>

                <section class="compare">
                    <h2>"Compare"</h2>
                    <button type="button" on:click=move |_| send(UiEvent::ClearSelection)>"Clear selection"</button>
                    <div id="compare-table-wrap">
                        {move || view! { <ComparisonView table=surface.comparison.get()/> }}
                    </div>
                </section>
            </main>

            <dialog
                id="card-modal"
                class="card-modal"
                node_ref=dialog_ref
                on:click=on_backdrop_click
                on:close=move |_| send(UiEvent::CloseDetail)
            >
                <button type="button" class="modal-close" aria-label="Close" on:click=move |_| send(UiEvent::CloseDetail)>
                    "×"
                </button>
                <div id="card-modal-content">
                    {move || surface.detail.get().map(|detail| view! { <DetailBody detail=detail/> })}
                </div>
            </dialog>
        </div>
    }
}
