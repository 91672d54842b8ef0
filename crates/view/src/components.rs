//! Leptos components for the card browser.
//!
//! Components lay out the view models from [`crate::model`] and report user
//! interactions as [`UiEvent`]s through a callback. They hold no browse state
//! of their own beyond per-image load failures.

use leptos::*;

use cardcompare_browse::{Cell, ComparisonTable};
use cardcompare_products::Logo;

use crate::model::{ApplyAction, CardModel, DetailModel, ImageModel, ListModel};
use crate::orchestrator::UiEvent;

const APPLY_REL: &str = "noopener noreferrer sponsored";

/// Card art that swaps to its placeholder the first time it fails to load.
#[component]
pub fn CardImage(image: ImageModel, #[prop(into)] class_name: String, #[prop(optional)] lazy: bool) -> impl IntoView {
    let failed = create_rw_signal(false);
    let ImageModel { src, fallback, alt } = image;
    let current = move || if failed.get() { fallback.clone() } else { src.clone() };

    view! {
        <img
            class=class_name
            src=current
            alt=alt
            loading=lazy.then_some("lazy")
            on:error=move |_| {
                if !failed.get_untracked() {
                    failed.set(true);
                }
            }
        />
    }
}

/// Issuer logo, removed from the page if it fails to load.
#[component]
pub fn IssuerLogo(logo: Logo) -> impl IntoView {
    let hidden = create_rw_signal(false);
    let Logo { domain, url } = logo;
    let alt = format!("{domain} logo");

    view! {
        <Show when=move || !hidden.get()>
            <img
                class="issuer-logo"
                src=url.clone()
                alt=alt.clone()
                loading="lazy"
                on:error=move |_| hidden.set(true)
            />
        </Show>
    }
}

#[component]
fn IssuerRow(logos: Vec<Logo>, issuer: String) -> impl IntoView {
    view! {
        <div class="issuer-row">
            {logos.into_iter().map(|logo| view! { <IssuerLogo logo=logo/> }).collect_view()}
            <p class="muted">{issuer}</p>
        </div>
    }
}

/// Apply action, or a disabled placeholder with no href.
#[component]
pub fn ApplyLink(action: ApplyAction) -> impl IntoView {
    match action {
        ApplyAction::Link(href) => view! {
            <a
                class="apply-link"
                href=href
                target="_blank"
                rel=APPLY_REL
                on:click=|ev: ev::MouseEvent| ev.stop_propagation()
            >
                "Apply now"
            </a>
        }
        .into_view(),
        ApplyAction::Pending => view! {
            <a class="apply-link is-disabled" aria-disabled="true" tabindex="-1">
                "Apply link coming soon"
            </a>
        }
        .into_view(),
    }
}

/// One catalog card. Clicking the body or pressing Enter/Space on it opens the
/// detail overlay; the compare checkbox and apply link do not.
#[component]
pub fn Card(card: CardModel, on_event: Callback<UiEvent>) -> impl IntoView {
    let CardModel {
        id,
        name,
        issuer,
        category_line,
        image,
        logos,
        annual_fee,
        min_deposit,
        reward_type,
        apply,
        selected,
        disabled,
    } = card;

    let card_id = id.to_string();
    let pick_id = format!("pick-{id}");
    let aria_label = format!("View details for {name}");

    let open_id = id.clone();
    let key_id = id.clone();
    let toggle_id = id;

    view! {
        <article
            class="card"
            data-card-id=card_id.clone()
            tabindex="0"
            role="button"
            aria-label=aria_label
            on:click=move |_| on_event.call(UiEvent::OpenDetail(open_id.clone()))
            on:keydown=move |ev: ev::KeyboardEvent| {
                let key = ev.key();
                if key == "Enter" || key == " " {
                    ev.prevent_default();
                }
                on_event.call(UiEvent::CardKey { id: key_id.clone(), key });
            }
        >
            <CardImage image=image class_name="card-image" lazy=true/>
            <IssuerRow logos=logos issuer=issuer/>
            <h3>{name}</h3>
            <p class="muted small">{category_line}</p>
            <div class="chip-row">
                <span class="chip">{format!("Annual: {annual_fee}")}</span>
                <span class="chip">{format!("Min FD: {min_deposit}")}</span>
                <span class="chip">{reward_type}</span>
            </div>
            <ApplyLink action=apply/>
            <div
                class="select-row"
                on:click=|ev: ev::MouseEvent| ev.stop_propagation()
                on:keydown=|ev: ev::KeyboardEvent| ev.stop_propagation()
            >
                <input
                    type="checkbox"
                    id=pick_id.clone()
                    data-id=card_id
                    checked=selected
                    disabled=disabled
                    on:change=move |_| on_event.call(UiEvent::ToggleSelection(toggle_id.clone()))
                />
                <label for=pick_id>"Compare"</label>
            </div>
        </article>
    }
}

/// The filtered card grid, or the status message that replaces it.
#[component]
pub fn CardList(#[prop(into)] model: MaybeSignal<ListModel>, on_event: Callback<UiEvent>) -> impl IntoView {
    let message_model = model.clone();
    view! {
        {move || message_model.with(ListModel::message).map(|message| view! { <p class="muted">{message}</p> })}
        <For
            each=move || model.with(|m| m.cards().to_vec())
            key=|card: &CardModel| (card.id.clone(), card.selected, card.disabled)
            children=move |card| view! { <Card card=card on_event=on_event/> }
        />
    }
}

fn comparison_cell(cell: Cell) -> impl IntoView {
    match cell {
        Cell::Apply { url } => view! {
            <td>
                <a href=url target="_blank" rel=APPLY_REL>"Apply now"</a>
            </td>
        },
        other => view! { <td>{other.text().to_string()}</td> },
    }
}

/// Comparison table, or an empty-state message when nothing is selected.
#[component]
pub fn ComparisonView(table: ComparisonTable) -> impl IntoView {
    if table.is_empty() {
        return view! { <p class="muted">"No cards selected yet."</p> }.into_view();
    }

    let ComparisonTable { columns, rows } = table;
    view! {
        <table>
            <thead>
                <tr>
                    <th scope="col">"Feature"</th>
                    {columns.into_iter().map(|c| view! { <th scope="col">{c.name}</th> }).collect_view()}
                </tr>
            </thead>
            <tbody>
                {rows
                    .into_iter()
                    .map(|row| {
                        view! {
                            <tr>
                                <th scope="row">{row.label()}</th>
                                {row.cells.into_iter().map(comparison_cell).collect_view()}
                            </tr>
                        }
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
    .into_view()
}

/// Body of the detail overlay.
#[component]
pub fn DetailBody(detail: DetailModel) -> impl IntoView {
    let DetailModel { name, issuer, category_line, image, logos, rows, apply, .. } = detail;

    view! {
        <div class="card-modal-head">
            <CardImage image=image class_name="card-modal-image"/>
            <div class="card-modal-title-block">
                <IssuerRow logos=logos issuer=issuer/>
                <h3>{name}</h3>
                <p class="muted">{category_line}</p>
            </div>
        </div>
        <div class="card-modal-grid">
            {rows
                .into_iter()
                .map(|row| view! { <p><strong>{format!("{}:", row.label)}</strong>{format!(" {}", row.value)}</p> })
                .collect_view()}
        </div>
        <div class="card-modal-actions">
            <ApplyLink action=apply/>
        </div>
    }
}
