//! Inventory View Component
//!
//! Searchable, sortable item table. Any change of search text or sort
//! column re-queries the backend; stale responses are dropped by the board.

use leptos::prelude::*;
use leptos::task::spawn_local;

use dashboard_core::{Backend, InventoryBoard, InventoryBody, InventoryItem, SortField};

use crate::context::use_dashboard;

#[component]
pub fn InventoryView() -> impl IntoView {
    let ctx = use_dashboard();
    let board = RwSignal::new(InventoryBoard::new(ctx.config().page_size));

    let reload = move || {
        let Some((ticket, query)) = board.try_update(|b| b.begin_load()) else {
            return;
        };
        spawn_local(async move {
            let result = ctx.backend().items(&query).await;
            board.try_update(|b| b.apply_load(ticket, result));
        });
    };

    // Re-query when search or sort changes (and once on mount)
    let params = Memo::new(move |_| board.with(|b| (b.search().to_string(), b.sort())));
    Effect::new(move |_| {
        params.track();
        reload();
    });

    view! {
        <section class="panel inventory-panel">
            <h2 class="panel-title">"Inventory"</h2>

            <div class="search-bar">
                <input
                    type="text"
                    class="search-input"
                    placeholder="Search items..."
                    prop:value=move || board.with(|b| b.search().to_string())
                    on:input=move |ev| {
                        let q = event_target_value(&ev);
                        board.update(|b| b.set_search(q));
                    }
                />
                <button class="search-btn" on:click=move |_| reload()>"Search"</button>
            </div>

            <Show
                when=move || !board.with(|b| b.is_loading())
                fallback=|| view! { <div class="panel-loading">"Loading inventory…"</div> }
            >
                <div class="table-scroll">
                    <table class="data-table">
                        <thead>
                            <tr>
                                {SortField::ALL
                                    .into_iter()
                                    .map(|field| view! { <SortHeader field=field board=board /> })
                                    .collect_view()}
                            </tr>
                        </thead>
                        <tbody>
                            {move || board.with(|b| match b.body() {
                                InventoryBody::Placeholder { text, colspan } => view! {
                                    <tr>
                                        <td colspan=colspan.to_string() class="table-placeholder">{text}</td>
                                    </tr>
                                }.into_any(),
                                InventoryBody::Rows(items) => items
                                    .iter()
                                    .cloned()
                                    .map(|item| view! { <InventoryRow item=item /> })
                                    .collect_view()
                                    .into_any(),
                            })}
                        </tbody>
                    </table>
                </div>
            </Show>
        </section>
    }
}

/// Clickable column header with the active sort arrow
#[component]
fn SortHeader(field: SortField, board: RwSignal<InventoryBoard>) -> impl IntoView {
    let arrow = move || board.with(|b| b.sort().indicator(field));

    view! {
        <th class="sortable" on:click=move |_| board.update(|b| b.toggle_sort(field))>
            <div class="th-content">
                {field.label()}
                {move || arrow().map(|a| view! { <span class="sort-indicator">{a}</span> })}
            </div>
        </th>
    }
}

#[component]
fn InventoryRow(item: InventoryItem) -> impl IntoView {
    let expiry = item.expiry_label();
    let status = item.status.label();

    view! {
        <tr>
            <td class="cell-nowrap">{item.name}</td>
            <td class="cell-nowrap">{item.batch}</td>
            <td class="cell-nowrap">{expiry}</td>
            <td class="cell-nowrap capitalize">{status}</td>
            <td class="cell-nowrap">{item.location.name}</td>
        </tr>
    }
}
