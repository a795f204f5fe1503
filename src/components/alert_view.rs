//! Alert View Component
//!
//! Active alerts table with a per-row resolve action.

use leptos::prelude::*;
use leptos::task::spawn_local;

use dashboard_core::{AlertBoard, AlertPhase, AlertRecord, Backend};

use crate::context::use_dashboard;

#[component]
pub fn AlertView() -> impl IntoView {
    let ctx = use_dashboard();
    let board = RwSignal::new(AlertBoard::new());

    // Load once on mount
    Effect::new(move |_| {
        spawn_local(async move {
            let result = ctx.backend().active_alerts().await;
            board.try_update(|b| b.apply_load(result, &ctx.toasts));
        });
    });

    // Requests for different ids run independently; nothing blocks a repeat
    let on_resolve = Callback::new(move |id: u32| {
        board.update(|b| b.begin_resolve(id));
        spawn_local(async move {
            let result = ctx.backend().resolve_alert(id).await;
            board.try_update(|b| b.apply_resolve(id, result, &ctx.toasts));
        });
    });

    let phase = Memo::new(move |_| board.with(|b| b.phase()));

    view! {
        <section class="panel alert-panel">
            <h2 class="panel-title">"Active Alerts"</h2>
            {move || match phase.get() {
                AlertPhase::Loading => view! {
                    <div class="panel-loading">"Loading alerts…"</div>
                }.into_any(),
                AlertPhase::Empty => view! {
                    <div class="panel-empty">"No active alerts."</div>
                }.into_any(),
                AlertPhase::Populated => view! {
                    <div class="table-scroll">
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>"Time"</th>
                                    <th>"Severity"</th>
                                    <th>"Message"</th>
                                    <th>"Action"</th>
                                </tr>
                            </thead>
                            <tbody>
                                <For
                                    each=move || board.with(|b| b.alerts().to_vec())
                                    key=|alert| alert.id
                                    children=move |alert| view! {
                                        <AlertRow alert=alert board=board on_resolve=on_resolve />
                                    }
                                />
                            </tbody>
                        </table>
                    </div>
                }.into_any(),
            }}
        </section>
    }
}

#[component]
fn AlertRow(
    alert: AlertRecord,
    board: RwSignal<AlertBoard>,
    on_resolve: Callback<u32>,
) -> impl IntoView {
    let id = alert.id;
    let time = alert.time_label();
    let severity_class = format!("cell-nowrap capitalize {}", alert.severity.style_class());
    let severity = alert.severity.label().to_string();
    let busy = move || board.with(|b| b.is_resolving(id));

    view! {
        <tr>
            <td class="cell-nowrap">{time}</td>
            <td class=severity_class>{severity}</td>
            <td>{alert.message}</td>
            <td class="cell-nowrap">
                <button class="resolve-btn" disabled=busy on:click=move |_| on_resolve.run(id)>
                    "Resolve"
                </button>
            </td>
        </tr>
    }
}
