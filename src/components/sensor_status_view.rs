//! Sensor Status View Component
//!
//! Sensor cards refreshed on a fixed interval while mounted.

use gloo_timers::future::IntervalStream;
use leptos::prelude::*;
use leptos::task::spawn_local;

use dashboard_core::{cancellable_poll, Backend, SensorBoard, SensorCard};

use crate::context::use_dashboard;

#[component]
pub fn SensorStatusView() -> impl IntoView {
    let ctx = use_dashboard();
    let board = RwSignal::new(SensorBoard::new());
    let period_ms = u32::try_from(ctx.config().poll_interval.as_millis()).unwrap_or(u32::MAX);

    // Interval is anchored at mount; teardown drops it with any request in flight
    let (poller, token) = cancellable_poll(IntervalStream::new(period_ms), move || async move {
        let result = ctx.backend().sensor_statuses().await;
        board.try_update(|b| b.apply_load(result));
    });
    spawn_local(poller);

    on_cleanup(move || token.cancel());

    view! {
        <section class="panel sensor-panel">
            <h2 class="panel-title">"Sensors"</h2>
            <Show
                when=move || !board.with(|b| b.is_loading())
                fallback=|| view! { <div class="panel-loading">"Loading sensors…"</div> }
            >
                <div class="sensor-grid">
                    {move || board
                        .with(|b| b.cards())
                        .into_iter()
                        .map(|card| view! { <SensorCardView card=card /> })
                        .collect_view()}
                </div>
            </Show>
        </section>
    }
}

#[component]
fn SensorCardView(card: SensorCard) -> impl IntoView {
    let class = format!("sensor-card {}", card.style_class());
    let icon = card.icon;

    view! {
        <div class=class>
            <div class="sensor-icon" title=icon.name()>{icon.glyph()}</div>
            <div class="sensor-body">
                <h3 class="sensor-name">{card.name}</h3>
                <p class="sensor-reading">{card.reading}</p>
                <p class="sensor-ping">"Last ping: " {card.last_ping}</p>
            </div>
            <span class="status-badge">{card.status.label()}</span>
        </div>
    }
}
