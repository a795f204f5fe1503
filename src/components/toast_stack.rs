//! Toast Stack Component

use leptos::prelude::*;

use crate::context::use_dashboard;

/// Bottom-right stack of transient messages. Click to dismiss.
#[component]
pub fn ToastStack() -> impl IntoView {
    let toasts = use_dashboard().toasts;

    view! {
        <div class="toast-stack">
            <For
                each=move || toasts.entries()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let class = toast.class();
                    view! {
                        <div class=class on:click=move |_| toasts.dismiss(id)>
                            {toast.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
