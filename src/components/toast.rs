use std::time::Duration;

use gloo_timers::callback::Timeout;
use leptos::*;

use crate::notify::Notification;
use crate::utils::leptos_owner::with_owner_safe;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub notification: Notification,
}

/// Transient notification queue shared through context.
#[derive(Clone, Copy)]
pub struct Toasts {
    items: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
    duration: Duration,
}

impl Toasts {
    pub fn new(duration: Duration) -> Self {
        Self {
            items: create_rw_signal(Vec::new()),
            next_id: store_value(0),
            duration,
        }
    }

    pub fn items(&self) -> Signal<Vec<Toast>> {
        self.items.into()
    }

    /// Shows `notification` and dismisses it after the configured duration.
    pub fn push(&self, notification: Notification) {
        let id = self.show(notification);

        let owner = Owner::current();
        let toasts = *self;
        let millis = u32::try_from(self.duration.as_millis()).unwrap_or(u32::MAX);
        Timeout::new(millis, move || toasts.expire(owner, id)).forget();
    }

    /// Adds a toast without scheduling its dismissal.
    fn show(&self, notification: Notification) -> u64 {
        self.next_id.update_value(|id| *id += 1);
        let id = self.next_id.get_value();
        logging::log!("[TOAST] {:?}: {}", notification.kind, notification.message);
        self.items.update(|items| items.push(Toast { id, notification }));
        id
    }

    /// Timer callback. Dismissing only touches a signal, so a missing owner
    /// still dismisses directly.
    fn expire(&self, owner: Option<Owner>, id: u64) {
        let toasts = *self;
        if with_owner_safe(owner, "toast auto-dismiss", || toasts.dismiss(id)).is_none() {
            self.dismiss(id);
        }
    }

    pub fn dismiss(&self, id: u64) {
        self.items.try_update(|items| items.retain(|t| t.id != id));
    }
}

/// Toast stack pinned to the top center of the page.
#[component]
pub fn ToastStack() -> impl IntoView {
    let toasts = expect_context::<Toasts>();

    view! {
        <div class="toast-stack">
            <For
                each=move || toasts.items().get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div
                            class=toast.notification.kind.css_class()
                            role="status"
                            on:click=move |_| toasts.dismiss(id)
                        >
                            {toast.notification.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
