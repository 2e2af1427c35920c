// web_app/notifications.rs - Application-wide toast notifications
//
// Success/error/info toasts raised by components (save results, near-me
// fetch failures) and rendered once at the app root. The store is provided
// via context so any component can raise a toast without prop drilling.

use leptos::prelude::*;

use crate::web_app::model::{Notification, Severity};

/// Shared toast store. `Copy` because it only wraps a signal.
#[derive(Clone, Copy)]
pub struct Notifications {
    toasts: RwSignal<Vec<Notification>>,
}

impl Notifications {
    pub fn new() -> Self {
        Notifications {
            toasts: RwSignal::new(Vec::new()),
        }
    }

    pub fn push(&self, notification: Notification) {
        self.toasts.update(|toasts| toasts.push(notification));
    }

    pub fn success(&self, title: impl Into<String>, message: impl Into<String>) {
        self.push(Notification::new(title, message, Severity::Success));
    }

    pub fn error(&self, title: impl Into<String>, message: impl Into<String>) {
        self.push(Notification::new(title, message, Severity::Error));
    }

    pub fn info(&self, title: impl Into<String>, message: impl Into<String>) {
        self.push(Notification::new(title, message, Severity::Info));
    }

    pub fn dismiss(&self, id: uuid::Uuid) {
        self.toasts.update(|toasts| toasts.retain(|n| n.id != id));
    }

    pub fn toasts(&self) -> RwSignal<Vec<Notification>> {
        self.toasts
    }
}

impl Default for Notifications {
    fn default() -> Self {
        Self::new()
    }
}

/// Register the store in context; call once at the app root.
pub fn provide_notifications() -> Notifications {
    let notifications = Notifications::new();
    provide_context(notifications);
    notifications
}

/// Fetch the store from context; panics if the app root never provided it.
pub fn use_notifications() -> Notifications {
    expect_context::<Notifications>()
}

/// Container class per toast severity
pub fn severity_class(severity: Severity) -> &'static str {
    match severity {
        Severity::Success => {
            "bg-green-50 border border-green-200 text-green-800 rounded-xl p-4 shadow-lg flex items-start gap-3"
        }
        Severity::Error => {
            "bg-red-50 border border-red-200 text-red-800 rounded-xl p-4 shadow-lg flex items-start gap-3"
        }
        Severity::Info => {
            "bg-blue-50 border border-blue-200 text-blue-800 rounded-xl p-4 shadow-lg flex items-start gap-3"
        }
    }
}

fn severity_symbol(severity: Severity) -> &'static str {
    match severity {
        Severity::Success => "✔",
        Severity::Error => "⚠",
        Severity::Info => "ℹ",
    }
}

/// Toast stack, rendered once near the app root.
#[component]
pub fn Toaster() -> impl IntoView {
    let notifications = use_notifications();
    let toasts = notifications.toasts();

    view! {
        <div class="fixed top-4 right-4 z-50 flex flex-col gap-2 w-96 max-w-full">
            <For
                each=move || toasts.get()
                key=|n| n.id
                children=move |notification| {
                    let id = notification.id;
                    view! {
                        <div class=severity_class(notification.severity)>
                            <span class="text-lg font-bold">
                                {severity_symbol(notification.severity)}
                            </span>
                            <div class="flex-1 min-w-0">
                                <p class="font-bold">{notification.title.clone()}</p>
                                <p class="text-sm break-words">{notification.message.clone()}</p>
                            </div>
                            <button
                                class="opacity-60 hover:opacity-100 font-bold"
                                on:click=move |_| notifications.dismiss(id)
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_classes_distinct() {
        let classes = [
            severity_class(Severity::Success),
            severity_class(Severity::Error),
            severity_class(Severity::Info),
        ];
        assert!(classes[0].contains("bg-green-50"));
        assert!(classes[1].contains("bg-red-50"));
        assert!(classes[2].contains("bg-blue-50"));
    }

    #[test]
    fn test_severity_symbols() {
        assert_eq!(severity_symbol(Severity::Success), "✔");
        assert_eq!(severity_symbol(Severity::Error), "⚠");
        assert_eq!(severity_symbol(Severity::Info), "ℹ");
    }
}
