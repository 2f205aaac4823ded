use yew::prelude::*;

use crate::contexts::toast::{Toast, ToastContext, ToastKind, use_toast};

#[function_component]
pub fn ToastContainer() -> Html {
    let Some(context) = use_context::<ToastContext>() else {
        return html! {};
    };

    if context.toasts.is_empty() {
        return html! {};
    }

    html! {
        <div class="fixed top-4 right-4 z-50 space-y-3 max-w-sm w-full">
            {for context.toasts.iter().map(|toast| html! {
                <ToastItem key={toast.id.to_string()} toast={toast.clone()} />
            })}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastItemProps {
    pub toast: Toast,
}

#[function_component]
fn ToastItem(props: &ToastItemProps) -> Html {
    let toast_handle = use_toast();
    let toast = &props.toast;

    let (colors, icon) = match toast.kind {
        ToastKind::Error => ("bg-red-50 border-red-200 text-red-700", "✕"),
        ToastKind::Success => {
            ("bg-green-50 border-green-200 text-green-700", "✓")
        }
    };

    let on_close = {
        let id = toast.id;
        Callback::from(move |_: MouseEvent| toast_handle.remove(id))
    };

    html! {
        <div class={format!("relative p-4 rounded-lg border shadow-lg {colors}")}>
            <div class="flex items-start space-x-3">
                <span class="flex-shrink-0 text-sm font-medium">{icon}</span>
                <p class="flex-1 min-w-0 text-sm font-medium leading-5">
                    {&toast.message}
                </p>
                <button
                    onclick={on_close}
                    class="flex-shrink-0 text-neutral-400 hover:text-neutral-600"
                    title="Dismiss"
                >
                    <span class="text-lg leading-none">{"×"}</span>
                </button>
            </div>
        </div>
    }
}
