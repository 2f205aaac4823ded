//! Transient notifications. Every outcome the user needs to know about
//! (validation failures, API errors, confirmations) goes through here.

use std::rc::Rc;

use payloads::ClientError;
use uuid::Uuid;
use yew::prelude::*;

/// How long a toast stays up.
pub const TOAST_DURATION_MS: u32 = 5000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Error,
    Success,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub message: String,
    pub kind: ToastKind,
}

impl Toast {
    pub fn new(message: String, kind: ToastKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            message,
            kind,
        }
    }
}

/// Toasts in the order they were raised.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
}

pub enum ToastAction {
    Add(Toast),
    Remove(Uuid),
}

impl Reducible for ToastState {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ToastAction::Add(toast) => next.toasts.push(toast),
            ToastAction::Remove(id) => {
                next.toasts.retain(|toast| toast.id != id);
            }
        }
        Rc::new(next)
    }
}

pub type ToastContext = UseReducerHandle<ToastState>;

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
}

#[function_component]
pub fn ToastProvider(props: &ToastProviderProps) -> Html {
    let toast_state = use_reducer(ToastState::default);

    html! {
        <ContextProvider<ToastContext> context={toast_state}>
            {props.children.clone()}
        </ContextProvider<ToastContext>>
    }
}

#[derive(Clone, PartialEq)]
pub struct ToastHandle {
    context: ToastContext,
}

impl ToastHandle {
    fn add(&self, message: String, kind: ToastKind) {
        let toast = Toast::new(message, kind);
        let id = toast.id;
        self.context.dispatch(ToastAction::Add(toast));

        let context = self.context.clone();
        yew::platform::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(TOAST_DURATION_MS).await;
            context.dispatch(ToastAction::Remove(id));
        });
    }

    pub fn error(&self, message: impl Into<String>) {
        self.add(message.into(), ToastKind::Error);
    }

    pub fn success(&self, message: impl Into<String>) {
        self.add(message.into(), ToastKind::Success);
    }

    /// Report a failed request: the server's detail verbatim when it sent
    /// one, the fallback otherwise.
    pub fn api_error(&self, error: &ClientError, fallback: &str) {
        tracing::error!(status = ?error.status(), "{error}");
        self.error(error.detail_or(fallback));
    }

    pub fn remove(&self, id: Uuid) {
        self.context.dispatch(ToastAction::Remove(id));
    }
}

#[hook]
pub fn use_toast() -> ToastHandle {
    let context = use_context::<ToastContext>()
        .expect("use_toast must be used within a ToastProvider");
    ToastHandle { context }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toasts_keep_insertion_order() {
        let a = Toast::new("a".into(), ToastKind::Error);
        let b = Toast::new("b".into(), ToastKind::Success);
        let c = Toast::new("c".into(), ToastKind::Error);
        let a_id = a.id;

        let state = Rc::new(ToastState::default())
            .reduce(ToastAction::Add(a))
            .reduce(ToastAction::Add(b))
            .reduce(ToastAction::Remove(a_id))
            .reduce(ToastAction::Add(c));

        let messages: Vec<_> =
            state.toasts.iter().map(|t| t.message.as_str()).collect();
        assert_eq!(messages, vec!["b", "c"]);
    }
}
