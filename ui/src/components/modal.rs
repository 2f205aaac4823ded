use wasm_bindgen::JsCast;
use yew::prelude::*;

/// A dialog over a dimmed backdrop. Clicking the backdrop or the close button
/// calls `on_close`.
#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub title: AttrValue,
    pub children: Html,
    pub on_close: Callback<()>,
    /// Maximum width class (default: "max-w-md")
    #[prop_or_else(|| AttrValue::from("max-w-md"))]
    pub max_width: AttrValue,
}

#[function_component]
pub fn Modal(props: &ModalProps) -> Html {
    let backdrop_ref = use_node_ref();

    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        let backdrop_ref = backdrop_ref.clone();
        Callback::from(move |e: MouseEvent| {
            // Only close if clicking the backdrop itself, not its children
            if let Some(backdrop_element) =
                backdrop_ref.cast::<web_sys::Element>()
                && let Some(target) = e.target()
                && target.dyn_ref::<web_sys::Element>()
                    == Some(&backdrop_element)
            {
                on_close.emit(());
            }
        })
    };

    let on_close_click = props.on_close.reform(|_: MouseEvent| ());

    html! {
        <div
            ref={backdrop_ref}
            onclick={on_backdrop_click}
            class="fixed inset-0 bg-neutral-900 bg-opacity-50 z-40 flex
                   items-center justify-center p-4"
        >
            <div
                class={format!(
                    "bg-white rounded-lg shadow-xl w-full p-6 max-h-full \
                     overflow-y-auto {}",
                    props.max_width
                )}
            >
                <div class="flex justify-between items-center mb-4">
                    <h3 class="text-lg font-semibold text-neutral-900">
                        {&props.title}
                    </h3>
                    <button
                        onclick={on_close_click}
                        class="text-neutral-500 hover:text-neutral-700 text-2xl leading-none p-1"
                        title="Close"
                    >
                        {"×"}
                    </button>
                </div>
                {props.children.clone()}
            </div>
        </div>
    }
}
