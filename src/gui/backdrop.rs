use std::rc::Rc;

use dioxus::prelude::*;

use super::pointer::{translate_css, Parallax, PointerBus, PointerPosition};

/// Blurred blobs that drift with the pointer.
///
/// The listener lives in a hook slot; Dioxus drops hook values when the
/// component unmounts, which releases the subscription.
#[component]
pub fn Backdrop() -> Element {
    let mut position = use_signal(PointerPosition::default);
    let bus = try_use_context::<PointerBus>();

    use_hook(move || bus.map(|bus| Rc::new(bus.subscribe(move |pos| position.set(pos)))));

    let parallax = Parallax::from_position(position());
    let near = translate_css(parallax.near);
    let far = translate_css(parallax.far);

    rsx! {
        div { class: "backdrop",
            div { class: "blob blob-near floating-bg-1", style: "transform: {near};" }
            div { class: "blob blob-far floating-bg-2", style: "transform: {far};" }
        }
    }
}
