//! Navigation through the real router. Kept apart from `web.rs` so only one
//! `<Router>` is mounted per test binary.

#![cfg(target_arch = "wasm32")]

use gloo_timers::future::TimeoutFuture;
use leptos::*;
use pivori_ui::App;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;
use web_sys::{Element, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

fn window() -> web_sys::Window {
    web_sys::window().unwrap()
}

fn set_path(path: &str) {
    window()
        .history()
        .unwrap()
        .replace_state_with_url(&JsValue::NULL, "", Some(path))
        .unwrap();
}

fn find(root: &Element, selector: &str) -> Element {
    root.query_selector(selector).unwrap().unwrap()
}

fn text(el: &Element) -> String {
    el.text_content().unwrap_or_default().trim().to_string()
}

#[wasm_bindgen_test]
async fn clicking_nav_link_swaps_page_and_keeps_shell() {
    let original = window().location().pathname().unwrap();
    set_path("/");

    let document = window().document().unwrap();
    let root: HtmlElement = document.create_element("div").unwrap().unchecked_into();
    document.body().unwrap().append_child(&root).unwrap();
    mount_to(root.clone(), || view! { <App /> });

    let nav = find(&root, "nav");
    assert_eq!(text(&find(&root, "main h2")), "Dashboard");

    let nav_link = |label: &str| -> HtmlElement {
        let links = nav.query_selector_all("a").unwrap();
        (0..links.length())
            .filter_map(|i| links.item(i))
            .map(|node| node.unchecked_into::<HtmlElement>())
            .find(|link| text(link) == label)
            .unwrap()
    };

    nav_link("Services").click();
    TimeoutFuture::new(50).await;

    assert_eq!(window().location().pathname().unwrap(), "/services");
    assert_eq!(text(&find(&root, "main h2")), "Services");
    assert!(nav.is_same_node(Some(&find(&root, "nav"))));
    assert_eq!(root.query_selector_all("nav").unwrap().length(), 1);

    let active = find(&nav, "li.font-semibold");
    assert_eq!(text(&active), "Services");

    nav_link("Settings").click();
    TimeoutFuture::new(50).await;

    assert_eq!(window().location().pathname().unwrap(), "/settings");
    assert_eq!(text(&find(&root, "main h2")), "Settings");
    assert!(nav.is_same_node(Some(&find(&root, "nav"))));

    set_path(&original);
}
