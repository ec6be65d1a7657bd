use web_sys::{ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

use crate::content::{SECTIONS, STUDIO_NAME};

/// Smoothly scrolls the element with `id` into view. Returns false when the
/// page has no such section.
pub fn scroll_to_section(id: &str) -> bool {
    let target = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id));
    match target {
        Some(el) => {
            let opts = ScrollIntoViewOptions::new();
            opts.set_behavior(ScrollBehavior::Smooth);
            el.scroll_into_view_with_scroll_into_view_options(&opts);
            true
        }
        None => false,
    }
}

#[function_component(NavBar)]
pub fn nav_bar() -> Html {
    let menu_open = use_state(|| false);

    let on_toggle = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    let go_to = |id: &'static str| {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            if scroll_to_section(id) {
                menu_open.set(false);
            }
        })
    };

    html! {
      <nav class="topbar">
        <div class="brand">{ STUDIO_NAME }</div>

        <div class="nav-links desktop">
          { for SECTIONS.iter().map(|&(id, label)| html! {
              <button class="link" onclick={go_to(id)}>{ label }</button>
          }) }
        </div>

        <button
          class="menu-toggle"
          aria-label={ if *menu_open { "Close menu" } else { "Open menu" } }
          aria-expanded={ (*menu_open).to_string() }
          onclick={on_toggle}
        >
          { if *menu_open { "✕" } else { "☰" } }
        </button>

        if *menu_open {
          <div class="nav-links mobile">
            { for SECTIONS.iter().map(|&(id, label)| html! {
                <button class="link" onclick={go_to(id)}>{ label }</button>
            }) }
          </div>
        }
      </nav>
    }
}
