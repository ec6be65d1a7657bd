use gloo::console::log;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::content::BANNER_TEXT;
use crate::session::{SessionAction, SessionContext};

#[function_component(WaitlistBanner)]
pub fn waitlist_banner() -> Html {
    let Some(session) = use_context::<SessionContext>() else {
        return html! {};
    };

    if session.banner_dismissed {
        return html! {};
    }

    let on_dismiss = {
        let session = session.clone();
        Callback::from(move |_: MouseEvent| {
            log!("banner dismissed");
            session.dispatch(SessionAction::DismissBanner);
        })
    };

    html! {
      <div class="banner">
        <p>{ BANNER_TEXT }</p>
        <div class="banner-actions">
          <Link<Route> to={Route::Waitlist} classes="pill-button">{ "Join Waitlist" }</Link<Route>>
          <button class="dismiss" aria-label="Close banner" onclick={on_dismiss}>{ "✕" }</button>
        </div>
      </div>
    }
}
