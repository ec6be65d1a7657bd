use yew::prelude::*;
use yew_router::prelude::*;

use crate::home::HomePage;
use crate::session::SessionProvider;
use crate::waitlist::WaitlistPage;

#[derive(Debug, Clone, PartialEq, Routable)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/waitlist")]
    Waitlist,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <HomePage /> },
        Route::Waitlist => html! { <WaitlistPage /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[function_component(NotFound)]
fn not_found() -> Html {
    html! {
      <main class="confirmation">
        <h1>{ "Page not found" }</h1>
        <p>{ "That page doesn't exist. The studio is this way." }</p>
        <Link<Route> to={Route::Home} classes="primary">{ "← Back to Home" }</Link<Route>>
      </main>
    }
}

// Session state sits above the router so the banner stays dismissed
// across page switches.
#[function_component(App)]
pub fn app() -> Html {
    html! {
      <SessionProvider>
        <BrowserRouter>
          <Switch<Route> render={switch} />
        </BrowserRouter>
      </SessionProvider>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_map_to_paths() {
        assert_eq!(Route::Home.to_path(), "/");
        assert_eq!(Route::Waitlist.to_path(), "/waitlist");
        assert_eq!(Route::recognize("/waitlist"), Some(Route::Waitlist));
    }
}
