mod banner;
mod nav;
mod sections;

use yew::prelude::*;

use banner::WaitlistBanner;
use nav::NavBar;
use sections::{About, Amenities, Contact, Footer, Hero, Membership, Offerings};

#[function_component(HomePage)]
pub fn home_page() -> Html {
    html! {
      <div class="home">
        <WaitlistBanner />
        <NavBar />
        <Hero />
        <About />
        <Offerings />
        <Membership />
        <Amenities />
        <Contact />
        <Footer />
      </div>
    }
}
