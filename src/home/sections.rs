// src/home/sections.rs
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::content::*;
use crate::waitlist::PlanQuery;

use super::nav::scroll_to_section;

#[function_component(Hero)]
pub fn hero() -> Html {
    let explore = Callback::from(|_: MouseEvent| {
        scroll_to_section("classes");
    });

    html! {
      <section id="home" class="hero" style={format!("background-image: url({HERO_IMAGE});")}>
        <div class="hero-content">
          <h1>{ HERO_TITLE }<br /><span class="accent">{ HERO_ACCENT }</span></h1>
          <p>{ HERO_BLURB }</p>
          <div class="btnRow">
            <Link<Route> to={Route::Waitlist} classes="primary">{ "Join the Waitlist" }</Link<Route>>
            <button class="ghost" onclick={explore}>{ "Explore Classes" }</button>
          </div>
        </div>
      </section>
    }
}

#[function_component(About)]
pub fn about() -> Html {
    html! {
      <section id="about" class="about">
        <div class="split">
          <div>
            <h2>{ "Welcome to " }<span class="accent">{ STUDIO_NAME }</span></h2>
            { for ABOUT.iter().map(|p| html! { <p>{ *p }</p> }) }
          </div>
          <img src={ABOUT_IMAGE} alt="Dancer in motion" loading="lazy" />
        </div>
      </section>
    }
}

#[function_component(Offerings)]
pub fn offerings() -> Html {
    html! {
      <section id="classes" class="classes">
        <h2>{ "Our " }<span class="accent">{ "Classes" }</span></h2>
        <p class="sub">{ "Discover a variety of movement-centered classes designed for all levels" }</p>
        <div class="grid">
          { for OFFERINGS.iter().map(|o| html! {
              <div class="card">
                if let Some(src) = o.image {
                  <img src={src} alt={o.tag.label()} loading="lazy" />
                }
                <h3>{ o.tag.label() }</h3>
                <p>{ o.blurb }</p>
              </div>
          }) }
        </div>
      </section>
    }
}

#[function_component(Membership)]
pub fn membership() -> Html {
    html! {
      <section id="membership" class="membership">
        <h2>{ "Membership Options" }</h2>
        <p class="sub">{ "Choose the plan that fits your lifestyle and movement goals" }</p>
        <div class="grid">
          { for TIERS.iter().map(|t| html! {
              <div class={classes!("card", "tier", t.popular.then_some("popular"))}>
                if t.popular {
                  <div class="ribbon">{ "Popular" }</div>
                }
                <h3>{ t.plan.name() }</h3>
                <div class="price">
                  <span class="amount">{ format!("${}", t.plan.monthly_price()) }</span>
                  <span class="per">{ "/month" }</span>
                </div>
                <ul>
                  { for t.perks.iter().map(|perk| html! { <li>{ *perk }</li> }) }
                </ul>
                <Link<Route, PlanQuery>
                  to={Route::Waitlist}
                  query={Some(PlanQuery::for_plan(t.plan))}
                  classes="primary wide"
                >
                  { "Get Started" }
                </Link<Route, PlanQuery>>
              </div>
          }) }
        </div>
      </section>
    }
}

#[function_component(Amenities)]
pub fn amenities() -> Html {
    html! {
      <section id="amenities" class="amenities">
        <h2>{ "More Than Just a " }<span class="accent">{ "Studio" }</span></h2>
        <p class="sub">
          { "The Station is designed to be a welcoming community space where you can relax, connect, and refuel" }
        </p>
        <div class="grid">
          { for AMENITIES.iter().map(|a| html! {
              <div class="amenity">
                <img src={a.image} alt={a.title} loading="lazy" />
                <h3>{ a.title }</h3>
                <p>{ a.blurb }</p>
              </div>
          }) }
        </div>
      </section>
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    // The "Get in Touch" card is a mockup; it is not wired to any handler.
    let swallow = Callback::from(|e: SubmitEvent| e.prevent_default());

    html! {
      <section id="contact" class="contact">
        <h2>{ "Visit " }<span class="accent">{ STUDIO_NAME }</span></h2>
        <p class="sub">{ "Come see our space and join our community" }</p>
        <div class="split">
          <div class="details">
            <h3>{ "Location" }</h3>
            <p>
              { for ADDRESS.iter().map(|line| html! { <>{ *line }<br /></> }) }
            </p>
            <h3>{ "Phone" }</h3>
            <p>{ PHONE }</p>
            <h3>{ "Email" }</h3>
            <p>{ EMAIL }</p>
            <h3>{ "Studio Hours" }</h3>
            { for HOURS.iter().map(|h| html! { <p class="small">{ *h }</p> }) }
            <h3>{ "Follow Us" }</h3>
            <div class="socials">
              { for SOCIALS.iter().map(|&(label, href)| html! {
                  <a href={href} aria-label={label}>{ label }</a>
              }) }
            </div>
          </div>

          <div class="card">
            <h3>{ "Get in Touch" }</h3>
            <form onsubmit={swallow}>
              <label>{ "Name" }</label>
              <input type="text" placeholder="Your name" />
              <label>{ "Email" }</label>
              <input type="email" placeholder="your@email.com" />
              <label>{ "Message" }</label>
              <textarea rows="4" placeholder="Tell us about your movement goals..." />
              <button type="submit" class="primary wide">{ "Send Message" }</button>
            </form>
          </div>
        </div>
      </section>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
      <footer class="footer">
        <div class="brand">{ STUDIO_NAME }</div>
        <p>{ FOOTER_TAGLINE }</p>
        <p class="small">{ COPYRIGHT }</p>
      </footer>
    }
}
