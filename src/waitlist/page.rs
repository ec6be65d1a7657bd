// src/waitlist/page.rs
use gloo::console::{error, log, warn};
use serde::{Deserialize, Serialize};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::content::{COPYRIGHT, STUDIO_NAME};

use super::intake::{submit, GlooTransport, SubmitOutcome};
use super::model::{ClassTag, Field, MembershipPlan, MAX_AGE, MIN_AGE};
use super::state::{Phase, WaitlistAction, WaitlistState};

/// `/waitlist?plan=elite` preselects a tier.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PlanQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan: Option<String>,
}

impl PlanQuery {
    pub fn for_plan(plan: MembershipPlan) -> Self {
        Self {
            plan: Some(plan.id().to_string()),
        }
    }

    /// Unknown or missing ids fall back to the default tier.
    pub fn plan(&self) -> MembershipPlan {
        self.plan
            .as_deref()
            .and_then(|p| p.parse().ok())
            .unwrap_or_default()
    }
}

fn submit_label(submitting: bool) -> &'static str {
    if submitting {
        "Submitting..."
    } else {
        "Join the Waitlist"
    }
}

#[function_component(WaitlistPage)]
pub fn waitlist_page() -> Html {
    let location = use_location();
    let initial_plan = location
        .and_then(|l| l.query::<PlanQuery>().ok())
        .unwrap_or_default()
        .plan();

    let state = use_reducer(move || WaitlistState::new(initial_plan));
    // The reducer handle is a render-time snapshot; this flag sees a second
    // click that lands before the disabled button re-renders.
    let in_flight = use_mut_ref(|| false);

    if state.phase == Phase::Submitted {
        return html! { <Confirmation /> };
    }

    let on_text = |field: Field| {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            state.dispatch(WaitlistAction::Edit(field, input.value()));
        })
    };

    let on_plan = {
        let state = state.clone();
        Callback::from(move |e: Event| {
            let Some(sel) = e.target_dyn_into::<HtmlSelectElement>() else { return; };
            match sel.value().parse::<MembershipPlan>() {
                Ok(plan) => state.dispatch(WaitlistAction::SelectPlan(plan)),
                Err(e) => warn!("waitlist:", e.to_string()),
            }
        })
    };

    let on_interest = |tag: ClassTag| {
        let state = state.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            state.dispatch(WaitlistAction::ToggleInterest(tag, input.checked()));
        })
    };

    let on_submit = {
        let state = state.clone();
        let in_flight = in_flight.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let submission = match state.claim_submission(&in_flight) {
                None => return,
                Some(Err(err)) => {
                    state.dispatch(WaitlistAction::Invalid(err));
                    return;
                }
                Some(Ok(s)) => s,
            };

            state.dispatch(WaitlistAction::Begin);
            log!("waitlist: submitting, plan =", submission.membership.to_string());

            let state = state.clone();
            let in_flight = in_flight.clone();
            spawn_local(async move {
                let outcome = submit(&GlooTransport, &submission).await;
                match &outcome {
                    SubmitOutcome::Accepted => log!("waitlist: accepted"),
                    SubmitOutcome::Rejected(msg) => warn!("waitlist: rejected:", msg.clone()),
                    SubmitOutcome::Unreachable => error!("waitlist: intake endpoint unreachable"),
                }
                *in_flight.borrow_mut() = false;
                state.dispatch(WaitlistAction::Finished(outcome));
            });
        })
    };

    let draft = &state.draft;
    let submitting = state.is_submitting();

    let error_block = if let Some(e) = state.error.clone() {
        html! { <div class="form-error" role="alert">{ e }</div> }
    } else {
        html! {}
    };

    html! {
      <div class="waitlist-page">
        <header class="topbar">
          <Link<Route> to={Route::Home} classes="brand">{ STUDIO_NAME }</Link<Route>>
          <Link<Route> to={Route::Home} classes="ghost">{ "← Back" }</Link<Route>>
        </header>

        <div class="waitlist-hero">
          <h1>{ "Join the Waitlist" }</h1>
          <p>{ "Be among the first to experience The Station and receive exclusive early member benefits" }</p>
        </div>

        <div class="card form-card">
          <form onsubmit={on_submit}>
            <label for="name">{ "Full Name " }<span class="req">{ "*" }</span></label>
            <input type="text" id="name" name="name" required={true}
              placeholder="Enter your full name"
              value={draft.name.clone()} oninput={on_text(Field::Name)} />

            <label for="email">{ "Email Address " }<span class="req">{ "*" }</span></label>
            <input type="email" id="email" name="email" required={true}
              placeholder="your@email.com"
              value={draft.email.clone()} oninput={on_text(Field::Email)} />

            <label for="phone">{ "Phone Number " }<span class="req">{ "*" }</span></label>
            <input type="tel" id="phone" name="phone" required={true}
              placeholder="(555) 123-4567"
              value={draft.phone.clone()} oninput={on_text(Field::Phone)} />

            <label for="age">{ "Age " }<span class="req">{ "*" }</span></label>
            <input type="number" id="age" name="age" required={true}
              min={MIN_AGE.to_string()} max={MAX_AGE.to_string()}
              placeholder="Enter your age"
              value={draft.age.clone()} oninput={on_text(Field::Age)} />

            <label for="membership">{ "Membership Interest " }<span class="req">{ "*" }</span></label>
            <select id="membership" name="membership" required={true} onchange={on_plan}>
              { for MembershipPlan::ALL.iter().map(|p| html! {
                  <option value={p.id()} selected={*p == draft.membership}>{ p.option_label() }</option>
              }) }
            </select>

            <fieldset class="interests">
              <legend>{ "Classes you're interested in" }</legend>
              { for ClassTag::ALL.iter().map(|t| html! {
                  <label class="check">
                    <input type="checkbox" name="interests" value={t.id()}
                      checked={draft.interests.contains(t)}
                      onchange={on_interest(*t)} />
                    { t.label() }
                  </label>
              }) }
            </fieldset>

            <div class="note">
              <strong>{ "Early Member Benefits: " }</strong>
              { "As a waitlist member, you'll receive discounted membership rates, exclusive launch events, and special perks when we open our doors." }
            </div>

            { error_block }

            <button type="submit" class="primary wide" disabled={submitting}>
              { submit_label(submitting) }
            </button>
          </form>
        </div>

        <footer class="footer small">{ COPYRIGHT }</footer>
      </div>
    }
}

#[function_component(Confirmation)]
fn confirmation() -> Html {
    html! {
      <div class="confirmation">
        <div class="check-mark">{ "✓" }</div>
        <h1>{ "Welcome to " }<span class="accent">{ STUDIO_NAME }</span>{ " Waitlist!" }</h1>
        <p>
          { "Thank you for your interest! We'll be in touch soon with exclusive early member benefits and updates about our launch." }
        </p>
        <Link<Route> to={Route::Home} classes="primary">{ "← Back to Home" }</Link<Route>>
      </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plan_query_falls_back_to_unlimited() {
        assert_eq!(PlanQuery::default().plan(), MembershipPlan::Unlimited);
        let bogus = PlanQuery {
            plan: Some("platinum".into()),
        };
        assert_eq!(bogus.plan(), MembershipPlan::Unlimited);
    }

    #[test]
    fn plan_query_preselects() {
        assert_eq!(PlanQuery::for_plan(MembershipPlan::Starter).plan(), MembershipPlan::Starter);
    }

    #[test]
    fn button_label_tracks_flight() {
        assert_eq!(submit_label(false), "Join the Waitlist");
        assert_eq!(submit_label(true), "Submitting...");
    }
}
