use std::cell::RefCell;
use std::rc::Rc;

use yew::prelude::*;

use crate::error::ValidationError;

use super::intake::SubmitOutcome;
use super::model::{ClassTag, Field, MembershipPlan, WaitlistDraft, WaitlistSubmission};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Editing,
    Submitting,
    /// Terminal: the confirmation view replaces the form.
    Submitted,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct WaitlistState {
    pub draft: WaitlistDraft,
    pub phase: Phase,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum WaitlistAction {
    Edit(Field, String),
    SelectPlan(MembershipPlan),
    ToggleInterest(ClassTag, bool),
    Invalid(ValidationError),
    Begin,
    Finished(SubmitOutcome),
}

impl WaitlistState {
    pub fn new(plan: MembershipPlan) -> Self {
        Self {
            draft: WaitlistDraft::with_plan(plan),
            ..Self::default()
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == Phase::Submitting
    }

    /// What a click on the submit control should send, if anything.
    ///
    /// `None` while a request is in flight or after success; otherwise the
    /// validated draft or the first constraint it breaks.
    pub fn next_submission(&self) -> Option<Result<WaitlistSubmission, ValidationError>> {
        match self.phase {
            Phase::Editing => Some(self.draft.validate()),
            Phase::Submitting | Phase::Submitted => None,
        }
    }

    /// Like [`Self::next_submission`], but also gated on `in_flight`, a flag
    /// that outlives the render this state was read in. A valid draft raises
    /// the flag; the caller lowers it once the request settles.
    pub fn claim_submission(
        &self,
        in_flight: &RefCell<bool>,
    ) -> Option<Result<WaitlistSubmission, ValidationError>> {
        if *in_flight.borrow() {
            return None;
        }
        let next = self.next_submission()?;
        if next.is_ok() {
            *in_flight.borrow_mut() = true;
        }
        Some(next)
    }
}

impl Reducible for WaitlistState {
    type Action = WaitlistAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        if self.phase == Phase::Submitted {
            return self;
        }

        let mut next = (*self).clone();
        match action {
            WaitlistAction::Edit(field, value) => next.draft.set(field, value),
            WaitlistAction::SelectPlan(plan) => next.draft.membership = plan,
            WaitlistAction::ToggleInterest(tag, on) => next.draft.toggle_interest(tag, on),
            WaitlistAction::Invalid(err) => {
                if next.phase != Phase::Editing {
                    return self;
                }
                next.error = Some(err.to_string());
            }
            WaitlistAction::Begin => {
                if next.phase != Phase::Editing {
                    return self;
                }
                next.phase = Phase::Submitting;
                next.error = None;
            }
            WaitlistAction::Finished(outcome) => {
                if next.phase != Phase::Submitting {
                    return self;
                }
                match outcome.error_message() {
                    None => {
                        next.phase = Phase::Submitted;
                        next.draft = WaitlistDraft::default();
                    }
                    Some(msg) => {
                        next.phase = Phase::Editing;
                        next.error = Some(msg.to_string());
                    }
                }
            }
        }
        Rc::new(next)
    }
}
