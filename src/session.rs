use std::rc::Rc;

use yew::prelude::*;

/// UI flags that outlive a single page but not a reload.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Session {
    pub banner_dismissed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionAction {
    DismissBanner,
}

impl Reducible for Session {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            SessionAction::DismissBanner if self.banner_dismissed => self,
            SessionAction::DismissBanner => Rc::new(Session {
                banner_dismissed: true,
            }),
        }
    }
}

pub type SessionContext = UseReducerHandle<Session>;

#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    #[prop_or_default]
    pub children: Html,
}

#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let session = use_reducer(Session::default);
    html! {
        <ContextProvider<SessionContext> context={session}>
            { props.children.clone() }
        </ContextProvider<SessionContext>>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_starts_visible() {
        assert!(!Session::default().banner_dismissed);
    }

    #[test]
    fn dismiss_sticks_and_is_idempotent() {
        let s = Rc::new(Session::default()).reduce(SessionAction::DismissBanner);
        assert!(s.banner_dismissed);
        let again = s.clone().reduce(SessionAction::DismissBanner);
        assert!(Rc::ptr_eq(&s, &again));
    }
}
