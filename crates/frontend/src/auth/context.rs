//! Global session context and provider
//!
//! The reducer is pure; every network call and navigation side effect
//! lives in the actions layer, which keeps the state machine testable
//! on native targets.

use std::rc::Rc;

use wicket_client::types::User;
use yew::prelude::*;

/// Session state machine
#[derive(Clone, Debug, PartialEq)]
pub enum SessionState {
    /// The silent current-user probe is still in flight
    Loading,
    Unauthenticated,
    Authenticated(User),
}

/// Session context data
#[derive(Clone, Debug, PartialEq)]
pub struct SessionData {
    pub state: SessionState,
}

/// Session context actions
pub enum SessionAction {
    /// Login, registration, the mount probe, or a profile update
    /// produced this user; the server's representation wins
    Resolved(User),
    /// Logout, or the probe failed after the refresh chain was spent
    Cleared,
}

/// Session context
pub type SessionContext = UseReducerHandle<SessionData>;

impl Default for SessionData {
    fn default() -> Self {
        Self {
            state: SessionState::Loading,
        }
    }
}

impl SessionData {
    pub fn is_loading(&self) -> bool {
        matches!(self.state, SessionState::Loading)
    }

    pub fn user(&self) -> Option<&User> {
        match &self.state {
            SessionState::Authenticated(user) => Some(user),
            _ => None,
        }
    }
}

impl Reducible for SessionData {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            SessionAction::Resolved(user) => Rc::new(Self {
                state: SessionState::Authenticated(user),
            }),
            SessionAction::Cleared => Rc::new(Self {
                state: SessionState::Unauthenticated,
            }),
        }
    }
}

/// Session provider props
#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    pub children: Children,
}

/// Session provider component
#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let session = use_reducer(SessionData::default);

    // Silent session check on mount: any failure, including a spent
    // refresh chain, just resolves to unauthenticated.
    {
        let session = session.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                let user = match crate::client::api_client() {
                    Ok(client) => client.current_user().await.ok(),
                    Err(_) => None,
                };
                match user {
                    Some(user) => session.dispatch(SessionAction::Resolved(user)),
                    None => session.dispatch(SessionAction::Cleared),
                }
            });
            || ()
        });
    }

    html! {
        <ContextProvider<SessionContext> context={session}>
            { props.children.clone() }
        </ContextProvider<SessionContext>>
    }
}

/// Hook to use the session context
#[hook]
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>()
        .expect("SessionContext not found. Make sure to wrap your component with SessionProvider")
}

/// Hook to get the current user, if authenticated
#[hook]
pub fn use_session_user() -> Option<User> {
    let session = use_session();
    session.user().cloned()
}

/// Hook to check if authenticated
#[hook]
pub fn use_is_authenticated() -> bool {
    let session = use_session();
    session.user().is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(username: &str) -> User {
        User {
            id: "1".to_string(),
            email: format!("{username}@x.com"),
            username: username.to_string(),
            first_name: None,
            middle_name: None,
            last_name: None,
        }
    }

    #[test]
    fn starts_loading() {
        let data = SessionData::default();
        assert!(data.is_loading());
        assert_eq!(data.user(), None);
    }

    #[test]
    fn resolved_authenticates() {
        let next = Rc::new(SessionData::default()).reduce(SessionAction::Resolved(user("alice")));
        assert_eq!(next.user().map(|u| u.username.as_str()), Some("alice"));
        assert!(!next.is_loading());
    }

    #[test]
    fn cleared_unauthenticates() {
        let authenticated =
            Rc::new(SessionData::default()).reduce(SessionAction::Resolved(user("alice")));
        let next = authenticated.reduce(SessionAction::Cleared);
        assert_eq!(next.state, SessionState::Unauthenticated);
    }

    #[test]
    fn resolved_replaces_held_user() {
        let first = Rc::new(SessionData::default()).reduce(SessionAction::Resolved(user("alice")));
        let second = first.reduce(SessionAction::Resolved(user("bob")));
        assert_eq!(second.user().map(|u| u.username.as_str()), Some("bob"));
    }
}
