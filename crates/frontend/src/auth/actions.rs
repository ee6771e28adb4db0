//! Session actions hook
//!
//! Async wrappers around the client's auth operations. Each action
//! dispatches into the session reducer and performs its navigation side
//! effect; state transitions themselves stay in the reducer.

use wicket_client::types::{Credentials, ProfileUpdate, Registration};
use yew::prelude::*;
use yew_router::prelude::*;

use super::context::{SessionAction, SessionContext, use_session};
use crate::app::Route;
use crate::client;

/// Per-operation UI state
#[derive(Clone, Debug, PartialEq)]
pub enum ActionState {
    Idle,
    Busy,
    Error(String),
}

/// Handle exposing the session-mutating operations
#[derive(Clone)]
pub struct UseSessionActionsHandle {
    session: SessionContext,
    navigator: Navigator,
    state: UseStateHandle<ActionState>,
}

impl UseSessionActionsHandle {
    pub fn state(&self) -> ActionState {
        (*self.state).clone()
    }

    pub fn is_busy(&self) -> bool {
        matches!(*self.state, ActionState::Busy)
    }

    /// Log in and land on the dashboard
    pub fn login(&self, username: String, password: String) {
        let session = self.session.clone();
        let navigator = self.navigator.clone();
        let state = self.state.clone();

        wasm_bindgen_futures::spawn_local(async move {
            state.set(ActionState::Busy);
            let result = async {
                let client = client::api_client()?;
                client.login(&Credentials { username, password }).await
            }
            .await;

            match result {
                Ok(response) => {
                    session.dispatch(SessionAction::Resolved(response.user));
                    state.set(ActionState::Idle);
                    navigator.push(&Route::Dashboard);
                }
                Err(err) => state.set(ActionState::Error(err.to_string())),
            }
        });
    }

    /// Register a new account and land on the dashboard
    pub fn register(&self, registration: Registration) {
        let session = self.session.clone();
        let navigator = self.navigator.clone();
        let state = self.state.clone();

        wasm_bindgen_futures::spawn_local(async move {
            state.set(ActionState::Busy);
            let result = async {
                let client = client::api_client()?;
                client.register(&registration).await
            }
            .await;

            match result {
                Ok(response) => {
                    session.dispatch(SessionAction::Resolved(response.user));
                    state.set(ActionState::Idle);
                    navigator.push(&Route::Dashboard);
                }
                Err(err) => state.set(ActionState::Error(err.to_string())),
            }
        });
    }

    /// End the session. The local session always ends and navigation
    /// always happens, whatever the remote call returned.
    pub fn logout(&self) {
        let session = self.session.clone();
        let navigator = self.navigator.clone();
        let state = self.state.clone();

        wasm_bindgen_futures::spawn_local(async move {
            state.set(ActionState::Busy);
            if let Ok(client) = client::api_client() {
                if let Err(err) = client.logout().await {
                    gloo::console::warn!(format!("remote logout failed: {err}"));
                }
            }
            session.dispatch(SessionAction::Cleared);
            state.set(ActionState::Idle);
            navigator.push(&Route::Login);
        });
    }

    /// Submit a profile update; on success the held user is replaced
    /// with the server's returned representation
    pub fn update_profile(&self, update: ProfileUpdate) {
        let session = self.session.clone();
        let state = self.state.clone();

        wasm_bindgen_futures::spawn_local(async move {
            state.set(ActionState::Busy);
            let result = async {
                let client = client::api_client()?;
                client.update_profile(update).await
            }
            .await;

            match result {
                Ok(user) => {
                    session.dispatch(SessionAction::Resolved(user));
                    state.set(ActionState::Idle);
                }
                Err(err) => state.set(ActionState::Error(err.to_string())),
            }
        });
    }
}

/// Hook wiring the session context and router into an actions handle
#[hook]
pub fn use_session_actions() -> UseSessionActionsHandle {
    let session = use_session();
    let navigator = use_navigator().expect("use_session_actions must be used inside a Router");
    let state = use_state(|| ActionState::Idle);

    UseSessionActionsHandle {
        session,
        navigator,
        state,
    }
}
