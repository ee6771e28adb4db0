//! Session context, actions, and route guard

pub mod actions;
pub mod context;
pub mod guard;

pub use actions::{ActionState, use_session_actions};
pub use context::{
    SessionProvider, SessionState, use_is_authenticated, use_session, use_session_user,
};
pub use guard::RequireSession;
