mod deploy;
mod error;
mod lifecycle;
mod match_session;

pub use deploy::{DeployFailurePolicy, DeployOutcome};
pub use error::SessionError;
pub use lifecycle::LifecycleState;
pub use match_session::MatchSession;
