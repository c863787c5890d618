//! Identity gating for skycast.
//!
//! Sign-in itself is the platform's problem; this crate only asks the
//! platform's identity endpoint who, if anyone, is signed in, and caches
//! the answer for the rest of the process.

pub mod gate;
pub mod session;

pub use gate::{AuthError, AuthGate, UserIdentity};
pub use session::Session;
