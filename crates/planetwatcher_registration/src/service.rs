//! Registration service abstraction.

use std::future::Future;
use std::pin::Pin;

/// Type alias for a boxed, sendable future
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Operations the login flow needs from the registration backend.
///
/// Neither operation reports errors: failures are logged by the
/// implementation and surface as "not registered" or are dropped.
pub trait RegistrationService: Send + Sync {
    /// Whether the backend already knows `token`.
    fn is_registered<'a>(&'a self, token: &'a str) -> BoxFuture<'a, bool>;

    /// Registers `token` with the backend. Fire-and-forget.
    fn register_token<'a>(&'a self, token: &'a str) -> BoxFuture<'a, ()>;
}
