//! The session/module dispatch seam.
//!
//! A [`SessionProvider`] opens short-lived [`Session`]s. Each session issues
//! module calls and answers queries about the common options of its last
//! call. Dropping a session releases it.

use gmt_common::GmtResult;

use crate::common::CommonValue;

/// An open session with the engine.
pub trait Session {
    /// Run a module with an argument string and return its text output.
    fn call_module(&mut self, module: &str, args: &str) -> GmtResult<String>;

    /// Value of a common option as set by the last module call.
    fn get_common(&mut self, option: char) -> GmtResult<CommonValue>;
}

/// Factory for sessions.
pub trait SessionProvider {
    type Session: Session;

    fn open(&self) -> GmtResult<Self::Session>;
}

impl<P: SessionProvider + ?Sized> SessionProvider for &P {
    type Session = P::Session;

    fn open(&self) -> GmtResult<Self::Session> {
        (**self).open()
    }
}

/// Open a session, run `f` with it and release it on every exit path.
pub fn with_session<P, T, F>(provider: &P, f: F) -> GmtResult<T>
where
    P: SessionProvider + ?Sized,
    F: FnOnce(&mut P::Session) -> GmtResult<T>,
{
    let mut lib = provider.open()?;
    f(&mut lib)
}

/// Run a single module in a fresh session.
pub fn call_module<P>(provider: &P, module: &str, args: &str) -> GmtResult<String>
where
    P: SessionProvider + ?Sized,
{
    with_session(provider, |lib| lib.call_module(module, args))
}
