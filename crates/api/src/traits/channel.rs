//! Request/response channel to an applet

use crate::error::Result;
use crate::types::{Command, Response};

/// A synchronous channel to a selectable applet
///
/// Errors are reserved for failures of the channel itself; an applet that
/// rejects a request still produces a [`Response`] with a status word.
pub trait Channel {
    /// Select the applet with the given identifier, returning its answer
    fn select(&mut self, aid: &[u8]) -> Result<Response>;

    /// Send one request to the selected applet
    fn transmit(&mut self, command: &Command) -> Result<Response>;
}

impl<C: Channel + ?Sized> Channel for &mut C {
    fn select(&mut self, aid: &[u8]) -> Result<Response> {
        (**self).select(aid)
    }

    fn transmit(&mut self, command: &Command) -> Result<Response> {
        (**self).transmit(command)
    }
}
