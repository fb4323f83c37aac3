//! In-process channel hosting an applet
//!
//! Requests and responses go through their wire frames, so the loopback
//! behaves like a transport that only moves bytes.

use log::debug;
use rand::{CryptoRng, RngCore};
use se25519_api::error::ResultExt;
use se25519_api::{Channel, Command, EcEngine, Error, Response, Result, StatusWord};
use se25519_applet::Applet;

/// A [`Channel`] to an applet living in the same process
pub struct LoopbackChannel<E, R> {
    applet: Applet<E, R>,
    selected: bool,
    open: bool,
}

impl<E: EcEngine, R: RngCore + CryptoRng> LoopbackChannel<E, R> {
    /// Host `applet`; nothing is selected yet
    pub fn new(applet: Applet<E, R>) -> Self {
        Self {
            applet,
            selected: false,
            open: true,
        }
    }

    /// The hosted applet
    pub fn applet(&self) -> &Applet<E, R> {
        &self.applet
    }

    /// Whether the applet is currently selected
    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// Deselect the applet and refuse further traffic
    pub fn disconnect(&mut self) {
        self.deselect();
        self.open = false;
    }

    fn deselect(&mut self) {
        if self.selected {
            self.applet.deselect();
            self.selected = false;
        }
    }

    fn ensure_open(&self) -> Result<()> {
        if !self.open {
            return Err(Error::Transport {
                context: "loopback",
                message: "channel disconnected".into(),
            });
        }
        Ok(())
    }
}

impl<E: EcEngine, R: RngCore + CryptoRng> Channel for LoopbackChannel<E, R> {
    fn select(&mut self, aid: &[u8]) -> Result<Response> {
        self.ensure_open()?;
        if aid != self.applet.aid() {
            debug!("select: no applet with AID {}", hex::encode(aid));
            return Ok(Response::status_only(StatusWord::FILE_NOT_FOUND));
        }
        // re-selection starts a fresh session
        self.deselect();
        self.selected = true;
        let rsp = self.applet.select();
        Response::from_frame(&rsp.to_frame()).with_context("loopback select")
    }

    fn transmit(&mut self, command: &Command) -> Result<Response> {
        self.ensure_open()?;
        if !self.selected {
            return Err(Error::Transport {
                context: "loopback",
                message: "no applet selected".into(),
            });
        }
        let command = Command::from_frame(&command.to_frame()).with_context("loopback request")?;
        let rsp = self.applet.process(&command);
        Response::from_frame(&rsp.to_frame()).with_context("loopback response")
    }
}
