//! Interrupt handling.
//!
//! Listeners are installed once at startup. From then on the default
//! terminate-on-signal disposition is replaced, so a second Ctrl+C while a
//! save is in progress is queued instead of killing the process.

use std::io;
use tracing::{info, instrument};

#[cfg(unix)]
use tokio::signal::unix::{Signal, SignalKind, signal};

/// SIGINT on POSIX systems.
const SIGINT: i32 = 2;
/// SIGTERM on POSIX systems.
const SIGTERM: i32 = 15;

/// An external request to stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Interrupt {
    /// Ctrl+C.
    #[display("SIGINT")]
    CtrlC,
    /// Termination request.
    #[display("SIGTERM")]
    Terminate,
}

impl Interrupt {
    /// Conventional signal number.
    pub fn signal_number(self) -> i32 {
        match self {
            Self::CtrlC => SIGINT,
            Self::Terminate => SIGTERM,
        }
    }
}

/// Process-wide signal listeners.
#[derive(Debug)]
pub struct InterruptListener {
    #[cfg(unix)]
    interrupt: Signal,
    #[cfg(unix)]
    terminate: Signal,
}

impl InterruptListener {
    /// Installs the listeners. Must be called from within a tokio runtime.
    #[instrument]
    pub fn install() -> io::Result<Self> {
        #[cfg(unix)]
        let listener = Self {
            interrupt: signal(SignalKind::interrupt())?,
            terminate: signal(SignalKind::terminate())?,
        };
        #[cfg(not(unix))]
        let listener = Self {};

        info!("Interrupt listeners installed");
        Ok(listener)
    }

    /// Waits for the next interrupt.
    pub async fn recv(&mut self) -> Interrupt {
        #[cfg(unix)]
        {
            tokio::select! {
                Some(()) = self.interrupt.recv() => Interrupt::CtrlC,
                Some(()) = self.terminate.recv() => Interrupt::Terminate,
                else => std::future::pending::<Interrupt>().await,
            }
        }

        #[cfg(not(unix))]
        {
            match tokio::signal::ctrl_c().await {
                Ok(()) => Interrupt::CtrlC,
                Err(e) => {
                    tracing::warn!(error = %e, "Ctrl+C listener failed");
                    std::future::pending::<Interrupt>().await
                }
            }
        }
    }
}
