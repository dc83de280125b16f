//! Delivery of contact messages.
//!
//! The form only talks to [`ContactTransport`]; the shipped implementation
//! is [`SimulatedTransport`], which accepts every message after a fixed
//! latency. A real network transport can replace it without touching the
//! form or the view.

use super::ContactMessage;
use super::error::TransportError;
use crate::constants::SIMULATED_SUBMIT_LATENCY;
use futures::FutureExt;
use futures::channel::oneshot;
use futures::future::BoxFuture;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::thread;
use std::time::{Duration, SystemTime};
use tracing::{info, warn};

/// Proof that a message was accepted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeliveryReceipt {
    pub id: u64,
    pub delivered_at: SystemTime,
}

/// Asynchronous, result-producing delivery of a contact message.
///
/// The returned future must not borrow the transport, so hosts can drive it
/// from any executor after the call returns.
pub trait ContactTransport: Send + Sync {
    fn send(&self, message: ContactMessage) -> BoxFuture<'static, Result<DeliveryReceipt, TransportError>>;
}

/// Accepts every message after a fixed delay. Nothing leaves the process.
#[derive(Clone, Debug)]
pub struct SimulatedTransport {
    latency: Duration,
    next_id: Arc<AtomicU64>,
}

impl Default for SimulatedTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulatedTransport {
    pub fn new() -> Self {
        Self::with_latency(SIMULATED_SUBMIT_LATENCY)
    }

    pub fn with_latency(latency: Duration) -> Self {
        Self {
            latency,
            next_id: Arc::new(AtomicU64::new(1)),
        }
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }
}

impl ContactTransport for SimulatedTransport {
    fn send(&self, message: ContactMessage) -> BoxFuture<'static, Result<DeliveryReceipt, TransportError>> {
        let (tx, rx) = oneshot::channel();
        let latency = self.latency;
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);

        // At most one submission is in flight per form.
        let spawned = thread::Builder::new()
            .name("contact-transport".into())
            .spawn(move || {
                thread::sleep(latency);
                info!(id, subject = %message.subject, "simulated contact delivery accepted");
                // The receiver may have been dropped with its view; nothing to report then.
                let _ = tx.send(DeliveryReceipt {
                    id,
                    delivered_at: SystemTime::now(),
                });
            });

        if let Err(e) = spawned {
            warn!("failed to start simulated delivery: {}", e);
            return futures::future::ready(Err(TransportError::Unavailable(e.to_string()))).boxed();
        }

        async move { rx.await.map_err(|_| TransportError::Cancelled) }.boxed()
    }
}
