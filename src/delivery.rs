//!
//! This module defines the in-process hand-off of a message and its metadata
//! descriptor to a subscriber running in another task.
//!
//! One DeliveryQueue corresponds to one already-matched subscription; which
//! subscriptions a message is routed to is decided upstream. The descriptor
//! is cloned per delivery, so the subscriber never shares mutable state with
//! the publishing side.
//!

use crate::error::MetaError;
use crate::info::MessageInfo;
use bytes::Bytes;
use tokio::sync::mpsc;

/// A single delivered message: the payload plus its routing metadata.
#[derive(Debug, Clone)]
pub struct Delivery {
    pub info: MessageInfo,
    pub body: Bytes,
}

/// Subscriber callback interface.
///
/// The descriptor is borrowed for the duration of the call and dropped when
/// the callback returns; a handler that needs it longer clones it.
pub trait MessageHandler {
    fn on_message(&mut self, info: &MessageInfo, body: &Bytes);
}

/// Sending half of a subscription's delivery channel.
pub struct DeliveryQueue {
    tx: mpsc::Sender<Delivery>,
}

impl DeliveryQueue {
    /// Creates a bounded queue and the receiving half to hand to [`serve`].
    pub fn new(capacity: usize) -> (Self, mpsc::Receiver<Delivery>) {
        let (tx, rx) = mpsc::channel(capacity);
        (Self { tx }, rx)
    }

    /// Hands one message to the subscriber, cloning the descriptor into the
    /// subscriber's execution context.
    ///
    /// # Errors
    /// Raise MetaError::SubscriberGone if the receiving task has dropped its
    /// end of the channel.
    pub async fn deliver(&self, info: &MessageInfo, body: Bytes) -> Result<(), MetaError> {
        let delivery = Delivery {
            info: info.clone(),
            body,
        };
        self.tx
            .send(delivery)
            .await
            .map_err(|_e| MetaError::SubscriberGone)
    }
}

/// Drains the receiving half of a delivery channel, invoking the handler once
/// per message. Returns when every sending half has been dropped.
pub async fn serve<H: MessageHandler>(mut rx: mpsc::Receiver<Delivery>, handler: &mut H) {
    while let Some(delivery) = rx.recv().await {
        handler.on_message(&delivery.info, &delivery.body);
    }
}
