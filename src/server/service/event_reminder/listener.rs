//! Reminder event listeners.

use std::sync::{Arc, PoisonError, RwLock};

use serenity::async_trait;
use tokio::task::JoinHandle;

use crate::server::{error::AppError, model::reminder::ReminderEvent};

/// Receives reminder events when their timers fire.
#[async_trait]
pub trait ReminderListener: Send + Sync {
    /// Handles one reminder event.
    ///
    /// Errors are logged by the caller and never reach other listeners.
    async fn on_reminder(&self, event: &ReminderEvent) -> Result<(), AppError>;
}

/// Registered listeners, shared between the service and its timer callbacks.
#[derive(Clone, Default)]
pub struct ListenerSet {
    listeners: Arc<RwLock<Vec<Arc<dyn ReminderListener>>>>,
}

impl ListenerSet {
    pub fn add(&self, listener: Arc<dyn ReminderListener>) {
        self.listeners
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(listener);
    }

    pub fn len(&self) -> usize {
        self.listeners
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Delivers `event` to every listener, each in its own task.
    ///
    /// Returns immediately. A listener that errors or panics is logged and does not affect
    /// delivery to the others.
    ///
    /// # Returns
    /// - One handle per listener, resolving once that listener is done
    pub fn emit(&self, event: ReminderEvent) -> Vec<JoinHandle<()>> {
        let listeners = self
            .listeners
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();

        listeners
            .into_iter()
            .map(|listener| {
                let event = event.clone();
                tokio::spawn(async move {
                    let name = event.name().to_string();
                    let delivery = tokio::spawn(async move { listener.on_reminder(&event).await });

                    match delivery.await {
                        Ok(Ok(())) => {}
                        Ok(Err(e)) => {
                            tracing::error!("Reminder listener failed for {}: {}", name, e)
                        }
                        Err(e) => {
                            tracing::error!("Reminder listener aborted for {}: {}", name, e)
                        }
                    }
                })
            })
            .collect()
    }
}
