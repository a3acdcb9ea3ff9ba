//! Users — system-wide notification recipients.

use std::sync::{Arc, Mutex, PoisonError};

use domohub_core::{Device, DeviceObserver};
use domohub_domain::event::EventKind;
use domohub_domain::id::UserId;

/// A person who receives every broadcast notification. Users observe
/// the whole system (through the notification service), not individual
/// devices.
#[derive(Debug)]
pub struct User {
    id: UserId,
    name: String,
    email: String,
}

impl User {
    /// Create a user handle ready for registration.
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            id: UserId::new(),
            name: name.into(),
            email: email.into(),
        })
    }

    #[must_use]
    pub fn id(&self) -> UserId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }
}

impl DeviceObserver for User {
    fn on_event(&self, device: &dyn Device, event: &EventKind, message: &str) {
        tracing::info!(
            user = self.name.as_str(),
            email = self.email.as_str(),
            device = device.name(),
            event = %event,
            "{message}"
        );
    }
}

/// Registered users, shared between the hub and the notification
/// service. Registration order is preserved.
#[derive(Default)]
pub struct UserDirectory {
    users: Mutex<Vec<Arc<User>>>,
}

impl UserDirectory {
    /// Register a user. Duplicate handles are ignored.
    pub fn register(&self, user: Arc<User>) {
        let mut users = self.lock();
        if !users.iter().any(|existing| Arc::ptr_eq(existing, &user)) {
            tracing::info!(user = user.name(), "user registered");
            users.push(user);
        }
    }

    /// Remove a user handle.
    pub fn remove(&self, user: &Arc<User>) {
        self.lock().retain(|existing| !Arc::ptr_eq(existing, user));
        tracing::info!(user = user.name(), "user removed");
    }

    /// Snapshot of the registered users, in registration order.
    #[must_use]
    pub fn users(&self) -> Vec<Arc<User>> {
        self.lock().clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Arc<User>>> {
        self.users.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
