//! The in-memory fixture store backing all resolvers. The store is seeded once from a
//! [`Configuration`] and is thereafter only mutated by appending notes to recipient queues.
//!
//! [`Configuration`]: ../config/struct.Configuration.html

use crate::engine::config::Configuration;
use crate::error::Error;
use log::trace;
use std::collections::HashMap;
use std::sync::RwLock;

/// A user as stored in the fixture. Recipients are held as id references and dereferenced on
/// every read.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UserRecord {
    id: String,
    username: String,
    recipients: Vec<String>,
}

impl UserRecord {
    pub fn new(id: String, username: String, recipients: Vec<String>) -> UserRecord {
        UserRecord {
            id,
            username,
            recipients,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn recipients(&self) -> &[String] {
        &self.recipients
    }
}

/// A recipient as stored in the fixture
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RecipientRecord {
    id: String,
    name: Option<String>,
    address: String,
    queue: Vec<String>,
}

impl RecipientRecord {
    pub fn new(
        id: String,
        name: Option<String>,
        address: String,
        queue: Vec<String>,
    ) -> RecipientRecord {
        RecipientRecord {
            id,
            name,
            address,
            queue,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn queue(&self) -> &[String] {
        &self.queue
    }
}

#[derive(Debug, Default)]
struct Tables {
    users: HashMap<String, UserRecord>,
    recipients: HashMap<String, RecipientRecord>,
}

/// Process-wide fixture data. Reads take a shared lock; queue appends take the exclusive lock,
/// so appends from concurrent requests are applied one at a time and none are lost.
///
/// # Examples
///
/// ```rust
/// use notequeue::{Configuration, FixtureStore};
///
/// let store = FixtureStore::new(&Configuration::default());
/// let r = store.append_note("0", "call back").unwrap();
/// assert_eq!(r.queue(), &["call back".to_string()]);
/// ```
#[derive(Debug, Default)]
pub struct FixtureStore {
    tables: RwLock<Tables>,
}

impl FixtureStore {
    /// Seeds a new store from the users and recipients in `config`. The configuration is
    /// expected to have been validated already.
    pub fn new(config: &Configuration) -> FixtureStore {
        trace!("FixtureStore::new called");

        let users = config
            .users()
            .iter()
            .map(|(id, u)| {
                (
                    id.clone(),
                    UserRecord::new(
                        id.clone(),
                        u.username().to_string(),
                        u.recipients().to_vec(),
                    ),
                )
            })
            .collect();

        let recipients = config
            .recipients()
            .iter()
            .map(|(id, r)| {
                (
                    id.clone(),
                    RecipientRecord::new(
                        id.clone(),
                        r.name().map(str::to_string),
                        r.address().to_string(),
                        r.queue().to_vec(),
                    ),
                )
            })
            .collect();

        FixtureStore {
            tables: RwLock::new(Tables { users, recipients }),
        }
    }

    /// Returns a snapshot of the user with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`UserNotFound`] if no such user exists, or [`StoreLockPoisoned`] if the store
    /// lock was poisoned.
    ///
    /// [`UserNotFound`]: ../../enum.Error.html#variant.UserNotFound
    /// [`StoreLockPoisoned`]: ../../enum.Error.html#variant.StoreLockPoisoned
    pub fn user(&self, id: &str) -> Result<UserRecord, Error> {
        trace!("FixtureStore::user called -- id: {}", id);

        self.tables
            .read()?
            .users
            .get(id)
            .cloned()
            .ok_or_else(|| Error::UserNotFound { id: id.to_string() })
    }

    /// Returns a snapshot of the recipient with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`RecipientNotFound`] if no such recipient exists, or [`StoreLockPoisoned`] if
    /// the store lock was poisoned.
    ///
    /// [`RecipientNotFound`]: ../../enum.Error.html#variant.RecipientNotFound
    /// [`StoreLockPoisoned`]: ../../enum.Error.html#variant.StoreLockPoisoned
    pub fn recipient(&self, id: &str) -> Result<RecipientRecord, Error> {
        trace!("FixtureStore::recipient called -- id: {}", id);

        self.tables
            .read()?
            .recipients
            .get(id)
            .cloned()
            .ok_or_else(|| Error::RecipientNotFound { id: id.to_string() })
    }

    /// Appends `note` to the end of the queue of recipient `id` and returns the recipient as it
    /// stands immediately after the append. The store is left untouched if the recipient does
    /// not exist.
    ///
    /// # Errors
    ///
    /// Returns [`RecipientNotFound`] if no such recipient exists, or [`StoreLockPoisoned`] if
    /// the store lock was poisoned.
    ///
    /// [`RecipientNotFound`]: ../../enum.Error.html#variant.RecipientNotFound
    /// [`StoreLockPoisoned`]: ../../enum.Error.html#variant.StoreLockPoisoned
    #[tracing::instrument(level = "info", name = "nq-store-append-note", skip(self, note))]
    pub fn append_note(&self, id: &str, note: &str) -> Result<RecipientRecord, Error> {
        trace!("FixtureStore::append_note called -- id: {}, note: {}", id, note);

        let mut tables = self.tables.write()?;
        let recipient = tables
            .recipients
            .get_mut(id)
            .ok_or_else(|| Error::RecipientNotFound { id: id.to_string() })?;
        recipient.queue.push(note.to_string());

        Ok(recipient.clone())
    }
}
