//! GraphQL object types returned by the resolvers.

use crate::engine::context::GraphQLContext;
use crate::engine::resolvers;
use crate::engine::store::{RecipientRecord, UserRecord};
use juniper::{graphql_object, FieldResult, GraphQLObject, ID};
use log::trace;

/// A recipient of queued notes
#[derive(Clone, Debug, PartialEq, GraphQLObject)]
#[graphql(context = GraphQLContext)]
pub struct Recipient {
    id: ID,
    name: Option<String>,
    address: String,
    queue: Vec<Option<String>>,
}

impl Recipient {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    /// Notes in the order they were queued
    pub fn queue(&self) -> Vec<&str> {
        self.queue.iter().flatten().map(String::as_str).collect()
    }
}

impl From<RecipientRecord> for Recipient {
    fn from(r: RecipientRecord) -> Self {
        Recipient {
            id: ID::from(r.id().to_string()),
            name: r.name().map(str::to_string),
            address: r.address().to_string(),
            queue: r.queue().iter().cloned().map(Some).collect(),
        }
    }
}

/// A user and the ids of the recipients they send notes to. The recipients themselves are looked
/// up when the `recipients` field is resolved, so they always reflect the current queues.
#[derive(Clone, Debug, PartialEq)]
pub struct User {
    id: ID,
    username: String,
    recipients: Vec<String>,
}

impl User {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Ids of the user's recipients, unresolved
    pub fn recipient_ids(&self) -> &[String] {
        &self.recipients
    }
}

impl From<UserRecord> for User {
    fn from(u: UserRecord) -> Self {
        User {
            id: ID::from(u.id().to_string()),
            username: u.username().to_string(),
            recipients: u.recipients().to_vec(),
        }
    }
}

#[graphql_object(context = GraphQLContext)]
impl User {
    #[graphql(name = "id")]
    fn graphql_id(&self) -> ID {
        self.id.clone()
    }

    #[graphql(name = "username")]
    fn graphql_username(&self) -> String {
        self.username.clone()
    }

    #[graphql(name = "recipients")]
    fn graphql_recipients(&self, context: &GraphQLContext) -> FieldResult<Vec<Option<Recipient>>> {
        trace!("User::recipients called -- user: {}", self.id());

        Ok(resolvers::user_recipients(context.store(), self)?
            .into_iter()
            .map(Some)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::{Recipient, User};
    use crate::engine::store::{RecipientRecord, UserRecord};

    #[test]
    fn recipient_from_record() {
        let r = Recipient::from(RecipientRecord::new(
            "0".to_string(),
            None,
            "someone@example.com".to_string(),
            vec!["a".to_string(), "b".to_string()],
        ));

        assert_eq!(r.id(), "0");
        assert_eq!(r.name(), None);
        assert_eq!(r.address(), "someone@example.com");
        assert_eq!(r.queue(), vec!["a", "b"]);
    }

    #[test]
    fn user_from_record() {
        let u = User::from(UserRecord::new(
            "3".to_string(),
            "kenbellows".to_string(),
            vec!["1".to_string(), "0".to_string()],
        ));

        assert_eq!(u.id(), "3");
        assert_eq!(u.username(), "kenbellows");
        assert_eq!(u.recipient_ids(), &["1".to_string(), "0".to_string()]);
    }
}
