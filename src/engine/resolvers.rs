//! The resolver functions behind each root field of the schema and the `User.recipients` field.
//!
//! Every lookup miss is an error: an unknown user id yields [`UserNotFound`], and an unknown
//! recipient id yields [`RecipientNotFound`], whether it arrives as a query argument, a mutation
//! argument, or a user's recipient reference.
//!
//! [`UserNotFound`]: ../../enum.Error.html#variant.UserNotFound
//! [`RecipientNotFound`]: ../../enum.Error.html#variant.RecipientNotFound

use crate::engine::objects::{Recipient, User};
use crate::engine::store::FixtureStore;
use crate::error::Error;
use log::trace;

/// Resolves `Query.getUserInfo`. The user's recipients are left as id references for
/// [`user_recipients`] to expand.
///
/// [`user_recipients`]: ./fn.user_recipients.html
pub fn get_user_info(store: &FixtureStore, id: &str) -> Result<User, Error> {
    trace!("get_user_info called -- id: {}", id);

    Ok(User::from(store.user(id)?))
}

/// Resolves `Query.getRecipientInfo`
pub fn get_recipient_info(store: &FixtureStore, id: &str) -> Result<Recipient, Error> {
    trace!("get_recipient_info called -- id: {}", id);

    recipient(store, id)
}

/// Resolves `Mutation.addNoteToQueue`, appending `note` to the end of the recipient's queue and
/// returning the recipient with the note in place. Duplicate notes are appended again, not
/// merged.
pub fn add_note_to_queue(
    store: &FixtureStore,
    recipient_id: &str,
    note: &str,
) -> Result<Recipient, Error> {
    trace!(
        "add_note_to_queue called -- recipient_id: {}, note: {}",
        recipient_id,
        note
    );

    Ok(Recipient::from(store.append_note(recipient_id, note)?))
}

/// Resolves `User.recipients`, in the order the user lists them
pub fn user_recipients(store: &FixtureStore, user: &User) -> Result<Vec<Recipient>, Error> {
    trace!("user_recipients called -- user: {}", user.id());

    user.recipient_ids()
        .iter()
        .map(|id| recipient(store, id))
        .collect()
}

fn recipient(store: &FixtureStore, id: &str) -> Result<Recipient, Error> {
    Ok(Recipient::from(store.recipient(id)?))
}

#[cfg(test)]
mod tests {
    use super::{add_note_to_queue, get_recipient_info, get_user_info, user_recipients};
    use crate::engine::config::{Configuration, RecipientConfig, UserConfig};
    use crate::engine::store::FixtureStore;
    use crate::error::Error;
    use maplit::btreemap;

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn two_recipient_store() -> FixtureStore {
        FixtureStore::new(&Configuration::new(
            1,
            btreemap! {
                "0".to_string() => UserConfig::new(
                    "kenbellows".to_string(),
                    vec!["1".to_string(), "0".to_string()],
                ),
            },
            btreemap! {
                "0".to_string() => RecipientConfig::new(
                    Some("Someone Jones".to_string()),
                    "someone@example.com".to_string(),
                    vec![],
                ),
                "1".to_string() => RecipientConfig::new(
                    None,
                    "nobody@example.com".to_string(),
                    vec!["first".to_string()],
                ),
            },
        ))
    }

    /// Passes if a recipient lookup returns the input id and the stored fields
    #[test]
    fn recipient_info_matches_fixture() {
        init();

        let store = two_recipient_store();

        let r = get_recipient_info(&store, "1").unwrap();
        assert_eq!(r.id(), "1");
        assert_eq!(r.name(), None);
        assert_eq!(r.address(), "nobody@example.com");
        assert_eq!(r.queue(), vec!["first"]);

        assert_eq!(get_recipient_info(&store, "1").unwrap(), r);
    }

    /// Passes if a user's recipients resolve in reference order
    #[test]
    fn user_recipients_in_reference_order() {
        init();

        let store = two_recipient_store();

        let u = get_user_info(&store, "0").unwrap();
        assert_eq!(u.id(), "0");
        assert_eq!(u.username(), "kenbellows");

        let rs = user_recipients(&store, &u).unwrap();
        assert_eq!(rs.len(), u.recipient_ids().len());
        let ids: Vec<&str> = rs.iter().map(|r| r.id()).collect();
        assert_eq!(ids, vec!["1", "0"]);
    }

    /// Passes if appends are ordered, not deduplicated, and visible to later reads
    #[test]
    fn add_note_appends() {
        init();

        let store = two_recipient_store();

        add_note_to_queue(&store, "1", "a").unwrap();
        let r = add_note_to_queue(&store, "1", "a").unwrap();
        assert_eq!(r.queue(), vec!["first", "a", "a"]);

        let r = add_note_to_queue(&store, "1", "b").unwrap();
        assert_eq!(r.queue(), vec!["first", "a", "a", "b"]);
        assert_eq!(get_recipient_info(&store, "1").unwrap(), r);
    }

    /// Passes if a note added through the mutation shows up through a user's recipients
    #[test]
    fn add_note_visible_through_user() {
        init();

        let store = two_recipient_store();
        add_note_to_queue(&store, "0", "hello").unwrap();

        let u = get_user_info(&store, "0").unwrap();
        let rs = user_recipients(&store, &u).unwrap();
        assert_eq!(rs[1].queue(), vec!["hello"]);
    }

    #[test]
    fn lookup_misses_are_errors() {
        init();

        let store = two_recipient_store();

        assert!(matches!(
            get_user_info(&store, "5"),
            Err(Error::UserNotFound { .. })
        ));
        assert!(matches!(
            get_recipient_info(&store, "5"),
            Err(Error::RecipientNotFound { .. })
        ));
        assert!(matches!(
            add_note_to_queue(&store, "5", "lost"),
            Err(Error::RecipientNotFound { .. })
        ));
    }
}
