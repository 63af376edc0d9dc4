//! Contains the configuration structures describing the fixture data served by the engine.

use crate::error::Error;
use log::trace;
use maplit::btreemap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::convert::TryFrom;
use std::fs::File;
use std::io::BufReader;

/// Configuration file format version supported by this crate
pub const LATEST_CONFIG_VERSION: i32 = 1;

/// Configuration item for the fixture data. The configuration contains the version of the
/// configuration file format, the users keyed by id, and the recipients keyed by id.
///
/// # Examples
///
/// ```rust
/// use notequeue::Configuration;
///
/// let c = Configuration::new(1, Default::default(), Default::default());
/// ```
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Configuration {
    /// Version of the configuration file format used
    version: i32,

    /// Users to seed, keyed by id
    #[serde(default)]
    users: BTreeMap<String, UserConfig>,

    /// Recipients to seed, keyed by id
    #[serde(default)]
    recipients: BTreeMap<String, RecipientConfig>,
}

impl Configuration {
    /// Creates a new [`Configuration`] data structure
    ///
    /// [`Configuration`]: struct.Configuration.html
    pub fn new(
        version: i32,
        users: BTreeMap<String, UserConfig>,
        recipients: BTreeMap<String, RecipientConfig>,
    ) -> Configuration {
        Configuration {
            version,
            users,
            recipients,
        }
    }

    /// Creates a new [`Configuration`] data structure from the contents of the specified config
    /// file.
    ///
    /// [`Configuration`]: struct.Configuration.html
    ///
    /// # Errors
    ///
    /// Returns [`ConfigOpenFailed`] if the file cannot be opened, and [`DeserializationFailed`]
    /// if the contents are not a valid configuration.
    ///
    /// [`ConfigOpenFailed`]: ../../enum.Error.html#variant.ConfigOpenFailed
    /// [`DeserializationFailed`]: ../../enum.Error.html#variant.DeserializationFailed
    pub fn from_file(path: &str) -> Result<Configuration, Error> {
        trace!("Configuration::from_file called -- path: {}", path);

        let f = File::open(path)?;
        let r = BufReader::new(f);
        Ok(serde_yaml::from_reader(r)?)
    }

    pub fn version(&self) -> i32 {
        self.version
    }

    pub fn users(&self) -> &BTreeMap<String, UserConfig> {
        &self.users
    }

    pub fn recipients(&self) -> &BTreeMap<String, RecipientConfig> {
        &self.recipients
    }

    /// Validates the [`Configuration`]. The version must be supported, and every recipient id
    /// listed by a user must be defined among the configuration's recipients.
    ///
    /// [`Configuration`]: struct.Configuration.html
    ///
    /// # Errors
    ///
    /// Returns [`ConfigVersionMismatched`] for an unsupported version, and
    /// [`ConfigItemNotFound`] for the first dangling recipient reference.
    ///
    /// [`ConfigVersionMismatched`]: ../../enum.Error.html#variant.ConfigVersionMismatched
    /// [`ConfigItemNotFound`]: ../../enum.Error.html#variant.ConfigItemNotFound
    ///
    /// # Examples
    ///
    /// ```rust
    /// use notequeue::Configuration;
    ///
    /// assert!(Configuration::default().validate().is_ok());
    /// ```
    pub fn validate(&self) -> Result<(), Error> {
        trace!("Configuration::validate called");

        if self.version != LATEST_CONFIG_VERSION {
            return Err(Error::ConfigVersionMismatched {
                expected: LATEST_CONFIG_VERSION,
                found: self.version,
            });
        }

        for (user_id, user) in &self.users {
            if let Some(missing) = user
                .recipients
                .iter()
                .find(|r| !self.recipients.contains_key(*r))
            {
                return Err(Error::ConfigItemNotFound {
                    user_id: user_id.clone(),
                    name: missing.clone(),
                });
            }
        }

        Ok(())
    }
}

/// The seed dataset: a single user, `kenbellows`, with one recipient and an empty queue.
impl Default for Configuration {
    fn default() -> Configuration {
        Configuration {
            version: LATEST_CONFIG_VERSION,
            users: btreemap! {
                "0".to_string() => UserConfig::new("kenbellows".to_string(), vec!["0".to_string()]),
            },
            recipients: btreemap! {
                "0".to_string() => RecipientConfig::new(
                    Some("Someone Jones".to_string()),
                    "someone@example.com".to_string(),
                    vec![],
                ),
            },
        }
    }
}

impl TryFrom<&str> for Configuration {
    type Error = Error;

    fn try_from(yaml: &str) -> Result<Configuration, Error> {
        Ok(serde_yaml::from_str(yaml)?)
    }
}

impl TryFrom<String> for Configuration {
    type Error = Error;

    fn try_from(yaml: String) -> Result<Configuration, Error> {
        Configuration::try_from(yaml.as_str())
    }
}

/// Stored fields of a user
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserConfig {
    username: String,

    /// Ids of the user's recipients, in display order
    #[serde(default)]
    recipients: Vec<String>,
}

impl UserConfig {
    pub fn new(username: String, recipients: Vec<String>) -> UserConfig {
        UserConfig {
            username,
            recipients,
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn recipients(&self) -> &[String] {
        &self.recipients
    }
}

/// Stored fields of a recipient
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipientConfig {
    #[serde(default)]
    name: Option<String>,

    address: String,

    /// Notes already queued when the store is seeded
    #[serde(default)]
    queue: Vec<String>,
}

impl RecipientConfig {
    pub fn new(name: Option<String>, address: String, queue: Vec<String>) -> RecipientConfig {
        RecipientConfig {
            name,
            address,
            queue,
        }
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

#[cfg(test)]
mod tests {
    use super::{Configuration, RecipientConfig, UserConfig};
    use crate::error::Error;
    use maplit::btreemap;
    use std::convert::TryFrom;

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    /// Passes if the default configuration holds the seed dataset
    #[test]
    fn default_seed() {
        init();

        let c = Configuration::default();
        assert_eq!(c.version(), 1);

        let user = c.users().get("0").unwrap();
        assert_eq!(user.username(), "kenbellows");
        assert_eq!(user.recipients(), &["0".to_string()]);

        let recipient = c.recipients().get("0").unwrap();
        assert_eq!(recipient.name(), Some("Someone Jones"));
        assert_eq!(recipient.address(), "someone@example.com");
        assert!(recipient.queue().is_empty());
    }

    /// Passes if a yaml configuration deserializes, including numeric ids and omitted optional
    /// fields
    #[test]
    fn from_yaml() {
        init();

        let c = Configuration::try_from(
            "
version: 1
users:
  0:
    username: kenbellows
    recipients: [0, 1]
recipients:
  0:
    name: Someone Jones
    address: someone@example.com
  1:
    address: nobody@example.com
    queue: [call back]
",
        )
        .unwrap();

        assert_eq!(
            c.users().get("0").unwrap().recipients(),
            &["0".to_string(), "1".to_string()]
        );
        let r1 = c.recipients().get("1").unwrap();
        assert_eq!(r1.name(), None);
        assert_eq!(r1.queue(), &["call back".to_string()]);
        assert!(c.validate().is_ok());
    }

    /// Passes if malformed yaml is rejected with a deserialization error
    #[test]
    fn from_yaml_malformed() {
        init();

        let e = Configuration::try_from("version: [").unwrap_err();
        assert!(matches!(e, Error::DeserializationFailed { .. }));
    }

    /// Passes if a missing config file is reported as such
    #[test]
    fn from_file_missing() {
        init();

        let e = Configuration::from_file("./tests/fixtures/does_not_exist.yml").unwrap_err();
        assert!(matches!(e, Error::ConfigOpenFailed { .. }));
    }

    #[test]
    fn validate_version() {
        init();

        let c = Configuration::new(2, btreemap! {}, btreemap! {});
        assert!(matches!(
            c.validate(),
            Err(Error::ConfigVersionMismatched {
                expected: 1,
                found: 2
            })
        ));
    }

    /// Passes if a user referencing an undefined recipient fails validation
    #[test]
    fn validate_dangling_recipient() {
        init();

        let c = Configuration::new(
            1,
            btreemap! {
                "0".to_string() => UserConfig::new("kenbellows".to_string(), vec!["0".to_string(), "9".to_string()]),
            },
            btreemap! {
                "0".to_string() => RecipientConfig::new(None, "someone@example.com".to_string(), vec![]),
            },
        );

        match c.validate() {
            Err(Error::ConfigItemNotFound { user_id, name }) => {
                assert_eq!(user_id, "0");
                assert_eq!(name, "9");
            }
            _ => panic!("Expected ConfigItemNotFound"),
        }
    }
}
