//! Provides the [`Error`] type for notequeue

use std::fmt::{Display, Formatter};

/// Error type for notequeue
///
/// # Examples
///
/// ```rust
/// use notequeue::Error;
///
/// let e = Error::RecipientNotFound { id: "7".to_string() };
/// ```
#[derive(Debug)]
pub enum Error {
    /// Returned if a [`Client`] is unable to submit a request to the server, such as due to a
    /// network or server error, or the response cannot be parsed as valid JSON. Inspect the
    /// [`reqwest::Error`] included as a source error for additional detail.
    ///
    /// [`Client`]: ./client/enum.Client.html
    ClientRequestFailed { source: reqwest::Error },

    /// Returned if a user's recipient list references a recipient id that is not defined in the
    /// same configuration. The `name` field holds the dangling id, and `user_id` the user that
    /// references it.
    ConfigItemNotFound { user_id: String, name: String },

    /// Returned if a `Configuration` file cannot be opened, typically because the configuration
    /// file cannot be found on disk
    ConfigOpenFailed { source: std::io::Error },

    /// Returned if the configuration declares a format version this crate does not understand.
    /// The field `expected` contains the supported version, and `found` the declared one.
    ConfigVersionMismatched { expected: i32, found: i32 },

    /// Returned if a `Configuration` fails to deserialize because the provided data does not
    /// match the expected data structure
    DeserializationFailed { source: serde_yaml::Error },

    /// Returned if a [`Client`] receives a response whose `errors` array is not empty. The
    /// `errors` field holds the array as returned by the server.
    ///
    /// [`Client`]: ./client/enum.Client.html
    GraphQLErrorsReturned { errors: serde_json::Value },

    /// Returned if a header name passed to the HTTP [`Client`] is not a valid header name
    ///
    /// [`Client`]: ./client/enum.Client.html
    InvalidHeaderName {
        source: reqwest::header::InvalidHeaderName,
    },

    /// Returned if a header value passed to the HTTP [`Client`] is not a valid header value
    ///
    /// [`Client`]: ./client/enum.Client.html
    InvalidHeaderValue {
        source: reqwest::header::InvalidHeaderValue,
    },

    /// Returned if a [`Client`] receives a valid JSON response that does not contain the
    /// expected 'data' object, or the expected field within it.
    ///
    /// The [`serde_json::Value`] tuple value contains the deserialized JSON response.
    ///
    /// [`Client`]: ./client/enum.Client.html
    PayloadNotFound { response: serde_json::Value },

    /// Returned if no recipient with the given `id` exists in the fixture store
    RecipientNotFound { id: String },

    /// Returned if a GraphQL response cannot be converted to a serde_json::Value, or request
    /// variables cannot be converted into GraphQL input values
    SerializationFailed { source: serde_json::Error },

    /// Returned if a thread panicked while holding the fixture store lock, leaving the store in
    /// an unknown state
    StoreLockPoisoned,

    /// Returned if no user with the given `id` exists in the fixture store
    UserNotFound { id: String },
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            Error::ClientRequestFailed { source } => {
                write!(f, "Client request failed. Source error: {}", source)
            }
            Error::ConfigItemNotFound { user_id, name } => {
                write!(f, "User {} references recipient {}, which is not defined in the config.", user_id, name)
            }
            Error::ConfigOpenFailed { source } => {
                write!(f, "Config file could not be opened. Source error: {}", source)
            }
            Error::ConfigVersionMismatched { expected, found } => {
                write!(f, "Config version not supported: expected {} but found {}", expected, found)
            }
            Error::DeserializationFailed { source } => {
                write!(f, "Failed to deserialize configuration. Source error: {}", source)
            }
            Error::GraphQLErrorsReturned { errors } => {
                write!(f, "The GraphQL response contained errors: {}", errors)
            }
            Error::InvalidHeaderName { source } => {
                write!(f, "Invalid HTTP header name. Source error: {}", source)
            }
            Error::InvalidHeaderValue { source } => {
                write!(f, "Invalid HTTP header value. Source error: {}", source)
            }
            Error::PayloadNotFound { response } => {
                write!(f, "Required data field is missing from the response: {}", response)
            }
            Error::RecipientNotFound { id } => {
                write!(f, "Could not find a recipient with id: {}", id)
            }
            Error::SerializationFailed { source } => {
                write!(f, "Serialization of the GraphQL request or response failed. Source error: {}", source)
            }
            Error::StoreLockPoisoned => {
                write!(f, "The fixture store lock was poisoned by a panicked writer.")
            }
            Error::UserNotFound { id } => {
                write!(f, "Could not find a user with id: {}", id)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::ClientRequestFailed { source } => Some(source),
            Error::ConfigItemNotFound { user_id: _, name: _ } => None,
            Error::ConfigOpenFailed { source } => Some(source),
            Error::ConfigVersionMismatched {
                expected: _,
                found: _,
            } => None,
            Error::DeserializationFailed { source } => Some(source),
            Error::GraphQLErrorsReturned { errors: _ } => None,
            Error::InvalidHeaderName { source } => Some(source),
            Error::InvalidHeaderValue { source } => Some(source),
            Error::PayloadNotFound { response: _ } => None,
            Error::RecipientNotFound { id: _ } => None,
            Error::SerializationFailed { source } => Some(source),
            Error::StoreLockPoisoned => None,
            Error::UserNotFound { id: _ } => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::ClientRequestFailed { source: e }
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(e: serde_yaml::Error) -> Self {
        Error::DeserializationFailed { source: e }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::ConfigOpenFailed { source: e }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::SerializationFailed { source: e }
    }
}

impl<T> From<std::sync::PoisonError<T>> for Error {
    fn from(_e: std::sync::PoisonError<T>) -> Self {
        Error::StoreLockPoisoned
    }
}
