//! This module provides the notequeue client.

use crate::{Engine, Error};
use log::{debug, trace};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::str::FromStr;

/// A notequeue GraphQL client
///
/// The [`Client`] issues the queries and mutation of the notequeue schema, either over HTTP to a
/// server that embeds an [`Engine`], or directly against a local [`Engine`].
///
/// [`Client`]: ./enum.Client.html
/// [`Engine`]: ../engine/struct.Engine.html
///
/// # Examples
///
/// ```rust
/// # use notequeue::Client;
///
/// let client = Client::new_with_http("http://localhost:3000/graphql", None).unwrap();
/// ```
#[derive(Clone)]
pub enum Client {
    Http {
        endpoint: String,
        headers: HeaderMap,
    },
    Local {
        engine: Box<Engine>,
        metadata: Option<HashMap<String, String>>,
    },
}

impl Client {
    /// Takes the URL of a notequeue GraphQL endpoint and returns a new [`Client`] initialized to
    /// query that endpoint. The optional `headers_opt` are sent with every request.
    ///
    /// [`Client`]: ./enum.Client.html
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHeaderName`] or [`InvalidHeaderValue`] if a header cannot be
    /// represented in an HTTP request.
    ///
    /// [`InvalidHeaderName`]: ../enum.Error.html#variant.InvalidHeaderName
    /// [`InvalidHeaderValue`]: ../enum.Error.html#variant.InvalidHeaderValue
    pub fn new_with_http(
        endpoint: &str,
        headers_opt: Option<HashMap<&str, &str>>,
    ) -> Result<Client, Error> {
        trace!("Client::new_with_http called -- endpoint: {}", endpoint);

        let mut header_map = HeaderMap::new();
        if let Some(headers) = headers_opt {
            for (key, value) in headers {
                let header_name = HeaderName::from_str(key)
                    .map_err(|e| Error::InvalidHeaderName { source: e })?;
                let header_value = HeaderValue::from_str(value)
                    .map_err(|e| Error::InvalidHeaderValue { source: e })?;
                header_map.insert(header_name, header_value);
            }
        }

        Ok(Client::Http {
            endpoint: endpoint.to_string(),
            headers: header_map,
        })
    }

    /// Takes an [`Engine`] and returns a new [`Client`] that executes requests against it
    /// in-process. The `metadata` is passed to the engine with every request.
    ///
    /// [`Client`]: ./enum.Client.html
    /// [`Engine`]: ../engine/struct.Engine.html
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use notequeue::{Client, Configuration, Engine};
    ///
    /// let engine = Engine::new(Configuration::default()).build().unwrap();
    /// let client = Client::new_with_engine(engine, None);
    /// ```
    pub fn new_with_engine(engine: Engine, metadata: Option<HashMap<String, String>>) -> Client {
        trace!("Client::new_with_engine called");
        Client::Local {
            engine: Box::new(engine),
            metadata,
        }
    }

    /// Executes a graphql query
    ///
    /// # Arguments
    ///
    /// * query - text of the query statement, parameterized to avoid query injection attacks
    /// * variables - a [`serde_json::Value`], specifically a Value::Object, containing the
    /// variable values for the query
    /// * result_field_opt - an optional name of a field under 'data' that holds the GraphQL
    /// response. If present, the object with name `result_field` under `data` will be returned.
    /// If `None`, the `data` object will be returned.
    ///
    /// # Errors
    ///
    /// * [`ClientRequestFailed`] - if the HTTP request fails or the body is not JSON
    /// * [`GraphQLErrorsReturned`] - if the response carries a non-empty `errors` array
    /// * [`PayloadNotFound`] - if the response lacks `data`, or the requested result field
    ///
    /// [`ClientRequestFailed`]: ../enum.Error.html#variant.ClientRequestFailed
    /// [`GraphQLErrorsReturned`]: ../enum.Error.html#variant.GraphQLErrorsReturned
    /// [`PayloadNotFound`]: ../enum.Error.html#variant.PayloadNotFound
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use notequeue::Client;
    ///
    /// # #[tokio::main]
    /// # async fn main() {
    /// let mut client = Client::new_with_http("http://localhost:3000/graphql", None).unwrap();
    ///
    /// let user = client
    ///     .graphql("query { getUserInfo(id: 0) { username } }", None, Some("getUserInfo"))
    ///     .await;
    /// # }
    /// ```
    pub async fn graphql(
        &mut self,
        query: &str,
        variables: Option<&Value>,
        result_field_opt: Option<&str>,
    ) -> Result<Value, Error> {
        trace!(
            "Client::graphql called -- query: {} | variables: {:#?} | result_field: {:#?}",
            query,
            variables,
            result_field_opt,
        );

        let mut body = match self {
            Client::Http { endpoint, headers } => {
                let req_body = json!({
                    "query": query.to_string(),
                    "variables": variables
                });
                debug!("Client::graphql making request -- req_body: {}", req_body);

                let client = reqwest::Client::new();
                let response = client
                    .post(endpoint.as_str())
                    .headers(headers.clone())
                    .json(&req_body)
                    .send()
                    .await?;
                response.json::<Value>().await?
            }
            Client::Local { engine, metadata } => {
                engine
                    .execute(
                        query.to_string(),
                        variables.cloned(),
                        metadata.clone().unwrap_or_default(),
                    )
                    .await?
            }
        };
        debug!("Client::graphql -- response body: {:#?}", body);

        Client::extract_data(&mut body, result_field_opt)
    }

    fn extract_data(body: &mut Value, result_field_opt: Option<&str>) -> Result<Value, Error> {
        if let Some(errors) = body.get("errors") {
            if errors.as_array().map_or(true, |a| !a.is_empty()) {
                return Err(Error::GraphQLErrorsReturned {
                    errors: errors.clone(),
                });
            }
        }

        let data = body.as_object_mut().and_then(|m| m.remove("data"));
        let result = match result_field_opt {
            Some(result_field) => {
                data.and_then(|mut d| d.as_object_mut().and_then(|dm| dm.remove(result_field)))
            }
            None => data,
        };

        result.ok_or_else(|| Error::PayloadNotFound {
            response: body.to_owned(),
        })
    }

    /// Reads a user by id
    ///
    /// # Arguments
    ///
    /// * id - the id of the user
    /// * shape - the GraphQL selection of fields to return on the user, such as
    /// `id username recipients { id queue }`
    ///
    /// # Return
    ///
    /// A [`serde_json::Value`] containing the user
    ///
    /// # Errors
    ///
    /// As for [`graphql`]. A user id with no user behind it yields [`GraphQLErrorsReturned`].
    ///
    /// [`graphql`]: #method.graphql
    /// [`GraphQLErrorsReturned`]: ../enum.Error.html#variant.GraphQLErrorsReturned
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use notequeue::Client;
    ///
    /// # #[tokio::main]
    /// # async fn main() {
    /// let mut client = Client::new_with_http("http://localhost:3000/graphql", None).unwrap();
    ///
    /// let user = client.get_user_info("0", "id username").await;
    /// # }
    /// ```
    pub async fn get_user_info(&mut self, id: &str, shape: &str) -> Result<Value, Error> {
        trace!(
            "Client::get_user_info called -- id: {} | shape: {}",
            id,
            shape
        );

        let query = format!(
            "query GetUserInfo($id: ID!) {{ getUserInfo(id: $id) {{ {} }} }}",
            shape
        );
        let variables = json!({ "id": id });
        self.graphql(&query, Some(&variables), Some("getUserInfo"))
            .await
    }

    /// Reads a recipient by id
    ///
    /// # Arguments
    ///
    /// * id - the id of the recipient
    /// * shape - the GraphQL selection of fields to return on the recipient
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use notequeue::Client;
    ///
    /// # #[tokio::main]
    /// # async fn main() {
    /// let mut client = Client::new_with_http("http://localhost:3000/graphql", None).unwrap();
    ///
    /// let recipient = client.get_recipient_info("0", "id name queue").await;
    /// # }
    /// ```
    pub async fn get_recipient_info(&mut self, id: &str, shape: &str) -> Result<Value, Error> {
        trace!(
            "Client::get_recipient_info called -- id: {} | shape: {}",
            id,
            shape
        );

        let query = format!(
            "query GetRecipientInfo($id: ID!) {{ getRecipientInfo(id: $id) {{ {} }} }}",
            shape
        );
        let variables = json!({ "id": id });
        self.graphql(&query, Some(&variables), Some("getRecipientInfo"))
            .await
    }

    /// Appends a note to a recipient's queue and returns the updated recipient
    ///
    /// # Arguments
    ///
    /// * recipient_id - the id of the recipient
    /// * note - the note to append
    /// * shape - the GraphQL selection of fields to return on the recipient
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use notequeue::Client;
    ///
    /// # #[tokio::main]
    /// # async fn main() {
    /// let mut client = Client::new_with_http("http://localhost:3000/graphql", None).unwrap();
    ///
    /// let recipient = client.add_note_to_queue("0", "call back", "id queue").await;
    /// # }
    /// ```
    pub async fn add_note_to_queue(
        &mut self,
        recipient_id: &str,
        note: &str,
        shape: &str,
    ) -> Result<Value, Error> {
        trace!(
            "Client::add_note_to_queue called -- recipient_id: {} | note: {} | shape: {}",
            recipient_id,
            note,
            shape
        );

        let query = format!(
            "mutation AddNoteToQueue($recipientId: ID!, $note: String!) {{ addNoteToQueue(recipientId: $recipientId, note: $note) {{ {} }} }}",
            shape
        );
        let variables = json!({ "recipientId": recipient_id, "note": note });
        self.graphql(&query, Some(&variables), Some("addNoteToQueue"))
            .await
    }
}
