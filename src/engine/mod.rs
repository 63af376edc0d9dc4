//! This module provides the notequeue engine, including supporting modules for configuration,
//! the fixture store, GraphQL schema generation, and resolvers.

use crate::error::Error;
use config::Configuration;
use context::GraphQLContext;
use juniper::http::GraphQLRequest;
use juniper::InputValue;
use log::{debug, trace};
use schema::{create_root_node, RootRef};
use std::collections::HashMap;
use std::sync::Arc;
use store::FixtureStore;
use tracing::info_span;
use tracing_futures::Instrument;

pub mod config;
pub mod context;
pub mod objects;
pub mod resolvers;
pub mod schema;
pub mod store;

#[derive(Clone)]
pub struct EngineBuilder {
    config: Configuration,
    store: Option<Arc<FixtureStore>>,
    version: Option<String>,
}

impl EngineBuilder {
    /// Serves an existing store instead of seeding a new one from the configuration. The
    /// configuration is still validated.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::sync::Arc;
    /// use notequeue::{Configuration, Engine, FixtureStore};
    ///
    /// let config = Configuration::default();
    /// let store = Arc::new(FixtureStore::new(&config));
    ///
    /// let engine = Engine::new(config)
    ///     .with_store(store.clone())
    ///     .build().unwrap();
    /// ```
    pub fn with_store(mut self, store: Arc<FixtureStore>) -> EngineBuilder {
        self.store = Some(store);
        self
    }

    /// Sets the version of the app
    ///
    /// # Examples
    ///
    /// ```rust
    /// use notequeue::{Configuration, Engine};
    ///
    /// let engine = Engine::new(Configuration::default())
    ///     .with_version("1.0.0".to_string())
    ///     .build().unwrap();
    /// ```
    pub fn with_version(mut self, version: String) -> EngineBuilder {
        self.version = Some(version);
        self
    }

    /// Builds a configured [`Engine`], seeding the fixture store from the [`Configuration`]
    /// unless a store was supplied with [`with_store`].
    ///
    /// [`Engine`]: ./struct.Engine.html
    /// [`Configuration`]: ./config/struct.Configuration.html
    /// [`with_store`]: #method.with_store
    ///
    /// # Errors
    ///
    /// Returns the [`Error`] from [`Configuration::validate`] if the configuration is invalid.
    ///
    /// [`Error`]: ../enum.Error.html
    /// [`Configuration::validate`]: ./config/struct.Configuration.html#method.validate
    pub fn build(self) -> Result<Engine, Error> {
        trace!("EngineBuilder::build called");

        self.config.validate()?;

        let config = self.config;
        let store = self
            .store
            .unwrap_or_else(|| Arc::new(FixtureStore::new(&config)));

        Ok(Engine {
            config,
            store,
            version: self.version,
            root_node: create_root_node(),
        })
    }
}

/// A notequeue GraphQL engine.
///
/// The [`Engine`] owns the fixture store and the GraphQL schema, and executes GraphQL requests
/// against them. It holds its state behind shared handles, so clones serve the same store.
///
/// [`Engine`]: ./struct.Engine.html
///
/// # Examples
///
/// ```rust
/// use notequeue::{Configuration, Engine};
///
/// let engine = Engine::new(Configuration::default()).build().unwrap();
/// ```
#[derive(Clone)]
pub struct Engine {
    config: Configuration,
    store: Arc<FixtureStore>,
    version: Option<String>,
    root_node: RootRef,
}

impl Engine {
    /// Creates a new [`EngineBuilder`] for the given configuration
    ///
    /// [`EngineBuilder`]: ./struct.EngineBuilder.html
    #[allow(clippy::new_ret_no_self)]
    pub fn new(config: Configuration) -> EngineBuilder {
        EngineBuilder {
            config,
            store: None,
            version: None,
        }
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    /// Returns a handle to the store the engine serves
    pub fn store(&self) -> Arc<FixtureStore> {
        self.store.clone()
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// Renders the engine's schema in GraphQL schema definition language
    pub fn schema_sdl(&self) -> String {
        self.root_node.as_schema_language()
    }

    /// Executes a GraphQL request and returns the response envelope, holding a `data` object
    /// and, if any field failed, an `errors` array.
    ///
    /// # Arguments
    ///
    /// * query - text of the GraphQL document
    /// * variables - an optional [`serde_json::Value`] object of variable values
    /// * metadata - request metadata made available to resolvers through the context
    ///
    /// # Errors
    ///
    /// Returns [`SerializationFailed`] if the variables cannot be converted into GraphQL input
    /// values, or the response cannot be converted to JSON. Lookup misses and query errors are
    /// not returned as `Err`; they are reported in the envelope's `errors` array.
    ///
    /// [`SerializationFailed`]: ../enum.Error.html#variant.SerializationFailed
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use std::collections::HashMap;
    /// # use notequeue::{Configuration, Engine};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let engine = Engine::new(Configuration::default()).build()?;
    ///
    /// let result = engine
    ///     .execute(
    ///         "query { getUserInfo(id: 0) { username } }".to_string(),
    ///         None,
    ///         HashMap::new(),
    ///     )
    ///     .await?;
    ///
    /// assert_eq!(result["data"]["getUserInfo"]["username"], "kenbellows");
    /// # Ok(())
    /// # }
    /// ```
    pub async fn execute(
        &self,
        query: String,
        variables: Option<serde_json::Value>,
        metadata: HashMap<String, String>,
    ) -> Result<serde_json::Value, Error> {
        debug!(
            "Engine::execute called -- query: {} | variables: {:#?} | metadata: {:#?}",
            query, variables, metadata
        );

        let variables = variables
            .map(serde_json::from_value::<InputValue>)
            .transpose()?;
        let req = GraphQLRequest::new(query, None, variables);

        let ctx = GraphQLContext::new(self.store.clone(), metadata, self.version.clone());
        let res = req
            .execute(&*self.root_node, &ctx)
            .instrument(info_span!("nq-engine-execute"))
            .await;

        let body = serde_json::to_value(&res)?;
        debug!("Engine::execute -- response: {:#?}", body);

        Ok(body)
    }
}
