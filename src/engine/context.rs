//! This module provides a Juniper Context for notequeue GraphQL queries. The context carries a
//! handle to the fixture store along with per-request metadata.

use crate::engine::store::FixtureStore;
use juniper::Context;
use std::collections::HashMap;
use std::sync::Arc;

/// Juniper Context for notequeue's GraphQL queries. The [`GraphQLContext`] is used to pass the
/// shared [`FixtureStore`] in to the resolvers.
///
/// [`GraphQLContext`]: ./struct.GraphQLContext.html
/// [`FixtureStore`]: ../store/struct.FixtureStore.html
pub struct GraphQLContext {
    store: Arc<FixtureStore>,
    metadata: HashMap<String, String>,
    version: Option<String>,
}

impl GraphQLContext {
    pub fn new(
        store: Arc<FixtureStore>,
        metadata: HashMap<String, String>,
        version: Option<String>,
    ) -> GraphQLContext {
        GraphQLContext {
            store,
            metadata,
            version,
        }
    }

    pub fn store(&self) -> &FixtureStore {
        &self.store
    }

    /// Request metadata passed to the engine's `execute` method, such as HTTP headers forwarded
    /// by the embedding server
    pub fn metadata(&self) -> &HashMap<String, String> {
        &self.metadata
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }
}

impl Context for GraphQLContext {}
