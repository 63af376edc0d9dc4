//! This module wires the resolvers into the GraphQL root query and mutation objects:
//!
//! ```graphql
//! type Recipient { id: ID!, name: String, address: String!, queue: [String]! }
//! type User      { id: ID!, username: String!, recipients: [Recipient]! }
//!
//! type Query {
//!   getUserInfo(id: ID!): User
//!   getRecipientInfo(id: ID!): Recipient
//! }
//!
//! type Mutation {
//!   addNoteToQueue(recipientId: ID!, note: String!): Recipient
//! }
//! ```

use crate::engine::context::GraphQLContext;
use crate::engine::objects::{Recipient, User};
use crate::engine::resolvers;
use juniper::{graphql_object, EmptySubscription, FieldResult, RootNode, ID};
use std::sync::Arc;

/// Root query object
#[derive(Clone, Copy, Debug, Default)]
pub struct Query;

#[graphql_object(context = GraphQLContext)]
impl Query {
    fn get_user_info(&self, context: &GraphQLContext, id: ID) -> FieldResult<Option<User>> {
        Ok(Some(resolvers::get_user_info(context.store(), &id)?))
    }

    fn get_recipient_info(
        &self,
        context: &GraphQLContext,
        id: ID,
    ) -> FieldResult<Option<Recipient>> {
        Ok(Some(resolvers::get_recipient_info(context.store(), &id)?))
    }
}

/// Root mutation object
#[derive(Clone, Copy, Debug, Default)]
pub struct Mutation;

#[graphql_object(context = GraphQLContext)]
impl Mutation {
    fn add_note_to_queue(
        &self,
        context: &GraphQLContext,
        recipient_id: ID,
        note: String,
    ) -> FieldResult<Option<Recipient>> {
        Ok(Some(resolvers::add_note_to_queue(
            context.store(),
            &recipient_id,
            &note,
        )?))
    }
}

/// The schema root node type served by the engine
pub type RootRef = Arc<RootNode<'static, Query, Mutation, EmptySubscription<GraphQLContext>>>;

pub(crate) fn create_root_node() -> RootRef {
    Arc::new(RootNode::new(Query, Mutation, EmptySubscription::new()))
}

#[cfg(test)]
mod tests {
    use super::create_root_node;

    /// Passes if the rendered schema carries the exact root field and type signatures
    #[test]
    fn schema_language() {
        let sdl = create_root_node().as_schema_language();

        assert!(sdl.contains("getUserInfo(id: ID!): User"));
        assert!(sdl.contains("getRecipientInfo(id: ID!): Recipient"));
        assert!(sdl.contains("addNoteToQueue(recipientId: ID!, note: String!): Recipient"));
        assert!(sdl.contains("queue: [String]!"));
        assert!(sdl.contains("recipients: [Recipient]!"));
        assert!(sdl.contains("name: String\n"));
        assert!(sdl.contains("address: String!"));
        assert!(sdl.contains("username: String!"));
    }
}
