//! notequeue serves a small GraphQL API over an in-memory fixture of users and the recipients
//! they send notes to. Users and recipients are looked up by id, and notes are appended to a
//! recipient's queue with a mutation. The [`Engine`] executes GraphQL requests against the
//! fixture and can be embedded behind any transport; the [`Client`] issues the API's operations
//! over HTTP or against a local engine.
//!
//! [`Engine`]: ./engine/struct.Engine.html
//! [`Client`]: ./client/enum.Client.html

#![doc(html_root_url = "https://docs.rs/notequeue/0.1.0")]

pub use juniper;

pub use client::Client;
pub use error::Error;

pub use engine::config::Configuration;
pub use engine::context::GraphQLContext;
pub use engine::objects::{Recipient, User};
pub use engine::store::FixtureStore;
pub use engine::Engine;

pub mod client;
pub mod engine;
pub mod error;
