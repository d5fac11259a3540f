//! Client for the IBM Watson Assistant v1 service.
//!
//! Drives message turns against a workspace and manages the workspace's
//! training data: intents, examples, counterexamples, entities, values,
//! synonyms and the dialog tree.

mod models;
mod service;

#[cfg(test)]
mod tests;

pub use models::{
    Context, Counterexample, CounterexampleCollection, CreateEntity, CreateIntent, CreateValue,
    CreateWorkspaceOptions, DialogNode, DialogNodeAction, DialogNodeCollection,
    DialogNodeNextStep, DialogSuggestion, Entity, EntityCollection, Example, ExampleCollection,
    Intent, IntentCollection, ListOptions, MessageInput, MessageOptions, MessageResponse,
    OutputData, Pagination, RuntimeEntity, RuntimeIntent, Synonym, SynonymCollection,
    UpdateDialogNodeOptions, UpdateEntityOptions, UpdateIntentOptions, UpdateValueOptions, Value,
    ValueCollection, Workspace, WorkspaceCollection,
};
pub use service::Assistant;

pub use watson_core::{Authenticator, Error, Result};
