//! Assistant v1 operations.

use reqwest::Method;
use serde::Serialize;
use serde_json::Value as Json;

use watson_core::{
    not_empty, Authenticator, Result, ServiceCredentials, ServiceRequest, WatsonService,
};

use crate::models::{
    Context, Counterexample, CounterexampleCollection, CreateEntity, CreateIntent, CreateValue,
    CreateWorkspaceOptions, DialogNode, DialogNodeCollection, DialogNodeNextStep, Entity,
    EntityCollection, Example, ExampleCollection, Intent, IntentCollection, ListOptions,
    MessageInput, MessageOptions, MessageResponse, OutputData, RuntimeEntity, RuntimeIntent,
    Synonym, SynonymCollection, UpdateDialogNodeOptions, UpdateEntityOptions, UpdateIntentOptions,
    UpdateValueOptions, Value, ValueCollection, Workspace, WorkspaceCollection,
};

const SERVICE_NAME: &str = "assistant";

#[derive(Serialize)]
struct MessageRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    input: Option<MessageInput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    alternate_intents: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    context: Option<Context>,
    #[serde(skip_serializing_if = "Option::is_none")]
    entities: Option<Vec<RuntimeEntity>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    intents: Option<Vec<RuntimeIntent>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    output: Option<OutputData>,
}

#[derive(Serialize)]
struct WorkspaceRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    metadata: Option<Json>,
    #[serde(skip_serializing_if = "Option::is_none")]
    learning_opt_out: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_settings: Option<Json>,
    #[serde(skip_serializing_if = "Option::is_none")]
    intents: Option<Vec<CreateIntent>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    entities: Option<Vec<CreateEntity>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    dialog_nodes: Option<Vec<DialogNode>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    counterexamples: Option<Vec<Counterexample>>,
}

#[derive(Serialize)]
struct IntentRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    intent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    examples: Option<Vec<Example>>,
}

#[derive(Serialize)]
struct TextRequest {
    text: String,
}

#[derive(Serialize)]
struct EntityRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    entity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    metadata: Option<Json>,
    #[serde(skip_serializing_if = "Option::is_none")]
    fuzzy_match: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    values: Option<Vec<CreateValue>>,
}

#[derive(Serialize)]
struct ValueRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    metadata: Option<Json>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    value_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    synonyms: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    patterns: Option<Vec<String>>,
}

#[derive(Serialize)]
struct SynonymRequest {
    synonym: String,
}

#[derive(Serialize)]
struct DialogNodeUpdateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    dialog_node: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    conditions: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    parent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    previous_sibling: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    output: Option<Json>,
    #[serde(skip_serializing_if = "Option::is_none")]
    context: Option<Json>,
    #[serde(skip_serializing_if = "Option::is_none")]
    metadata: Option<Json>,
    #[serde(skip_serializing_if = "Option::is_none")]
    next_step: Option<DialogNodeNextStep>,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    node_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    user_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    disabled: Option<bool>,
}

/// Assistant service client.
pub struct Assistant {
    service: WatsonService,
}

impl Assistant {
    pub const DEFAULT_URL: &'static str = "https://gateway.watsonplatform.net/assistant/api";

    /// `version` is the API version date (yyyy-MM-dd) sent with every call.
    pub fn new(version: impl Into<String>, authenticator: Authenticator) -> Result<Self> {
        let version = version.into();
        not_empty(&version, "version")?;
        let service =
            WatsonService::new(SERVICE_NAME, Self::DEFAULT_URL, authenticator)?.with_version(version);
        Ok(Self { service })
    }

    /// Build a client from `WATSON_ASSISTANT_*` environment variables.
    pub fn from_env(version: impl Into<String>) -> Result<Self> {
        let credentials = ServiceCredentials::from_env(SERVICE_NAME)?;
        let mut client = Self::new(version, credentials.authenticator)?;
        if let Some(url) = credentials.url {
            client.set_endpoint(&url)?;
        }
        Ok(client)
    }

    pub fn set_endpoint(&mut self, endpoint: &str) -> Result<()> {
        self.service.set_endpoint(endpoint)
    }

    /// Send one turn of conversation to a workspace.
    pub async fn message(
        &self,
        workspace_id: &str,
        options: MessageOptions,
    ) -> Result<MessageResponse> {
        not_empty(workspace_id, "workspace_id")?;
        let body = MessageRequest {
            input: options.input,
            alternate_intents: options.alternate_intents,
            context: options.context,
            entities: options.entities,
            intents: options.intents,
            output: options.output,
        };
        let mut request = self
            .service
            .request(Method::POST, &["v1", "workspaces", workspace_id, "message"])?
            .json(&body)?;
        if let Some(details) = options.nodes_visited_details {
            request = request.query("nodes_visited_details", details);
        }
        self.service.send_json(request).await
    }

    /// Create a workspace, optionally seeded with training data.
    pub async fn create_workspace(&self, options: CreateWorkspaceOptions) -> Result<Workspace> {
        let request = self
            .service
            .request(Method::POST, &["v1", "workspaces"])?
            .json(&workspace_request(options))?;
        self.service.send_json(request).await
    }

    pub async fn list_workspaces(&self, options: ListOptions) -> Result<WorkspaceCollection> {
        let request = self.service.request(Method::GET, &["v1", "workspaces"])?;
        let request = apply_list_options(request, options);
        self.service.send_json(request).await
    }

    /// Get a workspace. With `export`, the full training data is included.
    pub async fn get_workspace(
        &self,
        workspace_id: &str,
        export: Option<bool>,
        include_audit: Option<bool>,
    ) -> Result<Workspace> {
        not_empty(workspace_id, "workspace_id")?;
        let mut request = self
            .service
            .request(Method::GET, &["v1", "workspaces", workspace_id])?;
        if let Some(export) = export {
            request = request.query("export", export);
        }
        if let Some(include_audit) = include_audit {
            request = request.query("include_audit", include_audit);
        }
        self.service.send_json(request).await
    }

    pub async fn update_workspace(
        &self,
        workspace_id: &str,
        options: CreateWorkspaceOptions,
    ) -> Result<Workspace> {
        not_empty(workspace_id, "workspace_id")?;
        let request = self
            .service
            .request(Method::POST, &["v1", "workspaces", workspace_id])?
            .json(&workspace_request(options))?;
        self.service.send_json(request).await
    }

    pub async fn delete_workspace(&self, workspace_id: &str) -> Result<()> {
        not_empty(workspace_id, "workspace_id")?;
        let request = self
            .service
            .request(Method::DELETE, &["v1", "workspaces", workspace_id])?;
        self.service.send_no_content(request).await
    }

    /// Create an intent in a workspace.
    pub async fn create_intent(&self, workspace_id: &str, intent: CreateIntent) -> Result<Intent> {
        not_empty(workspace_id, "workspace_id")?;
        not_empty(&intent.intent, "intent")?;
        let request = self
            .service
            .request(Method::POST, &["v1", "workspaces", workspace_id, "intents"])?
            .json(&intent)?;
        self.service.send_json(request).await
    }

    pub async fn list_intents(
        &self,
        workspace_id: &str,
        export: Option<bool>,
        options: ListOptions,
    ) -> Result<IntentCollection> {
        not_empty(workspace_id, "workspace_id")?;
        let mut request = self
            .service
            .request(Method::GET, &["v1", "workspaces", workspace_id, "intents"])?;
        if let Some(export) = export {
            request = request.query("export", export);
        }
        let request = apply_list_options(request, options);
        self.service.send_json(request).await
    }

    pub async fn get_intent(
        &self,
        workspace_id: &str,
        intent: &str,
        export: Option<bool>,
    ) -> Result<Intent> {
        not_empty(workspace_id, "workspace_id")?;
        not_empty(intent, "intent")?;
        let mut request = self.service.request(
            Method::GET,
            &["v1", "workspaces", workspace_id, "intents", intent],
        )?;
        if let Some(export) = export {
            request = request.query("export", export);
        }
        self.service.send_json(request).await
    }

    pub async fn update_intent(
        &self,
        workspace_id: &str,
        intent: &str,
        options: UpdateIntentOptions,
    ) -> Result<Intent> {
        not_empty(workspace_id, "workspace_id")?;
        not_empty(intent, "intent")?;
        let body = IntentRequest {
            intent: options.new_intent,
            description: options.new_description,
            examples: options.new_examples,
        };
        let request = self
            .service
            .request(
                Method::POST,
                &["v1", "workspaces", workspace_id, "intents", intent],
            )?
            .json(&body)?;
        self.service.send_json(request).await
    }

    pub async fn delete_intent(&self, workspace_id: &str, intent: &str) -> Result<()> {
        not_empty(workspace_id, "workspace_id")?;
        not_empty(intent, "intent")?;
        let request = self.service.request(
            Method::DELETE,
            &["v1", "workspaces", workspace_id, "intents", intent],
        )?;
        self.service.send_no_content(request).await
    }

    /// Add a training example to an intent.
    pub async fn create_example(
        &self,
        workspace_id: &str,
        intent: &str,
        text: &str,
    ) -> Result<Example> {
        not_empty(workspace_id, "workspace_id")?;
        not_empty(intent, "intent")?;
        not_empty(text, "text")?;
        let body = TextRequest {
            text: text.to_string(),
        };
        let request = self
            .service
            .request(
                Method::POST,
                &["v1", "workspaces", workspace_id, "intents", intent, "examples"],
            )?
            .json(&body)?;
        self.service.send_json(request).await
    }

    pub async fn list_examples(
        &self,
        workspace_id: &str,
        intent: &str,
        options: ListOptions,
    ) -> Result<ExampleCollection> {
        not_empty(workspace_id, "workspace_id")?;
        not_empty(intent, "intent")?;
        let request = self.service.request(
            Method::GET,
            &["v1", "workspaces", workspace_id, "intents", intent, "examples"],
        )?;
        let request = apply_list_options(request, options);
        self.service.send_json(request).await
    }

    pub async fn get_example(
        &self,
        workspace_id: &str,
        intent: &str,
        text: &str,
    ) -> Result<Example> {
        not_empty(workspace_id, "workspace_id")?;
        not_empty(intent, "intent")?;
        not_empty(text, "text")?;
        let request = self.service.request(
            Method::GET,
            &[
                "v1",
                "workspaces",
                workspace_id,
                "intents",
                intent,
                "examples",
                text,
            ],
        )?;
        self.service.send_json(request).await
    }

    pub async fn update_example(
        &self,
        workspace_id: &str,
        intent: &str,
        text: &str,
        new_text: &str,
    ) -> Result<Example> {
        not_empty(workspace_id, "workspace_id")?;
        not_empty(intent, "intent")?;
        not_empty(text, "text")?;
        not_empty(new_text, "new_text")?;
        let body = TextRequest {
            text: new_text.to_string(),
        };
        let request = self
            .service
            .request(
                Method::POST,
                &[
                    "v1",
                    "workspaces",
                    workspace_id,
                    "intents",
                    intent,
                    "examples",
                    text,
                ],
            )?
            .json(&body)?;
        self.service.send_json(request).await
    }

    pub async fn delete_example(
        &self,
        workspace_id: &str,
        intent: &str,
        text: &str,
    ) -> Result<()> {
        not_empty(workspace_id, "workspace_id")?;
        not_empty(intent, "intent")?;
        not_empty(text, "text")?;
        let request = self.service.request(
            Method::DELETE,
            &[
                "v1",
                "workspaces",
                workspace_id,
                "intents",
                intent,
                "examples",
                text,
            ],
        )?;
        self.service.send_no_content(request).await
    }

    /// Add a counterexample, an input that should match nothing.
    pub async fn create_counterexample(
        &self,
        workspace_id: &str,
        text: &str,
    ) -> Result<Counterexample> {
        not_empty(workspace_id, "workspace_id")?;
        not_empty(text, "text")?;
        let body = TextRequest {
            text: text.to_string(),
        };
        let request = self
            .service
            .request(
                Method::POST,
                &["v1", "workspaces", workspace_id, "counterexamples"],
            )?
            .json(&body)?;
        self.service.send_json(request).await
    }

    pub async fn list_counterexamples(
        &self,
        workspace_id: &str,
        options: ListOptions,
    ) -> Result<CounterexampleCollection> {
        not_empty(workspace_id, "workspace_id")?;
        let request = self.service.request(
            Method::GET,
            &["v1", "workspaces", workspace_id, "counterexamples"],
        )?;
        let request = apply_list_options(request, options);
        self.service.send_json(request).await
    }

    pub async fn get_counterexample(
        &self,
        workspace_id: &str,
        text: &str,
    ) -> Result<Counterexample> {
        not_empty(workspace_id, "workspace_id")?;
        not_empty(text, "text")?;
        let request = self.service.request(
            Method::GET,
            &["v1", "workspaces", workspace_id, "counterexamples", text],
        )?;
        self.service.send_json(request).await
    }

    pub async fn update_counterexample(
        &self,
        workspace_id: &str,
        text: &str,
        new_text: &str,
    ) -> Result<Counterexample> {
        not_empty(workspace_id, "workspace_id")?;
        not_empty(text, "text")?;
        not_empty(new_text, "new_text")?;
        let body = TextRequest {
            text: new_text.to_string(),
        };
        let request = self
            .service
            .request(
                Method::POST,
                &["v1", "workspaces", workspace_id, "counterexamples", text],
            )?
            .json(&body)?;
        self.service.send_json(request).await
    }

    pub async fn delete_counterexample(&self, workspace_id: &str, text: &str) -> Result<()> {
        not_empty(workspace_id, "workspace_id")?;
        not_empty(text, "text")?;
        let request = self.service.request(
            Method::DELETE,
            &["v1", "workspaces", workspace_id, "counterexamples", text],
        )?;
        self.service.send_no_content(request).await
    }

    /// Create an entity in a workspace.
    pub async fn create_entity(&self, workspace_id: &str, entity: CreateEntity) -> Result<Entity> {
        not_empty(workspace_id, "workspace_id")?;
        not_empty(&entity.entity, "entity")?;
        let request = self
            .service
            .request(Method::POST, &["v1", "workspaces", workspace_id, "entities"])?
            .json(&entity)?;
        self.service.send_json(request).await
    }

    pub async fn list_entities(
        &self,
        workspace_id: &str,
        export: Option<bool>,
        options: ListOptions,
    ) -> Result<EntityCollection> {
        not_empty(workspace_id, "workspace_id")?;
        let mut request = self
            .service
            .request(Method::GET, &["v1", "workspaces", workspace_id, "entities"])?;
        if let Some(export) = export {
            request = request.query("export", export);
        }
        let request = apply_list_options(request, options);
        self.service.send_json(request).await
    }

    pub async fn get_entity(
        &self,
        workspace_id: &str,
        entity: &str,
        export: Option<bool>,
    ) -> Result<Entity> {
        not_empty(workspace_id, "workspace_id")?;
        not_empty(entity, "entity")?;
        let mut request = self.service.request(
            Method::GET,
            &["v1", "workspaces", workspace_id, "entities", entity],
        )?;
        if let Some(export) = export {
            request = request.query("export", export);
        }
        self.service.send_json(request).await
    }

    pub async fn update_entity(
        &self,
        workspace_id: &str,
        entity: &str,
        options: UpdateEntityOptions,
    ) -> Result<Entity> {
        not_empty(workspace_id, "workspace_id")?;
        not_empty(entity, "entity")?;
        let body = EntityRequest {
            entity: options.new_entity,
            description: options.new_description,
            metadata: options.new_metadata,
            fuzzy_match: options.new_fuzzy_match,
            values: options.new_values,
        };
        let request = self
            .service
            .request(
                Method::POST,
                &["v1", "workspaces", workspace_id, "entities", entity],
            )?
            .json(&body)?;
        self.service.send_json(request).await
    }

    pub async fn delete_entity(&self, workspace_id: &str, entity: &str) -> Result<()> {
        not_empty(workspace_id, "workspace_id")?;
        not_empty(entity, "entity")?;
        let request = self.service.request(
            Method::DELETE,
            &["v1", "workspaces", workspace_id, "entities", entity],
        )?;
        self.service.send_no_content(request).await
    }

    /// Add a value to an entity.
    pub async fn create_value(
        &self,
        workspace_id: &str,
        entity: &str,
        value: CreateValue,
    ) -> Result<Value> {
        not_empty(workspace_id, "workspace_id")?;
        not_empty(entity, "entity")?;
        not_empty(&value.value, "value")?;
        let request = self
            .service
            .request(
                Method::POST,
                &["v1", "workspaces", workspace_id, "entities", entity, "values"],
            )?
            .json(&value)?;
        self.service.send_json(request).await
    }

    pub async fn list_values(
        &self,
        workspace_id: &str,
        entity: &str,
        export: Option<bool>,
        options: ListOptions,
    ) -> Result<ValueCollection> {
        not_empty(workspace_id, "workspace_id")?;
        not_empty(entity, "entity")?;
        let mut request = self.service.request(
            Method::GET,
            &["v1", "workspaces", workspace_id, "entities", entity, "values"],
        )?;
        if let Some(export) = export {
            request = request.query("export", export);
        }
        let request = apply_list_options(request, options);
        self.service.send_json(request).await
    }

    pub async fn get_value(
        &self,
        workspace_id: &str,
        entity: &str,
        value: &str,
        export: Option<bool>,
    ) -> Result<Value> {
        not_empty(workspace_id, "workspace_id")?;
        not_empty(entity, "entity")?;
        not_empty(value, "value")?;
        let mut request = self.service.request(
            Method::GET,
            &[
                "v1",
                "workspaces",
                workspace_id,
                "entities",
                entity,
                "values",
                value,
            ],
        )?;
        if let Some(export) = export {
            request = request.query("export", export);
        }
        self.service.send_json(request).await
    }

    pub async fn update_value(
        &self,
        workspace_id: &str,
        entity: &str,
        value: &str,
        options: UpdateValueOptions,
    ) -> Result<Value> {
        not_empty(workspace_id, "workspace_id")?;
        not_empty(entity, "entity")?;
        not_empty(value, "value")?;
        let body = ValueRequest {
            value: options.new_value,
            metadata: options.new_metadata,
            value_type: options.new_value_type,
            synonyms: options.new_synonyms,
            patterns: options.new_patterns,
        };
        let request = self
            .service
            .request(
                Method::POST,
                &[
                    "v1",
                    "workspaces",
                    workspace_id,
                    "entities",
                    entity,
                    "values",
                    value,
                ],
            )?
            .json(&body)?;
        self.service.send_json(request).await
    }

    pub async fn delete_value(
        &self,
        workspace_id: &str,
        entity: &str,
        value: &str,
    ) -> Result<()> {
        not_empty(workspace_id, "workspace_id")?;
        not_empty(entity, "entity")?;
        not_empty(value, "value")?;
        let request = self.service.request(
            Method::DELETE,
            &[
                "v1",
                "workspaces",
                workspace_id,
                "entities",
                entity,
                "values",
                value,
            ],
        )?;
        self.service.send_no_content(request).await
    }

    /// Add a synonym to an entity value.
    pub async fn create_synonym(
        &self,
        workspace_id: &str,
        entity: &str,
        value: &str,
        synonym: &str,
    ) -> Result<Synonym> {
        not_empty(workspace_id, "workspace_id")?;
        not_empty(entity, "entity")?;
        not_empty(value, "value")?;
        not_empty(synonym, "synonym")?;
        let body = SynonymRequest {
            synonym: synonym.to_string(),
        };
        let request = self
            .service
            .request(
                Method::POST,
                &[
                    "v1",
                    "workspaces",
                    workspace_id,
                    "entities",
                    entity,
                    "values",
                    value,
                    "synonyms",
                ],
            )?
            .json(&body)?;
        self.service.send_json(request).await
    }

    pub async fn list_synonyms(
        &self,
        workspace_id: &str,
        entity: &str,
        value: &str,
        options: ListOptions,
    ) -> Result<SynonymCollection> {
        not_empty(workspace_id, "workspace_id")?;
        not_empty(entity, "entity")?;
        not_empty(value, "value")?;
        let request = self.service.request(
            Method::GET,
            &[
                "v1",
                "workspaces",
                workspace_id,
                "entities",
                entity,
                "values",
                value,
                "synonyms",
            ],
        )?;
        let request = apply_list_options(request, options);
        self.service.send_json(request).await
    }

    pub async fn get_synonym(
        &self,
        workspace_id: &str,
        entity: &str,
        value: &str,
        synonym: &str,
    ) -> Result<Synonym> {
        not_empty(workspace_id, "workspace_id")?;
        not_empty(entity, "entity")?;
        not_empty(value, "value")?;
        not_empty(synonym, "synonym")?;
        let request = self.service.request(
            Method::GET,
            &[
                "v1",
                "workspaces",
                workspace_id,
                "entities",
                entity,
                "values",
                value,
                "synonyms",
                synonym,
            ],
        )?;
        self.service.send_json(request).await
    }

    pub async fn update_synonym(
        &self,
        workspace_id: &str,
        entity: &str,
        value: &str,
        synonym: &str,
        new_synonym: &str,
    ) -> Result<Synonym> {
        not_empty(workspace_id, "workspace_id")?;
        not_empty(entity, "entity")?;
        not_empty(value, "value")?;
        not_empty(synonym, "synonym")?;
        not_empty(new_synonym, "new_synonym")?;
        let body = SynonymRequest {
            synonym: new_synonym.to_string(),
        };
        let request = self
            .service
            .request(
                Method::POST,
                &[
                    "v1",
                    "workspaces",
                    workspace_id,
                    "entities",
                    entity,
                    "values",
                    value,
                    "synonyms",
                    synonym,
                ],
            )?
            .json(&body)?;
        self.service.send_json(request).await
    }

    pub async fn delete_synonym(
        &self,
        workspace_id: &str,
        entity: &str,
        value: &str,
        synonym: &str,
    ) -> Result<()> {
        not_empty(workspace_id, "workspace_id")?;
        not_empty(entity, "entity")?;
        not_empty(value, "value")?;
        not_empty(synonym, "synonym")?;
        let request = self.service.request(
            Method::DELETE,
            &[
                "v1",
                "workspaces",
                workspace_id,
                "entities",
                entity,
                "values",
                value,
                "synonyms",
                synonym,
            ],
        )?;
        self.service.send_no_content(request).await
    }

    /// Add a node to the dialog tree.
    pub async fn create_dialog_node(
        &self,
        workspace_id: &str,
        dialog_node: DialogNode,
    ) -> Result<DialogNode> {
        not_empty(workspace_id, "workspace_id")?;
        not_empty(&dialog_node.dialog_node, "dialog_node")?;
        let request = self
            .service
            .request(
                Method::POST,
                &["v1", "workspaces", workspace_id, "dialog_nodes"],
            )?
            .json(&dialog_node)?;
        self.service.send_json(request).await
    }

    pub async fn list_dialog_nodes(
        &self,
        workspace_id: &str,
        options: ListOptions,
    ) -> Result<DialogNodeCollection> {
        not_empty(workspace_id, "workspace_id")?;
        let request = self.service.request(
            Method::GET,
            &["v1", "workspaces", workspace_id, "dialog_nodes"],
        )?;
        let request = apply_list_options(request, options);
        self.service.send_json(request).await
    }

    pub async fn get_dialog_node(
        &self,
        workspace_id: &str,
        dialog_node: &str,
    ) -> Result<DialogNode> {
        not_empty(workspace_id, "workspace_id")?;
        not_empty(dialog_node, "dialog_node")?;
        let request = self.service.request(
            Method::GET,
            &["v1", "workspaces", workspace_id, "dialog_nodes", dialog_node],
        )?;
        self.service.send_json(request).await
    }

    pub async fn update_dialog_node(
        &self,
        workspace_id: &str,
        dialog_node: &str,
        options: UpdateDialogNodeOptions,
    ) -> Result<DialogNode> {
        not_empty(workspace_id, "workspace_id")?;
        not_empty(dialog_node, "dialog_node")?;
        let body = DialogNodeUpdateRequest {
            dialog_node: options.new_dialog_node,
            description: options.new_description,
            conditions: options.new_conditions,
            parent: options.new_parent,
            previous_sibling: options.new_previous_sibling,
            output: options.new_output,
            context: options.new_context,
            metadata: options.new_metadata,
            next_step: options.new_next_step,
            title: options.new_title,
            node_type: options.new_node_type,
            user_label: options.new_user_label,
            disabled: options.new_disabled,
        };
        let request = self
            .service
            .request(
                Method::POST,
                &["v1", "workspaces", workspace_id, "dialog_nodes", dialog_node],
            )?
            .json(&body)?;
        self.service.send_json(request).await
    }

    pub async fn delete_dialog_node(&self, workspace_id: &str, dialog_node: &str) -> Result<()> {
        not_empty(workspace_id, "workspace_id")?;
        not_empty(dialog_node, "dialog_node")?;
        let request = self.service.request(
            Method::DELETE,
            &["v1", "workspaces", workspace_id, "dialog_nodes", dialog_node],
        )?;
        self.service.send_no_content(request).await
    }
}

fn workspace_request(options: CreateWorkspaceOptions) -> WorkspaceRequest {
    WorkspaceRequest {
        name: options.name,
        description: options.description,
        language: options.language,
        metadata: options.metadata,
        learning_opt_out: options.learning_opt_out,
        system_settings: options.system_settings,
        intents: options.intents,
        entities: options.entities,
        dialog_nodes: options.dialog_nodes,
        counterexamples: options.counterexamples,
    }
}

fn apply_list_options(mut request: ServiceRequest, options: ListOptions) -> ServiceRequest {
    if let Some(page_limit) = options.page_limit {
        request = request.query("page_limit", page_limit);
    }
    if let Some(include_count) = options.include_count {
        request = request.query("include_count", include_count);
    }
    if let Some(sort) = options.sort {
        request = request.query("sort", sort);
    }
    if let Some(cursor) = options.cursor {
        request = request.query("cursor", cursor);
    }
    if let Some(include_audit) = options.include_audit {
        request = request.query("include_audit", include_audit);
    }
    request
}
