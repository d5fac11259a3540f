//! Wire models for Assistant v1.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as Json;

/// Text input for a message turn.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MessageInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl MessageInput {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }
}

/// An intent detected in the user input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuntimeIntent {
    pub intent: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
}

/// An entity detected in the user input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuntimeEntity {
    pub entity: String,
    #[serde(default)]
    pub location: Vec<i64>,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Json>,
}

/// Conversation state carried between message turns. Fields beyond the
/// well-known ones are preserved in `extra`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Context {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversation_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<Json>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Json>,
}

/// A dialog node suggestion shown for disambiguation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DialogSuggestion {
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Json>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<Json>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dialog_node: Option<String>,
}

/// Output of a message turn.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputData {
    #[serde(default)]
    pub text: Vec<String>,
    #[serde(default)]
    pub log_messages: Vec<Json>,
    #[serde(default)]
    pub nodes_visited: Vec<String>,
    #[serde(default)]
    pub nodes_visited_details: Vec<Json>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Json>,
}

/// Response to a message turn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<MessageInput>,
    #[serde(default)]
    pub intents: Vec<RuntimeIntent>,
    #[serde(default)]
    pub entities: Vec<RuntimeEntity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternate_intents: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<Context>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<OutputData>,
}

/// Cursor-based pagination block returned by list operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pagination {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_cursor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_cursor: Option<String>,
}

/// A workspace, the container for one assistant's training data and dialog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Workspace {
    pub workspace_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Json>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub learning_opt_out: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_settings: Option<Json>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub intents: Vec<Intent>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub entities: Vec<Entity>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dialog_nodes: Vec<DialogNode>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub counterexamples: Vec<Counterexample>,
}

impl Workspace {
    pub const STATUS_NON_EXISTENT: &'static str = "Non Existent";
    pub const STATUS_TRAINING: &'static str = "Training";
    pub const STATUS_FAILED: &'static str = "Failed";
    pub const STATUS_AVAILABLE: &'static str = "Available";
    pub const STATUS_UNAVAILABLE: &'static str = "Unavailable";
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkspaceCollection {
    #[serde(default)]
    pub workspaces: Vec<Workspace>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
}

/// A user input example attached to an intent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Example {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,
}

impl Example {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            created: None,
            updated: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExampleCollection {
    #[serde(default)]
    pub examples: Vec<Example>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
}

/// An intent, with its training examples.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Intent {
    pub intent: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<Example>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntentCollection {
    #[serde(default)]
    pub intents: Vec<Intent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
}

/// Payload for creating an intent, standalone or inside a workspace.
#[derive(Debug, Clone, Serialize)]
pub struct CreateIntent {
    pub intent: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<Example>,
}

impl CreateIntent {
    pub fn new(intent: impl Into<String>) -> Self {
        Self {
            intent: intent.into(),
            description: None,
            examples: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_examples(mut self, examples: Vec<Example>) -> Self {
        self.examples = examples;
        self
    }
}

/// An input that should match no intent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Counterexample {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,
}

impl Counterexample {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            created: None,
            updated: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CounterexampleCollection {
    #[serde(default)]
    pub counterexamples: Vec<Counterexample>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
}

/// An entity value, matched by synonyms or patterns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Value {
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Json>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub value_type: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub synonyms: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub patterns: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,
}

impl Value {
    pub const TYPE_SYNONYMS: &'static str = "synonyms";
    pub const TYPE_PATTERNS: &'static str = "patterns";
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValueCollection {
    #[serde(default)]
    pub values: Vec<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
}

/// Payload for creating an entity value.
#[derive(Debug, Clone, Serialize)]
pub struct CreateValue {
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Json>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub value_type: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub synonyms: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub patterns: Vec<String>,
}

impl CreateValue {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            metadata: None,
            value_type: None,
            synonyms: Vec::new(),
            patterns: Vec::new(),
        }
    }

    pub fn with_metadata(mut self, metadata: Json) -> Self {
        self.metadata = Some(metadata);
        self
    }

    pub fn with_value_type(mut self, value_type: impl Into<String>) -> Self {
        self.value_type = Some(value_type.into());
        self
    }

    pub fn with_synonyms(mut self, synonyms: Vec<String>) -> Self {
        self.synonyms = synonyms;
        self
    }

    pub fn with_patterns(mut self, patterns: Vec<String>) -> Self {
        self.patterns = patterns;
        self
    }
}

/// An entity, with its values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    pub entity: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Json>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fuzzy_match: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityCollection {
    #[serde(default)]
    pub entities: Vec<Entity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
}

/// Payload for creating an entity, standalone or inside a workspace.
#[derive(Debug, Clone, Serialize)]
pub struct CreateEntity {
    pub entity: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Json>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fuzzy_match: Option<bool>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<CreateValue>,
}

impl CreateEntity {
    pub fn new(entity: impl Into<String>) -> Self {
        Self {
            entity: entity.into(),
            description: None,
            metadata: None,
            fuzzy_match: None,
            values: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_metadata(mut self, metadata: Json) -> Self {
        self.metadata = Some(metadata);
        self
    }

    pub fn with_fuzzy_match(mut self, fuzzy_match: bool) -> Self {
        self.fuzzy_match = Some(fuzzy_match);
        self
    }

    pub fn with_values(mut self, values: Vec<CreateValue>) -> Self {
        self.values = values;
        self
    }
}

/// A synonym of an entity value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Synonym {
    pub synonym: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SynonymCollection {
    #[serde(default)]
    pub synonyms: Vec<Synonym>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
}

/// Where dialog continues after a node finishes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DialogNodeNextStep {
    pub behavior: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dialog_node: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selector: Option<String>,
}

/// A programmatic action invoked by a dialog node.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DialogNodeAction {
    pub name: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub action_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Json>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result_variable: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credentials: Option<String>,
}

/// A node of the dialog tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DialogNode {
    pub dialog_node: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conditions: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_sibling: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<Json>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<Json>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Json>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_step: Option<DialogNodeNextStep>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub node_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variable: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<DialogNodeAction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub digress_in: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub digress_out: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub digress_out_slots: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,
}

impl DialogNode {
    pub const TYPE_STANDARD: &'static str = "standard";
    pub const TYPE_EVENT_HANDLER: &'static str = "event_handler";
    pub const TYPE_FRAME: &'static str = "frame";
    pub const TYPE_SLOT: &'static str = "slot";
    pub const TYPE_RESPONSE_CONDITION: &'static str = "response_condition";
    pub const TYPE_FOLDER: &'static str = "folder";

    pub const EVENT_FOCUS: &'static str = "focus";
    pub const EVENT_INPUT: &'static str = "input";
    pub const EVENT_FILLED: &'static str = "filled";
    pub const EVENT_VALIDATE: &'static str = "validate";
    pub const EVENT_FILLED_MULTIPLE: &'static str = "filled_multiple";
    pub const EVENT_GENERIC: &'static str = "generic";
    pub const EVENT_NOMATCH: &'static str = "nomatch";
    pub const EVENT_NOMATCH_RESPONSES_DEPLETED: &'static str = "nomatch_responses_depleted";
    pub const EVENT_DIGRESSION_RETURN_PROMPT: &'static str = "digression_return_prompt";

    pub const DIGRESS_IN_NOT_AVAILABLE: &'static str = "not_available";
    pub const DIGRESS_IN_RETURNS: &'static str = "returns";
    pub const DIGRESS_IN_DOES_NOT_RETURN: &'static str = "does_not_return";

    pub const DIGRESS_OUT_ALLOW_RETURNING: &'static str = "allow_returning";
    pub const DIGRESS_OUT_ALLOW_ALL: &'static str = "allow_all";
    pub const DIGRESS_OUT_ALLOW_ALL_NEVER_RETURN: &'static str = "allow_all_never_return";

    pub const DIGRESS_OUT_SLOTS_NOT_ALLOWED: &'static str = "not_allowed";
    pub const DIGRESS_OUT_SLOTS_ALLOW_RETURNING: &'static str = "allow_returning";
    pub const DIGRESS_OUT_SLOTS_ALLOW_ALL: &'static str = "allow_all";

    pub fn new(dialog_node: impl Into<String>) -> Self {
        Self {
            dialog_node: dialog_node.into(),
            description: None,
            conditions: None,
            parent: None,
            previous_sibling: None,
            output: None,
            context: None,
            metadata: None,
            next_step: None,
            title: None,
            node_type: None,
            event_name: None,
            variable: None,
            actions: Vec::new(),
            digress_in: None,
            digress_out: None,
            digress_out_slots: None,
            user_label: None,
            disabled: None,
            created: None,
            updated: None,
        }
    }

    pub fn with_conditions(mut self, conditions: impl Into<String>) -> Self {
        self.conditions = Some(conditions.into());
        self
    }

    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    pub fn with_previous_sibling(mut self, previous_sibling: impl Into<String>) -> Self {
        self.previous_sibling = Some(previous_sibling.into());
        self
    }

    pub fn with_output(mut self, output: Json) -> Self {
        self.output = Some(output);
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_node_type(mut self, node_type: impl Into<String>) -> Self {
        self.node_type = Some(node_type.into());
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DialogNodeCollection {
    #[serde(default)]
    pub dialog_nodes: Vec<DialogNode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
}

/// Options for a message turn.
#[derive(Debug, Clone, Default)]
pub struct MessageOptions {
    pub input: Option<MessageInput>,
    pub alternate_intents: Option<bool>,
    pub context: Option<Context>,
    pub entities: Option<Vec<RuntimeEntity>>,
    pub intents: Option<Vec<RuntimeIntent>>,
    pub output: Option<OutputData>,
    pub nodes_visited_details: Option<bool>,
}

impl MessageOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.input = Some(MessageInput::new(text));
        self
    }

    pub fn with_alternate_intents(mut self, alternate_intents: bool) -> Self {
        self.alternate_intents = Some(alternate_intents);
        self
    }

    /// Carry forward the context returned by the previous turn.
    pub fn with_context(mut self, context: Context) -> Self {
        self.context = Some(context);
        self
    }

    pub fn with_nodes_visited_details(mut self, details: bool) -> Self {
        self.nodes_visited_details = Some(details);
        self
    }
}

/// Options for creating or updating a workspace.
#[derive(Debug, Clone, Default)]
pub struct CreateWorkspaceOptions {
    pub name: Option<String>,
    pub description: Option<String>,
    pub language: Option<String>,
    pub metadata: Option<Json>,
    pub learning_opt_out: Option<bool>,
    pub system_settings: Option<Json>,
    pub intents: Option<Vec<CreateIntent>>,
    pub entities: Option<Vec<CreateEntity>>,
    pub dialog_nodes: Option<Vec<DialogNode>>,
    pub counterexamples: Option<Vec<Counterexample>>,
}

impl CreateWorkspaceOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn with_metadata(mut self, metadata: Json) -> Self {
        self.metadata = Some(metadata);
        self
    }

    pub fn with_learning_opt_out(mut self, learning_opt_out: bool) -> Self {
        self.learning_opt_out = Some(learning_opt_out);
        self
    }

    pub fn with_system_settings(mut self, system_settings: Json) -> Self {
        self.system_settings = Some(system_settings);
        self
    }

    pub fn with_intents(mut self, intents: Vec<CreateIntent>) -> Self {
        self.intents = Some(intents);
        self
    }

    pub fn with_entities(mut self, entities: Vec<CreateEntity>) -> Self {
        self.entities = Some(entities);
        self
    }

    pub fn with_dialog_nodes(mut self, dialog_nodes: Vec<DialogNode>) -> Self {
        self.dialog_nodes = Some(dialog_nodes);
        self
    }

    pub fn with_counterexamples(mut self, counterexamples: Vec<Counterexample>) -> Self {
        self.counterexamples = Some(counterexamples);
        self
    }
}

/// Pagination and sorting options shared by list operations.
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    pub page_limit: Option<i64>,
    pub include_count: Option<bool>,
    pub sort: Option<String>,
    pub cursor: Option<String>,
    pub include_audit: Option<bool>,
}

impl ListOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page_limit(mut self, page_limit: i64) -> Self {
        self.page_limit = Some(page_limit);
        self
    }

    pub fn with_include_count(mut self, include_count: bool) -> Self {
        self.include_count = Some(include_count);
        self
    }

    pub fn with_sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    pub fn with_cursor(mut self, cursor: impl Into<String>) -> Self {
        self.cursor = Some(cursor.into());
        self
    }

    pub fn with_include_audit(mut self, include_audit: bool) -> Self {
        self.include_audit = Some(include_audit);
        self
    }
}

/// Fields to change on an intent. Unset fields are left as they are.
#[derive(Debug, Clone, Default)]
pub struct UpdateIntentOptions {
    pub new_intent: Option<String>,
    pub new_description: Option<String>,
    pub new_examples: Option<Vec<Example>>,
}

impl UpdateIntentOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_new_intent(mut self, intent: impl Into<String>) -> Self {
        self.new_intent = Some(intent.into());
        self
    }

    pub fn with_new_description(mut self, description: impl Into<String>) -> Self {
        self.new_description = Some(description.into());
        self
    }

    pub fn with_new_examples(mut self, examples: Vec<Example>) -> Self {
        self.new_examples = Some(examples);
        self
    }
}

/// Fields to change on an entity. Unset fields are left as they are.
#[derive(Debug, Clone, Default)]
pub struct UpdateEntityOptions {
    pub new_entity: Option<String>,
    pub new_description: Option<String>,
    pub new_metadata: Option<Json>,
    pub new_fuzzy_match: Option<bool>,
    pub new_values: Option<Vec<CreateValue>>,
}

impl UpdateEntityOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_new_entity(mut self, entity: impl Into<String>) -> Self {
        self.new_entity = Some(entity.into());
        self
    }

    pub fn with_new_description(mut self, description: impl Into<String>) -> Self {
        self.new_description = Some(description.into());
        self
    }

    pub fn with_new_metadata(mut self, metadata: Json) -> Self {
        self.new_metadata = Some(metadata);
        self
    }

    pub fn with_new_fuzzy_match(mut self, fuzzy_match: bool) -> Self {
        self.new_fuzzy_match = Some(fuzzy_match);
        self
    }

    pub fn with_new_values(mut self, values: Vec<CreateValue>) -> Self {
        self.new_values = Some(values);
        self
    }
}

/// Fields to change on an entity value. Unset fields are left as they are.
#[derive(Debug, Clone, Default)]
pub struct UpdateValueOptions {
    pub new_value: Option<String>,
    pub new_metadata: Option<Json>,
    pub new_value_type: Option<String>,
    pub new_synonyms: Option<Vec<String>>,
    pub new_patterns: Option<Vec<String>>,
}

impl UpdateValueOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_new_value(mut self, value: impl Into<String>) -> Self {
        self.new_value = Some(value.into());
        self
    }

    pub fn with_new_metadata(mut self, metadata: Json) -> Self {
        self.new_metadata = Some(metadata);
        self
    }

    pub fn with_new_value_type(mut self, value_type: impl Into<String>) -> Self {
        self.new_value_type = Some(value_type.into());
        self
    }

    pub fn with_new_synonyms(mut self, synonyms: Vec<String>) -> Self {
        self.new_synonyms = Some(synonyms);
        self
    }

    pub fn with_new_patterns(mut self, patterns: Vec<String>) -> Self {
        self.new_patterns = Some(patterns);
        self
    }
}

/// Fields to change on a dialog node. Unset fields are left as they are.
#[derive(Debug, Clone, Default)]
pub struct UpdateDialogNodeOptions {
    pub new_dialog_node: Option<String>,
    pub new_description: Option<String>,
    pub new_conditions: Option<String>,
    pub new_parent: Option<String>,
    pub new_previous_sibling: Option<String>,
    pub new_output: Option<Json>,
    pub new_context: Option<Json>,
    pub new_metadata: Option<Json>,
    pub new_next_step: Option<DialogNodeNextStep>,
    pub new_title: Option<String>,
    pub new_node_type: Option<String>,
    pub new_user_label: Option<String>,
    pub new_disabled: Option<bool>,
}

impl UpdateDialogNodeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_new_dialog_node(mut self, dialog_node: impl Into<String>) -> Self {
        self.new_dialog_node = Some(dialog_node.into());
        self
    }

    pub fn with_new_description(mut self, description: impl Into<String>) -> Self {
        self.new_description = Some(description.into());
        self
    }

    pub fn with_new_conditions(mut self, conditions: impl Into<String>) -> Self {
        self.new_conditions = Some(conditions.into());
        self
    }

    pub fn with_new_parent(mut self, parent: impl Into<String>) -> Self {
        self.new_parent = Some(parent.into());
        self
    }

    pub fn with_new_previous_sibling(mut self, previous_sibling: impl Into<String>) -> Self {
        self.new_previous_sibling = Some(previous_sibling.into());
        self
    }

    pub fn with_new_output(mut self, output: Json) -> Self {
        self.new_output = Some(output);
        self
    }

    pub fn with_new_context(mut self, context: Json) -> Self {
        self.new_context = Some(context);
        self
    }

    pub fn with_new_metadata(mut self, metadata: Json) -> Self {
        self.new_metadata = Some(metadata);
        self
    }

    pub fn with_new_next_step(mut self, next_step: DialogNodeNextStep) -> Self {
        self.new_next_step = Some(next_step);
        self
    }

    pub fn with_new_title(mut self, title: impl Into<String>) -> Self {
        self.new_title = Some(title.into());
        self
    }

    pub fn with_new_node_type(mut self, node_type: impl Into<String>) -> Self {
        self.new_node_type = Some(node_type.into());
        self
    }

    pub fn with_new_user_label(mut self, user_label: impl Into<String>) -> Self {
        self.new_user_label = Some(user_label.into());
        self
    }

    pub fn with_new_disabled(mut self, disabled: bool) -> Self {
        self.new_disabled = Some(disabled);
        self
    }
}
