//! Discovery v1 operations.

use reqwest::multipart::{Form, Part};
use reqwest::Method;
use serde::Serialize;

use watson_core::{
    not_empty, Authenticator, Error, Result, ServiceCredentials, ServiceRequest, WatsonService,
};

use crate::models::{
    AddDocumentOptions, Collection, CreateCollectionOptions, CreateEnvironmentOptions,
    DeleteCollectionResponse, DeleteDocumentResponse, DeleteEnvironmentResponse, DocumentAccepted,
    DocumentStatus, Environment, Gateway, GatewayDelete, GatewayList, ListCollectionsResponse,
    ListEnvironmentsResponse, QueryOptions, QueryResponse,
};

const SERVICE_NAME: &str = "discovery";

#[derive(Serialize)]
struct EnvironmentRequest {
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    size: Option<String>,
}

#[derive(Serialize)]
struct CollectionRequest {
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    configuration_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    language: Option<String>,
}

#[derive(Serialize)]
struct GatewayRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
}

/// Discovery service client.
pub struct Discovery {
    service: WatsonService,
}

impl Discovery {
    pub const DEFAULT_URL: &'static str = "https://gateway.watsonplatform.net/discovery/api";

    /// `version` is the API version date (yyyy-MM-dd) sent with every call.
    pub fn new(version: impl Into<String>, authenticator: Authenticator) -> Result<Self> {
        let version = version.into();
        not_empty(&version, "version")?;
        let service =
            WatsonService::new(SERVICE_NAME, Self::DEFAULT_URL, authenticator)?.with_version(version);
        Ok(Self { service })
    }

    /// Build a client from `WATSON_DISCOVERY_*` environment variables.
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

    /// Create an environment.
    pub async fn create_environment(
        &self,
        options: CreateEnvironmentOptions,
    ) -> Result<Environment> {
        not_empty(&options.name, "name")?;
        let body = EnvironmentRequest {
            name: options.name,
            description: options.description,
            size: options.size,
        };
        let request = self
            .service
            .request(Method::POST, &["v1", "environments"])?
            .json(&body)?;
        self.service.send_json(request).await
    }

    /// List environments, optionally filtered by name.
    pub async fn list_environments(&self, name: Option<&str>) -> Result<ListEnvironmentsResponse> {
        let mut request = self.service.request(Method::GET, &["v1", "environments"])?;
        if let Some(name) = name {
            request = request.query("name", name);
        }
        self.service.send_json(request).await
    }

    pub async fn get_environment(&self, environment_id: &str) -> Result<Environment> {
        not_empty(environment_id, "environment_id")?;
        let request = self
            .service
            .request(Method::GET, &["v1", "environments", environment_id])?;
        self.service.send_json(request).await
    }

    /// Update an environment's name or description.
    pub async fn update_environment(
        &self,
        environment_id: &str,
        options: CreateEnvironmentOptions,
    ) -> Result<Environment> {
        not_empty(environment_id, "environment_id")?;
        not_empty(&options.name, "name")?;
        let body = EnvironmentRequest {
            name: options.name,
            description: options.description,
            size: None,
        };
        let request = self
            .service
            .request(Method::PUT, &["v1", "environments", environment_id])?
            .json(&body)?;
        self.service.send_json(request).await
    }

    pub async fn delete_environment(
        &self,
        environment_id: &str,
    ) -> Result<DeleteEnvironmentResponse> {
        not_empty(environment_id, "environment_id")?;
        let request = self
            .service
            .request(Method::DELETE, &["v1", "environments", environment_id])?;
        self.service.send_json(request).await
    }

    /// Create a collection in an environment.
    pub async fn create_collection(
        &self,
        environment_id: &str,
        options: CreateCollectionOptions,
    ) -> Result<Collection> {
        not_empty(environment_id, "environment_id")?;
        not_empty(&options.name, "name")?;
        let body = CollectionRequest {
            name: options.name,
            description: options.description,
            configuration_id: options.configuration_id,
            language: options.language,
        };
        let request = self
            .service
            .request(
                Method::POST,
                &["v1", "environments", environment_id, "collections"],
            )?
            .json(&body)?;
        self.service.send_json(request).await
    }

    /// List collections in an environment, optionally filtered by name.
    pub async fn list_collections(
        &self,
        environment_id: &str,
        name: Option<&str>,
    ) -> Result<ListCollectionsResponse> {
        not_empty(environment_id, "environment_id")?;
        let mut request = self.service.request(
            Method::GET,
            &["v1", "environments", environment_id, "collections"],
        )?;
        if let Some(name) = name {
            request = request.query("name", name);
        }
        self.service.send_json(request).await
    }

    pub async fn get_collection(
        &self,
        environment_id: &str,
        collection_id: &str,
    ) -> Result<Collection> {
        not_empty(environment_id, "environment_id")?;
        not_empty(collection_id, "collection_id")?;
        let request = self.service.request(
            Method::GET,
            &[
                "v1",
                "environments",
                environment_id,
                "collections",
                collection_id,
            ],
        )?;
        self.service.send_json(request).await
    }

    /// Update a collection's name, description or configuration.
    pub async fn update_collection(
        &self,
        environment_id: &str,
        collection_id: &str,
        options: CreateCollectionOptions,
    ) -> Result<Collection> {
        not_empty(environment_id, "environment_id")?;
        not_empty(collection_id, "collection_id")?;
        not_empty(&options.name, "name")?;
        let body = CollectionRequest {
            name: options.name,
            description: options.description,
            configuration_id: options.configuration_id,
            language: None,
        };
        let request = self
            .service
            .request(
                Method::PUT,
                &[
                    "v1",
                    "environments",
                    environment_id,
                    "collections",
                    collection_id,
                ],
            )?
            .json(&body)?;
        self.service.send_json(request).await
    }

    pub async fn delete_collection(
        &self,
        environment_id: &str,
        collection_id: &str,
    ) -> Result<DeleteCollectionResponse> {
        not_empty(environment_id, "environment_id")?;
        not_empty(collection_id, "collection_id")?;
        let request = self.service.request(
            Method::DELETE,
            &[
                "v1",
                "environments",
                environment_id,
                "collections",
                collection_id,
            ],
        )?;
        self.service.send_json(request).await
    }

    /// Add a document to a collection for ingestion.
    pub async fn add_document(
        &self,
        environment_id: &str,
        collection_id: &str,
        options: AddDocumentOptions,
    ) -> Result<DocumentAccepted> {
        not_empty(environment_id, "environment_id")?;
        not_empty(collection_id, "collection_id")?;
        let form = document_form(options)?;
        let request = self
            .service
            .request(
                Method::POST,
                &[
                    "v1",
                    "environments",
                    environment_id,
                    "collections",
                    collection_id,
                    "documents",
                ],
            )?
            .multipart(form);
        self.service.send_json(request).await
    }

    pub async fn get_document_status(
        &self,
        environment_id: &str,
        collection_id: &str,
        document_id: &str,
    ) -> Result<DocumentStatus> {
        not_empty(environment_id, "environment_id")?;
        not_empty(collection_id, "collection_id")?;
        not_empty(document_id, "document_id")?;
        let request = self.service.request(
            Method::GET,
            &[
                "v1",
                "environments",
                environment_id,
                "collections",
                collection_id,
                "documents",
                document_id,
            ],
        )?;
        self.service.send_json(request).await
    }

    /// Replace a document, or add it under the given id.
    pub async fn update_document(
        &self,
        environment_id: &str,
        collection_id: &str,
        document_id: &str,
        options: AddDocumentOptions,
    ) -> Result<DocumentAccepted> {
        not_empty(environment_id, "environment_id")?;
        not_empty(collection_id, "collection_id")?;
        not_empty(document_id, "document_id")?;
        let form = document_form(options)?;
        let request = self
            .service
            .request(
                Method::POST,
                &[
                    "v1",
                    "environments",
                    environment_id,
                    "collections",
                    collection_id,
                    "documents",
                    document_id,
                ],
            )?
            .multipart(form);
        self.service.send_json(request).await
    }

    pub async fn delete_document(
        &self,
        environment_id: &str,
        collection_id: &str,
        document_id: &str,
    ) -> Result<DeleteDocumentResponse> {
        not_empty(environment_id, "environment_id")?;
        not_empty(collection_id, "collection_id")?;
        not_empty(document_id, "document_id")?;
        let request = self.service.request(
            Method::DELETE,
            &[
                "v1",
                "environments",
                environment_id,
                "collections",
                collection_id,
                "documents",
                document_id,
            ],
        )?;
        self.service.send_json(request).await
    }

    /// Query a single collection.
    pub async fn query(
        &self,
        environment_id: &str,
        collection_id: &str,
        options: QueryOptions,
    ) -> Result<QueryResponse> {
        not_empty(environment_id, "environment_id")?;
        not_empty(collection_id, "collection_id")?;
        let request = self.service.request(
            Method::POST,
            &[
                "v1",
                "environments",
                environment_id,
                "collections",
                collection_id,
                "query",
            ],
        )?;
        let request = apply_query_options(request, options)?;
        self.service.send_json(request).await
    }

    /// Query across collections of an environment. `collection_ids` must
    /// name at least one collection.
    pub async fn federated_query(
        &self,
        environment_id: &str,
        options: QueryOptions,
    ) -> Result<QueryResponse> {
        not_empty(environment_id, "environment_id")?;
        match &options.collection_ids {
            Some(ids) if !ids.trim().is_empty() => {}
            _ => {
                return Err(Error::InvalidInput(
                    "collection_ids cannot be empty".to_string(),
                ))
            }
        }
        let request = self
            .service
            .request(Method::POST, &["v1", "environments", environment_id, "query"])?;
        let request = apply_query_options(request, options)?;
        self.service.send_json(request).await
    }

    /// List gateways configured for an environment.
    pub async fn list_gateways(&self, environment_id: &str) -> Result<GatewayList> {
        not_empty(environment_id, "environment_id")?;
        let request = self.service.request(
            Method::GET,
            &["v1", "environments", environment_id, "gateways"],
        )?;
        self.service.send_json(request).await
    }

    /// Create a gateway. The response carries the one-time token used to
    /// configure the on-premises connector.
    pub async fn create_gateway(
        &self,
        environment_id: &str,
        name: Option<&str>,
    ) -> Result<Gateway> {
        not_empty(environment_id, "environment_id")?;
        let body = GatewayRequest {
            name: name.map(str::to_string),
        };
        let request = self
            .service
            .request(
                Method::POST,
                &["v1", "environments", environment_id, "gateways"],
            )?
            .json(&body)?;
        self.service.send_json(request).await
    }

    pub async fn get_gateway(&self, environment_id: &str, gateway_id: &str) -> Result<Gateway> {
        not_empty(environment_id, "environment_id")?;
        not_empty(gateway_id, "gateway_id")?;
        let request = self.service.request(
            Method::GET,
            &["v1", "environments", environment_id, "gateways", gateway_id],
        )?;
        self.service.send_json(request).await
    }

    pub async fn delete_gateway(
        &self,
        environment_id: &str,
        gateway_id: &str,
    ) -> Result<GatewayDelete> {
        not_empty(environment_id, "environment_id")?;
        not_empty(gateway_id, "gateway_id")?;
        let request = self.service.request(
            Method::DELETE,
            &["v1", "environments", environment_id, "gateways", gateway_id],
        )?;
        self.service.send_json(request).await
    }
}

fn document_form(options: AddDocumentOptions) -> Result<Form> {
    if options.file.is_none() && options.metadata.is_none() {
        return Err(Error::InvalidInput(
            "at least one of file or metadata is required".to_string(),
        ));
    }
    let mut form = Form::new();
    if let Some(file) = options.file {
        not_empty(&file.filename, "filename")?;
        form = form.part("file", file.into_part()?);
    }
    if let Some(metadata) = options.metadata {
        form = form.part(
            "metadata",
            Part::text(metadata).mime_str("application/json")?,
        );
    }
    Ok(form)
}

fn apply_query_options(
    mut request: ServiceRequest,
    options: QueryOptions,
) -> Result<ServiceRequest> {
    if let Some(filter) = options.filter {
        request = request.query("filter", filter);
    }
    if let Some(query) = options.query {
        request = request.query("query", query);
    }
    if let Some(nlq) = options.natural_language_query {
        request = request.query("natural_language_query", nlq);
    }
    if let Some(passages) = options.passages {
        request = request.query("passages", passages);
    }
    if let Some(fields) = options.passages_fields {
        request = request.query("passages.fields", fields);
    }
    if let Some(count) = options.passages_count {
        request = request.query("passages.count", count);
    }
    if let Some(characters) = options.passages_characters {
        request = request.query("passages.characters", characters);
    }
    if let Some(aggregation) = options.aggregation {
        request = request.query("aggregation", aggregation);
    }
    if let Some(count) = options.count {
        request = request.query("count", count);
    }
    if let Some(fields) = options.return_fields {
        request = request.query("return", fields);
    }
    if let Some(offset) = options.offset {
        request = request.query("offset", offset);
    }
    if let Some(sort) = options.sort {
        request = request.query("sort", sort);
    }
    if let Some(highlight) = options.highlight {
        request = request.query("highlight", highlight);
    }
    if let Some(deduplicate) = options.deduplicate {
        request = request.query("deduplicate", deduplicate);
    }
    if let Some(field) = options.deduplicate_field {
        request = request.query("deduplicate.field", field);
    }
    if let Some(ids) = options.collection_ids {
        request = request.query("collection_ids", ids);
    }
    if let Some(similar) = options.similar {
        request = request.query("similar", similar);
    }
    if let Some(ids) = options.similar_document_ids {
        request = request.query("similar.document_ids", ids);
    }
    if let Some(fields) = options.similar_fields {
        request = request.query("similar.fields", fields);
    }
    if let Some(bias) = options.bias {
        request = request.query("bias", bias);
    }
    if let Some(opt_out) = options.logging_opt_out {
        request = request.header("X-Watson-Logging-Opt-Out", &opt_out.to_string())?;
    }
    Ok(request)
}
