//! Shared plumbing for the Watson service crates.
//!
//! Every service client in this workspace is a thin wrapper around
//! [`WatsonService`]: it validates its options, builds a [`ServiceRequest`]
//! (path segments, query, headers, JSON or multipart body) and hands it to
//! the service for dispatch and typed JSON decoding. Authentication,
//! credentials lookup and error classification all live here so the service
//! crates stay declarative.

pub mod auth;
pub mod client;
pub mod credentials;
pub mod error;
pub mod request;
pub mod validate;

pub use auth::{Authenticator, IamAuthenticator, DEFAULT_IAM_URL};
pub use client::WatsonService;
pub use credentials::ServiceCredentials;
pub use error::{Error, Result};
pub use request::{FileData, RequestBody, ServiceRequest};
pub use validate::not_empty;
