//! Task Document Operations
//!
//! CRUD against the hosted task collection.

use serde::Serialize;

use crate::models::{Session, TaskDoc};

use super::{http, ApiClient, ApiError};

const COLLECTION_PATH: &str = "/v1/collections/tasks/documents";

#[derive(Serialize)]
pub struct NewTask<'a> {
    pub owner: &'a str,
    pub text: &'a str,
    pub completed: bool,
    pub due_date: &'a str,
    pub position: i32,
}

/// Partial update; only the set fields are written
#[derive(Serialize, Default)]
pub struct TaskPatch<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i32>,
}

/// Create a document; the backend assigns its identifier
pub async fn create_task(
    client: &ApiClient,
    session: &Session,
    fields: &NewTask<'_>,
) -> Result<TaskDoc, ApiError> {
    http::post_json(client, COLLECTION_PATH, fields, Some(&session.id_token)).await
}

/// Fetch the whole collection; the caller filters to its owner
pub async fn list_tasks(client: &ApiClient, session: &Session) -> Result<Vec<TaskDoc>, ApiError> {
    http::get_json(client, COLLECTION_PATH, &session.id_token).await
}

pub async fn update_task(
    client: &ApiClient,
    session: &Session,
    id: &str,
    patch: &TaskPatch<'_>,
) -> Result<TaskDoc, ApiError> {
    http::patch_json(
        client,
        &format!("{COLLECTION_PATH}/{id}"),
        patch,
        &session.id_token,
    )
    .await
}

pub async fn delete_task(client: &ApiClient, session: &Session, id: &str) -> Result<(), ApiError> {
    http::delete(client, &format!("{COLLECTION_PATH}/{id}"), &session.id_token).await
}
