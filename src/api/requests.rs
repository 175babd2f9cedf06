use poem_openapi::{param::Query, payload::Json, OpenApi, Tags};
use std::sync::Arc;

use crate::errors::RequestError;
use crate::stores::RequestStore;
use crate::types::dto::requests::{
    BatchDeleteBody, BatchDeleteResponse, BatchEditBody, BatchUpdateResponse, CreateRequestBody,
    EditStatusBody, ItemRequestDto, RequestStatus,
};
use crate::validation;

/// Item request management API endpoints
pub struct RequestsApi {
    request_store: Arc<RequestStore>,
}

impl RequestsApi {
    /// Create a new RequestsApi with the given RequestStore
    pub fn new(request_store: Arc<RequestStore>) -> Self {
        Self { request_store }
    }
}

/// API tags for item request endpoints
#[derive(Tags)]
enum RequestTags {
    /// Item request management
    Requests,
}

#[OpenApi]
impl RequestsApi {
    /// List item requests, newest first
    ///
    /// Returns one fixed-size page. An unknown status filter value is
    /// ignored rather than rejected.
    #[oai(path = "/request", method = "get", tag = "RequestTags::Requests")]
    async fn list_requests(
        &self,
        page: Query<Option<u64>>,
        status: Query<Option<String>>,
    ) -> Result<Json<Vec<ItemRequestDto>>, RequestError> {
        let page = page.0.unwrap_or(1);
        let status = status.0.as_deref().and_then(RequestStatus::parse);

        let models = self
            .request_store
            .list(page, status)
            .await
            .map_err(RequestError::from_internal_error)?;

        let mut requests = Vec::with_capacity(models.len());
        for model in models {
            requests.push(ItemRequestDto::try_from(model).map_err(RequestError::from_internal_error)?);
        }

        Ok(Json(requests))
    }

    /// Create a new item request
    ///
    /// The record always starts in PENDING status; any status supplied in
    /// the body is ignored.
    #[oai(path = "/request", method = "put", tag = "RequestTags::Requests")]
    async fn create_request(
        &self,
        body: Json<CreateRequestBody>,
    ) -> Result<Json<ItemRequestDto>, RequestError> {
        let command = validation::validate_create(&body.0).map_err(RequestError::from_validation)?;

        let model = self
            .request_store
            .create(command)
            .await
            .map_err(RequestError::from_internal_error)?;

        Ok(Json(
            ItemRequestDto::try_from(model).map_err(RequestError::from_internal_error)?,
        ))
    }

    /// Update the status of a single item request
    #[oai(path = "/request", method = "patch", tag = "RequestTags::Requests")]
    async fn update_request_status(
        &self,
        body: Json<EditStatusBody>,
    ) -> Result<Json<ItemRequestDto>, RequestError> {
        let command =
            validation::validate_status_edit(&body.0).map_err(RequestError::from_validation)?;

        let model = self
            .request_store
            .update_status(&command.id, command.status)
            .await
            .map_err(RequestError::from_internal_error)?;

        Ok(Json(
            ItemRequestDto::try_from(model).map_err(RequestError::from_internal_error)?,
        ))
    }

    /// Update the status of several item requests at once
    ///
    /// Identifiers that do not exist are skipped; the response counts only
    /// the records actually modified.
    #[oai(path = "/request/batch", method = "patch", tag = "RequestTags::Requests")]
    async fn batch_update_status(
        &self,
        body: Json<BatchEditBody>,
    ) -> Result<Json<BatchUpdateResponse>, RequestError> {
        let command =
            validation::validate_batch_edit(&body.0).map_err(RequestError::from_validation)?;

        let modified_count = self
            .request_store
            .batch_update_status(&command.ids, command.status)
            .await
            .map_err(RequestError::from_internal_error)?;

        Ok(Json(BatchUpdateResponse { modified_count }))
    }

    /// Delete several item requests at once
    ///
    /// Identifiers that do not exist are skipped; the response counts only
    /// the records actually removed.
    #[oai(path = "/request/batch", method = "delete", tag = "RequestTags::Requests")]
    async fn batch_delete_requests(
        &self,
        body: Json<BatchDeleteBody>,
    ) -> Result<Json<BatchDeleteResponse>, RequestError> {
        let command =
            validation::validate_batch_delete(&body.0).map_err(RequestError::from_validation)?;

        let deleted_count = self
            .request_store
            .batch_delete(&command.ids)
            .await
            .map_err(RequestError::from_internal_error)?;

        Ok(Json(BatchDeleteResponse { deleted_count }))
    }
}
