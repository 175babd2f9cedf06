use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};

use crate::config::PAGINATION_PAGE_SIZE;
use crate::errors::internal::ItemRequestError;
use crate::errors::InternalError;
use crate::types::db::item_request::{self, ActiveModel, Entity as ItemRequest};
use crate::types::dto::requests::RequestStatus;
use crate::types::internal::{CreateRequestCommand, RequestId};

/// RequestStore owns all reads and writes to the item_requests collection
pub struct RequestStore {
    db: DatabaseConnection,
}

impl RequestStore {
    /// Create a new RequestStore with the given database connection
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// List one page of item requests, newest first
    ///
    /// # Arguments
    /// * `page` - 1-indexed page number; values below 1 are treated as 1
    /// * `status` - Optional status filter
    ///
    /// # Returns
    /// * `Ok(Vec<Model>)` - At most PAGINATION_PAGE_SIZE records, ordered by
    ///   created_date descending (id descending as tiebreaker)
    /// * `Err(InternalError)` - Database error
    pub async fn list(
        &self,
        page: u64,
        status: Option<RequestStatus>,
    ) -> Result<Vec<item_request::Model>, InternalError> {
        let page = page.max(1);
        let skip = (page - 1) * PAGINATION_PAGE_SIZE;

        let mut query = ItemRequest::find();
        if let Some(status) = status {
            query = query.filter(item_request::Column::Status.eq(status.as_str()));
        }

        query
            .order_by_desc(item_request::Column::CreatedDate)
            .order_by_desc(item_request::Column::Id)
            .offset(skip)
            .limit(PAGINATION_PAGE_SIZE)
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("list_item_requests", e))
    }

    /// Create a new item request from a validated payload
    ///
    /// Assigns a fresh identifier, sets both timestamps to now and forces
    /// the status to PENDING.
    ///
    /// # Returns
    /// * `Ok(Model)` - The stored record, including its assigned identifier
    /// * `Err(InternalError)` - Database error
    pub async fn create(
        &self,
        command: CreateRequestCommand,
    ) -> Result<item_request::Model, InternalError> {
        let id = RequestId::generate();
        let now = Utc::now().timestamp_millis();

        let new_request = ActiveModel {
            id: Set(id.into_string()),
            requestor_name: Set(command.requestor_name),
            item_requested: Set(command.item_requested),
            created_date: Set(now),
            last_edited_date: Set(now),
            status: Set(RequestStatus::Pending.as_str().to_string()),
        };

        new_request
            .insert(&self.db)
            .await
            .map_err(|e| InternalError::database("create_item_request", e))
    }

    /// Update the status of a single item request
    ///
    /// # Returns
    /// * `Ok(Model)` - The updated record
    /// * `Err(InternalError)` - NotFound if the identifier does not exist,
    ///   or a database error
    pub async fn update_status(
        &self,
        id: &RequestId,
        status: RequestStatus,
    ) -> Result<item_request::Model, InternalError> {
        let request = ItemRequest::find_by_id(id.as_str())
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("find_item_request", e))?
            .ok_or_else(|| ItemRequestError::NotFound(id.to_string()))?;

        let mut active: ActiveModel = request.into();
        active.status = Set(status.as_str().to_string());
        active.last_edited_date = Set(Utc::now().timestamp_millis());

        active
            .update(&self.db)
            .await
            .map_err(|e| InternalError::database("update_item_request_status", e))
    }

    /// Apply the same status update to every record in `ids`
    ///
    /// Identifiers that do not exist are silently skipped.
    ///
    /// # Returns
    /// * `Ok(u64)` - Number of records actually modified
    /// * `Err(InternalError)` - Database error
    pub async fn batch_update_status(
        &self,
        ids: &[RequestId],
        status: RequestStatus,
    ) -> Result<u64, InternalError> {
        let now = Utc::now().timestamp_millis();

        let result = ItemRequest::update_many()
            .col_expr(item_request::Column::Status, Expr::value(status.as_str()))
            .col_expr(item_request::Column::LastEditedDate, Expr::value(now))
            .filter(item_request::Column::Id.is_in(ids.iter().map(RequestId::as_str)))
            .exec(&self.db)
            .await
            .map_err(|e| InternalError::database("batch_update_status", e))?;

        Ok(result.rows_affected)
    }

    /// Delete every record in `ids`
    ///
    /// Identifiers that do not exist are silently skipped.
    ///
    /// # Returns
    /// * `Ok(u64)` - Number of records actually removed
    /// * `Err(InternalError)` - Database error
    pub async fn batch_delete(&self, ids: &[RequestId]) -> Result<u64, InternalError> {
        let result = ItemRequest::delete_many()
            .filter(item_request::Column::Id.is_in(ids.iter().map(RequestId::as_str)))
            .exec(&self.db)
            .await
            .map_err(|e| InternalError::database("batch_delete_requests", e))?;

        Ok(result.rows_affected)
    }
}

impl std::fmt::Debug for RequestStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestStore")
            .field("db", &"<connection>")
            .finish()
    }
}
