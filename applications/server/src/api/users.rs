/// Users API routes
use crate::{
    api::response::SuccessResponse,
    error::{Result, ServerError},
    state::AppState,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use roster_core::types::{PageRequest, Pagination, User, UserInput};

/// `developer_details` for a get whose id matches no row
pub const NO_ROWS_DETAILS: &str = "no rows returned for id";

/// Raw `?page=&limit=` values; parsing happens in `PageRequest::parse`
/// so that malformed numbers fall back to defaults instead of rejecting.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ListUsersQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl ListUsersQuery {
    /// Pick `page` and `limit` out of decoded query pairs
    ///
    /// The first occurrence of a repeated key wins and unknown keys are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                "page" if query.page.is_none() => query.page = Some(value),
                "limit" if query.limit.is_none() => query.limit = Some(value),
                _ => {}
            }
        }
        query
    }
}

/// GET /users
pub async fn list_users(
    State(app_state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<SuccessResponse<Vec<User>>>> {
    let query = ListUsersQuery::from_pairs(pairs);
    let request = PageRequest::parse(query.page.as_deref(), query.limit.as_deref());

    let total = match app_state.store.count_users().await {
        Ok(total) => total,
        Err(err) if app_state.error_mode.is_legacy() => {
            tracing::warn!(error = %err, "failed to count users, reporting 0");
            0
        }
        Err(err) => return Err(ServerError::internal("Failed to count users", err)),
    };

    let users = app_state
        .store
        .list_users(&request)
        .await
        .map_err(|err| app_state.error_mode.list_failure(err))?;

    let pagination = Pagination::new(&request, total);
    Ok(Json(SuccessResponse::paginated(users, pagination)))
}

/// GET /users/:id
///
/// A missing row has no driver error to report, so `developer_details`
/// carries [`NO_ROWS_DETAILS`] followed by the requested id.
pub async fn get_user(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
) -> Result<Json<SuccessResponse<User>>> {
    let user = app_state
        .store
        .get_user(&id)
        .await
        .map_err(|err| app_state.error_mode.get_failure(err))?
        .ok_or_else(|| {
            ServerError::not_found("User not found", format!("{NO_ROWS_DETAILS} {id}"))
        })?;

    Ok(Json(SuccessResponse::new(user)))
}

/// POST /users
/// Responds with the bare created user, not the envelope
pub async fn create_user(
    State(app_state): State<AppState>,
    Json(input): Json<UserInput>,
) -> Result<(StatusCode, Json<User>)> {
    let user = app_state
        .store
        .create_user(input)
        .await
        .map_err(|err| app_state.error_mode.write_failure("Failed to create user", err))?;

    tracing::info!(user_id = user.id, "user created");
    Ok((StatusCode::CREATED, Json(user)))
}

/// PUT /users/:id
/// Overwrites name and age; a missing id is not an error
pub async fn update_user(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
    Json(input): Json<UserInput>,
) -> Result<StatusCode> {
    let affected = app_state
        .store
        .update_user(&id, input)
        .await
        .map_err(|err| app_state.error_mode.write_failure("Failed to update user", err))?;

    tracing::debug!(%id, affected, "user updated");
    Ok(StatusCode::OK)
}

/// DELETE /users/:id
/// A missing id is not an error
pub async fn delete_user(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
) -> Result<StatusCode> {
    let affected = app_state
        .store
        .delete_user(&id)
        .await
        .map_err(|err| app_state.error_mode.write_failure("Failed to delete user", err))?;

    tracing::debug!(%id, affected, "user deleted");
    Ok(StatusCode::OK)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn first_repeated_key_wins() {
        let query = ListUsersQuery::from_pairs(pairs(&[
            ("page", "1"),
            ("limit", "5"),
            ("page", "2"),
            ("limit", "50"),
        ]));
        assert_eq!(query.page.as_deref(), Some("1"));
        assert_eq!(query.limit.as_deref(), Some("5"));
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let query = ListUsersQuery::from_pairs(pairs(&[("sort", "name"), ("limit", "3")]));
        assert_eq!(query.page, None);
        assert_eq!(query.limit.as_deref(), Some("3"));
    }
}
