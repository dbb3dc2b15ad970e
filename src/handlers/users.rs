//! User endpoint handlers.
//!
//! Each handler validates the request shape, issues exactly one store
//! call, and maps the outcome to a status and JSON body. The 500 message
//! is fixed per operation.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::error::ApiError;
use crate::models::{User, UserPayload};
use crate::state::SharedStore;

pub const USERS_FETCH_FAILED: &str = "The users information could not be retrieved";
pub const USER_FETCH_FAILED: &str = "The user information could not be retrieved";
pub const USER_SAVE_FAILED: &str = "There was an error while saving the user to the database";
pub const USER_UPDATE_FAILED: &str = "The user information could not be modified";
pub const USER_REMOVE_FAILED: &str = "The user could not be removed";

/// List every stored user.
pub async fn list_users(State(store): State<SharedStore>) -> Result<Json<Vec<User>>, ApiError> {
    let users = store
        .find_all()
        .await
        .map_err(|e| ApiError::store(USERS_FETCH_FAILED, e))?;

    Ok(Json(users))
}

/// Get a user by id.
pub async fn get_user(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
) -> Result<Json<User>, ApiError> {
    match store.find_by_id(&id).await {
        Ok(Some(user)) => Ok(Json(user)),
        Ok(None) => Err(ApiError::NotFound),
        Err(e) => Err(ApiError::store(USER_FETCH_FAILED, e)),
    }
}

/// Create a user from the posted fields.
///
/// The presence check runs before any store call; an invalid payload is
/// rejected without touching the backend. A missing or malformed body is
/// treated as the empty payload.
pub async fn create_user(
    State(store): State<SharedStore>,
    payload: Option<Json<UserPayload>>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let payload = payload.map(|Json(p)| p).unwrap_or_default();
    let fields = payload.into_fields().ok_or(ApiError::MissingFields)?;

    let user = store
        .create(fields)
        .await
        .map_err(|e| ApiError::store(USER_SAVE_FAILED, e))?;

    Ok((StatusCode::CREATED, Json(user)))
}

/// Replace `name` and `bio` of the user with the given id.
///
/// An unknown id answers 404 ahead of any payload complaint; the
/// invalid-payload path issues a read-only lookup rather than a write.
/// Either path performs exactly one store call.
pub async fn update_user(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
    payload: Option<Json<UserPayload>>,
) -> Result<Json<User>, ApiError> {
    let payload = payload.map(|Json(p)| p).unwrap_or_default();

    let Some(fields) = payload.into_fields() else {
        return match store.find_by_id(&id).await {
            Ok(Some(_)) => Err(ApiError::MissingFields),
            Ok(None) => Err(ApiError::NotFound),
            Err(e) => Err(ApiError::store(USER_UPDATE_FAILED, e)),
        };
    };

    match store.update(&id, fields).await {
        Ok(Some(user)) => Ok(Json(user)),
        Ok(None) => Err(ApiError::NotFound),
        Err(e) => Err(ApiError::store(USER_UPDATE_FAILED, e)),
    }
}

/// Delete the user with the given id, returning the removed record.
pub async fn delete_user(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
) -> Result<Json<User>, ApiError> {
    match store.remove(&id).await {
        Ok(Some(user)) => Ok(Json(user)),
        Ok(None) => Err(ApiError::NotFound),
        Err(e) => Err(ApiError::store(USER_REMOVE_FAILED, e)),
    }
}
