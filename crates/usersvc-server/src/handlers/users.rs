//! User handlers

use crate::error::ApiError;
use crate::AppState;
use axum::{
    extract::{
        rejection::{FormRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Form, Json,
};
use tracing::{debug, info};
use usersvc_core::{NewUser, User, UserUpdate};

/// Decode the form fields of a request.
///
/// A body without a form content type carries no fields, so every field reads
/// as empty. Any other rejection is reported as an error.
fn form_fields(form: Result<Form<NewUser>, FormRejection>) -> Result<NewUser, ApiError> {
    match form {
        Ok(Form(fields)) => Ok(fields),
        Err(FormRejection::InvalidFormContentType(_)) => {
            debug!("Request has no form content type, treating all fields as empty");
            Ok(NewUser::default())
        }
        Err(e) => Err(e.into()),
    }
}

pub async fn get(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> Result<Json<User>, ApiError> {
    let Path(id) = id?;
    let user = state.store.find_user_by_id(&id).await?;
    Ok(Json(user))
}

pub async fn create(
    State(state): State<AppState>,
    form: Result<Form<NewUser>, FormRejection>,
) -> Result<Json<User>, ApiError> {
    let new_user = form_fields(form)?;
    let user = state.store.add_user(new_user).await?;
    Ok(Json(user))
}

pub async fn update(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
    form: Result<Form<NewUser>, FormRejection>,
) -> Result<Json<User>, ApiError> {
    let Path(id) = id?;
    let changes = form_fields(form)?;
    info!("Received PUT request for user {}", id);

    let user = state.store.update_user(UserUpdate::new(id, changes)).await?;
    Ok(Json(user))
}

pub async fn delete(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(id) = id?;
    state.store.delete_user(&id).await?;
    Ok(StatusCode::OK)
}

pub async fn search(
    State(state): State<AppState>,
    params: Result<Path<(String, String)>, PathRejection>,
) -> Result<Json<Vec<User>>, ApiError> {
    let Path((criteria, value)) = params?;
    let users = state.store.find_users_by_criteria(&criteria, &value).await?;
    Ok(Json(users))
}
