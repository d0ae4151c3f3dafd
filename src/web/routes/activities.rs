use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::database::activities_repo::{Activities, ActivityDirectory};
use crate::error::{ActivityError, ApiError, ApiResult};
use crate::services::activities_service;

/// Raw query pairs, so a repeated `email` resolves to its last value
/// instead of failing deserialization.
type QueryPairs = Vec<(String, String)>;

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageBody {
    pub message: String,
}

fn activity_name(path: Result<Path<String>, PathRejection>) -> ApiResult<String> {
    path.map(|Path(name)| name)
        .map_err(|e| ApiError::InvalidPath(e.body_text()))
}

fn email_param(query: Result<Query<QueryPairs>, QueryRejection>) -> ApiResult<String> {
    let Query(pairs) = query.map_err(|e| ApiError::InvalidQuery(e.body_text()))?;
    pairs
        .into_iter()
        .rev()
        .find_map(|(key, value)| (key == "email").then_some(value))
        .ok_or(ApiError::MissingEmail)
}

pub async fn list_activities_handler(
    State(directory): State<ActivityDirectory>,
) -> Json<Activities> {
    Json(activities_service::list_activities(&directory).await)
}

pub async fn signup_handler(
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<QueryPairs>, QueryRejection>,
    State(directory): State<ActivityDirectory>,
) -> ApiResult<Json<MessageBody>> {
    let activity_name = activity_name(path)?;
    let email = email_param(query)?;
    activities_service::signup(&directory, &activity_name, &email)
        .await
        .map(|message| Json(MessageBody { message }))
        .map_err(|e| rejected("signup", &activity_name, &email, e))
}

pub async fn remove_participant_handler(
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<QueryPairs>, QueryRejection>,
    State(directory): State<ActivityDirectory>,
) -> ApiResult<Json<MessageBody>> {
    let activity_name = activity_name(path)?;
    let email = email_param(query)?;
    activities_service::remove_participant(&directory, &activity_name, &email)
        .await
        .map(|message| Json(MessageBody { message }))
        .map_err(|e| rejected("remove", &activity_name, &email, e))
}

fn rejected(action: &str, activity_name: &str, email: &str, err: ActivityError) -> ApiError {
    if err.is_invalid_operation() {
        warn!(
            action = %action,
            activity = %activity_name,
            email = %email,
            error = %err,
            "participant change rejected"
        );
    } else {
        warn!(action = %action, activity = %activity_name, "unknown activity");
    }
    err.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(items: &[(&str, &str)]) -> Result<Query<QueryPairs>, QueryRejection> {
        Ok(Query(
            items
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        ))
    }

    #[test]
    fn repeated_email_takes_last_value() {
        let email = email_param(pairs(&[("email", "a@x"), ("email", "b@x")])).unwrap();
        assert_eq!(email, "b@x");
    }

    #[test]
    fn email_among_other_params() {
        let email = email_param(pairs(&[("ref", "home"), ("email", "a@x")])).unwrap();
        assert_eq!(email, "a@x");
    }

    #[test]
    fn missing_email() {
        let err = email_param(pairs(&[("ref", "home")])).unwrap_err();
        assert!(matches!(err, ApiError::MissingEmail));
    }
}
