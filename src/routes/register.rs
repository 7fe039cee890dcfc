//! src/routes/register.rs
use crate::domain::UserData;
use crate::routes::error_chain_fmt;
use crate::usecases::{RegisterError, RegisterUserOnMailingList};
use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse, ResponseError};
use uuid::Uuid;

/// Both fields are optional at the serde level so that their presence is
/// checked here, with a proper error message, instead of by the framework.
#[derive(serde::Deserialize)]
pub struct RegisterPayload {
    pub name: Option<String>,
    pub email: Option<String>,
}

#[derive(thiserror::Error)]
pub enum RegisterUserError {
    #[error("Missing parameter from request: {0}")]
    MissingParameter(String),
    #[error(transparent)]
    Register(#[from] RegisterError),
}

impl std::fmt::Debug for RegisterUserError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for RegisterUserError {
    fn status_code(&self) -> StatusCode {
        match self {
            RegisterUserError::MissingParameter(_)
            | RegisterUserError::Register(RegisterError::InvalidName(_))
            | RegisterUserError::Register(RegisterError::InvalidEmail(_)) => {
                StatusCode::BAD_REQUEST
            }
            RegisterUserError::Register(RegisterError::Unexpected(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .json(serde_json::json!({ "error": self.to_string() }))
    }
}

/// `POST /register`. Checks that both fields are present, delegates to the
/// use case and maps its outcome onto a status code: 201 with the stored
/// entry on success, 400 for anything malformed, 500 when the store fails.
#[tracing::instrument(
    name = "Registering a new user",
    skip(payload, usecase),
    fields(request_id = %Uuid::new_v4())
)]
pub async fn register(
    payload: web::Json<RegisterPayload>,
    usecase: web::Data<RegisterUserOnMailingList>,
) -> Result<HttpResponse, RegisterUserError> {
    let data = require_parameters(payload.into_inner())?;
    let user = usecase.perform(data).await?;

    Ok(HttpResponse::Created().json(user))
}

/// Absent and empty fields are reported together, `name` first,
/// space-joined, e.g. "Missing parameter from request: name email".
fn require_parameters(payload: RegisterPayload) -> Result<UserData, RegisterUserError> {
    let name = payload.name.unwrap_or_default();
    let email = payload.email.unwrap_or_default();

    let mut missing = Vec::new();
    if name.is_empty() {
        missing.push("name");
    }
    if email.is_empty() {
        missing.push("email");
    }
    if !missing.is_empty() {
        return Err(RegisterUserError::MissingParameter(missing.join(" ")));
    }

    Ok(UserData { name, email })
}
