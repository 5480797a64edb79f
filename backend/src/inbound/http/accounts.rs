//! Account API handlers.
//!
//! ```text
//! POST /signup {"matricNumber":"CSC/2019/001","name":"Ada",...,"password":"pw"}
//! POST /signin {"matricNumber":"CSC/2019/001","password":"pw"}
//! POST /update-profile {"matricNumber":"CSC/2019/001","name":"Ada",...}
//! ```
//!
//! Store failures are logged and answered with a fixed message; the
//! client never sees the underlying cause.

use actix_web::{HttpResponse, post, web};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use crate::domain::{
    AccountProfile, AccountValidationError, Credentials, Error, ErrorCode, NewAccount,
    ProfileUpdate,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::{error_field_response, extractor_error};
use crate::inbound::http::response::Envelope;
use crate::inbound::http::state::HttpState;

pub(crate) const SIGNUP_FAILED: &str = "Sign-up failed. Matric number might already exist.";
pub(crate) const SIGNIN_FAILED: &str = "Invalid login credentials";
pub(crate) const UPDATE_PROFILE_FAILED: &str = "Failed to update profile";

/// Registration request body for `POST /signup`.
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    #[serde(alias = "matric_number")]
    pub matric_number: String,
    pub name: String,
    pub department: String,
    pub college: String,
    pub level: String,
    pub hostel: String,
    pub password: String,
}

impl TryFrom<SignupRequest> for NewAccount {
    type Error = AccountValidationError;

    fn try_from(value: SignupRequest) -> Result<Self, Self::Error> {
        let profile = AccountProfile {
            name: value.name,
            department: value.department,
            college: value.college,
            level: value.level,
            hostel: value.hostel,
        };
        Self::try_from_parts(&value.matric_number, profile, &value.password)
    }
}

/// Sign-in request body for `POST /signin`.
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SigninRequest {
    #[serde(alias = "matric_number")]
    pub matric_number: String,
    pub password: String,
}

impl TryFrom<SigninRequest> for Credentials {
    type Error = AccountValidationError;

    fn try_from(value: SigninRequest) -> Result<Self, Self::Error> {
        Self::try_from_parts(&value.matric_number, &value.password)
    }
}

/// Profile replacement body for `POST /update-profile`.
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    #[serde(alias = "matric_number")]
    pub matric_number: String,
    pub name: String,
    pub department: String,
    pub college: String,
    pub level: String,
    pub hostel: String,
}

impl TryFrom<UpdateProfileRequest> for ProfileUpdate {
    type Error = AccountValidationError;

    fn try_from(value: UpdateProfileRequest) -> Result<Self, Self::Error> {
        let profile = AccountProfile {
            name: value.name,
            department: value.department,
            college: value.college,
            level: value.level,
            hostel: value.hostel,
        };
        Self::try_from_parts(&value.matric_number, profile)
    }
}

pub(crate) fn map_account_validation_error(err: AccountValidationError) -> Error {
    Error::invalid_request(err.to_string())
}

/// Register a new account.
///
/// Any store failure, including a duplicate matric number, yields
/// `{"success":false,"message":"Sign-up failed. ..."}` with status 200.
#[post("/signup")]
pub async fn signup(
    state: web::Data<HttpState>,
    payload: web::Json<SignupRequest>,
) -> ApiResult<web::Json<Envelope>> {
    let account = NewAccount::try_from(payload.into_inner())
        .map_err(map_account_validation_error)?;
    let matric_number = account.matric_number.clone();

    match state.accounts.register(account).await {
        Ok(()) => {
            info!(%matric_number, "account registered");
            Ok(web::Json(Envelope::ok()))
        }
        Err(err) => {
            warn!(%matric_number, code = ?err.code(), error = %err, "sign-up failed");
            Ok(web::Json(Envelope::failure_message(SIGNUP_FAILED)))
        }
    }
}

/// Check credentials against the stored account.
#[post("/signin")]
pub async fn signin(
    state: web::Data<HttpState>,
    payload: web::Json<SigninRequest>,
) -> ApiResult<web::Json<Envelope>> {
    let credentials = Credentials::try_from(payload.into_inner())
        .map_err(map_account_validation_error)?;

    match state.accounts.authenticate(&credentials).await {
        Ok(account) => {
            info!(matric_number = %account.matric_number(), "sign-in succeeded");
            Ok(web::Json(Envelope::ok()))
        }
        Err(err) if err.code() == ErrorCode::NotFound => {
            info!(matric_number = %credentials.matric_number(), "sign-in rejected");
            Ok(web::Json(Envelope::failure_message(SIGNIN_FAILED)))
        }
        Err(err) => {
            warn!(
                matric_number = %credentials.matric_number(),
                code = ?err.code(),
                error = %err,
                "sign-in lookup failed"
            );
            Ok(web::Json(Envelope::failure_message(SIGNIN_FAILED)))
        }
    }
}

/// Replace the five profile fields of an account.
///
/// Updating an unknown matric number succeeds with zero rows affected.
/// Every failure on this route, validation included, is reported in the
/// envelope's `error` field.
#[post("/update-profile")]
pub async fn update_profile(
    state: web::Data<HttpState>,
    payload: Result<web::Json<UpdateProfileRequest>, actix_web::Error>,
) -> HttpResponse {
    let parsed = payload
        .map_err(|err| extractor_error(&err))
        .and_then(|json| {
            ProfileUpdate::try_from(json.into_inner())
                .map_err(map_account_validation_error)
        });
    let update = match parsed {
        Ok(update) => update,
        Err(err) => return error_field_response(&err),
    };
    let matric_number = update.matric_number.clone();

    match state.accounts.update_profile(update).await {
        Ok(rows) => {
            info!(%matric_number, rows, "profile updated");
            HttpResponse::Ok().json(Envelope::ok())
        }
        Err(err) => {
            error!(%matric_number, code = ?err.code(), error = %err, "profile update failed");
            HttpResponse::InternalServerError()
                .json(Envelope::failure_error(UPDATE_PROFILE_FAILED))
        }
    }
}
