//! The `Login` call and session lifecycle.

use cvent_client::normalize::{boolean, path, text};
use cvent_client::security::redact;
use cvent_client::{Connection, Session, SoapTransport};
use serde_json::{json, Value};
use tracing::{info, instrument, warn};

use crate::credentials::AccountCredentials;
use crate::error::{Error, ErrorKind, Result};

/// `ErrorMessage` the vendor returns for bad credentials or an unapproved IP.
pub const ACCESS_DENIED: &str = "Access is denied.";

/// Prefix of the `ErrorMessage` returned for a locked account.
pub const LOCKED_OUT_PREFIX: &str = "Your account has been locked out";

const ACCESS_DENIED_TEXT: &str = "Access is denied. Please check your Account Number, Username, Password and that your request is coming from an approved IP address";
const LOCKED_OUT_TEXT: &str = "Account Locked";

/// Log in and install the resulting session on the connection.
///
/// Any session already held is dropped first, so the call goes to the
/// configured environment without a session header. On failure the
/// connection is left unauthenticated.
#[instrument(skip_all)]
pub async fn login<T: SoapTransport>(
    connection: &mut Connection<T>,
    credentials: &AccountCredentials,
) -> Result<Session> {
    connection.clear_session();

    let params = json!({
        "AccountNumber": credentials.account_number(),
        "UserName": credentials.username(),
        "Password": credentials.password(),
    });

    let session = match connection.call("Login", params).await {
        Ok(response) => interpret_login_result(&response, credentials)?,
        Err(err) => {
            // The diagnostics dump carries the request, so the source is not kept.
            let message = redact::scrub(&err.to_string(), &credentials.secrets());
            warn!("Login call failed");
            return Err(Error::new(ErrorKind::Authentication(message)));
        }
    };

    info!(server_url = %session.server_url(), "Logged in");
    connection.set_session(session.clone());
    Ok(session)
}

/// Drop the session held by the connection.
///
/// Purely local; the vendor has no logout call. Returns true if a session
/// was held.
pub fn logout<T: SoapTransport>(connection: &mut Connection<T>) -> bool {
    connection.clear_session().is_some()
}

/// Interpret the content of a `LoginResponse`.
///
/// Succeeds only when `LoginResult.LoginSuccess` is true and a
/// `CventSessionHeader` is present. Error text is scrubbed of the
/// credential literals.
pub fn interpret_login_result(response: &Value, credentials: &AccountCredentials) -> Result<Session> {
    let result = path(response, &["LoginResult"]);
    let field = |name: &str| result.and_then(|r| r.get(name));

    let success = boolean(field("LoginSuccess")).unwrap_or(false);
    let header = text(field("CventSessionHeader")).filter(|h| !h.is_empty());

    if let (true, Some(header)) = (success, header) {
        let server_url = text(field("ServerURL")).unwrap_or_default();
        return Ok(Session::new(header, server_url));
    }

    let error_message = text(field("ErrorMessage")).filter(|m| !m.is_empty());

    let kind = match error_message.as_deref() {
        Some(ACCESS_DENIED) => ErrorKind::AuthorizationFailure(ACCESS_DENIED_TEXT.to_string()),
        Some(m) if m.starts_with(LOCKED_OUT_PREFIX) => {
            ErrorKind::AuthorizationLockout(LOCKED_OUT_TEXT.to_string())
        }
        Some(m) => ErrorKind::Authentication(redact::scrub(
            &format!(
                "Error authenticating with Cvent. An error message was found.\nError Message: {}\n",
                m
            ),
            &credentials.secrets(),
        )),
        None => ErrorKind::Authentication(
            "Error authenticating with Cvent. No error message was received.\n".to_string(),
        ),
    };

    warn!(error = %kind, "Login rejected");
    Err(Error::new(kind))
}
