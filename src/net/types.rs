//! Wire types for the authentication API.

use serde::Deserialize;

/// Successful login payload. Only the fields the client consumes; the
/// server may send more.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct LoginResponse {
    pub access_token: String,
    pub user_id: String,
}
