use contracts::system::auth::{LoginRequest, LoginResponse};

use crate::shared::http::{self, ApiError};

/// Login with username and access key
pub async fn login(username: String, access_key: String) -> Result<LoginResponse, ApiError> {
    let request = LoginRequest {
        username,
        access_key,
    };
    let response: LoginResponse = http::post_json("/api/login", &request).await?;

    // Some rejections come back 200 with success=false.
    if response.token.is_empty() {
        return Err(ApiError {
            status: None,
            message: response
                .message
                .unwrap_or_else(|| "Login failed".to_string()),
        });
    }
    Ok(response)
}
