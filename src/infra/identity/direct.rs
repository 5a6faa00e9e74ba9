use crate::domain::ports::IdentityVerifier;
use crate::error::AppError;
use async_trait::async_trait;

/// The original resolution strategy: the bearer credential IS the external
/// identity. No cryptographic verification; kept for local development and
/// tests.
pub struct DirectVerifier;

#[async_trait]
impl IdentityVerifier for DirectVerifier {
    async fn verify(&self, credential: &str) -> Result<String, AppError> {
        if credential.is_empty() {
            return Err(AppError::Unauthorized);
        }
        Ok(credential.to_string())
    }
}
