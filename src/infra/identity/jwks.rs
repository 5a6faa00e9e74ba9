use crate::domain::ports::IdentityVerifier;
use crate::error::AppError;
use async_trait::async_trait;
use jsonwebtoken::{decode, decode_header, Algorithm, DecodingKey, Validation};
use serde::Deserialize;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::{debug, warn};

#[derive(Deserialize)]
struct JwksDocument {
    keys: Vec<Jwk>,
}

#[derive(Deserialize)]
struct Jwk {
    kid: String,
    n: String,
    e: String,
}

#[derive(Deserialize)]
struct IdClaims {
    sub: String,
}

/// The primary resolution strategy: the bearer credential is a signed token.
/// Signature, issuer and audience are verified against the identity
/// provider's published JWKS; the subject claim becomes the external identity.
pub struct JwksVerifier {
    http: reqwest::Client,
    jwks_url: String,
    issuer: String,
    audience: String,
    // RSA components cached by key id; refreshed when an unknown kid arrives
    // (provider key rotation).
    keys: RwLock<HashMap<String, (String, String)>>,
}

impl JwksVerifier {
    pub fn new(jwks_url: String, issuer: String, audience: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            jwks_url,
            issuer,
            audience,
            keys: RwLock::new(HashMap::new()),
        }
    }

    async fn decoding_key(&self, kid: &str) -> Result<DecodingKey, AppError> {
        if let Some((n, e)) = self.keys.read().await.get(kid) {
            return DecodingKey::from_rsa_components(n, e).map_err(|_| AppError::Unauthorized);
        }

        debug!("Unknown key id {}, refreshing JWKS from {}", kid, self.jwks_url);
        let jwks: JwksDocument = self
            .http
            .get(&self.jwks_url)
            .send()
            .await
            .map_err(|e| {
                warn!("JWKS fetch failed: {}", e);
                AppError::Internal
            })?
            .json()
            .await
            .map_err(|e| {
                warn!("JWKS response malformed: {}", e);
                AppError::Internal
            })?;

        let mut cache = self.keys.write().await;
        cache.clear();
        for key in jwks.keys {
            cache.insert(key.kid, (key.n, key.e));
        }

        let (n, e) = cache.get(kid).ok_or(AppError::Unauthorized)?;
        DecodingKey::from_rsa_components(n, e).map_err(|_| AppError::Unauthorized)
    }
}

#[async_trait]
impl IdentityVerifier for JwksVerifier {
    async fn verify(&self, credential: &str) -> Result<String, AppError> {
        let header = decode_header(credential).map_err(|_| AppError::Unauthorized)?;
        let kid = header.kid.ok_or(AppError::Unauthorized)?;

        let key = self.decoding_key(&kid).await?;

        let mut validation = Validation::new(Algorithm::RS256);
        validation.set_issuer(&[&self.issuer]);
        validation.set_audience(&[&self.audience]);

        let token = decode::<IdClaims>(credential, &key, &validation)
            .map_err(|_| AppError::Unauthorized)?;

        Ok(token.claims.sub)
    }
}
