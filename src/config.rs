use std::env;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthMode {
    /// Credential is used verbatim as the external identity.
    Direct,
    /// Credential is a signed token verified against the identity provider's JWKS.
    Jwks,
}

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub auth_mode: AuthMode,
    pub jwks_url: String,
    pub auth_issuer: String,
    pub auth_audience: String,
    /// Historical behavior: any authenticated user may vote on any poll.
    /// Set to false to require membership in the poll's group.
    pub open_poll_voting: bool,
}

impl Config {
    pub fn from_env() -> Self {
        let auth_mode = match env::var("AUTH_MODE").unwrap_or_else(|_| "jwks".to_string()).as_str() {
            "direct" => AuthMode::Direct,
            _ => AuthMode::Jwks,
        };

        let (jwks_url, auth_issuer, auth_audience) = match auth_mode {
            AuthMode::Jwks => (
                env::var("JWKS_URL").expect("JWKS_URL must be set when AUTH_MODE=jwks"),
                env::var("AUTH_ISSUER").expect("AUTH_ISSUER must be set when AUTH_MODE=jwks"),
                env::var("AUTH_AUDIENCE").expect("AUTH_AUDIENCE must be set when AUTH_MODE=jwks"),
            ),
            AuthMode::Direct => (String::new(), String::new(), String::new()),
        };

        Self {
            database_url: env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
            port: env::var("PORT").unwrap_or_else(|_| "3000".to_string()).parse().expect("PORT must be a number"),
            auth_mode,
            jwks_url,
            auth_issuer,
            auth_audience,
            open_poll_voting: env::var("OPEN_POLL_VOTING")
                .map(|v| v != "false" && v != "0")
                .unwrap_or(true),
        }
    }
}
