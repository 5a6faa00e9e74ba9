pub mod direct;
pub mod jwks;
