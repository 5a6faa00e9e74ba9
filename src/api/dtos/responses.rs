use serde::Serialize;

#[derive(Serialize)]
pub struct ServiceMetadata {
    pub service: &'static str,
    pub version: &'static str,
}
