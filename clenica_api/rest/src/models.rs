use serde::Serialize;

#[derive(Serialize)]
pub struct ApiError {
    pub error: String,
}

#[derive(Serialize)]
pub struct ApiSuccess {
    pub success: bool,
}
