use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct HelloResponse {
    pub message: String,
    pub authenticated: bool,
}

impl HelloResponse {
    pub fn greeting() -> Self {
        Self {
            message: "hello from backend".to_string(),
            authenticated: true,
        }
    }
}
