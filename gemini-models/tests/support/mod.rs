#![allow(dead_code)]

use serde_json::{json, Value};

use gemini_models::Client;

pub fn build_gemini_client(base_url: &str) -> Client {
    Client::builder()
        .api_key("test-key")
        .base_url(base_url)
        .build()
        .unwrap()
}

pub fn model_json(name: &str, methods: &[&str], description: Option<&str>) -> Value {
    let mut value = json!({
        "name": name,
        "supportedGenerationMethods": methods,
    });
    if let Some(description) = description {
        value["description"] = json!(description);
    }
    value
}

pub fn separator() -> String {
    "-".repeat(50)
}
