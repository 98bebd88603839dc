use serde_json::Value;

/// Extracts the text to show for a successful webhook reply body.
///
/// Uses the `message` field when it is present and truthy, otherwise the whole
/// body pretty-printed with 2-space indentation. A body that is not JSON is
/// treated as a JSON string value.
pub fn reply_text(body: &[u8]) -> String {
    let value = parse_body(body);
    match truthy_message(&value) {
        Some(message) => message,
        None => serde_json::to_string_pretty(&value).unwrap_or_default(),
    }
}

/// Extracts the server-provided `message` from an error reply body, if any.
pub fn server_error_message(body: &[u8]) -> Option<String> {
    truthy_message(&parse_body(body))
}

fn parse_body(body: &[u8]) -> Value {
    serde_json::from_slice(body)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(body).into_owned()))
}

fn truthy_message(value: &Value) -> Option<String> {
    match value.get("message")? {
        Value::String(text) if !text.is_empty() => Some(text.clone()),
        Value::Number(number) if number.as_f64() != Some(0.0) => Some(number.to_string()),
        Value::Bool(true) => Some("true".to_string()),
        _ => None,
    }
}
