//! Response unwrapping.
//!
//! By default callers only see the `result` member of the reply. A populated
//! `error` member in a 2xx reply is not inspected here: the caller gets
//! whatever `result` holds (normally `null`). Full-response mode hands back
//! the whole envelope so the error can be examined.

use serde_json::Value;

/// Return `response` untouched in full-response mode, otherwise its `result`
/// member (`null` when the member is missing or the reply is not an object).
pub fn normalize(response: Value, full_response: bool) -> Value {
    if full_response {
        return response;
    }

    match response {
        Value::Object(mut map) => map.remove("result").unwrap_or(Value::Null),
        _ => Value::Null,
    }
}
