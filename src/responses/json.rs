use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};
use serde_json::Value;

pub fn json_response(value: &Value) -> ResultResp {
    let resp = ResponseBuilder::new()
        .status(200)
        .header("Content-Type", "application/json")
        .body(Body::new(value.to_string()))
        .unwrap();

    Ok(resp)
}
