use crate::errors::ResultResp;
use astra::{Body, Response, ResponseBuilder};

/// See-other redirect, used after successful admin mutations.
pub fn redirect_response(location: &str) -> ResultResp {
    let resp = ResponseBuilder::new()
        .status(303)
        .header("Location", location)
        .body(Body::empty())
        .unwrap_or_else(|_| Response::new(Body::empty()));

    Ok(resp)
}
