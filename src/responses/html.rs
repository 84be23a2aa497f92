use crate::errors::ResultResp;
use astra::{Body, Response, ResponseBuilder};
use maud::Markup;

pub fn html_response(markup: Markup) -> ResultResp {
    html_response_status(200, markup)
}

/// Full page with an explicit status, e.g. the 404 detail page.
pub fn html_response_status(status: u16, markup: Markup) -> ResultResp {
    let body = markup.into_string();

    let resp = ResponseBuilder::new()
        .status(status)
        .header("Content-Type", "text/html; charset=utf-8")
        .body(Body::from(body))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")));

    Ok(resp)
}
