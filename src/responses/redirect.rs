use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};

/// 302 with a Location header and an empty body.
pub fn redirect(location: &str) -> ResultResp {
    let resp = ResponseBuilder::new()
        .status(302)
        .header("Location", location)
        .body(Body::empty())
        .unwrap();

    Ok(resp)
}

/// Like `redirect`, also setting (or clearing) a cookie on the way out.
pub fn redirect_with_cookie(location: &str, cookie: &str) -> ResultResp {
    let resp = ResponseBuilder::new()
        .status(302)
        .header("Location", location)
        .header("Set-Cookie", cookie)
        .body(Body::empty())
        .unwrap();

    Ok(resp)
}
