//! Classification of UrbanAirship HTTP responses into typed outcomes.

use hyper::ext::ReasonPhrase;
use reqwest::Response;
use serde::de::DeserializeOwned;

use crate::{types::ErrorResponse, Error};

/// Maps a transport result onto the closed set of outcomes callers handle.
///
/// Transport errors pass through untouched. 200, 201, 202 and 204 hand the
/// response back with its body unread. 400 decodes the body as an
/// [`ErrorResponse`]. 401, 404 and every other status become errors without
/// the body ever being read. Nothing is retried here.
pub async fn check_response(result: Result<Response, Error>) -> Result<Response, Error> {
    let resp = result?;
    let status = resp.status();
    tracing::debug!("UrbanAirship responded with {}", status);

    match status.as_u16() {
        200 | 201 | 202 | 204 => Ok(resp),
        400 => Err(parse_err(resp).await),
        401 => {
            tracing::warn!("UrbanAirship rejected credentials");
            Err(Error::Unauthorized)
        }
        404 => Err(Error::NotFound),
        _ => {
            let status_line = status_line(&resp);
            tracing::error!("Request failed with status {}", status_line);
            Err(Error::UnexpectedStatus {
                status,
                status_line,
            })
        }
    }
}

/// Code plus reason phrase as the server sent them. hyper only records the
/// phrase when it differs from the canonical one.
fn status_line(resp: &Response) -> String {
    let status = resp.status();
    let reason = match resp.extensions().get::<ReasonPhrase>() {
        Some(phrase) => String::from_utf8_lossy(phrase.as_bytes()).into_owned(),
        None => status.canonical_reason().unwrap_or_default().to_string(),
    };

    if reason.is_empty() {
        status.as_str().to_string()
    } else {
        format!("{} {}", status.as_str(), reason)
    }
}

/// Reads the whole body and decodes it as `T`. The response is consumed either way.
pub async fn decode_body<T>(resp: Response) -> Result<T, Error>
where
    T: DeserializeOwned,
{
    let body = resp.bytes().await.map_err(|e| {
        tracing::error!("Failed to read response body: {}", e);
        Error::from(e)
    })?;

    serde_json::from_slice(&body).map_err(|e| {
        tracing::error!(
            "Failed to parse response: {} | body: {}",
            e,
            truncate_body(&String::from_utf8_lossy(&body))
        );
        Error::Decode(e)
    })
}

async fn parse_err(resp: Response) -> Error {
    match decode_body::<ErrorResponse>(resp).await {
        Ok(err_resp) => {
            tracing::error!(
                error_code = err_resp.error_code,
                operation_id = %err_resp.operation_id,
                "UrbanAirship rejected request: {}",
                err_resp.error
            );
            Error::Api(err_resp)
        }
        Err(e) => e,
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 500;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...[truncated]", &body[..idx]),
        None => body.to_string(),
    }
}
