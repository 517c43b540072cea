use reqwest::StatusCode;

/// Best-effort internet reachability check against a well-known host.
///
/// `Ok(true)` only for an HTTP 200 from the probe URL. Any other status is
/// `Ok(false)`. Transport-level failures (DNS, TLS, refused connection,
/// timeout) surface as `Err`; the caller decides how fatal that is.
pub async fn is_online(probe_url: &str) -> Result<bool, reqwest::Error> {
    let res = reqwest::get(probe_url).await?;

    Ok(res.status() == StatusCode::OK)
}
