use http::header::{COOKIE, HeaderMap, SET_COOKIE};

use crate::session::config::{
    ALLOW_INSECURE_HTTP, DEV_MODE, SESSION_COOKIE_MAX_AGE, SESSION_COOKIE_NAME,
};
use crate::session::errors::SessionError;
use crate::session::types::SessionRecord;

use super::codec::encode_session;

// Secure is dropped only when both the dev-mode and the explicit insecure
// override are set; either one alone keeps it.
fn secure_attribute() -> &'static str {
    if *DEV_MODE && *ALLOW_INSECURE_HTTP {
        ""
    } else {
        " Secure;"
    }
}

fn append_session_cookie(
    headers: &mut HeaderMap,
    value: &str,
    max_age: i64,
) -> Result<(), SessionError> {
    let cookie = format!(
        "{}={}; SameSite=Strict;{} HttpOnly; Path=/; Max-Age={}",
        SESSION_COOKIE_NAME.as_str(),
        value,
        secure_attribute(),
        max_age
    );
    headers.append(
        SET_COOKIE,
        cookie
            .parse()
            .map_err(|_| SessionError::Cookie("Failed to parse cookie".to_string()))?,
    );
    Ok(())
}

/// Headers writing `record` as the session cookie with the standard
/// attribute set. The JSON value is percent-encoded for transport.
pub(crate) fn set_session_cookie(record: &SessionRecord) -> Result<HeaderMap, SessionError> {
    let encoded = encode_session(record)?;
    let mut headers = HeaderMap::new();
    append_session_cookie(
        &mut headers,
        &urlencoding::encode(&encoded),
        *SESSION_COOKIE_MAX_AGE,
    )?;
    tracing::debug!("Session cookie headers: {headers:?}");
    Ok(headers)
}

/// Headers deleting the session cookie, with the matching `Path=/`.
pub(crate) fn clear_session_cookie() -> Result<HeaderMap, SessionError> {
    let mut headers = HeaderMap::new();
    append_session_cookie(&mut headers, "", -86400)?;
    Ok(headers)
}

/// Extract the session cookie value from the request headers, undoing the
/// transport percent-encoding. `Ok(None)` when no session cookie is sent.
pub fn session_cookie_from_headers(headers: &HeaderMap) -> Result<Option<String>, SessionError> {
    let Some(cookie_header) = headers.get(COOKIE) else {
        tracing::debug!("No cookie header found");
        return Ok(None);
    };

    let cookie_str = cookie_header.to_str().map_err(|e| {
        tracing::error!("Invalid cookie header: {}", e);
        SessionError::Header("Invalid cookie header".to_string())
    })?;

    let cookie_name = SESSION_COOKIE_NAME.as_str();
    let value = cookie_str.split(';').map(|s| s.trim()).find_map(|s| {
        let mut parts = s.splitn(2, '=');
        match (parts.next(), parts.next()) {
            (Some(k), Some(v)) if k == cookie_name => Some(v),
            _ => None,
        }
    });

    let Some(value) = value else {
        tracing::debug!("No session cookie '{}' found in cookies", cookie_name);
        return Ok(None);
    };

    // An undecodable value is passed through as-is; the codec rejects it as
    // malformed downstream.
    let decoded = urlencoding::decode(value)
        .map(|v| v.into_owned())
        .unwrap_or_else(|_| value.to_string());

    Ok(Some(decoded))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::main::codec::decode_session;
    use http::header::HeaderValue;

    fn record() -> SessionRecord {
        SessionRecord {
            name: "alice".to_string(),
            cognito_id: None,
            admin: None,
            access_token_expires: 1_700_000_000,
            refresh_token: "r1".to_string(),
        }
    }

    fn set_cookie_str(headers: &HeaderMap) -> &str {
        headers
            .get(SET_COOKIE)
            .expect("Set-Cookie header should exist")
            .to_str()
            .expect("Set-Cookie header should be valid UTF-8")
    }

    #[test]
    fn test_set_session_cookie_attributes() {
        let headers = set_session_cookie(&record()).unwrap();
        let cookie = set_cookie_str(&headers);
        assert!(cookie.starts_with("loggedIn="));
        assert!(cookie.contains("SameSite=Strict"));
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.contains("Path=/"));
        assert!(cookie.contains("Max-Age=2592000"));
        // DEV_MODE is unset in the test environment, so Secure must be kept
        assert!(cookie.contains("Secure"));
    }

    #[test]
    fn test_clear_session_cookie_expires_immediately() {
        let headers = clear_session_cookie().unwrap();
        let cookie = set_cookie_str(&headers);
        assert!(cookie.starts_with("loggedIn=;"));
        assert!(cookie.contains("Max-Age=-86400"));
        assert!(cookie.contains("Path=/"));
    }

    #[test]
    fn test_cookie_value_round_trips_through_headers() {
        let original = record();
        let set_headers = set_session_cookie(&original).unwrap();

        // Replay the Set-Cookie value as a request Cookie header
        let value = set_cookie_str(&set_headers)
            .split(';')
            .next()
            .unwrap()
            .to_string();
        let mut request_headers = HeaderMap::new();
        request_headers.insert(COOKIE, HeaderValue::from_str(&value).unwrap());

        let raw = session_cookie_from_headers(&request_headers)
            .unwrap()
            .expect("session cookie should be found");
        let decoded = decode_session(Some(&raw)).unwrap().unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn test_session_cookie_from_headers_absent() {
        let headers = HeaderMap::new();
        assert_eq!(session_cookie_from_headers(&headers).unwrap(), None);
    }

    #[test]
    fn test_session_cookie_from_headers_other_cookies_only() {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_static("theme=dark; lang=en"));
        assert_eq!(session_cookie_from_headers(&headers).unwrap(), None);
    }

    #[test]
    fn test_session_cookie_from_headers_picks_out_session_cookie() {
        let mut headers = HeaderMap::new();
        headers.insert(
            COOKIE,
            HeaderValue::from_static("theme=dark; loggedIn=abc; lang=en"),
        );
        assert_eq!(
            session_cookie_from_headers(&headers).unwrap(),
            Some("abc".to_string())
        );
    }
}
