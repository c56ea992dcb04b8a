//! `token` cookie: reading it off a request and building the `Set-Cookie` value.

use axum::http::{
    HeaderMap, HeaderValue,
    header::{COOKIE, InvalidHeaderValue},
};
use chrono::{DateTime, Utc};

pub const TOKEN_COOKIE: &str = "token";

/// A `Cookie` header that is not visible ASCII.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnreadableCookie;

/// Looks up `name` across every `Cookie` header.
///
/// `Ok(None)` means the cookie is absent. A present cookie with an empty value
/// is returned as `Some("")` so the caller can treat it as malformed.
pub fn read(headers: &HeaderMap, name: &str) -> Result<Option<String>, UnreadableCookie> {
    for header in headers.get_all(COOKIE) {
        let value = header.to_str().map_err(|_| UnreadableCookie)?;
        for pair in value.split(';') {
            let Some((key, val)) = pair.trim().split_once('=') else {
                continue;
            };
            if key.trim() == name {
                return Ok(Some(val.trim().trim_matches('"').to_string()));
            }
        }
    }
    Ok(None)
}

pub fn session(
    token: &str,
    expires_at: DateTime<Utc>,
    secure: bool,
) -> Result<HeaderValue, InvalidHeaderValue> {
    let mut cookie = format!(
        "{TOKEN_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax; Expires={}",
        expires_at.format("%a, %d %b %Y %H:%M:%S GMT")
    );
    if secure {
        cookie.push_str("; Secure");
    }
    HeaderValue::from_str(&cookie)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn headers(values: &[&str]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for v in values {
            map.append(COOKIE, HeaderValue::from_str(v).unwrap());
        }
        map
    }

    #[test]
    fn finds_token_among_other_cookies() {
        let h = headers(&["theme=dark; token=abc.def.ghi; lang=en"]);
        assert_eq!(read(&h, TOKEN_COOKIE), Ok(Some("abc.def.ghi".to_string())));
    }

    #[test]
    fn searches_every_cookie_header() {
        let h = headers(&["theme=dark", "token=xyz"]);
        assert_eq!(read(&h, TOKEN_COOKIE), Ok(Some("xyz".to_string())));
    }

    #[test]
    fn absent_cookie_is_none() {
        assert_eq!(read(&HeaderMap::new(), TOKEN_COOKIE), Ok(None));
        let h = headers(&["tokenx=1; xtoken=2"]);
        assert_eq!(read(&h, TOKEN_COOKIE), Ok(None));
    }

    #[test]
    fn empty_value_is_present() {
        let h = headers(&["token="]);
        assert_eq!(read(&h, TOKEN_COOKIE), Ok(Some(String::new())));
    }

    #[test]
    fn non_ascii_header_is_unreadable() {
        let mut h = HeaderMap::new();
        h.insert(COOKIE, HeaderValue::from_bytes(b"token=\xff").unwrap());
        assert_eq!(read(&h, TOKEN_COOKIE), Err(UnreadableCookie));
    }

    #[test]
    fn session_cookie_attributes() {
        let at = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
        let v = session("t0k", at, false).unwrap();
        assert_eq!(
            v.to_str().unwrap(),
            "token=t0k; Path=/; HttpOnly; SameSite=Lax; Expires=Fri, 02 Jan 2026 03:04:05 GMT"
        );
        let v = session("t0k", at, true).unwrap();
        assert!(v.to_str().unwrap().ends_with("; Secure"));
    }
}
