use tower_cookies::{Cookie, Cookies};
use urlencoding::{decode, encode};

/// Transient message channel for redirect-after-write flows. A message set
/// before a redirect survives exactly until the next page reads it. The
/// value is percent-encoded: cookie values must not contain spaces.
const FLASH_COOKIE: &str = "flash";

pub fn set(cookies: &Cookies, message: &str) {
    cookies.add(
        Cookie::build((FLASH_COOKIE, encode(message).into_owned()))
            .path("/")
            .build(),
    );
}

pub fn take(cookies: &Cookies) -> Option<String> {
    let message = cookies.get(FLASH_COOKIE).map(|c| {
        decode(c.value())
            .map(|v| v.into_owned())
            .unwrap_or_else(|_| c.value().to_string())
    });
    if message.is_some() {
        cookies.remove(Cookie::build((FLASH_COOKIE, "")).path("/").build());
    }
    message
}
