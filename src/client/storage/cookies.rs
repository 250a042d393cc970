use cookie::{time::Duration, Cookie};

/// Finds the value of a cookie in a `document.cookie` style string.
///
/// Cookies with an empty value are treated as absent, which is how expired session
/// cookies look to a browser that has not yet dropped them.
pub fn find_cookie(cookies: &str, name: &str) -> Option<String> {
    Cookie::split_parse(cookies)
        .filter_map(Result::ok)
        .find(|cookie| cookie.name() == name && !cookie.value().is_empty())
        .map(|cookie| cookie.value().to_string())
}

/// Builds the cookie string that expires `name` immediately for the whole site.
pub fn expired_cookie(name: &str) -> String {
    Cookie::build((name, ""))
        .path("/")
        .max_age(Duration::ZERO)
        .build()
        .to_string()
}
