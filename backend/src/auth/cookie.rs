//! Web login cookie construction

use crate::config::CookieConfig;
use axum_extra::extract::cookie::{Cookie, SameSite};

fn same_site(value: &str) -> SameSite {
    match value.to_ascii_lowercase().as_str() {
        "strict" => SameSite::Strict,
        "none" => SameSite::None,
        _ => SameSite::Lax,
    }
}

fn base_cookie(config: &CookieConfig, value: String) -> Cookie<'static> {
    let mut cookie = Cookie::new(config.name.clone(), value);
    cookie.set_http_only(true);
    cookie.set_secure(config.secure);
    cookie.set_same_site(same_site(&config.same_site));
    cookie.set_path(config.path.clone());
    cookie
}

/// HttpOnly cookie carrying an access token, expiring with the token
pub fn access_token_cookie(config: &CookieConfig, token: String, max_age_secs: i64) -> Cookie<'static> {
    let mut cookie = base_cookie(config, token);
    cookie.set_max_age(time::Duration::seconds(max_age_secs.max(0)));
    cookie
}

/// Cookie that makes the browser drop the access token
pub fn removal_cookie(config: &CookieConfig) -> Cookie<'static> {
    let mut cookie = base_cookie(config, String::new());
    cookie.set_max_age(time::Duration::ZERO);
    cookie
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use rstest::rstest;

    #[rstest]
    #[case("lax", SameSite::Lax)]
    #[case("Strict", SameSite::Strict)]
    #[case("NONE", SameSite::None)]
    #[case("bogus", SameSite::Lax)]
    fn test_same_site_parsing(#[case] raw: &str, #[case] expected: SameSite) {
        assert_eq!(same_site(raw), expected);
    }

    #[test]
    fn test_access_token_cookie_attributes() {
        let config = AppConfig::default().cookie;
        let rendered = access_token_cookie(&config, "jwt".to_string(), 3600).to_string();

        assert!(rendered.starts_with("access_token=jwt"));
        assert!(rendered.contains("HttpOnly"));
        assert!(rendered.contains("SameSite=Lax"));
        assert!(rendered.contains("Path=/"));
        assert!(rendered.contains("Max-Age=3600"));
        assert!(!rendered.contains("Secure"));
    }

    #[test]
    fn test_secure_flag_follows_config() {
        let mut config = AppConfig::default().cookie;
        config.secure = true;
        config.same_site = "Strict".to_string();
        let rendered = access_token_cookie(&config, "jwt".to_string(), 60).to_string();

        assert!(rendered.contains("Secure"));
        assert!(rendered.contains("SameSite=Strict"));
    }

    #[test]
    fn test_removal_cookie_expires_immediately() {
        let config = AppConfig::default().cookie;
        let rendered = removal_cookie(&config).to_string();
        assert!(rendered.starts_with("access_token="));
        assert!(rendered.contains("Max-Age=0"));
    }
}
