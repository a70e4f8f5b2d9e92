use axum::extract::Request;
use axum::http::{header, Method, StatusCode};
use axum::middleware::Next;
use axum::response::Response;

use super::cookies::{self, CookieSlot, PendingCookieAction};

/// Path prefixes reachable without a session: the marketing homepage, the
/// auth page, server functions (which guard themselves), and static
/// assets. Everything else is admin area.
const PUBLIC_PREFIXES: &[&str] = &["/login", "/api", "/assets", "/wasm", "/_dioxus", "/favicon"];

/// Whether `path` may be served without a session cookie.
pub fn is_public_path(path: &str) -> bool {
    if path == "/" {
        return true;
    }
    PUBLIC_PREFIXES
        .iter()
        .any(|prefix| path == *prefix || path.starts_with(&format!("{prefix}/")))
}

/// Login redirect carrying the original path so the user lands back where
/// they were headed after signing in.
pub fn login_redirect_target(path: &str) -> String {
    format!("/login?redirect={}", urlencoding::encode(path))
}

/// Route-gating middleware.
///
/// Page navigations to a protected prefix without a session cookie are
/// redirected to the login page with a return-path query parameter.
/// Server-function calls pass through; they authorize themselves and the
/// school API rejects a missing token anyway. After the handler runs, any
/// cookie action scheduled by a server function is applied to the
/// response.
pub async fn route_gate(mut req: Request, next: Next) -> Response {
    let path = req.uri().path().to_string();
    let is_page_navigation = req.method() == Method::GET
        && req
            .headers()
            .get(header::ACCEPT)
            .and_then(|v| v.to_str().ok())
            .map(|accept| accept.contains("text/html"))
            .unwrap_or(false);

    if is_page_navigation
        && !is_public_path(&path)
        && cookies::extract_session_token(req.headers()).is_none()
    {
        tracing::debug!(%path, "unauthenticated page request, redirecting to login");
        return redirect_response(&login_redirect_target(&path));
    }

    // Insert the slot so server functions can schedule cookie changes
    let cookie_slot = CookieSlot::default();
    req.extensions_mut().insert(cookie_slot.clone());

    let mut response = next.run(req).await;

    if let Some(action) = cookie_slot.0.lock().unwrap().take() {
        match action {
            PendingCookieAction::Set { token } => {
                response
                    .headers_mut()
                    .append(header::SET_COOKIE, cookies::build_session_cookie(&token));
            }
            PendingCookieAction::Clear => {
                response
                    .headers_mut()
                    .append(header::SET_COOKIE, cookies::build_clear_cookie());
            }
        }
    }

    response
}

fn redirect_response(target: &str) -> Response {
    Response::builder()
        .status(StatusCode::SEE_OTHER)
        .header(header::LOCATION, target)
        .body(axum::body::Body::empty())
        .expect("redirect response should build")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn homepage_and_login_are_public() {
        assert!(is_public_path("/"));
        assert!(is_public_path("/login"));
        assert!(is_public_path("/assets/theme-base.css"));
        assert!(is_public_path("/api/login"));
    }

    #[test]
    fn admin_prefixes_are_protected() {
        assert!(!is_public_path("/dashboard"));
        assert!(!is_public_path("/students"));
        assert!(!is_public_path("/loginx"));
        assert!(!is_public_path("/expenses/archive"));
    }

    #[test]
    fn redirect_target_encodes_the_return_path() {
        assert_eq!(
            login_redirect_target("/students"),
            "/login?redirect=%2Fstudents"
        );
        assert_eq!(
            login_redirect_target("/expenses/archive"),
            "/login?redirect=%2Fexpenses%2Farchive"
        );
    }
}
