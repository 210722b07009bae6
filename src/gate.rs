use crate::auth::AuthSession;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Events,
    EventDetail,
    Login,
    Signup,
    Profile,
}

impl Route {
    /// Pages that only make sense with a signed-in user.
    fn requires_auth(self) -> bool {
        matches!(self, Route::Profile)
    }

    /// Pages that only make sense without one.
    fn auth_only(self) -> bool {
        matches!(self, Route::Login | Route::Signup)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Allow,
    RedirectToLogin,
    RedirectHome,
}

/// Pure access decision. The caller performs the actual redirect.
pub fn decide(session: &AuthSession, target: Route) -> Access {
    if target.requires_auth() && !session.is_authenticated() {
        return Access::RedirectToLogin;
    }
    if target.auth_only() && session.is_authenticated() {
        return Access::RedirectHome;
    }
    Access::Allow
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::AuthUser;

    fn signed_in() -> AuthSession {
        AuthSession {
            user: Some(AuthUser {
                name: "Demo User".to_string(),
                email: "demo@example.com".to_string(),
            }),
        }
    }

    #[test]
    fn anonymous_profile_redirects_to_login() {
        let session = AuthSession::default();
        assert_eq!(decide(&session, Route::Profile), Access::RedirectToLogin);
    }

    #[test]
    fn signed_in_login_and_signup_redirect_home() {
        let session = signed_in();
        assert_eq!(decide(&session, Route::Login), Access::RedirectHome);
        assert_eq!(decide(&session, Route::Signup), Access::RedirectHome);
    }

    #[test]
    fn public_routes_always_allow() {
        let anonymous = AuthSession::default();
        let session = signed_in();
        for route in [Route::Home, Route::Events, Route::EventDetail] {
            assert_eq!(decide(&anonymous, route), Access::Allow);
            assert_eq!(decide(&session, route), Access::Allow);
        }
        assert_eq!(decide(&anonymous, Route::Login), Access::Allow);
        assert_eq!(decide(&session, Route::Profile), Access::Allow);
    }
}
