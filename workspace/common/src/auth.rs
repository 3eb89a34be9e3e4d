//! Authentication as an injected capability.

/// Answers whether the current user may see protected pages.
pub trait AuthProvider {
    fn is_authenticated(&self) -> bool;
}

/// Lets everyone in. This is the dashboard's behaviour until a real identity
/// provider is wired up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AlwaysAuthenticated;

impl AuthProvider for AlwaysAuthenticated {
    fn is_authenticated(&self) -> bool {
        true
    }
}

/// Fixed answer, handy for tests and previews of the login flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticAuth(pub bool);

impl AuthProvider for StaticAuth {
    fn is_authenticated(&self) -> bool {
        self.0
    }
}

/// Outcome of a navigation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Granted,
    RedirectToLogin,
}

/// Decides whether a route may be rendered. Public routes are always granted.
pub fn check_access(protected: bool, auth: &dyn AuthProvider) -> Access {
    if !protected || auth.is_authenticated() {
        Access::Granted
    } else {
        Access::RedirectToLogin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_routes_are_always_granted() {
        assert_eq!(check_access(false, &StaticAuth(false)), Access::Granted);
    }

    #[test]
    fn test_protected_route_redirects_without_session() {
        assert_eq!(check_access(true, &StaticAuth(false)), Access::RedirectToLogin);
        assert_eq!(check_access(true, &StaticAuth(true)), Access::Granted);
    }

    #[test]
    fn test_default_provider_lets_everyone_in() {
        assert_eq!(check_access(true, &AlwaysAuthenticated), Access::Granted);
    }
}
