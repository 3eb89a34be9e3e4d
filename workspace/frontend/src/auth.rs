use std::rc::Rc;

use common::{check_access, Access, AuthProvider};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

/// Authentication capability shared through the component tree.
#[derive(Clone)]
pub struct AuthContext {
    provider: Rc<dyn AuthProvider>,
}

impl AuthContext {
    pub fn new(provider: Rc<dyn AuthProvider>) -> Self {
        Self { provider }
    }

    pub fn access(&self, protected: bool) -> Access {
        check_access(protected, self.provider.as_ref())
    }
}

impl PartialEq for AuthContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.provider, &other.provider)
    }
}

#[derive(Properties, PartialEq)]
pub struct GuardProps {
    pub route: Route,
    pub children: Children,
}

/// Where a guarded route sends the user, `None` when it renders in place.
pub fn redirect_target(access: Access) -> Option<Route> {
    match access {
        Access::Granted => None,
        Access::RedirectToLogin => Some(Route::Login),
    }
}

/// Renders its children when the route is accessible, otherwise replaces the
/// current history entry with the login page so back does not return here.
#[function_component(Guard)]
pub fn guard(props: &GuardProps) -> Html {
    let auth = use_context::<AuthContext>();
    let navigator = use_navigator();
    let protected = props.route.is_protected();

    let access = match auth {
        Some(auth) => auth.access(protected),
        None => {
            log::warn!("No auth context available, treating user as signed out");
            if protected {
                Access::RedirectToLogin
            } else {
                Access::Granted
            }
        }
    };
    let target = redirect_target(access);

    use_effect_with((target.clone(), props.route.clone()), move |(target, route)| {
        if let Some(target) = target {
            log::info!("Redirecting {:?} to {:?}", route, target);
            match navigator {
                Some(navigator) => navigator.replace(target),
                None => log::warn!("No router available to redirect {:?}", route),
            }
        }
        || ()
    });

    match target {
        None => html! { <>{ props.children.clone() }</> },
        Some(_) => html! {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::{AlwaysAuthenticated, StaticAuth};

    #[test]
    fn test_context_access() {
        let open = AuthContext::new(Rc::new(AlwaysAuthenticated));
        assert_eq!(open.access(true), Access::Granted);

        let denied = AuthContext::new(Rc::new(StaticAuth(false)));
        assert_eq!(denied.access(true), Access::RedirectToLogin);
        assert_eq!(denied.access(false), Access::Granted);
    }

    #[test]
    fn test_denied_access_targets_login() {
        assert_eq!(redirect_target(Access::Granted), None);
        assert_eq!(redirect_target(Access::RedirectToLogin), Some(Route::Login));

        let denied = AuthContext::new(Rc::new(StaticAuth(false)));
        let target = redirect_target(denied.access(Route::Finance.is_protected()));
        assert_eq!(target, Some(Route::Login));
    }

    #[test]
    fn test_context_equality_is_by_provider() {
        let provider: Rc<dyn AuthProvider> = Rc::new(StaticAuth(true));
        let a = AuthContext::new(provider.clone());
        let b = AuthContext::new(provider);
        let c = AuthContext::new(Rc::new(StaticAuth(true)));
        assert!(a == b);
        assert!(a != c);
    }
}
