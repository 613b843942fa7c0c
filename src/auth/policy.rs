//! Path authorization policy.
//!
//! An ordered rule table evaluated top-down, first match wins. Evaluation
//! is a pure function of the request path and the session identity; the
//! middleware invokes it once per request.

use crate::auth::session::Identity;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Admin,
}

impl Role {
    /// Roles form a closed set; anything else is rejected at input
    /// validation and never persisted.
    pub fn parse(value: &str) -> Option<Role> {
        match value {
            "USER" => Some(Role::User),
            "ADMIN" => Some(Role::Admin),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "USER",
            Role::Admin => "ADMIN",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Access {
    Public,
    Role(Role),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow,
    RequireLogin,
    Deny,
}

struct Rule {
    pattern: &'static str,
    access: Access,
}

/// First match wins. The login and logout endpoints, error pages and static
/// assets are public; everything else requires the ADMIN role.
const RULES: &[Rule] = &[
    Rule { pattern: "/login", access: Access::Public },
    Rule { pattern: "/login-process", access: Access::Public },
    Rule { pattern: "/app-logout", access: Access::Public },
    Rule { pattern: "/error/**", access: Access::Public },
    Rule { pattern: "/css/**", access: Access::Public },
    Rule { pattern: "/403", access: Access::Public },
    Rule { pattern: "/404", access: Access::Public },
    Rule { pattern: "/favicon.ico", access: Access::Public },
    Rule { pattern: "/**", access: Access::Role(Role::Admin) },
];

/// A pattern is either an exact path or a `prefix/**` subtree match.
fn matches(pattern: &str, path: &str) -> bool {
    if let Some(prefix) = pattern.strip_suffix("/**") {
        path == prefix || (path.starts_with(prefix) && path[prefix.len()..].starts_with('/'))
    } else {
        path == pattern
    }
}

pub fn evaluate(path: &str, identity: Option<&Identity>) -> Decision {
    for rule in RULES {
        if !matches(rule.pattern, path) {
            continue;
        }
        return match rule.access {
            Access::Public => Decision::Allow,
            Access::Role(required) => match identity {
                None => Decision::RequireLogin,
                Some(id) if id.role == required => Decision::Allow,
                Some(_) => Decision::Deny,
            },
        };
    }
    // Unreachable while the table ends with /**, but the fallback mirrors
    // the policy's "any authenticated session" default.
    if identity.is_some() {
        Decision::Allow
    } else {
        Decision::RequireLogin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn admin() -> Identity {
        Identity {
            username: "admin".into(),
            role: Role::Admin,
        }
    }

    fn user() -> Identity {
        Identity {
            username: "jules".into(),
            role: Role::User,
        }
    }

    #[test]
    fn public_paths_allow_unauthenticated_requests() {
        for path in [
            "/login",
            "/login-process",
            "/app-logout",
            "/403",
            "/404",
            "/css/main.css",
            "/error/oops",
        ] {
            assert_eq!(evaluate(path, None), Decision::Allow, "path {path}");
        }
    }

    #[test]
    fn public_paths_stay_public_for_authenticated_sessions() {
        assert_eq!(evaluate("/login", Some(&user())), Decision::Allow);
        assert_eq!(evaluate("/login", Some(&admin())), Decision::Allow);
    }

    #[test]
    fn protected_paths_redirect_unauthenticated_sessions() {
        for path in ["/", "/bidList/list", "/user/update/3", "/trade/add"] {
            assert_eq!(evaluate(path, None), Decision::RequireLogin, "path {path}");
        }
    }

    #[test]
    fn protected_paths_require_admin() {
        assert_eq!(evaluate("/bidList/list", Some(&admin())), Decision::Allow);
        assert_eq!(evaluate("/bidList/list", Some(&user())), Decision::Deny);
        assert_eq!(evaluate("/", Some(&user())), Decision::Deny);
    }

    #[test]
    fn subtree_patterns_do_not_match_lookalike_prefixes() {
        // /css/** must not capture /cssx
        assert_eq!(evaluate("/cssx", None), Decision::RequireLogin);
        assert!(matches("/css/**", "/css"));
        assert!(matches("/css/**", "/css/deep/file.css"));
        assert!(!matches("/css/**", "/cssx/file.css"));
    }

    #[test]
    fn role_set_is_closed() {
        assert_eq!(Role::parse("USER"), Some(Role::User));
        assert_eq!(Role::parse("ADMIN"), Some(Role::Admin));
        assert_eq!(Role::parse("admin"), None);
        assert_eq!(Role::parse("SUPERADMIN"), None);
        assert_eq!(Role::parse(""), None);
    }
}
