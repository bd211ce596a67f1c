//! Helpers for moving DNS names between the caller-facing form
//! (`www.example.com`) and the fully-qualified wire form (`www.example.com.`).

/// Returns the fully-qualified form of `name`, with exactly the trailing dot
/// the backend expects. Idempotent.
pub fn to_fqdn(name: &str) -> String {
    if name.ends_with('.') {
        name.to_string()
    } else {
        format!("{}.", name)
    }
}

pub fn strip_trailing_dot(name: &str) -> &str {
    name.strip_suffix('.').unwrap_or(name)
}

/// True when `domain` equals `zone` or sits below it. Both sides are compared
/// without trailing dots and ignoring ASCII case.
pub fn is_same_or_subdomain(domain: &str, zone: &str) -> bool {
    let domain = strip_trailing_dot(domain).to_ascii_lowercase();
    let zone = strip_trailing_dot(zone).to_ascii_lowercase();

    if domain == zone {
        return true;
    }
    domain
        .strip_suffix(zone.as_str())
        .is_some_and(|prefix| prefix.ends_with('.'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_fqdn_appends_dot_once() {
        assert_eq!(to_fqdn("example.com"), "example.com.");
        assert_eq!(to_fqdn("example.com."), "example.com.");
        assert_eq!(to_fqdn(&to_fqdn("a.b.c")), to_fqdn("a.b.c"));
    }

    #[test]
    fn test_strip_trailing_dot() {
        assert_eq!(strip_trailing_dot("example.com."), "example.com");
        assert_eq!(strip_trailing_dot("example.com"), "example.com");
    }

    #[test]
    fn test_subdomain_requires_label_boundary() {
        assert!(is_same_or_subdomain("example.com", "example.com"));
        assert!(is_same_or_subdomain("a.example.com", "example.com."));
        assert!(is_same_or_subdomain("A.Example.COM", "example.com"));
        assert!(!is_same_or_subdomain("badexample.com", "example.com"));
        assert!(!is_same_or_subdomain("com", "example.com"));
    }
}
