//! Authorization scopes

use std::collections::HashSet;
use std::fmt;

/// Grants the locally produced public text
pub const PUBLIC_SERVICE: &str = "PUBLIC_SERVICE";

/// Grants the text fetched from the private service
pub const PRIVATE_SERVICE: &str = "PRIVATE_SERVICE";

/// Membership-only set of scope strings
///
/// Used both for a verifier's whitelist and for the scopes a request was
/// authenticated with. An empty set means "no valid token"; it is not an
/// error by itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScopeSet(HashSet<String>);

impl ScopeSet {
    /// An empty set
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn contains(&self, scope: &str) -> bool {
        self.0.contains(scope)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// True when every scope of `other` is a member of this set
    pub fn covers<'a, I>(&self, other: I) -> bool
    where
        I: IntoIterator<Item = &'a String>,
    {
        other.into_iter().all(|scope| self.contains(scope))
    }

    /// Members in sorted order, for stable log output
    pub fn sorted(&self) -> Vec<&str> {
        let mut scopes: Vec<&str> = self.iter().collect();
        scopes.sort_unstable();
        scopes
    }
}

impl<S: Into<String>> FromIterator<S> for ScopeSet {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl fmt::Display for ScopeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.sorted().join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_covers_is_all_or_nothing() {
        let whitelist: ScopeSet = [PUBLIC_SERVICE, PRIVATE_SERVICE].into_iter().collect();

        let allowed = vec![PUBLIC_SERVICE.to_string()];
        let mixed = vec![PUBLIC_SERVICE.to_string(), "ADMIN".to_string()];

        assert!(whitelist.covers(&allowed));
        assert!(!whitelist.covers(&mixed));
    }

    #[test]
    fn test_display_is_sorted() {
        let scopes: ScopeSet = ["b", "a"].into_iter().collect();
        assert_eq!(scopes.to_string(), "[a, b]");
        assert_eq!(ScopeSet::empty().to_string(), "[]");
    }
}
