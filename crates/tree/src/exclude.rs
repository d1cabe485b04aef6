//! Name-based exclusion rules.
//!
//! A pattern without `*` is a literal and must equal the entry name exactly.
//! A pattern with `*` is rewritten to a regular expression by replacing each
//! `*` with `.*` and is matched against the whole name. Other characters keep
//! their regular-expression meaning.

use crate::error::{Error, Result};
use regex::Regex;

#[derive(Debug, Clone)]
enum Rule {
    Literal(String),
    Wildcard(Regex),
}

impl Rule {
    fn compile(pattern: &str) -> Result<Self> {
        if !pattern.contains('*') {
            return Ok(Rule::Literal(pattern.to_string()));
        }
        let expr = format!("^(?:{})$", pattern.replace('*', ".*"));
        Regex::new(&expr)
            .map(Rule::Wildcard)
            .map_err(|source| Error::Pattern {
                pattern: pattern.to_string(),
                source,
            })
    }

    fn matches(&self, name: &str) -> bool {
        match self {
            Rule::Literal(literal) => literal == name,
            Rule::Wildcard(re) => re.is_match(name),
        }
    }
}

/// A compiled set of exclusion patterns.
#[derive(Debug, Clone, Default)]
pub struct Exclusions {
    rules: Vec<Rule>,
}

impl Exclusions {
    /// Compile every pattern, failing on the first one that is malformed.
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Result<Self> {
        let rules = patterns
            .iter()
            .map(|p| Rule::compile(p.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { rules })
    }

    /// Whether `name` matches any pattern.
    pub fn is_excluded(&self, name: &str) -> bool {
        self.rules.iter().any(|rule| rule.matches(name))
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use crate::error::Error;
    use crate::exclude::Exclusions;

    #[test]
    fn wildcard_matches_whole_name() {
        let ex = Exclusions::new(&["*.log"]).unwrap();
        assert!(ex.is_excluded("error.log"));
        assert!(ex.is_excluded("debug.log"));
        assert!(!ex.is_excluded("log"));
        assert!(!ex.is_excluded("error.logx"));
    }

    #[test]
    fn literal_is_exact() {
        let ex = Exclusions::new(&["node_modules"]).unwrap();
        assert!(ex.is_excluded("node_modules"));
        assert!(!ex.is_excluded("node_modules_old"));
        assert!(!ex.is_excluded("old_node_modules"));
    }

    #[test]
    fn literal_dot_is_not_a_wildcard() {
        let ex = Exclusions::new(&[".git"]).unwrap();
        assert!(ex.is_excluded(".git"));
        assert!(!ex.is_excluded("xgit"));
    }

    #[test]
    fn any_pattern_excludes() {
        let ex = Exclusions::new(&["node_modules", ".git", "target*"]).unwrap();
        assert!(ex.is_excluded(".git"));
        assert!(ex.is_excluded("target"));
        assert!(ex.is_excluded("target-old"));
        assert!(!ex.is_excluded("src"));
    }

    #[test]
    fn lone_star_excludes_everything() {
        let ex = Exclusions::new(&["*"]).unwrap();
        assert!(ex.is_excluded("anything"));
        assert!(ex.is_excluded(""));
    }

    #[test]
    fn empty_set_excludes_nothing() {
        let ex = Exclusions::new::<&str>(&[]).unwrap();
        assert!(ex.is_empty());
        assert!(!ex.is_excluded("node_modules"));
    }

    #[test]
    fn malformed_wildcard_is_an_error() {
        let err = Exclusions::new(&["ok", "*[oops"]).unwrap_err();
        match err {
            Error::Pattern { pattern, .. } => assert_eq!(pattern, "*[oops"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn malformed_literal_is_fine() {
        // Without `*` the text is compared verbatim and never compiled.
        let ex = Exclusions::new(&["[oops"]).unwrap();
        assert!(ex.is_excluded("[oops"));
    }
}
