//! Verdict assembly.
//!
//! A check is one parse followed, on acceptance, by one bracket pass. Callers
//! that only need the categorical outcome use [`check`] or
//! [`RestoreQueryChecker::check`]; [`RestoreQueryChecker::validate`] keeps the
//! underlying [`CheckError`] for diagnostics.

use std::fmt;

use pest::iterators::Pairs;
use serde::Serialize;
use tracing::{debug, info};

use crate::brackets::balance;
use crate::error::{CheckError, Result};
use crate::grammar::{Rule, parse_query, parse_select_clause, parse_where_clause};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Verdict {
    #[serde(rename = "Success")]
    Success,
    #[serde(rename = "Error")]
    Error,
    #[serde(rename = "Error: brackets not valid")]
    BracketsNotValid,
}
impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Success => "Success",
            Verdict::Error => "Error",
            Verdict::BracketsNotValid => "Error: brackets not valid",
        }
    }
    pub fn is_success(&self) -> bool {
        *self == Verdict::Success
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// A closing bracket without an opener is surfaced like a syntax error.
impl From<&CheckError> for Verdict {
    fn from(e: &CheckError) -> Self {
        match e {
            CheckError::UnbalancedOpen { .. } => Verdict::BracketsNotValid,
            _ => Verdict::Error,
        }
    }
}

impl<T> From<&Result<T>> for Verdict {
    fn from(result: &Result<T>) -> Self {
        match result {
            Ok(_) => Verdict::Success,
            Err(e) => Verdict::from(e),
        }
    }
}

/// What an accepted query contained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub restrictions: usize,
    pub max_depth: usize,
}

pub struct RestoreQueryChecker<'q> {
    query: &'q str,
}
impl<'q> RestoreQueryChecker<'q> {
    pub fn new(query: &'q str) -> Self {
        Self { query }
    }
    pub fn query(&self) -> &'q str {
        self.query
    }
    /// Parses and balance-checks the query, keeping the reason for a rejection.
    pub fn validate(&self) -> Result<Summary> {
        let pairs = parse_query(self.query)?;
        summarize(pairs)
    }
    /// The categorical outcome. No error value crosses this boundary.
    pub fn check(&self) -> Verdict {
        let result = self.validate();
        match &result {
            Ok(summary) => info!(restrictions = summary.restrictions, max_depth = summary.max_depth, "query accepted"),
            Err(e) => debug!(error = %e, "query rejected"),
        }
        Verdict::from(&result)
    }
}

/// Checks a complete query and returns its verdict.
pub fn check(query: &str) -> Verdict {
    RestoreQueryChecker::new(query).check()
}

/// Checks a select clause in isolation (no `SELECT` keyword).
pub fn check_select_clause(clause: &str) -> Verdict {
    let result = parse_select_clause(clause).and_then(summarize);
    Verdict::from(&result)
}

/// Checks a where clause in isolation (no `WHERE` keyword), brackets included.
pub fn check_where_clause(clause: &str) -> Verdict {
    let result = parse_where_clause(clause).and_then(summarize);
    Verdict::from(&result)
}

fn summarize(pairs: Pairs<'_, Rule>) -> Result<Summary> {
    let restrictions = pairs
        .clone()
        .flatten()
        .filter(|pair| pair.as_rule() == Rule::restriction)
        .count();
    let stack = balance(pairs)?;
    stack.ensure_balanced()?;
    Ok(Summary { restrictions, max_depth: stack.max_depth() })
}
