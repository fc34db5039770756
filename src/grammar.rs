//! Restore query grammar.
//!
//! The rules live in `restore.pest` and are compiled by `pest_derive` into
//! [`RestoreQueryParser`]. The parser is a zero-sized type, so every call shares
//! the same rule set and no state survives between calls.
//!
//! Entry points are anchored at both ends: trailing input is a rejection.

use pest::Parser;
use pest::iterators::Pairs;
use pest_derive::Parser;
use tracing::trace;

use crate::error::Result;

#[derive(Parser)]
#[grammar = "restore.pest"]
pub struct RestoreQueryParser;

/// Parses a complete `SELECT ... [WHERE ...]` query.
pub fn parse_query(query: &str) -> Result<Pairs<'_, Rule>> {
    parse(Rule::query, query)
}

/// Parses a select clause on its own, without the `SELECT` keyword.
pub fn parse_select_clause(clause: &str) -> Result<Pairs<'_, Rule>> {
    parse(Rule::select_only, clause)
}

/// Parses a where clause on its own, without the `WHERE` keyword.
pub fn parse_where_clause(clause: &str) -> Result<Pairs<'_, Rule>> {
    parse(Rule::where_only, clause)
}

fn parse(rule: Rule, input: &str) -> Result<Pairs<'_, Rule>> {
    match RestoreQueryParser::parse(rule, input) {
        Ok(pairs) => Ok(pairs),
        Err(e) => {
            trace!(?rule, error = %e, "rejected by grammar");
            Err(e.into())
        }
    }
}
