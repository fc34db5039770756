//! Bracket balance over an accepted parse tree.
//!
//! The grammar lets every restriction carry any number of opening and closing
//! parentheses, so balance is checked here, after parsing. The tree is flattened
//! depth-first into a sequence of [`Grouping`] events and folded into a
//! [`BracketStack`]. The fold short-circuits on the first closing bracket that
//! finds the stack empty.
//!
//! Balance is global. Brackets are not paired per restriction: in
//! `(int32 a ! AND int32 b !)` the opening bracket belongs to the first
//! restriction and the closing one to the second, and the query is accepted.

use std::str::FromStr;

use pest::iterators::{Pair, Pairs};
use tracing::debug;

use crate::datatype::DataTypeTag;
use crate::error::{CheckError, Result};
use crate::grammar::Rule;

/// Line and column (both 1-based) of a bracket in the query text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: usize,
    pub col: usize,
}

/// A bracket met while walking the parse tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grouping {
    Open(Position),
    Close(Position),
}

/// Brackets opened and not yet closed, plus the deepest nesting seen so far.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BracketStack {
    open: Vec<Position>,
    max_depth: usize,
}
impl BracketStack {
    pub fn new() -> Self {
        Self::default()
    }
    /// Applies one event, consuming the stack and returning its successor.
    pub fn apply(mut self, grouping: Grouping) -> Result<Self> {
        match grouping {
            Grouping::Open(at) => {
                self.open.push(at);
                self.max_depth = self.max_depth.max(self.open.len());
                debug!(line = at.line, col = at.col, depth = self.open.len(), "(");
            }
            Grouping::Close(at) => {
                if self.open.pop().is_none() {
                    debug!(line = at.line, col = at.col, "unmatched )");
                    return Err(CheckError::UnmatchedClose { line: at.line, col: at.col });
                }
                debug!(line = at.line, col = at.col, depth = self.open.len(), ")");
            }
        }
        Ok(self)
    }
    pub fn depth(&self) -> usize {
        self.open.len()
    }
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }
    pub fn is_balanced(&self) -> bool {
        self.open.is_empty()
    }
    /// Positions of the brackets still open, outermost first.
    pub fn unclosed(&self) -> &[Position] {
        &self.open
    }
    /// Fails with the count of unclosed brackets and where the outermost one sits.
    pub fn ensure_balanced(&self) -> Result<()> {
        match self.unclosed().first() {
            None => Ok(()),
            Some(outermost) => Err(CheckError::UnbalancedOpen {
                unclosed: self.depth(),
                line: outermost.line,
                col: outermost.col,
            }),
        }
    }
}

/// Folds a sequence of grouping events into the final stack.
pub fn fold_groupings<I>(groupings: I) -> Result<BracketStack>
where
    I: IntoIterator<Item = Grouping>,
{
    groupings.into_iter().try_fold(BracketStack::new(), BracketStack::apply)
}

/// Flattens a parse tree into its grouping events, in document order.
///
/// Raw terms and data-type tags are traced on the way; they never become events.
pub fn groupings(pairs: Pairs<'_, Rule>) -> Vec<Grouping> {
    pairs.flatten().filter_map(|pair| grouping_of(&pair)).collect()
}

fn grouping_of(pair: &Pair<'_, Rule>) -> Option<Grouping> {
    // line_col reads the line index built at parse time, so only bracket,
    // term and tag pairs pay for a position
    match pair.as_rule() {
        Rule::left_brace => Some(Grouping::Open(position_of(pair))),
        Rule::right_brace => Some(Grouping::Close(position_of(pair))),
        Rule::term_raw => {
            let Position { line, col } = position_of(pair);
            debug!(line, col, term = pair.as_str(), "term");
            None
        }
        Rule::data_type => {
            if let Ok(tag) = DataTypeTag::from_str(pair.as_str()) {
                let Position { line, col } = position_of(pair);
                debug!(line, col, data_type = %tag, "restriction");
            }
            None
        }
        _ => None,
    }
}

fn position_of(pair: &Pair<'_, Rule>) -> Position {
    let (line, col) = pair.line_col();
    Position { line, col }
}

/// Runs the whole structural pass over an accepted parse tree.
pub fn balance(pairs: Pairs<'_, Rule>) -> Result<BracketStack> {
    fold_groupings(groupings(pairs))
}
