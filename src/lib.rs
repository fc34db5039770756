//! Restorecheck – an acceptor for the restore query language.
//!
//! A restore query selects fields and filters documents by typed comparisons:
//!
//! ```text
//! SELECT * WHERE (int32 age > 54) AND ((utf8 name = 'O\'Brien') OR bool active *)
//! ```
//!
//! The crate answers one question: is a given query well formed? It does not
//! execute queries, translate them, or check field names against a schema.
//!
//! ## Modules
//! * [`grammar`] – The PEG grammar (`restore.pest`) and its parse entry points.
//! * [`brackets`] – Global bracket balance, folded over the parse tree.
//! * [`checker`] – Runs both passes and assembles the [`checker::Verdict`].
//! * [`datatype`] – The closed set of data-type tags a restriction may use.
//! * [`settings`] – Configuration for the `restorecheck` binary.
//!
//! ## Verdicts
//! Every check ends in one of three outcomes, displayed as:
//! * `Success` – the query is valid.
//! * `Error` – the grammar rejected the query, or a closing bracket appeared
//!   before any bracket was open.
//! * `Error: brackets not valid` – the query parsed but left brackets open.
//!
//! ## Grammar in Brief
//! * `SELECT`/`select`, then `*` or fields joined by `,` or `.`.
//! * Optionally `WHERE`/`where`, then `*` or restrictions joined by
//!   `AND`/`and`/`OR`/`or`, read left to right without precedence.
//! * A restriction is `data_type field` followed by `relation term` or an
//!   existence marker (`*` exists, `!` does not exist).
//! * Any number of `(` may precede and any number of `)` may follow each
//!   restriction; only the query as a whole must balance.
//!
//! ## Quick Start
//! ```
//! use restorecheck::checker::{check, Verdict};
//! assert_eq!(check("SELECT * WHERE (int32 a > 54) AND ((int32 b < 10))"), Verdict::Success);
//! assert_eq!(check("SELECT * WHERE (int32 a > 54").to_string(), "Error: brackets not valid");
//! assert_eq!(check("select * where unknown_type x = 1"), Verdict::Error);
//! ```
//!
//! Checking is pure and reentrant: the parser is generated at compile time and
//! each call owns its parse tree and bracket stack.

pub mod brackets;
pub mod checker;
pub mod datatype;
pub mod error;
pub mod grammar;
pub mod settings;

pub use checker::{RestoreQueryChecker, Verdict, check};
pub use error::{CheckError, Result};
