// used to print out readable forms of a data type
use std::fmt;
// used when turning a matched tag back into a DataTypeTag
use std::str::FromStr;

use thiserror::Error;

/// The closed vocabulary of data-type tags a restriction may start with.
///
/// These are the BSON element types a restore filter can compare against.
/// The grammar spells out the same names; anything else is rejected. The
/// grammar also lists `codewscope`, but `code` always matches first, so it is
/// not a usable tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataTypeTag {
    Eod,
    Double,
    Utf8,
    Document,
    Array,
    Binary,
    Undefined,
    Oid,
    Bool,
    DateTime,
    Null,
    Regex,
    DbPointer,
    Code,
    Symbol,
    Int32,
    Timestamp,
    Int64,
    Decimal128,
    MaxKey,
    MinKey,
}

impl DataTypeTag {
    pub const ALL: [DataTypeTag; 21] = [
        Self::Eod,
        Self::Double,
        Self::Utf8,
        Self::Document,
        Self::Array,
        Self::Binary,
        Self::Undefined,
        Self::Oid,
        Self::Bool,
        Self::DateTime,
        Self::Null,
        Self::Regex,
        Self::DbPointer,
        Self::Code,
        Self::Symbol,
        Self::Int32,
        Self::Timestamp,
        Self::Int64,
        Self::Decimal128,
        Self::MaxKey,
        Self::MinKey,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Eod => "eod",
            Self::Double => "double",
            Self::Utf8 => "utf8",
            Self::Document => "document",
            Self::Array => "array",
            Self::Binary => "binary",
            Self::Undefined => "undefined",
            Self::Oid => "oid",
            Self::Bool => "bool",
            Self::DateTime => "date_time",
            Self::Null => "null",
            Self::Regex => "regex",
            Self::DbPointer => "dbpointer",
            Self::Code => "code",
            Self::Symbol => "symbol",
            Self::Int32 => "int32",
            Self::Timestamp => "timestamp",
            Self::Int64 => "int64",
            Self::Decimal128 => "decimal128",
            Self::MaxKey => "maxkey",
            Self::MinKey => "minkey",
        }
    }
}

impl fmt::Display for DataTypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown data type: {0}")]
pub struct UnknownDataType(pub String);

impl FromStr for DataTypeTag {
    type Err = UnknownDataType;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|tag| tag.as_str() == s)
            .copied()
            .ok_or_else(|| UnknownDataType(s.to_string()))
    }
}
