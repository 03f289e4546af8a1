/// A located call, reduced to what marker validation needs.
///
/// Both source kinds lower their native call nodes into this shape so the
/// validator can be shared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallSite {
    /// Callee name when the callee is a bare identifier, `None` otherwise
    /// (member access, computed callee, etc).
    pub callee: Option<String>,
    /// 1-based line of the call.
    pub line: usize,
    /// 1-based column of the call.
    pub col: usize,
    /// Arguments in source order, keyword arguments included.
    pub args: Vec<Argument>,
}

/// A call argument as seen by the validator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Argument {
    /// A plain string constant.
    Literal(String),
    /// Anything else: identifiers, numbers, template literals, spreads,
    /// keyword arguments, computed expressions.
    Expression,
}

impl Argument {
    pub fn as_literal(&self) -> Option<&str> {
        match self {
            Argument::Literal(value) => Some(value),
            Argument::Expression => None,
        }
    }
}
