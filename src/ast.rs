use crate::token::{MathFn, Op};

/// Ast nodes for the expressions.
///
/// Every node owns its children outright and carries exactly the arity its
/// operator requires; the parser rejects malformed input before a tree is
/// ever built, so an `Ast` in hand is always evaluatable.
#[derive(Debug, Clone, PartialEq)]
pub enum Ast {
    /// A literal value
    Value(f64),
    /// -<child>
    Neg(Box<Ast>),
    /// <left> op <right>
    Binary(Op, Box<Ast>, Box<Ast>),
    /// fn(<arg>)
    Function(MathFn, Box<Ast>),
}
