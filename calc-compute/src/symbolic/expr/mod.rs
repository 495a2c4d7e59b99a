//! The expression tree that every engine stage works on.
//!
//! The [`Expr`](calc_parser::parser::ast::Expr) type from `calc_parser` is a recursive `enum`
//! that mirrors the input text, spans and parentheses included. It's convenient for reporting
//! errors, but not so much for evaluation and rewriting.
//!
//! This module defines a separate [`Expr`], a closed set of node kinds where every node
//! exclusively owns its operands. Chains of the same operator are **flattened** during conversion:
//! `2 + 3 + x` becomes a single [`Expr::Add`] node with three operands, while explicit parentheses
//! are kept as nesting, so `(a + b) + c` becomes an [`Expr::Add`] whose first operand is another
//! [`Expr::Add`].
//!
//! ```
//! use calc_compute::symbolic::expr::{Expr, Primary};
//!
//! let expr = calc_compute::parse("2 + 3 + x").unwrap();
//! assert_eq!(expr, Expr::Add(vec![
//!     Expr::Primary(Primary::Integer(2.into())),
//!     Expr::Primary(Primary::Integer(3.into())),
//!     Expr::Primary(Primary::Symbol("x".to_string())),
//! ]));
//! ```
//!
//! # Structural identity
//!
//! The [`PartialEq`] and [`Eq`] implementations for [`Expr`] (and [`Expr::is_identical_to`])
//! implement **structural identity**, not mathematical equality. Two expressions are identical
//! if:
//!
//! - They are the same kind of node (i.e. both [`Expr::Add`], both [`Expr::Mul`], etc.).
//! - They have the same number of operands, and the operands are pairwise identical **in order**.
//! - Value-bearing leaves carry equal values: the same integer, the same float (bit for bit), the
//!   same symbol name. Function calls must call the same [`Func`].
//!
//! `x + 1` and `1 + x` are therefore **not** identical, and neither are `Add[a, b]` and
//! `Mul[a, b]`.

mod convert;
pub mod error;
pub mod func;
mod iter;

use calc_parser::parser::Precedence;
use crate::primitive::{fmt_float, int};
use rug::Integer;
use std::{fmt, ops::Neg};

pub use func::Func;
pub use iter::ExprIter;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A leaf of the expression tree: a number or a symbol.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Primary {
    /// An arbitrary-precision integer, such as `2` or `-144`.
    Integer(Integer),

    /// A floating-point number, such as `3.14` or `0.5`.
    Float(f64),

    /// A free symbol / variable, such as `x` or `pi`.
    Symbol(String),
}

/// Floats are compared by their bit pattern, which makes the comparison reflexive even for `NaN`.
impl PartialEq for Primary {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Integer(lhs), Self::Integer(rhs)) => lhs == rhs,
            (Self::Float(lhs), Self::Float(rhs)) => lhs.to_bits() == rhs.to_bits(),
            (Self::Symbol(lhs), Self::Symbol(rhs)) => lhs == rhs,
            _ => false,
        }
    }
}

impl Eq for Primary {}

impl fmt::Display for Primary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(num) => write!(f, "{}", num),
            Self::Float(num) => write!(f, "{}", fmt_float(*num)),
            Self::Symbol(sym) => write!(f, "{}", sym),
        }
    }
}

/// The kind of an [`Expr`] node, without its operands or payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExprKind {
    Integer,
    Float,
    Symbol,
    Add,
    Mul,
    Sub,
    Div,
    Pow,
    Neg,
    Call,
}

/// A node of the expression tree.
///
/// Every node exclusively owns its operands. The arity of each kind is fixed by its shape: leaves
/// have no operands, [`Expr::Neg`] and [`Expr::Call`] have one, [`Expr::Sub`], [`Expr::Div`] and
/// [`Expr::Pow`] have two, while [`Expr::Add`] and [`Expr::Mul`] are variadic.
///
/// For more information about this type, see the [module-level documentation](self).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Expr {
    /// A single number or symbol.
    Primary(Primary),

    /// Multiple terms added together.
    Add(Vec<Expr>),

    /// Multiple factors multiplied together.
    Mul(Vec<Expr>),

    /// The difference of two expressions.
    Sub(Box<Expr>, Box<Expr>),

    /// The quotient of two expressions.
    Div(Box<Expr>, Box<Expr>),

    /// An expression raised to a power.
    Pow(Box<Expr>, Box<Expr>),

    /// The opposite of an expression.
    Neg(Box<Expr>),

    /// A builtin function applied to an expression.
    Call(Func, Box<Expr>),
}

impl Expr {
    /// Creates an integer literal.
    pub fn integer<T>(n: T) -> Self
    where
        Integer: From<T>,
    {
        Self::Primary(Primary::Integer(int(n)))
    }

    /// Creates a float literal.
    pub fn float(n: f64) -> Self {
        Self::Primary(Primary::Float(n))
    }

    /// Creates a symbol.
    pub fn symbol(name: impl Into<String>) -> Self {
        Self::Primary(Primary::Symbol(name.into()))
    }

    /// Returns the kind of this node.
    pub fn kind(&self) -> ExprKind {
        match self {
            Self::Primary(Primary::Integer(_)) => ExprKind::Integer,
            Self::Primary(Primary::Float(_)) => ExprKind::Float,
            Self::Primary(Primary::Symbol(_)) => ExprKind::Symbol,
            Self::Add(_) => ExprKind::Add,
            Self::Mul(_) => ExprKind::Mul,
            Self::Sub(..) => ExprKind::Sub,
            Self::Div(..) => ExprKind::Div,
            Self::Pow(..) => ExprKind::Pow,
            Self::Neg(_) => ExprKind::Neg,
            Self::Call(..) => ExprKind::Call,
        }
    }

    /// Returns the number of operands of this node.
    pub fn operand_count(&self) -> usize {
        match self {
            Self::Primary(_) => 0,
            Self::Add(operands) | Self::Mul(operands) => operands.len(),
            Self::Sub(..) | Self::Div(..) | Self::Pow(..) => 2,
            Self::Neg(_) | Self::Call(..) => 1,
        }
    }

    /// Returns the operand at the given index, or [`None`] if the index is out of range.
    pub fn operand(&self, index: usize) -> Option<&Expr> {
        match self {
            Self::Primary(_) => None,
            Self::Add(operands) | Self::Mul(operands) => operands.get(index),
            Self::Sub(lhs, rhs) | Self::Div(lhs, rhs) | Self::Pow(lhs, rhs) => match index {
                0 => Some(lhs),
                1 => Some(rhs),
                _ => None,
            },
            Self::Neg(operand) | Self::Call(_, operand) => (index == 0).then_some(&**operand),
        }
    }

    /// Returns an iterator over the operands of this node, in order.
    pub fn operands(&self) -> impl Iterator<Item = &Expr> + '_ {
        (0..self.operand_count()).filter_map(move |index| self.operand(index))
    }

    /// Returns an iterator that traverses the tree in pre-order: every node is visited before its
    /// operands, and operands are visited left to right.
    pub fn pre_order_iter(&self) -> ExprIter {
        ExprIter::new(self)
    }

    /// Returns the number of nodes in the tree rooted at this node.
    pub fn node_count(&self) -> usize {
        self.pre_order_iter().count()
    }

    /// Returns the total number of operands of every [`Expr::Add`] node in the tree.
    pub fn add_operand_count(&self) -> usize {
        self.pre_order_iter()
            .map(|expr| match expr {
                Self::Add(terms) => terms.len(),
                _ => 0,
            })
            .sum()
    }

    /// Returns the termination measure of the simplifier, `(total add operands, node count)`.
    ///
    /// Every simplification rule strictly decreases this pair in lexicographic order.
    pub fn measure(&self) -> (usize, usize) {
        (self.add_operand_count(), self.node_count())
    }

    /// Returns true if the two trees are structurally identical.
    ///
    /// See the [module-level documentation](self) for the exact definition.
    pub fn is_identical_to(&self, other: &Expr) -> bool {
        self == other
    }

    /// If the expression is a [`Primary::Integer`], returns a reference to the contained integer.
    pub fn as_integer(&self) -> Option<&Integer> {
        match self {
            Self::Primary(Primary::Integer(int)) => Some(int),
            _ => None,
        }
    }

    /// Returns true if the expression is a [`Primary::Integer`].
    pub fn is_integer(&self) -> bool {
        matches!(self, Self::Primary(Primary::Integer(_)))
    }

    /// Returns true if the expression is the integer literal with the given value.
    pub fn is_integer_value(&self, n: i32) -> bool {
        self.as_integer().is_some_and(|int| *int == n)
    }

    /// If the expression is a [`Primary::Float`], returns the contained float.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Primary(Primary::Float(num)) => Some(*num),
            _ => None,
        }
    }

    /// If the expression is a [`Primary::Symbol`], returns a reference to the contained symbol.
    pub fn as_symbol(&self) -> Option<&str> {
        match self {
            Self::Primary(Primary::Symbol(sym)) => Some(sym),
            _ => None,
        }
    }

    /// If the expression is an [`Expr::Call`], returns the called function.
    pub fn as_func(&self) -> Option<Func> {
        match self {
            Self::Call(func, _) => Some(*func),
            _ => None,
        }
    }

    /// Trivially downgrades the expression into a simpler form.
    ///
    /// Some operations may result in an [`Expr::Add`] with zero / one term, or an [`Expr::Mul`]
    /// with zero / one factor. This function checks for these cases and simplifies the expression
    /// into the single term / factor, or an [`Expr::Primary`] containing the integer 0 or 1.
    pub(crate) fn downgrade(self) -> Self {
        match self {
            Self::Add(mut terms) => {
                if terms.is_empty() {
                    Self::integer(0)
                } else if terms.len() == 1 {
                    terms.remove(0)
                } else {
                    Self::Add(terms)
                }
            },
            Self::Mul(mut factors) => {
                if factors.is_empty() {
                    Self::integer(1)
                } else if factors.len() == 1 {
                    factors.remove(0)
                } else {
                    Self::Mul(factors)
                }
            },
            _ => self,
        }
    }

    /// Returns the precedence of the expression when printed, or [`None`] if the expression is
    /// atomic.
    fn precedence(&self) -> Option<Precedence> {
        match self {
            Self::Primary(Primary::Integer(num)) if *num < 0 => Some(Precedence::Neg),
            Self::Primary(Primary::Float(num)) if num.is_sign_negative() => Some(Precedence::Neg),
            Self::Primary(_) | Self::Call(..) => None,
            Self::Add(_) | Self::Sub(..) => Some(Precedence::Term),
            Self::Mul(_) | Self::Div(..) => Some(Precedence::Factor),
            Self::Neg(_) => Some(Precedence::Neg),
            Self::Pow(..) => Some(Precedence::Exp),
        }
    }

    /// Returns true if the expression binds at least as tightly as the given precedence.
    fn binds_at_least(&self, precedence: Precedence) -> bool {
        self.precedence().map_or(true, |own| own >= precedence)
    }

    /// Returns true if the expression binds strictly tighter than the given precedence.
    fn binds_tighter(&self, precedence: Precedence) -> bool {
        self.precedence().map_or(true, |own| own > precedence)
    }
}

/// Writes the expression, surrounded with parentheses if `parenthesize` is true.
fn fmt_operand(f: &mut fmt::Formatter<'_>, expr: &Expr, parenthesize: bool) -> fmt::Result {
    if parenthesize {
        write!(f, "({})", expr)
    } else {
        write!(f, "{}", expr)
    }
}

/// Writes the operands of a variadic node separated by `op`. The first operand may be an operator
/// of the same precedence (except the same variadic kind), since every chain is read left to right;
/// later operands must bind tighter.
fn fmt_chain(
    f: &mut fmt::Formatter<'_>,
    operands: &[Expr],
    op: &str,
    precedence: Precedence,
    same_kind: fn(&Expr) -> bool,
) -> fmt::Result {
    let mut iter = operands.iter();
    if let Some(first) = iter.next() {
        fmt_operand(f, first, !first.binds_at_least(precedence) || same_kind(first))?;
        for operand in iter {
            write!(f, " {} ", op)?;
            fmt_operand(f, operand, !operand.binds_tighter(precedence))?;
        }
    }
    Ok(())
}

/// Prints the canonical textual form of the expression, with just enough parentheses for the
/// parser to read back an identical tree.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primary(primary) => write!(f, "{}", primary),
            Self::Add(terms) if terms.is_empty() => write!(f, "0"),
            Self::Add(terms) => fmt_chain(f, terms, "+", Precedence::Term, |expr| matches!(expr, Self::Add(_))),
            Self::Mul(factors) if factors.is_empty() => write!(f, "1"),
            Self::Mul(factors) => fmt_chain(f, factors, "*", Precedence::Factor, |expr| matches!(expr, Self::Mul(_))),
            Self::Sub(lhs, rhs) => {
                fmt_operand(f, lhs, !lhs.binds_at_least(Precedence::Term))?;
                write!(f, " - ")?;
                fmt_operand(f, rhs, !rhs.binds_tighter(Precedence::Term))
            },
            Self::Div(lhs, rhs) => {
                fmt_operand(f, lhs, !lhs.binds_at_least(Precedence::Factor))?;
                write!(f, " / ")?;
                fmt_operand(f, rhs, !rhs.binds_tighter(Precedence::Factor))
            },
            Self::Pow(base, exp) => {
                // right-associative: `a^b^c` is `a^(b^c)`
                fmt_operand(f, base, !base.binds_tighter(Precedence::Exp))?;
                write!(f, "^")?;
                fmt_operand(f, exp, !exp.binds_at_least(Precedence::Exp))
            },
            Self::Neg(operand) => {
                write!(f, "-")?;
                fmt_operand(f, operand, !operand.binds_at_least(Precedence::Exp))
            },
            Self::Call(func, arg) => write!(f, "{}({})", func, arg),
        }
    }
}

/// Negates an expression. Numeric literals are negated in place; anything else is wrapped in an
/// [`Expr::Neg`].
impl Neg for Expr {
    type Output = Expr;

    fn neg(self) -> Self::Output {
        match self {
            Self::Primary(Primary::Integer(num)) => Self::Primary(Primary::Integer(-num)),
            Self::Primary(Primary::Float(num)) => Self::Primary(Primary::Float(-num)),
            expr => Self::Neg(Box::new(expr)),
        }
    }
}
