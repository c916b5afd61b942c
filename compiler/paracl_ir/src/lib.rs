//! ParaCL IR - syntax tree types shared by the front end and the evaluator.
//!
//! This crate contains:
//! - [`Span`] for source locations reported by the lexer and parser
//! - [`Node`], the owned syntax tree, and its construction API
//! - [`ArithOp`] / [`PredOp`], the binary operator tables
//! - [`Visitor`], the double-dispatch contract every tree walk implements
//! - [`DumpVisitor`], an indented debug rendering of a tree
//!
//! # Ownership
//!
//! A `Node` owns its children through `Box`. Trees are built bottom-up by the
//! parser, never re-parented and never shared, so no arena or reference
//! counting is involved and cycles cannot be expressed.

mod ast;
mod dump;
mod operators;
mod span;
pub mod visitor;

pub use ast::{Node, VarNode};
pub use dump::{dump, DumpVisitor};
pub use operators::{ArithOp, PredOp};
pub use span::Span;
pub use visitor::Visitor;
