//! Intermediate representation (IR) for the `CompDef` derive macro.
//!
//! Parsing fills these plain structures, validation inspects them and code
//! generation reads them, so each stage can be tested on its own.

use proc_macro2::Span;
use syn::{Ident, Type};

/// One `rhs = Type` entry from a `#[comp_def(..)]` attribute.
#[derive(Debug, Clone)]
pub struct RhsOperand {
    /// The right-hand type to compare against.
    pub ty: Type,
    /// Span of the `rhs` key – kept for diagnostics.
    pub span: Span,
}

/// Parsed, high-level description of the entire derive input.
#[derive(Debug, Clone)]
pub struct DeriveInputIr {
    pub ident: Ident,
    pub generics: syn::Generics,
    pub rhs: Vec<RhsOperand>,
}
