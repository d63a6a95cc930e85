use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

mod codegen;
mod ir;
mod parse;
mod validate;

/// Derive macro that opts a type into [`CompDef`] and exposes the synthesized
/// relations as Rust's comparison operators.
///
/// The type must implement `LessThan` (for itself) by hand. The derive then
/// generates:
///
/// | Item | Behaviour |
/// | ---- | --------- |
/// | `impl CompDef for T` | the capability gate: fails to compile without `LessThan` |
/// | `impl PartialEq for T` | `==` as `CompDef::equal`, `!=` as its negation |
/// | `impl PartialOrd for T` | `<` is the host's less-than; `>`, `<=`, `>=` are synthesized |
///
/// `partial_cmp` reports `None` when each operand claims to be less than the
/// other.
///
/// # `#[comp_def(..)]` attribute
///
/// Accepts a comma-separated list of options on the type:
///
///   * `rhs = <Type>` – additionally implement `PartialEq<Type>` and
///     `PartialOrd<Type>` through the heterogeneous `*_with` methods. The host
///     must implement `LessThan<Type>` and `Type` must implement
///     `LessThan<Host>`. May be repeated for different types.
///
/// # Examples
///
/// ```rust,ignore
/// use fixlit_compare::{CompDef, LessThan};
///
/// #[derive(CompDef)]
/// #[comp_def(rhs = u32)]
/// struct Version(u32);
///
/// impl LessThan for Version {
///     fn less_than(&self, other: &Self) -> bool { self.0 < other.0 }
/// }
///
/// impl LessThan<u32> for Version {
///     fn less_than(&self, other: &u32) -> bool { self.0 < *other }
/// }
///
/// impl LessThan<Version> for u32 {
///     fn less_than(&self, other: &Version) -> bool { *self < other.0 }
/// }
///
/// assert!(Version(2) > Version(1));
/// assert!(Version(3) == 3);
/// ```
///
/// [`CompDef`]: https://docs.rs/fixlit-compare/latest/fixlit_compare/trait.CompDef.html
#[proc_macro_derive(CompDef, attributes(comp_def))]
pub fn derive_comp_def(item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);

    // 1) Convert to internal IR
    let ir = match parse::derive_input_to_ir(&input) {
        Ok(ir) => ir,
        Err(e) => return e.to_compile_error().into(),
    };

    // 2) Run semantic validation
    if let Err(e) = validate::check(&ir) {
        return e.to_compile_error().into();
    }

    // 3) Generate final implementation
    TokenStream::from(codegen::expand(&ir))
}
