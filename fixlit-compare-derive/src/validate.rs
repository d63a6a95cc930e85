//! Semantic checks for the `CompDef` IR.

use quote::ToTokens;

use crate::ir::DeriveInputIr;

/// Perform post-parse validation on the IR. Returns `Ok(())` if everything
/// is semantically sound; otherwise an appropriate `syn::Error`.
pub fn check(ir: &DeriveInputIr) -> syn::Result<()> {
    use syn::Error;

    let host = ir.ident.to_string();
    let mut seen: Vec<String> = Vec::with_capacity(ir.rhs.len());

    for operand in &ir.rhs {
        let rendered = operand.ty.to_token_stream().to_string();

        // The homogeneous impls are always generated; a second copy would
        // conflict.
        if rendered == "Self" || rendered == host {
            return Err(Error::new(
                operand.span,
                "`rhs = Self` is implied by #[derive(CompDef)]; list only foreign right-hand types",
            ));
        }

        if seen.contains(&rendered) {
            return Err(Error::new(
                operand.span,
                format!("duplicate `rhs = {}` in #[comp_def(...)]", rendered),
            ));
        }
        seen.push(rendered);
    }

    Ok(())
}
