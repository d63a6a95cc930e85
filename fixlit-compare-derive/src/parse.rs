//! Parsing routines converting `syn::DeriveInput` into crate-internal IR.

use syn::spanned::Spanned;

use crate::ir::{DeriveInputIr, RhsOperand};

/// Convert a `syn::DeriveInput` annotated with `#[derive(CompDef)]` into the
/// crate's internal IR.
///
/// Only syntax is checked here; duplicate or self-referential `rhs` entries
/// are left to the `validate` module.
pub fn derive_input_to_ir(input: &syn::DeriveInput) -> syn::Result<DeriveInputIr> {
    if let syn::Data::Union(data) = &input.data {
        return Err(syn::Error::new(
            data.union_token.span(),
            "CompDef cannot be derived for unions",
        ));
    }

    let mut rhs = Vec::new();

    for attr in &input.attrs {
        if !attr.path().is_ident("comp_def") {
            continue;
        }

        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rhs") {
                let span = meta.path.span();
                let ty: syn::Type = meta.value()?.parse()?;
                rhs.push(RhsOperand { ty, span });
                Ok(())
            } else {
                Err(meta.error("unknown option inside #[comp_def(...)]; expected `rhs = <Type>`"))
            }
        })?;
    }

    Ok(DeriveInputIr {
        ident: input.ident.clone(),
        generics: input.generics.clone(),
        rhs,
    })
}
