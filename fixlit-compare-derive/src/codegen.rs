use crate::ir::{DeriveInputIr, RhsOperand};
use quote::quote;

/// Heterogeneous `PartialEq<Rhs>`/`PartialOrd<Rhs>` pair for one `rhs` entry.
fn expand_rhs(ir: &DeriveInputIr, operand: &RhsOperand) -> proc_macro2::TokenStream {
    let ident = &ir.ident;
    let rhs_ty = &operand.ty;
    let (impl_generics, ty_generics, where_clause) = ir.generics.split_for_impl();

    quote! {
        impl #impl_generics ::core::cmp::PartialEq<#rhs_ty> for #ident #ty_generics #where_clause {
            fn eq(&self, other: &#rhs_ty) -> bool {
                ::fixlit_compare::CompDef::equal_with(self, other)
            }
        }

        impl #impl_generics ::core::cmp::PartialOrd<#rhs_ty> for #ident #ty_generics #where_clause {
            fn partial_cmp(&self, other: &#rhs_ty) -> ::core::option::Option<::core::cmp::Ordering> {
                ::fixlit_compare::partial_cmp_with(self, other)
            }

            fn lt(&self, other: &#rhs_ty) -> bool {
                ::fixlit_compare::LessThan::<#rhs_ty>::less_than(self, other)
            }

            fn gt(&self, other: &#rhs_ty) -> bool {
                ::fixlit_compare::CompDef::greater_than_with(self, other)
            }

            fn le(&self, other: &#rhs_ty) -> bool {
                ::fixlit_compare::CompDef::less_or_equal_with(self, other)
            }

            fn ge(&self, other: &#rhs_ty) -> bool {
                ::fixlit_compare::CompDef::greater_or_equal_with(self, other)
            }
        }
    }
}

/// Assemble the final `TokenStream`: the `CompDef` opt-in plus the operator
/// impls that route through it.
pub fn expand(ir: &DeriveInputIr) -> proc_macro2::TokenStream {
    let ident = &ir.ident;
    let (impl_generics, ty_generics, where_clause) = ir.generics.split_for_impl();

    let rhs_impls: Vec<proc_macro2::TokenStream> =
        ir.rhs.iter().map(|operand| expand_rhs(ir, operand)).collect();

    quote! {
        impl #impl_generics ::fixlit_compare::CompDef for #ident #ty_generics #where_clause {}

        impl #impl_generics ::core::cmp::PartialEq for #ident #ty_generics #where_clause {
            fn eq(&self, other: &Self) -> bool {
                ::fixlit_compare::CompDef::equal(self, other)
            }
        }

        impl #impl_generics ::core::cmp::PartialOrd for #ident #ty_generics #where_clause {
            fn partial_cmp(&self, other: &Self) -> ::core::option::Option<::core::cmp::Ordering> {
                ::fixlit_compare::partial_cmp_with(self, other)
            }

            fn lt(&self, other: &Self) -> bool {
                ::fixlit_compare::LessThan::<Self>::less_than(self, other)
            }

            fn gt(&self, other: &Self) -> bool {
                ::fixlit_compare::CompDef::greater_than(self, other)
            }

            fn le(&self, other: &Self) -> bool {
                ::fixlit_compare::CompDef::less_or_equal(self, other)
            }

            fn ge(&self, other: &Self) -> bool {
                ::fixlit_compare::CompDef::greater_or_equal(self, other)
            }
        }

        #(#rhs_impls)*
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;

    fn expand_src(src: &str) -> String {
        let di: syn::DeriveInput = syn::parse_str(src).unwrap();
        expand(&parse::derive_input_to_ir(&di).unwrap()).to_string()
    }

    #[test]
    fn emits_gate_and_operator_impls() {
        let out = expand_src("struct Host(u32);");
        assert!(out.contains(":: fixlit_compare :: CompDef for Host"));
        assert!(out.contains(":: core :: cmp :: PartialEq for Host"));
        assert!(out.contains(":: core :: cmp :: PartialOrd for Host"));
        assert!(!out.contains("fn ne"));
    }

    #[test]
    fn emits_one_pair_per_rhs() {
        let out = expand_src("#[comp_def(rhs = u32, rhs = u64)] struct Host(u32);");
        assert!(out.contains("PartialEq < u32 > for Host"));
        assert!(out.contains("PartialOrd < u64 > for Host"));
    }

    #[test]
    fn keeps_generics() {
        let out = expand_src("struct Wrapper<T: Copy> where T: Default { inner: T }");
        assert!(out.contains("impl < T : Copy > :: fixlit_compare :: CompDef for Wrapper < T > where T : Default"));
    }
}
