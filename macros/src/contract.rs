// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Parsing and expansion for `#[expects]` / `#[ensures]`.
//!
//! Works on `proc_macro2` tokens so the logic can be unit tested outside a
//! compiler plugin context.

use proc_macro2::{TokenStream, TokenTree};
use quote::{format_ident, quote, ToTokens};
use syn::{
    parse::{Parse, ParseStream},
    Expr, Ident, ItemFn, ReturnType, Token, Type,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Family {
    Precondition,
    Postcondition,
}

impl Family {
    fn stem(self) -> &'static str {
        match self {
            Family::Precondition => "expects",
            Family::Postcondition => "ensures",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tier {
    Default,
    Audit,
    Axiom,
}

/// Parsed `[tier,] cond` argument list.
struct ContractAttr {
    tier: Tier,
    cond: Expr,
}

impl Parse for ContractAttr {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut tier = Tier::Default;

        // A bare `audit` with no comma is an ordinary boolean condition
        if input.peek(Ident) && input.peek2(Token![,]) {
            let fork = input.fork();
            let ident: Ident = fork.parse()?;
            let keyword = match ident.to_string().as_str() {
                "audit" => Some(Tier::Audit),
                "axiom" => Some(Tier::Axiom),
                _ => None,
            };
            if let Some(keyword) = keyword {
                let _: Ident = input.parse()?;
                let _: Token![,] = input.parse()?;
                tier = keyword;
            }
        }

        let cond: Expr = input.parse()?;
        // Allow one trailing comma
        if input.peek(Token![,]) {
            let _: Token![,] = input.parse()?;
        }
        if !input.is_empty() {
            return Err(input.error(
                "expected a single condition, optionally preceded by `audit` or `axiom`",
            ));
        }

        Ok(ContractAttr { tier, cond })
    }
}

impl ContractAttr {
    /// Path of the `*_at` function this attribute expands to.
    fn check_fn(&self, family: Family) -> Ident {
        match self.tier {
            Tier::Default => format_ident!("{}_at", family.stem()),
            Tier::Audit => format_ident!("{}_audit_at", family.stem()),
            Tier::Axiom => format_ident!("{}_axiom_at", family.stem()),
        }
    }
}

/// Entry point shared by both attributes. Errors become `compile_error!`.
pub(crate) fn process(family: Family, attr: TokenStream, item: TokenStream) -> TokenStream {
    match expand(family, attr, item) {
        Ok(tokens) => tokens,
        Err(err) => err.to_compile_error(),
    }
}

fn expand(family: Family, attr: TokenStream, item: TokenStream) -> syn::Result<TokenStream> {
    let contract: ContractAttr = syn::parse2(attr)?;
    let func: ItemFn = syn::parse2(item)?;

    if let Some(asyncness) = &func.sig.asyncness {
        return Err(syn::Error::new_spanned(
            asyncness,
            format!("#[{}] is not supported on async functions", family.stem()),
        ));
    }

    let check_fn = contract.check_fn(family);
    let cond = &contract.cond;
    let check = quote! {
        ::guardrail::contract::#check_fn(#cond, ::guardrail::here!());
    };

    let ItemFn {
        attrs,
        vis,
        sig,
        block,
    } = func;

    let body = match family {
        Family::Precondition => quote! {
            {
                #check
                #block
            }
        },
        Family::Postcondition => {
            let (binding, closure_ret) = match &sig.output {
                ReturnType::Default => (quote!(: ()), quote!(-> ())),
                ReturnType::Type(_, ty) if mentions_impl_trait(ty) => (quote!(), quote!()),
                ReturnType::Type(_, ty) => (quote!(: #ty), quote!(-> #ty)),
            };
            quote! {
                {
                    #[allow(clippy::redundant_closure_call)]
                    let ret #binding = (|| #closure_ret #block)();
                    #check
                    ret
                }
            }
        }
    };

    Ok(quote! {
        #(#attrs)*
        #vis #sig
        #body
    })
}

/// `impl Trait` cannot annotate a closure, so such return types are inferred.
fn mentions_impl_trait(ty: &Type) -> bool {
    fn walk(tokens: TokenStream) -> bool {
        tokens.into_iter().any(|tree| match tree {
            TokenTree::Ident(ident) => ident == "impl",
            TokenTree::Group(group) => walk(group.stream()),
            _ => false,
        })
    }
    walk(ty.to_token_stream())
}
