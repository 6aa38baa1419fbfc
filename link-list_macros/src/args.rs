// Copyright 2022 Colin Finck <colin@reactos.org>
// SPDX-License-Identifier: MIT OR Apache-2.0

use syn::parse::{Parse, ParseStream};
use syn::{Error, Ident, LitStr, Result, Token, Type};

fn comma(input: ParseStream) -> Result<()> {
    input.parse::<Token![,]>()?;
    Ok(())
}

/// Accepts a trailing comma and rejects anything after the last argument.
fn finish(input: ParseStream) -> Result<()> {
    if input.peek(Token![,]) {
        input.parse::<Token![,]>()?;
    }

    if input.is_empty() {
        Ok(())
    } else {
        Err(input.error("unexpected argument"))
    }
}

/// A format string for a single element, e.g. `"{:.2}"`.
pub(crate) struct FormatSpec(pub(crate) LitStr);

impl Parse for FormatSpec {
    fn parse(input: ParseStream) -> Result<Self> {
        let lit = input.parse::<LitStr>()?;

        if !lit.value().contains('{') {
            return Err(Error::new_spanned(
                lit,
                "format string needs a placeholder for the element, e.g. \"{}\"",
            ));
        }

        Ok(Self(lit))
    }
}

/// `i32, int_list`
pub(crate) struct TypeAndName {
    pub(crate) elem_ty: Type,
    pub(crate) name: Ident,
}

impl Parse for TypeAndName {
    fn parse(input: ParseStream) -> Result<Self> {
        let elem_ty = input.parse()?;
        comma(input)?;
        let name = input.parse()?;
        finish(input)?;

        Ok(Self { elem_ty, name })
    }
}

/// `i32, int_list, "{}"`
pub(crate) struct TypeNameAndSpec {
    pub(crate) elem_ty: Type,
    pub(crate) name: Ident,
    pub(crate) spec: FormatSpec,
}

impl Parse for TypeNameAndSpec {
    fn parse(input: ParseStream) -> Result<Self> {
        let elem_ty = input.parse()?;
        comma(input)?;
        let name = input.parse()?;
        comma(input)?;
        let spec = input.parse()?;
        finish(input)?;

        Ok(Self {
            elem_ty,
            name,
            spec,
        })
    }
}

/// `i32, IntList, IntNode`
pub(crate) struct ListDefinition {
    pub(crate) elem_ty: Type,
    pub(crate) list_name: Ident,
    pub(crate) node_ty: Type,
}

impl Parse for ListDefinition {
    fn parse(input: ParseStream) -> Result<Self> {
        let elem_ty = input.parse()?;
        comma(input)?;
        let list_name = input.parse()?;
        comma(input)?;
        let node_ty = input.parse()?;
        finish(input)?;

        Ok(Self {
            elem_ty,
            list_name,
            node_ty,
        })
    }
}

/// `fun_name, IntList`
pub(crate) struct ListFunction {
    pub(crate) fun_name: Ident,
    pub(crate) list_ty: Type,
}

impl Parse for ListFunction {
    fn parse(input: ParseStream) -> Result<Self> {
        let fun_name = input.parse()?;
        comma(input)?;
        let list_ty = input.parse()?;
        finish(input)?;

        Ok(Self { fun_name, list_ty })
    }
}

/// `fun_name, i32, IntList`
pub(crate) struct ElementFunction {
    pub(crate) fun_name: Ident,
    pub(crate) elem_ty: Type,
    pub(crate) list_ty: Type,
}

impl Parse for ElementFunction {
    fn parse(input: ParseStream) -> Result<Self> {
        let fun_name = input.parse()?;
        comma(input)?;
        let elem_ty = input.parse()?;
        comma(input)?;
        let list_ty = input.parse()?;
        finish(input)?;

        Ok(Self {
            fun_name,
            elem_ty,
            list_ty,
        })
    }
}

/// `fun_name, IntList, "{}"`
pub(crate) struct PrintFunction {
    pub(crate) fun_name: Ident,
    pub(crate) list_ty: Type,
    pub(crate) spec: FormatSpec,
}

impl Parse for PrintFunction {
    fn parse(input: ParseStream) -> Result<Self> {
        let fun_name = input.parse()?;
        comma(input)?;
        let list_ty = input.parse()?;
        comma(input)?;
        let spec = input.parse()?;
        finish(input)?;

        Ok(Self {
            fun_name,
            list_ty,
            spec,
        })
    }
}
