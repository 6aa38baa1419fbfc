// Copyright 2022 Colin Finck <colin@reactos.org>
// SPDX-License-Identifier: MIT OR Apache-2.0

use proc_macro2::{Span, TokenStream};
use quote::{format_ident, quote, ToTokens};
use syn::ext::IdentExt;
use syn::{Error, Ident, Result, Type};

use crate::args::FormatSpec;

/// Converts `int_list` (or `IntList`) to `IntList`.
pub(crate) fn upper_camel_case(name: &str) -> String {
    name.split('_')
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect()
}

/// Converts `IntList` (or `int_list`) to `int_list`.
/// A run of capitals is one word, so `HTTPList` becomes `http_list`.
pub(crate) fn snake_case(name: &str) -> String {
    let chars = name.chars().collect::<Vec<_>>();
    let mut output = String::with_capacity(name.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c.is_uppercase() {
            let prev = i.checked_sub(1).map(|j| chars[j]);
            let next = chars.get(i + 1).copied();

            let starts_word = match prev {
                None | Some('_') => false,
                Some(prev) if prev.is_uppercase() => next.map_or(false, char::is_lowercase),
                Some(_) => true,
            };
            if starts_word {
                output.push('_');
            }

            output.extend(c.to_lowercase());
        } else {
            output.push(c);
        }
    }

    output
}

/// Derives the `snake_case` prefix of generated function names from a list name.
pub(crate) struct FunctionPrefix {
    prefix: String,
    span: Span,
}

impl FunctionPrefix {
    pub(crate) fn new(name: &Ident) -> Self {
        Self {
            prefix: snake_case(&name.unraw().to_string()),
            span: name.span(),
        }
    }

    /// `int_list` + `push` = `int_list_push`
    pub(crate) fn function(&self, operation: &str) -> Ident {
        format_ident!("{}_{}", self.prefix, operation, span = self.span)
    }
}

/// All names of one generated list family.
pub(crate) struct Family {
    pub(crate) list: Ident,
    pub(crate) node: Ident,
    pub(crate) functions: FunctionPrefix,
}

impl Family {
    pub(crate) fn new(name: &Ident) -> Result<Self> {
        let camel = upper_camel_case(&name.unraw().to_string());

        if !camel.starts_with(char::is_alphabetic) {
            return Err(Error::new_spanned(
                name,
                "list name must start with a letter after its leading underscores",
            ));
        }

        Ok(Self {
            list: format_ident!("{}", camel, span = name.span()),
            node: format_ident!("{}Node", camel, span = name.span()),
            functions: FunctionPrefix::new(name),
        })
    }
}

pub(crate) fn node_type(elem_ty: &Type, node_name: &Ident) -> TokenStream {
    quote! {
        #[allow(dead_code)]
        pub type #node_name = ::link_list::Node<#elem_ty>;
    }
}

/// Defines the list type, and rejects a node type that stores a different element type.
pub(crate) fn list_type(
    elem_ty: &Type,
    list_name: &Ident,
    node_ty: &impl ToTokens,
) -> TokenStream {
    quote! {
        #[allow(dead_code)]
        pub type #list_name = ::link_list::LinkList<#elem_ty>;

        const _: fn(#node_ty) -> ::link_list::Node<#elem_ty> = |node| node;
    }
}

pub(crate) fn create_function(fun_name: &Ident, list_ty: &impl ToTokens) -> TokenStream {
    quote! {
        #[allow(dead_code)]
        pub fn #fun_name() -> #list_ty {
            ::link_list::ops::create()
        }
    }
}

pub(crate) fn free_function(fun_name: &Ident, list_ty: &impl ToTokens) -> TokenStream {
    quote! {
        #[allow(dead_code)]
        pub fn #fun_name(list: #list_ty) {
            ::link_list::ops::free(list)
        }
    }
}

pub(crate) fn push_function(
    fun_name: &Ident,
    elem_ty: &Type,
    list_ty: &impl ToTokens,
) -> TokenStream {
    quote! {
        #[allow(dead_code)]
        pub fn #fun_name(list: &mut #list_ty, value: #elem_ty) {
            ::link_list::ops::push(list, value)
        }
    }
}

pub(crate) fn pop_function(
    fun_name: &Ident,
    elem_ty: &Type,
    list_ty: &impl ToTokens,
) -> TokenStream {
    quote! {
        #[allow(dead_code)]
        pub fn #fun_name(list: &mut #list_ty, index: usize) -> #elem_ty {
            ::link_list::ops::pop(list, index)
        }
    }
}

pub(crate) fn get_function(
    fun_name: &Ident,
    elem_ty: &Type,
    list_ty: &impl ToTokens,
) -> TokenStream {
    quote! {
        #[allow(dead_code)]
        pub fn #fun_name(list: &#list_ty, index: usize) -> #elem_ty {
            ::link_list::ops::get(list, index)
        }
    }
}

pub(crate) fn print_function(
    fun_name: &Ident,
    list_ty: &impl ToTokens,
    spec: &FormatSpec,
) -> TokenStream {
    let spec = &spec.0;

    quote! {
        #[allow(dead_code)]
        pub fn #fun_name(list: &#list_ty) {
            ::link_list::ops::print_with(list, |value, f| ::core::write!(f, #spec, value))
        }
    }
}

/// Create, free, push, pop and get, named after `functions`.
pub(crate) fn base_functions(
    elem_ty: &Type,
    list_ty: &impl ToTokens,
    functions: &FunctionPrefix,
) -> TokenStream {
    let mut tokens = create_function(&functions.function("create"), list_ty);
    tokens.extend(free_function(&functions.function("free"), list_ty));
    tokens.extend(push_function(&functions.function("push"), elem_ty, list_ty));
    tokens.extend(pop_function(&functions.function("pop"), elem_ty, list_ty));
    tokens.extend(get_function(&functions.function("get"), elem_ty, list_ty));
    tokens
}

/// Expands `link_list!` and, with a format string, `link_list_w_print!`.
pub(crate) fn link_list_family(
    elem_ty: &Type,
    name: &Ident,
    spec: Option<&FormatSpec>,
) -> Result<TokenStream> {
    let family = Family::new(name)?;

    let mut tokens = node_type(elem_ty, &family.node);
    tokens.extend(list_type(elem_ty, &family.list, &family.node));
    tokens.extend(base_functions(elem_ty, &family.list, &family.functions));

    if let Some(spec) = spec {
        tokens.extend(print_function(
            &family.functions.function("print"),
            &family.list,
            spec,
        ));
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    #[test]
    fn test_upper_camel_case() {
        assert_eq!(upper_camel_case("int_list"), "IntList");
        assert_eq!(upper_camel_case("IntList"), "IntList");
        assert_eq!(upper_camel_case("floats"), "Floats");
        assert_eq!(upper_camel_case("__weird__name_"), "WeirdName");
    }

    #[test]
    fn test_snake_case() {
        assert_eq!(snake_case("IntList"), "int_list");
        assert_eq!(snake_case("int_list"), "int_list");
        assert_eq!(snake_case("Int_List"), "int_list");
        assert_eq!(snake_case("floats"), "floats");
        assert_eq!(snake_case("HTTPList"), "http_list");
        assert_eq!(snake_case("XMLHttpList"), "xml_http_list");
        assert_eq!(snake_case("Vec3List"), "vec3_list");
        assert_eq!(snake_case("IO"), "io");
    }

    #[test]
    fn test_family_names() {
        let family = Family::new(&parse_quote!(int_list)).unwrap();
        assert_eq!(family.list, "IntList");
        assert_eq!(family.node, "IntListNode");
        assert_eq!(family.functions.function("pop"), "int_list_pop");

        let family = Family::new(&parse_quote!(r#Type)).unwrap();
        assert_eq!(family.list, "Type");
        assert_eq!(family.functions.function("get"), "type_get");
    }

    #[test]
    fn test_family_name_without_letters() {
        assert!(Family::new(&parse_quote!(__)).is_err());
        assert!(Family::new(&parse_quote!(_1)).is_err());
    }

    #[test]
    fn test_link_list_family() {
        let elem_ty = parse_quote!(i32);
        let tokens = link_list_family(&elem_ty, &parse_quote!(int_list), None)
            .unwrap()
            .to_string();

        assert!(tokens.contains("pub type IntListNode"));
        assert!(tokens.contains("pub type IntList"));
        for operation in ["create", "free", "push", "pop", "get"] {
            assert!(tokens.contains(&format!("fn int_list_{}", operation)));
        }
        assert!(!tokens.contains("int_list_print"));
    }

    #[test]
    fn test_link_list_family_with_print() {
        let elem_ty = parse_quote!(f64);
        let spec = FormatSpec(parse_quote!("{:.2}"));
        let tokens = link_list_family(&elem_ty, &parse_quote!(FloatList), Some(&spec))
            .unwrap()
            .to_string();

        assert!(tokens.contains("fn float_list_print"));
        assert!(tokens.contains("\"{:.2}\""));
    }
}
