// Copyright 2022 Colin Finck <colin@reactos.org>
// SPDX-License-Identifier: MIT OR Apache-2.0

mod args;
mod helpers;

use proc_macro::TokenStream;
use syn::parse_macro_input;

use args::{
    ElementFunction, ListDefinition, ListFunction, PrintFunction, TypeAndName, TypeNameAndSpec,
};

#[proc_macro]
pub fn link_list(input: TokenStream) -> TokenStream {
    let args = parse_macro_input!(input as TypeAndName);
    helpers::link_list_family(&args.elem_ty, &args.name, None)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}

#[proc_macro]
pub fn link_list_w_print(input: TokenStream) -> TokenStream {
    let args = parse_macro_input!(input as TypeNameAndSpec);
    helpers::link_list_family(&args.elem_ty, &args.name, Some(&args.spec))
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}

#[proc_macro]
pub fn def_link_list_node(input: TokenStream) -> TokenStream {
    let args = parse_macro_input!(input as TypeAndName);
    helpers::node_type(&args.elem_ty, &args.name).into()
}

#[proc_macro]
pub fn def_link_list(input: TokenStream) -> TokenStream {
    let args = parse_macro_input!(input as ListDefinition);
    helpers::list_type(&args.elem_ty, &args.list_name, &args.node_ty).into()
}

#[proc_macro]
pub fn link_list_base_functions(input: TokenStream) -> TokenStream {
    let args = parse_macro_input!(input as TypeAndName);
    let functions = helpers::FunctionPrefix::new(&args.name);
    helpers::base_functions(&args.elem_ty, &args.name, &functions).into()
}

#[proc_macro]
pub fn link_list_create_function(input: TokenStream) -> TokenStream {
    let args = parse_macro_input!(input as ListFunction);
    helpers::create_function(&args.fun_name, &args.list_ty).into()
}

#[proc_macro]
pub fn link_list_free_function(input: TokenStream) -> TokenStream {
    let args = parse_macro_input!(input as ListFunction);
    helpers::free_function(&args.fun_name, &args.list_ty).into()
}

#[proc_macro]
pub fn link_list_push_function(input: TokenStream) -> TokenStream {
    let args = parse_macro_input!(input as ElementFunction);
    helpers::push_function(&args.fun_name, &args.elem_ty, &args.list_ty).into()
}

#[proc_macro]
pub fn link_list_pop_function(input: TokenStream) -> TokenStream {
    let args = parse_macro_input!(input as ElementFunction);
    helpers::pop_function(&args.fun_name, &args.elem_ty, &args.list_ty).into()
}

#[proc_macro]
pub fn link_list_get_function(input: TokenStream) -> TokenStream {
    let args = parse_macro_input!(input as ElementFunction);
    helpers::get_function(&args.fun_name, &args.elem_ty, &args.list_ty).into()
}

#[proc_macro]
pub fn link_list_print_function(input: TokenStream) -> TokenStream {
    let args = parse_macro_input!(input as PrintFunction);
    helpers::print_function(&args.fun_name, &args.list_ty, &args.spec).into()
}
