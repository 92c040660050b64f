use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use syn::parse::Parser;

/// Generate a three component color model.
///
/// The three fields are made public, the usual value type derives are added
/// and `new`, `to_components` and conversions to and from
/// `crate::color::Components` are implemented. Every generic type parameter
/// is treated as a tag and gets a `PhantomData` field.
#[proc_macro]
pub fn gen_model(input: TokenStream) -> TokenStream {
    let mut input = syn::parse_macro_input!(input as syn::ItemStruct);

    if input.fields.len() != 3 {
        return quote! {
            compile_error!("Models must have exactly 3 fields, one for each component of the color.")
        }
        .into();
    }

    let field_names = input
        .fields
        .iter()
        .map(|f| f.ident.clone())
        .collect::<Vec<_>>();

    let field1 = &field_names[0];
    let field2 = &field_names[1];
    let field3 = &field_names[2];

    input.fields.iter_mut().for_each(|f| {
        f.vis = syn::Visibility::Public(Default::default());
    });

    let attrs = match syn::Attribute::parse_outer.parse2(quote! {
        #[derive(Clone, Copy, Debug, PartialEq)]
    }) {
        Ok(attrs) => attrs,
        Err(err) => return err.to_compile_error().into(),
    };
    input.attrs.extend(attrs);

    let mut phantom_fields: Vec<syn::Ident> = vec![];

    if let syn::Fields::Named(ref mut named) = input.fields {
        for param in input.generics.params.iter() {
            let syn::GenericParam::Type(type_param) = param else {
                return syn::Error::new_spanned(param, "only type parameters are supported")
                    .to_compile_error()
                    .into();
            };

            let ident = &type_param.ident;
            let field_name = syn::Ident::new(
                &format!("_{}", ident.to_string().to_lowercase()),
                Span::call_site(),
            );

            let field = match syn::Field::parse_named.parse2(quote! {
                #field_name: ::std::marker::PhantomData<#ident>
            }) {
                Ok(field) => field,
                Err(err) => return err.to_compile_error().into(),
            };

            named.named.push(field);
            phantom_fields.push(field_name);
        }
    }

    let struct_name = input.ident.clone();
    let (impl_gen, type_gen, where_clause) = input.generics.split_for_impl();

    let new_impl = quote! {
        impl #impl_gen #struct_name #type_gen #where_clause {
            /// Create a new color from its three components.
            pub const fn new(
                #field1: crate::color::Component,
                #field2: crate::color::Component,
                #field3: crate::color::Component,
            ) -> Self {
                Self {
                    #field1,
                    #field2,
                    #field3,
                    #(#phantom_fields: ::std::marker::PhantomData,)*
                }
            }

            /// Convert this model into generic components.
            pub fn to_components(&self) -> crate::color::Components {
                crate::color::Components(self.#field1, self.#field2, self.#field3)
            }
        }

        impl #impl_gen From<crate::color::Components> for #struct_name #type_gen #where_clause {
            fn from(value: crate::color::Components) -> Self {
                Self::new(value.0, value.1, value.2)
            }
        }

        impl #impl_gen From<#struct_name #type_gen> for crate::color::Components #where_clause {
            fn from(value: #struct_name #type_gen) -> Self {
                value.to_components()
            }
        }
    };

    quote! {
        #input
        #new_impl
    }
    .into()
}
