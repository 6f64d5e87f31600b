//! 字段注入派生宏实现

use crate::utils::{extract_generic_type, find_field_attribute, is_option_type};
use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Error, Field, Fields, Ident, Result, Type};

/// 一个 `#[inject]` 字段
struct InjectField<'a> {
    ident: &'a Ident,
    /// `Arc<T>` 中的 `T`
    target: &'a Type,
    optional: bool,
}

impl<'a> InjectField<'a> {
    /// 解析字段；没有 `#[inject]` 标记时返回 `None`
    fn parse(field: &'a Field) -> Result<Option<Self>> {
        let Some(attr) = find_field_attribute(field, "inject") else {
            return Ok(None);
        };

        let mut explicit_optional = false;
        if !matches!(attr.meta, syn::Meta::Path(_)) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("optional") {
                    explicit_optional = true;
                    Ok(())
                } else {
                    Err(meta.error("unsupported inject option, expected `optional`"))
                }
            })?;
        }

        let ident = field
            .ident
            .as_ref()
            .ok_or_else(|| Error::new_spanned(field, "#[inject] requires a named field"))?;

        let optional = is_option_type(&field.ty);
        if explicit_optional && !optional {
            return Err(Error::new_spanned(
                &field.ty,
                "#[inject(optional)] requires an `Option<Arc<T>>` field",
            ));
        }

        let arc = if optional {
            extract_generic_type(&field.ty, "Option")
        } else {
            Some(&field.ty)
        };
        let target = arc
            .and_then(|ty| extract_generic_type(ty, "Arc"))
            .ok_or_else(|| {
                Error::new_spanned(
                    &field.ty,
                    "#[inject] fields must be `Arc<T>` or `Option<Arc<T>>`",
                )
            })?;

        Ok(Some(Self {
            ident,
            target,
            optional,
        }))
    }

    fn injection_point(&self) -> TokenStream {
        let name = self.ident.to_string();
        let target = self.target;
        let constructor = if self.optional {
            quote!(optional)
        } else {
            quote!(required)
        };

        quote! {
            ::di_abstractions::InjectionPoint::#constructor(
                #name,
                ::di_abstractions::TypeKey::of::<#target>(),
            )
        }
    }

    fn assignment_arm(&self) -> TokenStream {
        let ident = self.ident;
        let name = ident.to_string();
        let target = self.target;
        let resolved = quote!(value.try_downcast::<#target>()?);
        let assigned = if self.optional {
            quote!(::core::option::Option::Some(#resolved))
        } else {
            resolved
        };

        quote! {
            #name => {
                self.#ident = #assigned;
                ::core::result::Result::Ok(())
            }
        }
    }
}

/// 实现 #[derive(Injectable)] 宏
pub fn derive_injectable_impl(input: DeriveInput) -> Result<TokenStream> {
    let struct_name = &input.ident;
    let struct_name_string = struct_name.to_string();

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => named.named.iter().collect::<Vec<_>>(),
            Fields::Unit => Vec::new(),
            Fields::Unnamed(_) => {
                return Err(Error::new_spanned(
                    &input.ident,
                    "Injectable can only be derived for structs with named fields",
                ))
            }
        },
        _ => {
            return Err(Error::new_spanned(
                &input.ident,
                "Injectable can only be derived for structs",
            ))
        }
    };

    let mut inject_fields = Vec::new();
    for field in fields {
        if let Some(inject_field) = InjectField::parse(field)? {
            inject_fields.push(inject_field);
        }
    }

    let points = inject_fields.iter().map(InjectField::injection_point);
    let arms = inject_fields.iter().map(InjectField::assignment_arm);
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::di_abstractions::Injectable for #struct_name #ty_generics #where_clause {
            fn injection_points(&self) -> ::std::vec::Vec<::di_abstractions::InjectionPoint> {
                ::std::vec![#(#points),*]
            }

            #[allow(unused_variables)]
            fn inject_field(
                &mut self,
                field: &str,
                value: ::di_abstractions::Value,
            ) -> ::di_abstractions::DependencyResult<()> {
                match field {
                    #(#arms)*
                    _ => ::core::result::Result::Err(::di_abstractions::DependencyError::UnknownField {
                        type_name: ::std::string::String::from(#struct_name_string),
                        field: ::std::string::String::from(field),
                    }),
                }
            }
        }
    })
}
