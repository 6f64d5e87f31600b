//! 宏工具函数

use syn::{Attribute, Field, GenericArgument, PathArguments, Type};

/// 从 `Wrapper<T>` 中提取唯一的泛型参数 `T`
pub fn extract_generic_type<'a>(ty: &'a Type, wrapper: &str) -> Option<&'a Type> {
    let Type::Path(type_path) = ty else {
        return None;
    };
    if type_path.qself.is_some() {
        return None;
    }

    let segment = type_path.path.segments.last()?;
    if segment.ident != wrapper {
        return None;
    }

    match &segment.arguments {
        PathArguments::AngleBracketed(args) if args.args.len() == 1 => match args.args.first() {
            Some(GenericArgument::Type(inner_type)) => Some(inner_type),
            _ => None,
        },
        _ => None,
    }
}

/// 检查类型是否为 Option<T>
pub fn is_option_type(ty: &Type) -> bool {
    extract_generic_type(ty, "Option").is_some()
}

/// 查找字段上的指定属性
pub fn find_field_attribute<'a>(field: &'a Field, attr_name: &str) -> Option<&'a Attribute> {
    field
        .attrs
        .iter()
        .find(|attr| attr.path().is_ident(attr_name))
}
