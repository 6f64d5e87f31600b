//! # DI Macros
//!
//! 这个 crate 提供了用于声明字段注入点的派生宏。
//!
//! ## 核心宏
//!
//! - [`Injectable`] - 为结构体实现 `di_abstractions::Injectable`
//!
//! ## 使用示例
//!
//! ```ignore
//! use di_macros::Injectable;
//! use std::sync::Arc;
//!
//! #[derive(Injectable)]
//! pub struct User {
//!     name: String,
//!     #[inject]
//!     address: Arc<Address>,
//!     #[inject(optional)]
//!     auth_code: Option<Arc<AuthCode>>,
//! }
//! ```

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

mod injectable;
mod utils;

// Re-exports are not allowed in proc-macro crates

/// 字段注入派生宏
///
/// 带 `#[inject]` 标记的字段按声明顺序成为注入点，其余字段不受影响。
///
/// # 字段形式
///
/// - `#[inject] field: Arc<T>` - 必需字段，解析失败时注入返回错误
/// - `#[inject] field: Option<Arc<T>>` - 可选字段，解析失败时保持原值
/// - `#[inject(optional)] field: Option<Arc<T>>` - 同上，显式写法
///
/// `T` 可以是具体类型，也可以是用 `interface!` 声明过的 `dyn Trait`。
#[proc_macro_derive(Injectable, attributes(inject))]
pub fn derive_injectable(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    injectable::derive_injectable_impl(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
