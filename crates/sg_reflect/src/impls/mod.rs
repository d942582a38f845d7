//! Built-in reflection implementations and helpers for writing new ones.
//!
//! - [`concat`]: An efficient string concatenation function.
//! - [`GenericTypePathCell`]: Used to implement [`TypePath`] for generic types.
//!
//! ## Implemented Menu
//!
//! - scalar: `bool`, `char`, `i8`-`i128`, `u8`-`u128`, `isize`, `usize`,
//!   `f32`, `f64`, `String`
//! - optional: `Option<T>`
//! - list: `Vec<T>`, `VecDeque<T>`
//! - map: `BTreeMap<K, V>`, `std::collections::HashMap<K, V>`,
//!   `sg_utils::hash::HashMap<K, V>`
//! - boxed: `Box<dyn Reflect>`
//!
//! [`TypePath`]: crate::info::TypePath

// -----------------------------------------------------------------------------
// Modules

mod cell;

mod boxed;
mod list;
mod map;
mod option;
mod scalar;

// -----------------------------------------------------------------------------
// Exports

use alloc::string::String;

pub use cell::GenericTypePathCell;

/// An efficient string concatenation function.
///
/// This is usually used for the implementation of `TypePath`.
///
/// # Example
///
/// ```
/// use sg_reflect::impls;
///
/// let s = impls::concat(&["module", "::", "name", "<", "T" , ">"]);
///
/// assert_eq!(s, "module::name<T>");
/// assert_eq!(s.capacity(), 15);
/// ```
#[inline(never)]
pub fn concat(arr: &[&str]) -> String {
    let len = arr.iter().map(|item| item.len()).sum();
    let mut res = String::with_capacity(len);
    for &item in arr {
        res.push_str(item);
    }
    res
}
