mod binary_name;
mod class_name;
pub use binary_name::*;
pub use class_name::*;

/// Suffix of the implementation artifact (eg. `demo/Foo$$Impl`)
pub const IMPL_SUFFIX: &str = "$$Impl";
/// Suffix of the delegating implementation artifact (eg. `demo/Foo$$DImpl`)
pub const DELEGATING_IMPL_SUFFIX: &str = "$$DImpl";

/// Name of the accessor method of a property.
/// eg. `getter_name("size") == "getSize"`
pub fn getter_name(property: &str) -> String {
    accessor_name("get", property)
}

/// eg. `setter_name("size") == "setSize"`
pub fn setter_name(property: &str) -> String {
    accessor_name("set", property)
}

fn accessor_name(prefix: &str, property: &str) -> String {
    let mut chars = property.chars();
    match chars.next() {
        Some(c) => format!("{}{}{}", prefix, c.to_uppercase(), chars.as_str()),
        None => prefix.to_string(),
    }
}
