use std::collections::HashMap;

/// The built-in primitive types.
///
/// Two types are equal exactly when they are the same variant, so plain
/// enum equality carries the semantics of canonical singleton type
/// references. There is no coercion and no subtyping; every type
/// comparison in the checker is an identity comparison on this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive {
    /// `int`: a signed integer with 32-bit range semantics.
    Int,
    /// `real`: an IEEE-754 double precision number.
    Real,
    /// `string`: UTF-8 text.
    String,
    /// `char`: a single Unicode scalar.
    Char,
    /// `boolean`: `true` or `false`.
    Boolean,
}

impl Primitive {
    /// Gets the canonical source-level name of the type.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Int => "int",
            Self::Real => "real",
            Self::String => "string",
            Self::Char => "char",
            Self::Boolean => "boolean",
        }
    }
}

impl std::fmt::Display for Primitive {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Builds the root type registry.
///
/// The returned table maps exactly the five canonical primitive names;
/// only the root scope carries a type table, so every type annotation in
/// the program resolves against this registry.
///
/// # Example
/// ```
/// use runa::interpreter::typechecker::primitives::{Primitive, primitives};
///
/// let registry = primitives();
///
/// assert_eq!(registry.len(), 5);
/// assert_eq!(registry.get("int"), Some(&Primitive::Int));
/// assert_eq!(registry.get("boolean"), Some(&Primitive::Boolean));
/// ```
#[must_use]
pub fn primitives() -> HashMap<String, Primitive> {
    [Primitive::Int, Primitive::Real, Primitive::String, Primitive::Char, Primitive::Boolean]
        .into_iter()
        .map(|primitive| (primitive.name().to_string(), primitive))
        .collect()
}
