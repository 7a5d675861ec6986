//! Variable naming for generated code.
//!
//! Capabilities are split into three traits so callers can hold the
//! narrowest one they need:
//!
//! - [`Named`]: has a display name.
//! - [`Versioned`]: can be redefined, producing a fresh `base_N` name.
//! - [`Typed`]: also carries a type label that can change on redefinition.
//!
//! | Variant           | Named | Versioned | Typed |
//! |-------------------|:-----:|:---------:|:-----:|
//! | [`SimpleVar`]     |   ✓   |           |       |
//! | [`SsaVar`]        |   ✓   |     ✓     |       |
//! | [`DynamicSsaVar`] |   ✓   |     ✓     |   ✓   |
//!
//! There is no registry: the generator keeps the variable it wants to keep
//! redefining.

use std::fmt;

/// A variable with a display name.
pub trait Named {
    /// The name to emit for the variable right now.
    ///
    /// Repeated calls return the same string until the variable is redefined.
    fn name(&self) -> String;
}

/// A variable following single static assignment: every redefinition gets a
/// new, never-before-returned name.
pub trait Versioned: Named {
    /// Current version. Starts at 0.
    fn version(&self) -> u64;

    /// Advance to the next version and return the new name.
    fn next(&mut self) -> String;
}

/// A versioned variable carrying a type label.
///
/// An empty label means "untyped".
pub trait Typed: Versioned {
    /// Current type label.
    fn ty(&self) -> &str;

    /// Replace the type label. The name is unchanged.
    fn set_ty(&mut self, ty: &str);

    /// Redefine the variable with type `ty`: set the type, then advance the
    /// version. Returns the new name.
    fn next_typed(&mut self, ty: &str) -> String {
        self.set_ty(ty);
        self.next()
    }
}

/// A plain named variable. The name never changes.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SimpleVar {
    name: String,
}

impl SimpleVar {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The name, borrowed.
    #[inline]
    pub fn base(&self) -> &str {
        &self.name
    }
}

impl Named for SimpleVar {
    fn name(&self) -> String {
        self.name.clone()
    }
}

impl fmt::Display for SimpleVar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// An SSA variable named `{base}_{version}`.
///
/// ```
/// use simprog_text::{Named, SsaVar, Versioned};
///
/// let mut t = SsaVar::new("t");
/// assert_eq!(t.name(), "t_0");
/// assert_eq!(t.next(), "t_1");
/// assert_eq!(t.next(), "t_2");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SsaVar {
    base: String,
    version: u64,
}

impl SsaVar {
    /// Create a variable at version 0.
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            version: 0,
        }
    }

    /// The base name without version suffix.
    #[inline]
    pub fn base(&self) -> &str {
        &self.base
    }
}

impl Named for SsaVar {
    fn name(&self) -> String {
        self.to_string()
    }
}

impl Versioned for SsaVar {
    #[inline]
    fn version(&self) -> u64 {
        self.version
    }

    fn next(&mut self) -> String {
        // A wrapped version would hand out a name that was already used.
        self.version = match self.version.checked_add(1) {
            Some(v) => v,
            None => panic!("SSA version overflow for `{}`", self.base),
        };
        self.name()
    }
}

impl fmt::Display for SsaVar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.base, self.version)
    }
}

/// An SSA variable that also tracks a type label, for targets where a
/// variable's type may change on each redefinition.
///
/// Naming follows [`SsaVar`]; the type label never appears in the name.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DynamicSsaVar {
    ssa: SsaVar,
    ty: String,
}

impl DynamicSsaVar {
    /// Create a variable at version 0 with type label `ty`.
    pub fn new(base: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            ssa: SsaVar::new(base),
            ty: ty.into(),
        }
    }

    /// Create a variable at version 0 with an empty type label.
    pub fn untyped(base: impl Into<String>) -> Self {
        Self::new(base, String::new())
    }

    /// The base name without version suffix.
    #[inline]
    pub fn base(&self) -> &str {
        self.ssa.base()
    }

    /// Check whether a type label is set.
    #[inline]
    pub fn is_typed(&self) -> bool {
        !self.ty.is_empty()
    }
}

impl Named for DynamicSsaVar {
    fn name(&self) -> String {
        self.ssa.name()
    }
}

impl Versioned for DynamicSsaVar {
    #[inline]
    fn version(&self) -> u64 {
        self.ssa.version()
    }

    fn next(&mut self) -> String {
        self.ssa.next()
    }
}

impl Typed for DynamicSsaVar {
    #[inline]
    fn ty(&self) -> &str {
        &self.ty
    }

    fn set_ty(&mut self, ty: &str) {
        ty.clone_into(&mut self.ty);
    }
}

impl fmt::Display for DynamicSsaVar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.ssa, f)
    }
}
