//! Action discriminants
//!
//! The composition layer assumes nothing about an action except its type.

/// An action routed through a reducer tree.
pub trait Action {
    /// The discriminant used by type-indexed dispatch.
    fn action_type(&self) -> &str;
}

impl Action for str {
    fn action_type(&self) -> &str {
        self
    }
}

impl Action for String {
    fn action_type(&self) -> &str {
        self.as_str()
    }
}

impl<T: Action + ?Sized> Action for &T {
    fn action_type(&self) -> &str {
        (**self).action_type()
    }
}
