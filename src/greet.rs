//! Greeting capability composed by explicit delegation.
//!
//! A [`DelegatingGreeter`] exposes its own short greeting and forwards
//! the long-form greeting to an owned [`BasicGreeter`].

/// Capability for the long-form greeting.
pub trait Greeter {
    /// Returns the long-form greeting.
    fn greet_more(&self) -> String;
}

/// Greets a single person by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicGreeter {
    name: String,
}

impl BasicGreeter {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Returns the name this greeter addresses
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Greeter for BasicGreeter {
    fn greet_more(&self) -> String {
        format!("hello {}!", self.name)
    }
}

/// Adds a short greeting of its own and delegates the long-form
/// greeting to an owned [`BasicGreeter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelegatingGreeter {
    base: BasicGreeter,
    name: String,
}

impl DelegatingGreeter {
    pub fn new(base: BasicGreeter, name: impl Into<String>) -> Self {
        Self {
            base,
            name: name.into(),
        }
    }

    /// Returns the short greeting.
    pub fn greet(&self) -> String {
        format!("yo {}!", self.name)
    }

    /// Returns the name this greeter addresses
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the owned delegate
    pub fn base(&self) -> &BasicGreeter {
        &self.base
    }
}

impl Greeter for DelegatingGreeter {
    fn greet_more(&self) -> String {
        self.base.greet_more()
    }
}
