//! # Validation Pipeline
//!
//! An ordered list of checks evaluated against a shared context. Each step either passes or
//! rejects the request with an error; the first rejection stops the pipeline and no later
//! step runs.
//!
//! ```rust
//! use resource_actor::Pipeline;
//!
//! let checks = Pipeline::<str, String>::new()
//!     .step(|s: &str| if s.is_empty() { Err("empty".to_string()) } else { Ok(()) })
//!     .step(|s: &str| if s.len() > 3 { Err("too long".to_string()) } else { Ok(()) });
//!
//! assert_eq!(checks.run("abc"), Ok(()));
//! assert_eq!(checks.run(""), Err("empty".to_string()));
//! assert_eq!(checks.run("abcd"), Err("too long".to_string()));
//! ```

/// A single validation step.
pub type Step<'a, C, E> = Box<dyn Fn(&C) -> Result<(), E> + Send + Sync + 'a>;

/// Ordered, short-circuiting sequence of validation steps over a context `C`.
pub struct Pipeline<'a, C: ?Sized, E> {
    steps: Vec<Step<'a, C, E>>,
}

impl<'a, C: ?Sized, E> Pipeline<'a, C, E> {
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Appends a step to the end of the pipeline.
    pub fn step(mut self, check: impl Fn(&C) -> Result<(), E> + Send + Sync + 'a) -> Self {
        self.steps.push(Box::new(check));
        self
    }

    /// Appends every step of `other`, keeping their order.
    pub fn then(mut self, other: Pipeline<'a, C, E>) -> Self {
        self.steps.extend(other.steps);
        self
    }

    /// Runs the steps in order, returning the first error.
    pub fn run(&self, ctx: &C) -> Result<(), E> {
        self.steps.iter().try_for_each(|check| check(ctx))
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl<C: ?Sized, E> Default for Pipeline<'_, C, E> {
    fn default() -> Self {
        Self::new()
    }
}
