// src/core/case.rs
use std::fmt;

use crate::core::context::TestContext;
use crate::error::Result;

/// Body of a test case: borrows the fixture and the case context
pub type CaseBody<F> = Box<dyn Fn(&mut F, &mut TestContext) -> Result<()> + Send + Sync>;

pub struct TestCase<F> {
    name: String,
    disabled: bool,
    body: CaseBody<F>,
}

impl<F> TestCase<F> {
    pub fn new<B>(name: impl Into<String>, body: B) -> Self
    where
        B: Fn(&mut F, &mut TestContext) -> Result<()> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            disabled: false,
            body: Box::new(body),
        }
    }

    /// Skip this case unless it is selected by name or disabled units are forced
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub(crate) fn invoke(&self, fixture: &mut F, ctx: &mut TestContext) -> Result<()> {
        (self.body)(fixture, ctx)
    }
}

impl<F> fmt::Debug for TestCase<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestCase")
            .field("name", &self.name)
            .field("disabled", &self.disabled)
            .finish_non_exhaustive()
    }
}
