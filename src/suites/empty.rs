// src/suites/empty.rs
//! Empty template suite — disabled, one case that only says hello

use crate::core::Suite;
use crate::fixture::BasicTestingSetup;

pub const SUITE_NAME: &str = "empty_tests";
pub const CASE_NAME: &str = "empty_test_case_1";
pub const GREETING: &str = "Hello world!";

pub fn empty_tests() -> Suite<BasicTestingSetup> {
    Suite::<BasicTestingSetup>::new(SUITE_NAME)
        .disabled()
        .case(CASE_NAME, |_setup, ctx| {
            ctx.message(GREETING);
            Ok(())
        })
}
