//! Test support: fixtures, the Postgres harness and end-to-end workflows.

pub(crate) mod fixtures;

mod workflows;

pub(crate) use context::TestContext;
