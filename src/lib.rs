//! Workspace tooling package.
//!
//! Exists only to carry the `rusty-hook` pre-commit configuration; the
//! library lives in `crates/lambda-events`.
