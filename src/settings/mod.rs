//! Configuration loading and resolution utilities.
//!
//! Config files and `GLYPHPICK__*` environment variables are layered with the
//! `config` crate into a [`raw`] mirror, CLI overrides are applied on top, and
//! the result is resolved and validated into a [`ResolvedConfig`].

mod loader;
mod raw;
mod resolved;
mod sources;

pub use loader::load;
pub use resolved::ResolvedConfig;
