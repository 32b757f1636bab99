//! Public calculation models.
//!
//! Models are the primary public interface of this crate.
//!
//! # Organization
//!
//! Models are organized into domain-specific submodules (currently just
//! [`thermal`]) based on an opinionated taxonomy. This organization may
//! evolve as more models are added.
//!
//! # Model structure
//!
//! Each model lives in its own module, split into small submodules for
//! inputs, results, errors, and the calculation itself. Entry points are
//! plain functions: every call is independent and referentially transparent
//! given its inputs, with no shared or persistent state.

pub mod thermal;
