//! Diagnostic probes for the generative-language API
//!
//! These are manual verification tools, not part of the production apps: a
//! client for the models-listing and content-generation endpoints plus the
//! one-shot binaries built on it (`list-models`, `probe-models`,
//! `auth-check`). Each binary performs one round trip (or one short
//! first-success loop), prints a human-readable summary, and exits.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod genlang;

pub use genlang::{
    filter_probe_models, GenLangClient, GenLangConfig, GenLangError, ModelInfo, ProbeAttempt,
    ProbeReport,
};
