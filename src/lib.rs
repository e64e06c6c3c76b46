//! `phantoms` is a small modular toolkit for generating 3D analytic phantoms
//! from sets of ellipsoids
//!
#![doc = include_str!("../readme.md")]
#![deny(missing_docs, missing_debug_implementations)]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

// Re-exports of toolkit crates.
#[doc(inline)]
pub use phantoms_utils as utils;

#[cfg(feature = "phantom")]
#[cfg_attr(docsrs, doc(cfg(feature = "phantom")))]
#[doc(inline)]
pub use phantoms_phantom as phantom;
