// SPDX-License-Identifier: MPL-2.0
//! Reusable form primitives.
//!
//! # Components
//!
//! - [`dropdown`] - Select control over `{value, label}` items with an
//!   optional placeholder
//! - [`checkbox`] - Labeled checkbox reporting its new state

pub mod checkbox;
pub mod dropdown;
