// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for the album views.

pub mod button;
pub mod container;
