// SPDX-License-Identifier: MPL-2.0
//! UI building blocks: design tokens, theming and the toast layer.

pub mod design_tokens;
pub mod styles;
pub mod theming;
pub mod toast;
