// Copyright (c) 2024-2026 Nervosys LLC
// SPDX-License-Identifier: AGPL-3.0-only
//! Builder setters for per-operation options structs
//!
//! Every options struct keeps required values in plain fields (set by its
//! `new`), optional values in `Option` fields, and caller-supplied headers
//! in `headers`. This macro generates the fluent setters for the optional
//! fields plus `header()`.

macro_rules! options_setters {
    ($ty:ident { $($field:ident : $fty:ty),* $(,)? }) => {
        impl $ty {
            $(
                pub fn $field(mut self, value: impl Into<$fty>) -> Self {
                    self.$field = Some(value.into());
                    self
                }
            )*

            /// Add a header sent with this call only
            pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
                self.headers.insert(name.into(), value.into());
                self
            }
        }
    };
}
