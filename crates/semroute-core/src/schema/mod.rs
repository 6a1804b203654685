//! Schema descriptions and the routing tables compiled from them
//!
//! This module provides:
//! - [`Schema`] / [`FieldSpec`]: declarative, serde-friendly field layouts
//! - [`RoutingTable`]: the validated, immutable table the parser walks
//! - YAML and JSON loading of schema descriptions
//!
//! Copyright (c) 2025 Semroute Team
//! Licensed under the Apache-2.0 license

pub mod loader;
pub mod spec;
pub mod table;

pub use loader::Format;
pub use spec::{FieldKind, FieldSpec, Schema};
pub use table::{FieldDescriptor, RoutingTable, ENTRY_INDEX};
