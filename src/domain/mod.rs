//! Domain Layer
//!
//! The argument graph model, free of any wire format.
//!
//! ## Structure
//!
//! - `entities/` - The graph and the statements, issues and arguments it owns
//! - `value_objects/` - Labels, proof standards, schemes, references
//! - `services/` - The shared scheme registry
//! - `ports/` - Codec and event interfaces implemented by infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never reads or writes bytes
//! 2. **Ids, not pointers** - Every link between entities is an id into the graph
//! 3. **Ports & Adapters** - Wire formats live behind `GraphCodec`

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
