//! Operations Source Generator
//!
//! Generates the `IOperation*` contract interfaces and `Operation*`
//! implementation classes of the operations family: type-safe
//! single-dispatch invocation constructs over a fixed set of input types.
//!
//! # Features
//!
//! - Contract and implementation artifacts for every combination of
//!   sync/async, action/func, and stateless/stateful
//! - Arbitrary arity: `T1` through `TN`, one dispatch member per position
//! - Deterministic, byte-stable output keyed as `{Base}.T{order}.g`
//! - XML documentation synthesized from a fixed template table
//!
//! # Example
//!
//! ```rust,ignore
//! use opsgen::{build_artifact, Context, Mode, Output, Shape};
//!
//! let shape = Shape::contract(Mode::Sync, Output::Action, Context::Stateless);
//! let artifact = build_artifact(shape, 2)?;
//! assert_eq!(artifact.key, "IOperationAction.T2.g");
//! ```

pub mod assembler;
pub mod builder;
pub mod docs;
pub mod handlers;
pub mod names;
pub mod order;
pub mod shape;
pub mod writer;

pub use assembler::{Assembler, GeneratedArtifact};
pub use builder::ArtifactBuilder;
pub use handlers::HandlerSlots;
pub use names::ParameterList;
pub use order::OrderIterator;
pub use shape::{ArtifactKind, Context, Mode, Output, Shape};

use thiserror::Error;

/// Errors that can occur during generation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeneratorError {
    #[error("order must be at least 1, got {order}")]
    InvalidOrder { order: i32 },

    #[error("missing handler for position {position}")]
    NullHandler { position: u32 },
}

/// Result type for generation operations.
pub type GeneratorResult<T> = Result<T, GeneratorError>;

/// Generates the artifact for a single shape at the given order.
pub fn build_artifact(shape: Shape, order: i32) -> GeneratorResult<GeneratedArtifact> {
    let orders = OrderIterator::new(order)?;
    let builder = ArtifactBuilder::new(shape, orders)?;
    Ok(GeneratedArtifact {
        key: shape.key(orders.order()),
        text: builder.build(),
    })
}

/// Generates every registered shape for orders 1 through `max_order`.
pub fn generate_all(max_order: i32) -> GeneratorResult<Vec<GeneratedArtifact>> {
    Assembler::new(max_order)?.assemble()
}

/// The fixed shape registry, in emission order.
pub fn shapes() -> &'static [Shape] {
    shape::REGISTRY
}
