//! Sweep Assembly
//!
//! Walks every registered shape across every order up to a configured
//! maximum and collects the rendered artifacts keyed by name. Emission
//! order is deterministic: all registry shapes at order 1, then all at
//! order 2, and so on.

use indexmap::IndexMap;
use tracing::debug;

use crate::builder::ArtifactBuilder;
use crate::order::OrderIterator;
use crate::shape::REGISTRY;
use crate::GeneratorResult;

/// One rendered construct: its artifact key and complete source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArtifact {
    /// Artifact key, e.g. `IOperationAction.T3.g`.
    pub key: String,
    /// Complete source text of the construct.
    pub text: String,
}

/// Renders every registered shape at every order from 1 through a
/// validated maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Assembler {
    orders: OrderIterator,
}

impl Assembler {
    /// Creates an assembler sweeping orders 1 through `max_order`.
    pub fn new(max_order: i32) -> GeneratorResult<Self> {
        Ok(Self {
            orders: OrderIterator::new(max_order)?,
        })
    }

    /// Number of artifacts one full sweep produces.
    pub fn artifact_count(&self) -> usize {
        REGISTRY.len() * self.orders.order() as usize
    }

    /// Renders the full sweep.
    pub fn assemble(&self) -> GeneratorResult<Vec<GeneratedArtifact>> {
        let mut artifacts = IndexMap::with_capacity(self.artifact_count());
        for order in self.orders.positions() {
            let orders = OrderIterator::new(order as i32)?;
            for shape in REGISTRY {
                let key = shape.key(order);
                let builder = ArtifactBuilder::new(*shape, orders)?;
                let previous = artifacts.insert(key.clone(), builder.build());
                debug_assert!(previous.is_none(), "duplicate artifact key {}", key);
                debug!("generated {}", key);
            }
        }
        Ok(artifacts
            .into_iter()
            .map(|(key, text)| GeneratedArtifact { key, text })
            .collect())
    }
}
