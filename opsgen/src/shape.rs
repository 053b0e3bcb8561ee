//! Shape Descriptors
//!
//! The axes of the operations family and the fixed registry of every
//! generated construct.

use serde::Serialize;

/// Invocation timing of a construct's dispatch members.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Mode {
    /// Members invoke inline and complete before returning.
    Sync,
    /// Members return task handles and honor a cancellation token.
    Async,
}

/// Whether dispatch members produce a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Output {
    /// No produced value.
    Action,
    /// A `TResult`-typed value per invocation.
    Func,
}

/// Whether dispatch members receive shared external state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Context {
    Stateless,
    /// Members take an additional `TState` argument at call time.
    Stateful,
}

/// Which artifact of an axis combination is generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ArtifactKind {
    /// The interface declaring the dispatch members.
    Contract,
    /// The sealed class backed by per-position delegates.
    Implementation,
}

/// One generated construct: the three axes plus the artifact kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Shape {
    pub kind: ArtifactKind,
    pub mode: Mode,
    pub output: Output,
    pub context: Context,
}

impl Shape {
    /// A contract shape for the given axis combination.
    pub const fn contract(mode: Mode, output: Output, context: Context) -> Self {
        Self {
            kind: ArtifactKind::Contract,
            mode,
            output,
            context,
        }
    }

    /// An implementation shape for the given axis combination.
    pub const fn implementation(mode: Mode, output: Output, context: Context) -> Self {
        Self {
            kind: ArtifactKind::Implementation,
            mode,
            output,
            context,
        }
    }

    /// The ungeneric construct name, e.g. `IOperationStatefulAsyncFunc`.
    pub fn base_name(&self) -> String {
        let mut name = String::new();
        if self.kind == ArtifactKind::Contract {
            name.push('I');
        }
        name.push_str("Operation");
        if self.context == Context::Stateful {
            name.push_str("Stateful");
        }
        if self.mode == Mode::Async {
            name.push_str("Async");
        }
        name.push_str(match self.output {
            Output::Action => "Action",
            Output::Func => "Func",
        });
        name
    }

    /// Base name of the contract this shape declares or implements.
    pub fn contract_name(&self) -> String {
        Shape {
            kind: ArtifactKind::Contract,
            ..*self
        }
        .base_name()
    }

    /// The artifact key for this shape at `order`.
    pub fn key(&self, order: u32) -> String {
        format!("{}.T{}.g", self.base_name(), order)
    }

    /// Namespaces the artifact imports, in emission order.
    pub fn usings(&self) -> &'static [&'static str] {
        match (self.kind, self.mode) {
            (ArtifactKind::Contract, Mode::Sync) => &[],
            (ArtifactKind::Contract, Mode::Async) => {
                &["System.Threading", "System.Threading.Tasks"]
            }
            (ArtifactKind::Implementation, Mode::Sync) => &["System"],
            (ArtifactKind::Implementation, Mode::Async) => {
                &["System", "System.Threading", "System.Threading.Tasks"]
            }
        }
    }
}

/// Every generated construct, in emission order: the eight contracts,
/// then the eight implementations, each alphabetical by base name.
pub const REGISTRY: &[Shape] = &[
    Shape::contract(Mode::Sync, Output::Action, Context::Stateless),
    Shape::contract(Mode::Async, Output::Action, Context::Stateless),
    Shape::contract(Mode::Async, Output::Func, Context::Stateless),
    Shape::contract(Mode::Sync, Output::Func, Context::Stateless),
    Shape::contract(Mode::Sync, Output::Action, Context::Stateful),
    Shape::contract(Mode::Async, Output::Action, Context::Stateful),
    Shape::contract(Mode::Async, Output::Func, Context::Stateful),
    Shape::contract(Mode::Sync, Output::Func, Context::Stateful),
    Shape::implementation(Mode::Sync, Output::Action, Context::Stateless),
    Shape::implementation(Mode::Async, Output::Action, Context::Stateless),
    Shape::implementation(Mode::Async, Output::Func, Context::Stateless),
    Shape::implementation(Mode::Sync, Output::Func, Context::Stateless),
    Shape::implementation(Mode::Sync, Output::Action, Context::Stateful),
    Shape::implementation(Mode::Async, Output::Action, Context::Stateful),
    Shape::implementation(Mode::Async, Output::Func, Context::Stateful),
    Shape::implementation(Mode::Sync, Output::Func, Context::Stateful),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_names() {
        let cases = [
            (
                Shape::contract(Mode::Sync, Output::Action, Context::Stateless),
                "IOperationAction",
            ),
            (
                Shape::contract(Mode::Async, Output::Func, Context::Stateless),
                "IOperationAsyncFunc",
            ),
            (
                Shape::contract(Mode::Async, Output::Action, Context::Stateful),
                "IOperationStatefulAsyncAction",
            ),
            (
                Shape::implementation(Mode::Sync, Output::Func, Context::Stateless),
                "OperationFunc",
            ),
            (
                Shape::implementation(Mode::Async, Output::Func, Context::Stateful),
                "OperationStatefulAsyncFunc",
            ),
        ];

        for (shape, expected) in cases {
            assert_eq!(shape.base_name(), expected);
        }
    }

    #[test]
    fn test_contract_name_strips_nothing_for_contracts() {
        let shape = Shape::contract(Mode::Sync, Output::Action, Context::Stateless);
        assert_eq!(shape.contract_name(), "IOperationAction");
    }

    #[test]
    fn test_contract_name_for_implementation() {
        let shape = Shape::implementation(Mode::Async, Output::Func, Context::Stateful);
        assert_eq!(shape.contract_name(), "IOperationStatefulAsyncFunc");
    }

    #[test]
    fn test_key_format() {
        let shape = Shape::contract(Mode::Sync, Output::Action, Context::Stateless);
        assert_eq!(shape.key(1), "IOperationAction.T1.g");
        assert_eq!(shape.key(20), "IOperationAction.T20.g");
    }

    #[test]
    fn test_registry_is_complete_and_unique() {
        assert_eq!(REGISTRY.len(), 16);

        let mut names: Vec<String> = REGISTRY.iter().map(Shape::base_name).collect();
        let total = names.len();
        names.dedup();
        assert_eq!(names.len(), total);
    }

    #[test]
    fn test_registry_order_is_contracts_then_implementations() {
        let contracts = REGISTRY
            .iter()
            .take(8)
            .all(|s| s.kind == ArtifactKind::Contract);
        let implementations = REGISTRY
            .iter()
            .skip(8)
            .all(|s| s.kind == ArtifactKind::Implementation);
        assert!(contracts);
        assert!(implementations);

        for group in [&REGISTRY[..8], &REGISTRY[8..]] {
            let names: Vec<String> = group.iter().map(Shape::base_name).collect();
            let mut sorted = names.clone();
            sorted.sort();
            assert_eq!(names, sorted);
        }
    }

    #[test]
    fn test_usings_table() {
        let contract_sync = Shape::contract(Mode::Sync, Output::Func, Context::Stateful);
        assert!(contract_sync.usings().is_empty());

        let contract_async = Shape::contract(Mode::Async, Output::Action, Context::Stateless);
        assert_eq!(
            contract_async.usings(),
            ["System.Threading", "System.Threading.Tasks"]
        );

        let implementation_sync =
            Shape::implementation(Mode::Sync, Output::Action, Context::Stateless);
        assert_eq!(implementation_sync.usings(), ["System"]);

        let implementation_async =
            Shape::implementation(Mode::Async, Output::Func, Context::Stateful);
        assert_eq!(
            implementation_async.usings(),
            ["System", "System.Threading", "System.Threading.Tasks"]
        );
    }
}
