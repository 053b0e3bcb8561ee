//! Artifact Construction
//!
//! A single table-driven routine renders the complete text of any
//! registered construct. There is no per-shape emission code: names,
//! signatures, and documentation are all selected from the shape's axes,
//! and the order is never special-cased.

use tracing::debug;

use crate::docs;
use crate::handlers::HandlerSlots;
use crate::names::ParameterList;
use crate::order::OrderIterator;
use crate::shape::{ArtifactKind, Context, Mode, Output, Shape};
use crate::writer::SourceWriter;
use crate::GeneratorResult;

/// Leading line of every artifact.
const HEADER: &str = "// Auto-generated code";

/// The namespace every construct is declared in.
const NAMESPACE: &str = "Operations";

/// One per-position delegate slot of an implementation class.
#[derive(Debug, Clone)]
struct DelegateSlot {
    delegate_type: String,
}

impl DelegateSlot {
    fn new(shape: &Shape, position: u32) -> Self {
        let state = match shape.context {
            Context::Stateful => ", TState",
            Context::Stateless => "",
        };
        let delegate_type = match (shape.mode, shape.output) {
            (Mode::Sync, Output::Action) => format!("Action<T{}{}>", position, state),
            (Mode::Sync, Output::Func) => format!("Func<T{}{}, TResult>", position, state),
            (Mode::Async, Output::Action) => {
                format!("Func<T{}{}, CancellationToken, Task>", position, state)
            }
            (Mode::Async, Output::Func) => {
                format!("Func<T{}{}, CancellationToken, Task<TResult>>", position, state)
            }
        };
        Self { delegate_type }
    }

    /// `private readonly Action<T1> t1;`
    fn field(&self, position: u32) -> String {
        format!("private readonly {} t{};", self.delegate_type, position)
    }

    /// `Action<T1> t1`
    fn parameter(&self, position: u32) -> String {
        format!("{} t{}", self.delegate_type, position)
    }
}

/// `this.t1 = t1 ?? throw new ArgumentNullException(nameof(t1));`
fn null_guard(position: u32) -> String {
    format!(
        "this.t{0} = t{0} ?? throw new ArgumentNullException(nameof(t{0}));",
        position
    )
}

/// Per-kind member state: contracts carry no slots; implementations
/// materialize one delegate slot per position at construction.
#[derive(Debug)]
enum MemberSlots {
    Contract,
    Implementation(HandlerSlots<DelegateSlot>),
}

/// Builds the complete source text of one construct.
///
/// All validation happens in [`ArtifactBuilder::new`];
/// [`ArtifactBuilder::build`] is infallible and pure, so rendering the
/// same builder twice yields byte-identical text.
#[derive(Debug)]
pub struct ArtifactBuilder {
    shape: Shape,
    orders: OrderIterator,
    params: ParameterList,
    slots: MemberSlots,
}

impl ArtifactBuilder {
    /// Creates a builder for `shape` at the injected order.
    pub fn new(shape: Shape, orders: OrderIterator) -> GeneratorResult<Self> {
        let params = ParameterList::new(&shape, &orders);
        let slots = match shape.kind {
            ArtifactKind::Contract => MemberSlots::Contract,
            ArtifactKind::Implementation => MemberSlots::Implementation(HandlerSlots::new(
                orders
                    .positions()
                    .map(|position| Some(DelegateSlot::new(&shape, position))),
            )?),
        };
        Ok(Self {
            shape,
            orders,
            params,
            slots,
        })
    }

    /// Renders the artifact text.
    pub fn build(&self) -> String {
        debug!(
            "building {} at order {}",
            self.shape.base_name(),
            self.orders.order()
        );

        let mut w = SourceWriter::new();
        w.line(HEADER);
        let usings = self.shape.usings();
        for using in usings {
            w.line(&format!("using {};", using));
        }
        if !usings.is_empty() {
            w.blank_line();
        }
        w.line(&format!("namespace {}", NAMESPACE));
        w.line("{");
        w.increase_indent();
        w.block(&docs::construct_doc(&self.shape, &self.orders));
        match &self.slots {
            MemberSlots::Contract => self.contract_body(&mut w),
            MemberSlots::Implementation(slots) => self.implementation_body(&mut w, slots),
        }
        w.decrease_indent();
        w.write("}");
        w.finish()
    }

    fn contract_body(&self, w: &mut SourceWriter) {
        w.line(&format!(
            "public interface {}{}",
            self.shape.base_name(),
            self.params.declaration()
        ));
        w.line("{");
        w.increase_indent();

        self.contract_member(w, 1);
        for position in self.orders.positions_from(2) {
            w.blank_line();
            self.contract_member(w, position);
        }

        w.decrease_indent();
        w.line("}");
    }

    fn contract_member(&self, w: &mut SourceWriter, position: u32) {
        w.block(&docs::member_doc(&self.shape, position));
        w.line(&format!(
            "{} {}({});",
            self.return_type(),
            self.member_name(position),
            self.member_args(position)
        ));
    }

    fn implementation_body(&self, w: &mut SourceWriter, slots: &HandlerSlots<DelegateSlot>) {
        let base = self.shape.base_name();
        let generics = self.params.declaration();
        w.line(&format!(
            "public sealed class {}{} : {}{}",
            base,
            generics,
            self.shape.contract_name(),
            generics
        ));
        w.line("{");
        w.increase_indent();

        for (position, slot) in slots.iter() {
            w.line(&slot.field(position));
        }
        w.blank_line();

        let class_ref = format!("{}{}", base, self.params.documentation());
        w.block(&docs::constructor_doc(&class_ref, &self.orders));
        w.line(&format!("public {}(", base));
        w.increase_indent();
        let order = self.orders.order();
        for (position, slot) in slots.iter() {
            let terminator = if position == order { ")" } else { "," };
            w.line(&format!("{}{}", slot.parameter(position), terminator));
        }
        w.decrease_indent();
        w.line("{");
        w.increase_indent();
        for (position, _) in slots.iter() {
            w.line(&null_guard(position));
        }
        w.decrease_indent();
        w.line("}");

        for (position, _) in slots.iter() {
            w.blank_line();
            w.line(docs::INHERIT_DOC);
            self.implementation_member(w, position);
        }

        w.decrease_indent();
        w.line("}");
    }

    fn implementation_member(&self, w: &mut SourceWriter, position: u32) {
        let signature = format!(
            "public {} {}({})",
            self.return_type(),
            self.member_name(position),
            self.member_args(position)
        );
        let dispatch = format!("this.t{}.Invoke({});", position, self.invoke_args());
        match self.shape.mode {
            Mode::Sync => w.line(&format!("{} => {}", signature, dispatch)),
            Mode::Async => {
                w.line(&format!("{} =>", signature));
                w.increase_indent();
                w.line(&dispatch);
                w.decrease_indent();
            }
        }
    }

    fn member_name(&self, position: u32) -> String {
        match self.shape.mode {
            Mode::Sync => format!("InvokeT{}", position),
            Mode::Async => format!("InvokeT{}Async", position),
        }
    }

    fn return_type(&self) -> &'static str {
        match (self.shape.mode, self.shape.output) {
            (Mode::Sync, Output::Action) => "void",
            (Mode::Sync, Output::Func) => "TResult",
            (Mode::Async, Output::Action) => "Task",
            (Mode::Async, Output::Func) => "Task<TResult>",
        }
    }

    fn member_args(&self, position: u32) -> String {
        let mut args = format!("T{} input", position);
        if self.shape.context == Context::Stateful {
            args.push_str(", TState state");
        }
        if self.shape.mode == Mode::Async {
            args.push_str(", CancellationToken cancellationToken");
        }
        args
    }

    fn invoke_args(&self) -> String {
        let mut args = String::from("input");
        if self.shape.context == Context::Stateful {
            args.push_str(", state");
        }
        if self.shape.mode == Mode::Async {
            args.push_str(", cancellationToken");
        }
        args
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(shape: Shape, order: i32) -> String {
        let orders = OrderIterator::new(order).unwrap();
        ArtifactBuilder::new(shape, orders).unwrap().build()
    }

    #[test]
    fn test_delegate_type_table() {
        let cases = [
            (
                Shape::implementation(Mode::Sync, Output::Action, Context::Stateless),
                "Action<T3>",
            ),
            (
                Shape::implementation(Mode::Sync, Output::Func, Context::Stateless),
                "Func<T3, TResult>",
            ),
            (
                Shape::implementation(Mode::Sync, Output::Action, Context::Stateful),
                "Action<T3, TState>",
            ),
            (
                Shape::implementation(Mode::Sync, Output::Func, Context::Stateful),
                "Func<T3, TState, TResult>",
            ),
            (
                Shape::implementation(Mode::Async, Output::Action, Context::Stateless),
                "Func<T3, CancellationToken, Task>",
            ),
            (
                Shape::implementation(Mode::Async, Output::Func, Context::Stateless),
                "Func<T3, CancellationToken, Task<TResult>>",
            ),
            (
                Shape::implementation(Mode::Async, Output::Action, Context::Stateful),
                "Func<T3, TState, CancellationToken, Task>",
            ),
            (
                Shape::implementation(Mode::Async, Output::Func, Context::Stateful),
                "Func<T3, TState, CancellationToken, Task<TResult>>",
            ),
        ];

        for (shape, expected) in cases {
            assert_eq!(DelegateSlot::new(&shape, 3).delegate_type, expected);
        }
    }

    #[test]
    fn test_null_guard_line() {
        assert_eq!(
            null_guard(2),
            "this.t2 = t2 ?? throw new ArgumentNullException(nameof(t2));"
        );
    }

    #[test]
    fn test_header_and_namespace() {
        let text = build(
            Shape::contract(Mode::Sync, Output::Action, Context::Stateless),
            1,
        );
        assert!(text.starts_with("// Auto-generated code\nnamespace Operations\n{\n"));
        assert!(text.ends_with("    }\n}"));
    }

    #[test]
    fn test_async_artifacts_import_threading() {
        let text = build(
            Shape::contract(Mode::Async, Output::Action, Context::Stateless),
            1,
        );
        assert!(text.starts_with(
            "// Auto-generated code\n\
             using System.Threading;\n\
             using System.Threading.Tasks;\n\
             \n\
             namespace Operations\n"
        ));
    }

    #[test]
    fn test_contract_member_signatures() {
        let cases = [
            (
                Shape::contract(Mode::Sync, Output::Action, Context::Stateless),
                "        void InvokeT2(T2 input);",
            ),
            (
                Shape::contract(Mode::Sync, Output::Func, Context::Stateful),
                "        TResult InvokeT2(T2 input, TState state);",
            ),
            (
                Shape::contract(Mode::Async, Output::Action, Context::Stateless),
                "        Task InvokeT2Async(T2 input, CancellationToken cancellationToken);",
            ),
            (
                Shape::contract(Mode::Async, Output::Func, Context::Stateful),
                "        Task<TResult> InvokeT2Async(T2 input, TState state, CancellationToken cancellationToken);",
            ),
        ];

        for (shape, expected) in cases {
            let text = build(shape, 2);
            assert!(text.contains(expected), "missing `{}` in:\n{}", expected, text);
        }
    }

    #[test]
    fn test_member_count_matches_order() {
        let text = build(
            Shape::contract(Mode::Sync, Output::Action, Context::Stateless),
            5,
        );
        for position in 1..=5 {
            assert!(text.contains(&format!("void InvokeT{}(T{} input);", position, position)));
        }
        assert!(!text.contains("InvokeT6"));
    }

    #[test]
    fn test_implementation_constructor_layout() {
        let text = build(
            Shape::implementation(Mode::Sync, Output::Action, Context::Stateless),
            2,
        );
        assert!(text.contains(
            "        public OperationAction(\n\
             \x20           Action<T1> t1,\n\
             \x20           Action<T2> t2)\n\
             \x20       {\n\
             \x20           this.t1 = t1 ?? throw new ArgumentNullException(nameof(t1));\n\
             \x20           this.t2 = t2 ?? throw new ArgumentNullException(nameof(t2));\n\
             \x20       }"
        ));
    }

    #[test]
    fn test_sync_implementation_member_is_single_line() {
        let text = build(
            Shape::implementation(Mode::Sync, Output::Func, Context::Stateless),
            2,
        );
        assert!(text.contains(
            "        /// <inheritdoc/>\n\
             \x20       public TResult InvokeT1(T1 input) => this.t1.Invoke(input);"
        ));
    }

    #[test]
    fn test_async_implementation_member_wraps_dispatch() {
        let text = build(
            Shape::implementation(Mode::Async, Output::Func, Context::Stateful),
            2,
        );
        assert!(text.contains(
            "        /// <inheritdoc/>\n\
             \x20       public Task<TResult> InvokeT2Async(T2 input, TState state, CancellationToken cancellationToken) =>\n\
             \x20           this.t2.Invoke(input, state, cancellationToken);"
        ));
    }

    #[test]
    fn test_implementation_declares_its_contract() {
        let text = build(
            Shape::implementation(Mode::Async, Output::Action, Context::Stateful),
            2,
        );
        assert!(text.contains(
            "    public sealed class OperationStatefulAsyncAction<T1, T2, TState> \
             : IOperationStatefulAsyncAction<T1, T2, TState>"
        ));
    }

    #[test]
    fn test_build_is_deterministic() {
        let orders = OrderIterator::new(3).unwrap();
        let builder = ArtifactBuilder::new(
            Shape::implementation(Mode::Async, Output::Func, Context::Stateful),
            orders,
        )
        .unwrap();
        assert_eq!(builder.build(), builder.build());
    }
}
