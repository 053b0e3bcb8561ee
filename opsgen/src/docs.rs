//! Documentation Synthesis
//!
//! Produces the XML documentation blocks of generated constructs. All
//! wording comes from a fixed template table keyed by shape axes, so
//! identical inputs always render identical text.

use crate::order::OrderIterator;
use crate::shape::{ArtifactKind, Context, Mode, Output, Shape};

/// The marker line placed above every implementation member.
pub const INHERIT_DOC: &str = "/// <inheritdoc/>";

/// The construct-level block: summary sentence plus one `<typeparam>` tag
/// per type parameter, in declaration order.
pub fn construct_doc(shape: &Shape, orders: &OrderIterator) -> String {
    let mut lines = vec![
        "/// <summary>".to_string(),
        format!("/// {}", construct_summary(shape)),
        "/// </summary>".to_string(),
    ];

    for position in orders.positions() {
        tag(
            &mut lines,
            &format!("typeparam name=\"T{}\"", position),
            &format!("Supported type {}.", position),
        );
    }
    if shape.context == Context::Stateful {
        tag(
            &mut lines,
            "typeparam name=\"TState\"",
            "The type of external state.",
        );
    }
    if shape.output == Output::Func {
        tag(
            &mut lines,
            "typeparam name=\"TResult\"",
            "The type of returned result.",
        );
    }

    lines.join("\n")
}

/// The block above the dispatch member at `position` of a contract.
pub fn member_doc(shape: &Shape, position: u32) -> String {
    let invokes = match shape.mode {
        Mode::Sync => "Synchronously",
        Mode::Async => "Asynchronously",
    };
    // Only the action summaries mention the state argument.
    let state_suffix = if shape.context == Context::Stateful && shape.output == Output::Action {
        " using the supplied <paramref name=\"state\"/>"
    } else {
        ""
    };

    let mut lines = vec![
        "/// <summary>".to_string(),
        format!(
            "/// {} invokes this operation on the supplied <paramref name=\"input\"/> as an instance of",
            invokes
        ),
        format!("/// <typeparamref name=\"T{}\"/>{}.", position, state_suffix),
        "/// </summary>".to_string(),
    ];

    tag(
        &mut lines,
        "param name=\"input\"",
        &format!(
            "The input as an instance of <typeparamref name=\"T{}\"/>.",
            position
        ),
    );
    if shape.context == Context::Stateful {
        let wording = match shape.mode {
            Mode::Sync => "The external state.",
            Mode::Async => "The state.",
        };
        tag(&mut lines, "param name=\"state\"", wording);
    }
    if shape.mode == Mode::Async {
        tag(
            &mut lines,
            "param name=\"cancellationToken\"",
            "Controls the lifetime of the invocation of this operation.",
        );
    }

    match (shape.mode, shape.output) {
        (Mode::Sync, Output::Action) => {}
        (Mode::Sync, Output::Func) => tag(
            &mut lines,
            "returns",
            "An instance of <typeparamref name=\"TResult\"/>.",
        ),
        (Mode::Async, Output::Action) => tag(
            &mut lines,
            "returns",
            "A <see cref=\"Task\"/> representing the invocation of this operation.",
        ),
        (Mode::Async, Output::Func) => tag(
            &mut lines,
            "returns",
            "A <see cref=\"Task{TResult}\"/> representing the invocation of this operation.",
        ),
    }

    lines.join("\n")
}

/// The constructor block of an implementation class. `class_ref` is the
/// documentation-form class reference, e.g. `OperationAction{T1, T2}`.
pub fn constructor_doc(class_ref: &str, orders: &OrderIterator) -> String {
    let mut lines = vec![
        "/// <summary>".to_string(),
        format!(
            "/// Initializes a new instance of the <see cref=\"{}\"/> class.",
            class_ref
        ),
        "/// </summary>".to_string(),
    ];

    for position in orders.positions() {
        tag(
            &mut lines,
            &format!("param name=\"t{}\"", position),
            &format!(
                "The delegate associated with <typeparamref name=\"T{}\"/>.",
                position
            ),
        );
    }
    tag(
        &mut lines,
        "exception cref=\"ArgumentNullException\"",
        "Thrown when any of the supplied delegates is <see langword=\"null\"/>.",
    );

    lines.join("\n")
}

/// Fixed summary sentence for a shape.
fn construct_summary(shape: &Shape) -> String {
    let lead = match (shape.kind, shape.mode) {
        (ArtifactKind::Contract, Mode::Sync) => "Represents a synchronous",
        (ArtifactKind::Contract, Mode::Async) => "Represents an asynchronous",
        (ArtifactKind::Implementation, Mode::Sync) => "A synchronous",
        (ArtifactKind::Implementation, Mode::Async) => "An asynchronous",
    };
    let state = match shape.context {
        Context::Stateless => "",
        Context::Stateful => "depends on external state and ",
    };
    let result = match shape.output {
        Output::Action => "does not return a result.",
        Output::Func => "returns a result.",
    };
    format!("{} operation that {}{}", lead, state, result)
}

/// Appends a three-line element: open tag, body sentence, close tag.
fn tag(lines: &mut Vec<String>, element: &str, body: &str) {
    let name = element.split(' ').next().unwrap_or(element);
    lines.push(format!("/// <{}>", element));
    lines.push(format!("/// {}", body));
    lines.push(format!("/// </{}>", name));
}
