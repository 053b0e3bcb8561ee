//! Generic Parameter Lists
//!
//! Builds the ordered type parameter list of a construct in its two
//! textual forms: declaration syntax and documentation (`cref`) syntax.

use crate::order::OrderIterator;
use crate::shape::{ArtifactKind, Context, Mode, Output, Shape};

/// Variance of a type parameter in declaration position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Variance {
    /// Declared as `in T`.
    Contravariant,
    /// Declared as `out T`.
    Covariant,
    /// No marker.
    Invariant,
}

/// One type parameter with its declaration variance.
#[derive(Debug, Clone)]
struct TypeParameter {
    name: String,
    variance: Variance,
}

/// The ordered type parameter list of one construct.
///
/// The order is fixed: `T1` through `TN`, then `TState` for stateful
/// shapes, then `TResult` for func shapes. Both textual forms render the
/// same parameters in the same order; variance markers appear only in the
/// declaration form, and only for contracts.
#[derive(Debug, Clone)]
pub struct ParameterList {
    params: Vec<TypeParameter>,
}

impl ParameterList {
    /// Builds the parameter list for `shape` at the injected order.
    pub fn new(shape: &Shape, orders: &OrderIterator) -> Self {
        let contract = shape.kind == ArtifactKind::Contract;
        let input_variance = if contract {
            Variance::Contravariant
        } else {
            Variance::Invariant
        };

        let mut params: Vec<TypeParameter> = orders
            .positions()
            .map(|position| TypeParameter {
                name: format!("T{}", position),
                variance: input_variance,
            })
            .collect();

        if shape.context == Context::Stateful {
            params.push(TypeParameter {
                name: "TState".to_string(),
                variance: input_variance,
            });
        }

        if shape.output == Output::Func {
            // An async result is produced through Task<TResult>, which the
            // target language cannot mark covariant.
            let variance = if contract && shape.mode == Mode::Sync {
                Variance::Covariant
            } else {
                Variance::Invariant
            };
            params.push(TypeParameter {
                name: "TResult".to_string(),
                variance,
            });
        }

        Self { params }
    }

    /// Declaration syntax: `<in T1, in T2, out TResult>`.
    pub fn declaration(&self) -> String {
        let inner = self
            .params
            .iter()
            .map(|param| match param.variance {
                Variance::Contravariant => format!("in {}", param.name),
                Variance::Covariant => format!("out {}", param.name),
                Variance::Invariant => param.name.clone(),
            })
            .collect::<Vec<_>>()
            .join(", ");
        format!("<{}>", inner)
    }

    /// Documentation syntax: `{T1, T2, TResult}`, as used in `cref`
    /// attribute values. Never carries variance markers.
    pub fn documentation(&self) -> String {
        let inner = self
            .params
            .iter()
            .map(|param| param.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        format!("{{{}}}", inner)
    }
}
