use crate::value::Value;
use serde::{Deserialize, Serialize};
use std::ops::{BitAnd, BitOr, Not};

///
/// Predicate AST
///
/// Pure, schema-agnostic representation of row predicates. This layer
/// contains no field resolution or evaluation semantics; interpretation
/// happens in `lower` (criteria to predicate) and `eval` (predicate
/// against a row).
///

///
/// CompareOp
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[repr(u8)]
pub enum CompareOp {
    Eq = 0x01,
    Ne = 0x02,
    Lt = 0x03,
    Lte = 0x04,
    Gt = 0x05,
    Gte = 0x06,
    In = 0x07,
    AnyIn = 0x08,
    ContainsCi = 0x09,
}

impl CompareOp {
    #[must_use]
    pub const fn tag(self) -> u8 {
        self as u8
    }
}

///
/// ComparePredicate
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ComparePredicate {
    pub field: String,
    pub op: CompareOp,
    pub value: Value,
}

impl ComparePredicate {
    fn new(field: impl Into<String>, op: CompareOp, value: Value) -> Self {
        Self {
            field: field.into(),
            op,
            value,
        }
    }

    #[must_use]
    pub fn eq(field: impl Into<String>, value: Value) -> Self {
        Self::new(field, CompareOp::Eq, value)
    }

    #[must_use]
    pub fn ne(field: impl Into<String>, value: Value) -> Self {
        Self::new(field, CompareOp::Ne, value)
    }

    #[must_use]
    pub fn lt(field: impl Into<String>, value: Value) -> Self {
        Self::new(field, CompareOp::Lt, value)
    }

    #[must_use]
    pub fn lte(field: impl Into<String>, value: Value) -> Self {
        Self::new(field, CompareOp::Lte, value)
    }

    #[must_use]
    pub fn gt(field: impl Into<String>, value: Value) -> Self {
        Self::new(field, CompareOp::Gt, value)
    }

    #[must_use]
    pub fn gte(field: impl Into<String>, value: Value) -> Self {
        Self::new(field, CompareOp::Gte, value)
    }

    #[must_use]
    pub fn in_(field: impl Into<String>, values: Vec<Value>) -> Self {
        Self::new(field, CompareOp::In, Value::List(values))
    }

    #[must_use]
    pub fn any_in(field: impl Into<String>, values: Vec<Value>) -> Self {
        Self::new(field, CompareOp::AnyIn, Value::List(values))
    }

    #[must_use]
    pub fn contains_ci(field: impl Into<String>, value: Value) -> Self {
        Self::new(field, CompareOp::ContainsCi, value)
    }
}

///
/// Predicate
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub enum Predicate {
    #[default]
    True,
    False,
    And(Vec<Self>),
    Or(Vec<Self>),
    Not(Box<Self>),
    Compare(ComparePredicate),

    /// Case-insensitive substring scan over the row's search fields.
    SearchAny { term: String },
}

impl Predicate {
    #[must_use]
    pub fn eq(field: impl Into<String>, value: Value) -> Self {
        Self::Compare(ComparePredicate::eq(field, value))
    }

    #[must_use]
    pub fn ne(field: impl Into<String>, value: Value) -> Self {
        Self::Compare(ComparePredicate::ne(field, value))
    }

    #[must_use]
    pub fn lt(field: impl Into<String>, value: Value) -> Self {
        Self::Compare(ComparePredicate::lt(field, value))
    }

    #[must_use]
    pub fn lte(field: impl Into<String>, value: Value) -> Self {
        Self::Compare(ComparePredicate::lte(field, value))
    }

    #[must_use]
    pub fn gt(field: impl Into<String>, value: Value) -> Self {
        Self::Compare(ComparePredicate::gt(field, value))
    }

    #[must_use]
    pub fn gte(field: impl Into<String>, value: Value) -> Self {
        Self::Compare(ComparePredicate::gte(field, value))
    }

    #[must_use]
    pub fn in_(field: impl Into<String>, values: Vec<Value>) -> Self {
        Self::Compare(ComparePredicate::in_(field, values))
    }

    #[must_use]
    pub fn any_in(field: impl Into<String>, values: Vec<Value>) -> Self {
        Self::Compare(ComparePredicate::any_in(field, values))
    }

    #[must_use]
    pub fn contains_ci(field: impl Into<String>, value: Value) -> Self {
        Self::Compare(ComparePredicate::contains_ci(field, value))
    }

    #[must_use]
    pub fn search(term: impl Into<String>) -> Self {
        Self::SearchAny { term: term.into() }
    }

    /// Combine two predicates into an `And`, flattening nested `And`s
    /// (e.g. `(a AND b) AND c` becomes `AND[a, b, c]`).
    #[must_use]
    pub fn and(self, other: Self) -> Self {
        match (self, other) {
            (Self::And(mut a), Self::And(mut b)) => {
                a.append(&mut b);
                Self::And(a)
            }
            (Self::And(mut a), b) => {
                a.push(b);
                Self::And(a)
            }
            (a, Self::And(mut b)) => {
                let mut list = vec![a];
                list.append(&mut b);
                Self::And(list)
            }
            (a, b) => Self::And(vec![a, b]),
        }
    }

    /// Combine two predicates into an `Or`, flattening nested `Or`s.
    #[must_use]
    pub fn or(self, other: Self) -> Self {
        match (self, other) {
            (Self::Or(mut a), Self::Or(mut b)) => {
                a.append(&mut b);
                Self::Or(a)
            }
            (Self::Or(mut a), b) => {
                a.push(b);
                Self::Or(a)
            }
            (a, Self::Or(mut b)) => {
                let mut list = vec![a];
                list.append(&mut b);
                Self::Or(list)
            }
            (a, b) => Self::Or(vec![a, b]),
        }
    }

    #[must_use]
    pub fn and_option(self, other: Option<Self>) -> Self {
        match other {
            Some(p) => self.and(p),
            None => self,
        }
    }

    /// Simplify the predicate recursively, applying:
    /// - double negation elimination (`NOT NOT x` -> `x`)
    /// - De Morgan's laws over `Not(And)` / `Not(Or)`
    /// - flattening of nested `And` / `Or`
    /// - neutral element removal (`AND[True, x]` -> `x`, `OR[False, x]` -> `x`)
    /// - constant short circuit (`AND` with `False` -> `False`, `OR` with
    ///   `True` -> `True`)
    #[must_use]
    pub fn simplify(self) -> Self {
        match self {
            Self::Not(inner) => match *inner {
                Self::True => Self::False,
                Self::False => Self::True,
                Self::Not(inner2) => (*inner2).simplify(),
                Self::And(children) => {
                    // De Morgan's: NOT(AND(...)) == OR(NOT(...))
                    Self::Or(children.into_iter().map(|c| (!c).simplify()).collect())
                }
                Self::Or(children) => {
                    // De Morgan's: NOT(OR(...)) == AND(NOT(...))
                    Self::And(children.into_iter().map(|c| (!c).simplify()).collect())
                }
                leaf @ (Self::Compare(_) | Self::SearchAny { .. }) => Self::Not(Box::new(leaf)),
            },

            Self::And(children) => {
                let flat = Self::simplify_children(children, |p| matches!(p, Self::And(_)));

                if flat.iter().any(|p| matches!(p, Self::False)) {
                    Self::False
                } else {
                    let mut filtered: Vec<_> = flat
                        .into_iter()
                        .filter(|p| !matches!(p, Self::True))
                        .collect();

                    match filtered.len() {
                        0 => Self::True,
                        1 => filtered.remove(0),
                        _ => Self::And(filtered),
                    }
                }
            }

            Self::Or(children) => {
                let flat = Self::simplify_children(children, |p| matches!(p, Self::Or(_)));

                if flat.iter().any(|p| matches!(p, Self::True)) {
                    Self::True
                } else {
                    let mut filtered: Vec<_> = flat
                        .into_iter()
                        .filter(|p| !matches!(p, Self::False))
                        .collect();

                    match filtered.len() {
                        0 => Self::False,
                        1 => filtered.remove(0),
                        _ => Self::Or(filtered),
                    }
                }
            }

            // Leaves and constants are already simplest forms.
            leaf => leaf,
        }
    }

    /// Simplify and flatten nested `And` or `Or` children.
    fn simplify_children(children: Vec<Self>, flatten_if: fn(&Self) -> bool) -> Vec<Self> {
        let mut flat = Vec::with_capacity(children.len());

        for child in children {
            let simplified = child.simplify();
            if flatten_if(&simplified) {
                if let Self::And(nested) | Self::Or(nested) = simplified {
                    flat.extend(nested);
                }
            } else {
                flat.push(simplified);
            }
        }

        flat
    }
}

///
/// Bit Operations
/// allow `&`, `|` and `!` on predicates
///

impl BitAnd for Predicate {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.and(rhs)
    }
}

impl BitOr for Predicate {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.or(rhs)
    }
}

impl Not for Predicate {
    type Output = Self;

    fn not(self) -> Self::Output {
        Self::Not(Box::new(self))
    }
}

///
/// TESTS
///
