//! Boolean condition algebra over elements.
//!
//! A [`Condition`] is an immutable predicate tree. Leaves wrap a pure function
//! of an element; `And`, `Or` and `Not` combine existing conditions by sharing
//! them (`Arc` clone), never by copying. One recursive evaluator walks the
//! tree.
//!
//! ## Evaluation order
//!
//! `And` and `Or` evaluate strictly left to right and short-circuit. Rule
//! authors place cheap or guarding conditions first so that later conditions
//! only see elements that satisfy their preconditions.
//!
//! ## Descriptions
//!
//! Every node renders a human-readable description. Combinators interpolate
//! their children, so `Button & !Name.null()` renders as
//! `(control type is Button) and (not (Name is null))`.

use std::fmt;
use std::ops::{BitAnd, BitOr, Not};
use std::sync::{Arc, LazyLock};

use crate::model::Element;

type Predicate = Box<dyn Fn(&Element) -> bool + Send + Sync>;

/// Always matches
pub static TRUE: LazyLock<Condition> = LazyLock::new(|| Condition::from_node(Node::True));

/// Never matches
pub static FALSE: LazyLock<Condition> = LazyLock::new(|| Condition::from_node(Node::False));

/// Shape of a condition node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConditionKind {
    True,
    False,
    Leaf,
    And,
    Or,
    Not,
}

enum Node {
    True,
    False,
    Leaf {
        predicate: Predicate,
        description: String,
    },
    And(Condition, Condition),
    Or(Condition, Condition),
    Not(Condition),
}

/// Immutable, shareable predicate over an [`Element`]
#[derive(Clone)]
pub struct Condition(Arc<Node>);

impl Condition {
    fn from_node(node: Node) -> Self {
        Self(Arc::new(node))
    }

    /// Wrap a pure predicate as a leaf condition
    ///
    /// The predicate must not have side effects observable by other
    /// conditions; evaluating the same element twice must give the same
    /// answer.
    pub fn create<F>(predicate: F, description: impl Into<String>) -> Self
    where
        F: Fn(&Element) -> bool + Send + Sync + 'static,
    {
        Self::from_node(Node::Leaf {
            predicate: Box::new(predicate),
            description: description.into(),
        })
    }

    /// Matches iff `self` and then `other` match
    pub fn and(&self, other: &Condition) -> Condition {
        Self::from_node(Node::And(self.clone(), other.clone()))
    }

    /// Matches iff `self` or else `other` matches
    pub fn or(&self, other: &Condition) -> Condition {
        Self::from_node(Node::Or(self.clone(), other.clone()))
    }

    /// Matches iff `self` does not
    pub fn negate(&self) -> Condition {
        Self::from_node(Node::Not(self.clone()))
    }

    /// Evaluate against one element
    pub fn matches(&self, element: &Element) -> bool {
        match &*self.0 {
            Node::True => true,
            Node::False => false,
            Node::Leaf { predicate, .. } => predicate(element),
            Node::And(a, b) => a.matches(element) && b.matches(element),
            Node::Or(a, b) => a.matches(element) || b.matches(element),
            Node::Not(a) => !a.matches(element),
        }
    }

    pub fn kind(&self) -> ConditionKind {
        match &*self.0 {
            Node::True => ConditionKind::True,
            Node::False => ConditionKind::False,
            Node::Leaf { .. } => ConditionKind::Leaf,
            Node::And(..) => ConditionKind::And,
            Node::Or(..) => ConditionKind::Or,
            Node::Not(_) => ConditionKind::Not,
        }
    }

    /// Direct children of a combinator node, left first
    pub fn operands(&self) -> Vec<&Condition> {
        match &*self.0 {
            Node::And(a, b) | Node::Or(a, b) => vec![a, b],
            Node::Not(a) => vec![a],
            _ => Vec::new(),
        }
    }

    /// Human-readable explanation of what this condition checks
    pub fn description(&self) -> String {
        self.to_string()
    }

    /// True when both handles point at the same node
    pub fn ptr_eq(a: &Condition, b: &Condition) -> bool {
        Arc::ptr_eq(&a.0, &b.0)
    }
}

/// `and(a, b)`: short-circuit conjunction
pub fn and(a: &Condition, b: &Condition) -> Condition {
    a.and(b)
}

/// `or(a, b)`: short-circuit disjunction
pub fn or(a: &Condition, b: &Condition) -> Condition {
    a.or(b)
}

/// `not(a)`: negation
pub fn not(a: &Condition) -> Condition {
    a.negate()
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &*self.0 {
            Node::True => f.write_str("True"),
            Node::False => f.write_str("False"),
            Node::Leaf { description, .. } => f.write_str(description),
            Node::And(a, b) => write!(f, "({a}) and ({b})"),
            Node::Or(a, b) => write!(f, "({a}) or ({b})"),
            Node::Not(a) => write!(f, "not ({a})"),
        }
    }
}

impl fmt::Debug for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Condition")
            .field(&self.kind())
            .field(&self.to_string())
            .finish()
    }
}

impl BitAnd for Condition {
    type Output = Condition;

    fn bitand(self, rhs: Condition) -> Condition {
        Condition::from_node(Node::And(self, rhs))
    }
}

impl BitAnd<&Condition> for &Condition {
    type Output = Condition;

    fn bitand(self, rhs: &Condition) -> Condition {
        self.and(rhs)
    }
}

impl BitAnd<&Condition> for Condition {
    type Output = Condition;

    fn bitand(self, rhs: &Condition) -> Condition {
        Condition::from_node(Node::And(self, rhs.clone()))
    }
}

impl BitAnd<Condition> for &Condition {
    type Output = Condition;

    fn bitand(self, rhs: Condition) -> Condition {
        Condition::from_node(Node::And(self.clone(), rhs))
    }
}

impl BitOr for Condition {
    type Output = Condition;

    fn bitor(self, rhs: Condition) -> Condition {
        Condition::from_node(Node::Or(self, rhs))
    }
}

impl BitOr<&Condition> for &Condition {
    type Output = Condition;

    fn bitor(self, rhs: &Condition) -> Condition {
        self.or(rhs)
    }
}

impl BitOr<&Condition> for Condition {
    type Output = Condition;

    fn bitor(self, rhs: &Condition) -> Condition {
        Condition::from_node(Node::Or(self, rhs.clone()))
    }
}

impl BitOr<Condition> for &Condition {
    type Output = Condition;

    fn bitor(self, rhs: Condition) -> Condition {
        Condition::from_node(Node::Or(self.clone(), rhs))
    }
}

impl Not for Condition {
    type Output = Condition;

    fn not(self) -> Condition {
        Condition::from_node(Node::Not(self))
    }
}

impl Not for &Condition {
    type Output = Condition;

    fn not(self) -> Condition {
        self.negate()
    }
}
