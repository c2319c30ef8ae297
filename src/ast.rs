use std::ops::RangeInclusive;

use serde::Serialize;

/// The grammar production a [`Ast::Node`] was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tag {
    /// `val : NUMBER | '{' initializers '}'`
    Val,
    /// `initializers : initializer (',' initializer)* ','? | ε`
    Initializers,
    /// `initializer : designator '=' val | val`
    Initializer,
    /// The bracketed target of an indexed initializer: `[n]` or `[a...b]`.
    Designator,
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Val => "val",
            Self::Initializers => "initializers",
            Self::Initializer => "initializer",
            Self::Designator => "designator",
        };
        write!(f, "{name}")
    }
}

/// An abstract syntax tree node mirroring the initializer grammar.
///
/// The tree is not simplified: each rule invocation produces one node.
///
/// - `val` has a single kid, either a [`Ast::Leaf`] holding the number or an
///   `initializers` node.
/// - `initializers` has one `initializer` kid per initializer, in source
///   order, and no kids for `{}`.
/// - `initializer` has the kids `[val]` when positional and
///   `[designator, val]` when indexed.
/// - `designator` has the kids `[Leaf(n)]` for `[n]` and
///   `[Leaf(a), Leaf(b)]` for `[a...b]`, bounds as written.
///
/// Serialized with serde, a leaf is a bare number and a node is an object
/// with `tag` and `kids` fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Ast {
    /// A literal number.
    Leaf(u64),
    /// A grammar rule with its ordered children.
    Node {
        /// Which rule produced the node.
        tag:  Tag,
        /// Children in source order.
        kids: Vec<Self>,
    },
}

impl Ast {
    /// Builds an interior node.
    #[must_use]
    pub const fn node(tag: Tag, kids: Vec<Self>) -> Self {
        Self::Node { tag, kids }
    }

    /// Gets the tag of a node, or `None` for a leaf.
    /// ## Example
    /// ```
    /// use arrinit::ast::{Ast, Tag};
    ///
    /// let val = Ast::node(Tag::Val, vec![Ast::Leaf(3)]);
    ///
    /// assert_eq!(val.tag(), Some(Tag::Val));
    /// assert_eq!(val.kids()[0].tag(), None);
    /// ```
    #[must_use]
    pub const fn tag(&self) -> Option<Tag> {
        match self {
            Self::Leaf(_) => None,
            Self::Node { tag, .. } => Some(*tag),
        }
    }

    /// Gets the children of a node. Leaves have none.
    #[must_use]
    pub fn kids(&self) -> &[Self] {
        match self {
            Self::Leaf(_) => &[],
            Self::Node { kids, .. } => kids,
        }
    }
}

/// Renders the tree as an S-expression, e.g. `(val (initializers))`.
impl std::fmt::Display for Ast {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Leaf(n) => write!(f, "{n}"),
            Self::Node { tag, kids } => {
                write!(f, "({tag}")?;
                for kid in kids {
                    write!(f, " {kid}")?;
                }
                write!(f, ")")
            },
        }
    }
}

/// The target of an indexed initializer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Designator {
    /// `[n]`
    Index(usize),
    /// `[start...stop]`, bounds as written. They may be in either order.
    Range {
        /// The bound before `...`.
        start: usize,
        /// The bound after `...`.
        stop:  usize,
    },
}

impl Designator {
    /// The inclusive, ascending set of indices this designator targets.
    ///
    /// ## Example
    /// ```
    /// use arrinit::ast::Designator;
    ///
    /// assert_eq!(Designator::Index(4).indices(), 4..=4);
    /// assert_eq!(Designator::Range { start: 4, stop: 2 }.indices(), 2..=4);
    /// ```
    #[must_use]
    pub fn indices(&self) -> RangeInclusive<usize> {
        match *self {
            Self::Index(i) => i..=i,
            Self::Range { start, stop } => start.min(stop)..=start.max(stop),
        }
    }
}
