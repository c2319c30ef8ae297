use crate::{
    ast::{Ast, Designator, Tag},
    interpreter::value::{array::SparseArray, core::Value},
    util::num::index_to_u64,
};

/// Raised by a builder that refuses to grow its output any further.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LimitExceeded {
    /// The limit that would have been crossed.
    pub limit: usize,
}

/// Receives the constructs recognized by the parser, in source order.
///
/// An aggregate is reported as `open`, then one `positional` or `designated`
/// call per initializer, then `close`. Nested aggregates are opened and
/// closed completely before the initializer that contains them is reported.
pub trait Builder {
    /// What a `val` turns into.
    type Output;
    /// In-progress state of a brace group.
    type Aggregate;

    /// A bare number.
    fn number(&mut self, value: u64) -> Self::Output;

    /// The opening `{` of an aggregate.
    fn open(&mut self) -> Self::Aggregate;

    /// An initializer without a designator.
    fn positional(&mut self,
                  aggregate: &mut Self::Aggregate,
                  value: Self::Output)
                  -> Result<(), LimitExceeded>;

    /// An initializer of the form `[..] = val`.
    fn designated(&mut self,
                  aggregate: &mut Self::Aggregate,
                  designator: Designator,
                  value: Self::Output)
                  -> Result<(), LimitExceeded>;

    /// The closing `}` of an aggregate.
    fn close(&mut self, aggregate: Self::Aggregate) -> Self::Output;
}

/// Records the parse as an [`Ast`].
#[derive(Debug, Default, Clone, Copy)]
pub struct AstBuilder;

impl Builder for AstBuilder {
    type Aggregate = Vec<Ast>;
    type Output = Ast;

    fn number(&mut self, value: u64) -> Ast {
        Ast::node(Tag::Val, vec![Ast::Leaf(value)])
    }

    fn open(&mut self) -> Vec<Ast> {
        Vec::new()
    }

    fn positional(&mut self, aggregate: &mut Vec<Ast>, value: Ast) -> Result<(), LimitExceeded> {
        aggregate.push(Ast::node(Tag::Initializer, vec![value]));
        Ok(())
    }

    fn designated(&mut self,
                  aggregate: &mut Vec<Ast>,
                  designator: Designator,
                  value: Ast)
                  -> Result<(), LimitExceeded> {
        let bounds = match designator {
            Designator::Index(i) => vec![Ast::Leaf(index_to_u64(i))],
            Designator::Range { start, stop } => {
                vec![Ast::Leaf(index_to_u64(start)), Ast::Leaf(index_to_u64(stop))]
            },
        };
        aggregate.push(Ast::node(Tag::Initializer,
                                 vec![Ast::node(Tag::Designator, bounds), value]));
        Ok(())
    }

    fn close(&mut self, aggregate: Vec<Ast>) -> Ast {
        Ast::node(Tag::Val, vec![Ast::node(Tag::Initializers, aggregate)])
    }
}

/// Materializes arrays while the initializers are being parsed.
///
/// Every value written into an array, including zero padding and each copy a
/// range fill makes, is charged against a budget shared by the whole parse.
/// Nested range fills multiply their cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArrayBuilder {
    written: usize,
    budget:  usize,
}

impl ArrayBuilder {
    /// Creates a builder that writes at most `budget` values.
    #[must_use]
    pub const fn new(budget: usize) -> Self {
        Self { written: 0, budget }
    }

    fn charge(&mut self, cost: usize) -> Result<(), LimitExceeded> {
        match self.written.checked_add(cost) {
            Some(written) if written <= self.budget => {
                self.written = written;
                Ok(())
            },
            _ => Err(LimitExceeded { limit: self.budget }),
        }
    }
}

impl Builder for ArrayBuilder {
    type Aggregate = SparseArray;
    type Output = Value;

    fn number(&mut self, value: u64) -> Value {
        Value::Integer(value)
    }

    fn open(&mut self) -> SparseArray {
        SparseArray::new()
    }

    fn positional(&mut self, aggregate: &mut SparseArray, value: Value) -> Result<(), LimitExceeded> {
        self.charge(1)?;
        aggregate.push(value);
        Ok(())
    }

    fn designated(&mut self,
                  aggregate: &mut SparseArray,
                  designator: Designator,
                  value: Value)
                  -> Result<(), LimitExceeded> {
        let indices = designator.indices();
        self.charge(aggregate.fill_cost(&indices, &value))?;
        aggregate.fill(indices, &value);
        Ok(())
    }

    fn close(&mut self, aggregate: SparseArray) -> Value {
        aggregate.into_value()
    }
}
