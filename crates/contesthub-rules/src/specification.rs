//! Core Rule trait and combinators.

use std::marker::PhantomData;
use std::sync::Arc;

/// Core rule trait for composable permission predicates.
///
/// The Specification Pattern allows complex gating decisions to be composed
/// from simple, reusable predicates. Evaluation is synchronous: every rule
/// reads a snapshot the caller resolved beforehand.
pub trait Rule<Ctx>: Send + Sync {
    /// Check if the rule is satisfied by the given context.
    fn is_satisfied_by(&self, ctx: &Ctx) -> bool;

    /// Combine this rule with another using AND logic.
    fn and<R: Rule<Ctx>>(self, other: R) -> And<Self, R>
    where
        Self: Sized,
    {
        And(self, other)
    }

    /// Combine this rule with another using OR logic.
    fn or<R: Rule<Ctx>>(self, other: R) -> Or<Self, R>
    where
        Self: Sized,
    {
        Or(self, other)
    }

    /// Negate this rule.
    fn not(self) -> Not<Self>
    where
        Self: Sized,
    {
        Not(self)
    }
}

/// AND combinator for rules.
#[derive(Clone)]
pub struct And<A, B>(pub A, pub B);

impl<Ctx, A, B> Rule<Ctx> for And<A, B>
where
    A: Rule<Ctx>,
    B: Rule<Ctx>,
{
    fn is_satisfied_by(&self, ctx: &Ctx) -> bool {
        self.0.is_satisfied_by(ctx) && self.1.is_satisfied_by(ctx)
    }
}

/// OR combinator for rules.
#[derive(Clone)]
pub struct Or<A, B>(pub A, pub B);

impl<Ctx, A, B> Rule<Ctx> for Or<A, B>
where
    A: Rule<Ctx>,
    B: Rule<Ctx>,
{
    fn is_satisfied_by(&self, ctx: &Ctx) -> bool {
        self.0.is_satisfied_by(ctx) || self.1.is_satisfied_by(ctx)
    }
}

/// NOT combinator for rules.
#[derive(Clone)]
pub struct Not<A>(pub A);

impl<Ctx, A> Rule<Ctx> for Not<A>
where
    A: Rule<Ctx>,
{
    fn is_satisfied_by(&self, ctx: &Ctx) -> bool {
        !self.0.is_satisfied_by(ctx)
    }
}

/// A rule that always returns true.
#[derive(Clone, Copy)]
pub struct AlwaysTrue;

impl<Ctx> Rule<Ctx> for AlwaysTrue {
    fn is_satisfied_by(&self, _ctx: &Ctx) -> bool {
        true
    }
}

/// A rule that always returns false.
#[derive(Clone, Copy)]
pub struct AlwaysFalse;

impl<Ctx> Rule<Ctx> for AlwaysFalse {
    fn is_satisfied_by(&self, _ctx: &Ctx) -> bool {
        false
    }
}

/// A boxed rule for dynamic dispatch.
pub type BoxedRule<Ctx> = Arc<dyn Rule<Ctx>>;

impl<Ctx> Rule<Ctx> for BoxedRule<Ctx> {
    fn is_satisfied_by(&self, ctx: &Ctx) -> bool {
        self.as_ref().is_satisfied_by(ctx)
    }
}

/// All rules in the collection must be satisfied.
pub struct AllOf<Ctx> {
    rules: Vec<BoxedRule<Ctx>>,
    _phantom: PhantomData<Ctx>,
}

impl<Ctx> AllOf<Ctx> {
    pub fn new(rules: Vec<BoxedRule<Ctx>>) -> Self {
        AllOf {
            rules,
            _phantom: PhantomData,
        }
    }
}

impl<Ctx: Send + Sync> Rule<Ctx> for AllOf<Ctx> {
    fn is_satisfied_by(&self, ctx: &Ctx) -> bool {
        self.rules.iter().all(|rule| rule.is_satisfied_by(ctx))
    }
}

/// Any rule in the collection must be satisfied.
pub struct AnyOf<Ctx> {
    rules: Vec<BoxedRule<Ctx>>,
    _phantom: PhantomData<Ctx>,
}

impl<Ctx> AnyOf<Ctx> {
    pub fn new(rules: Vec<BoxedRule<Ctx>>) -> Self {
        AnyOf {
            rules,
            _phantom: PhantomData,
        }
    }
}

impl<Ctx: Send + Sync> Rule<Ctx> for AnyOf<Ctx> {
    fn is_satisfied_by(&self, ctx: &Ctx) -> bool {
        self.rules.iter().any(|rule| rule.is_satisfied_by(ctx))
    }
}
