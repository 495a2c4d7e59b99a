//! Collection of the steps taken by the simplifier.

/// A type that records the [`Step`](super::simplify::Step)s applied while simplifying an
/// expression.
///
/// Implemented for:
///
/// - `()`, which discards every step, for callers that only want the result;
/// - `Vec<S>`, which records the steps in the order they were applied;
/// - `usize`, which only counts them.
pub trait StepCollector<S> {
    /// Records a step.
    fn push(&mut self, step: S);
}

impl<S> StepCollector<S> for () {
    #[inline]
    fn push(&mut self, _: S) {}
}

impl<S> StepCollector<S> for Vec<S> {
    #[inline]
    fn push(&mut self, step: S) {
        Vec::push(self, step);
    }
}

impl<S> StepCollector<S> for usize {
    #[inline]
    fn push(&mut self, _: S) {
        *self += 1;
    }
}

#[cfg(test)]
mod tests {
    use crate::{parse, symbolic::simplify::{Simplifier, Step}};
    use pretty_assertions::assert_eq;

    #[test]
    fn count_and_record_agree() {
        let simplifier = Simplifier::default();
        let expr = parse("(1 + 2) * (x + x) * 1").unwrap();

        let mut count = 0usize;
        let counted = simplifier.simplify_with(expr.clone(), &mut count);

        let mut steps: Vec<Step> = Vec::new();
        let recorded = simplifier.simplify_with(expr, &mut steps);

        assert_eq!(counted, recorded);
        assert_eq!(count, steps.len());
        assert_eq!(counted, parse("6x").unwrap());
        assert_eq!(steps, vec![
            Step::FoldIntegers,
            Step::CombineLikeTerms,
            Step::FlattenMul,
            Step::MultiplyOne,
            Step::FoldIntegerFactors,
        ]);
    }
}
