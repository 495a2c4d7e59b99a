use std::fmt;

/// Possible simplification steps. Each [`Rule`](super::Rule) is tagged with the step it performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    /// `0*a = 0`
    /// `a*0 = 0`
    MultiplyZero,

    /// `2+3+x = 5+x`
    FoldIntegers,

    /// `a+a = 2a`
    /// `2a+3a = 5a`
    /// `ab+4ab = 5ab`
    /// etc.
    CombineLikeTerms,

    /// `(a+b)+c = a+b+c`
    FlattenAdd,

    /// `(ab)c = abc`
    FlattenMul,

    /// `0+a = a`
    /// `a+0 = a`
    AddZero,

    /// `1*a = a`
    /// `a*1 = a`
    MultiplyOne,

    /// `2*3*x = 6x`
    FoldIntegerFactors,

    /// `-(2) = -2`
    FoldNegation,
}

impl Step {
    /// Returns a short description of the rewrite, in the form of an example.
    pub fn description(self) -> &'static str {
        match self {
            Step::MultiplyZero => "0 * a = 0",
            Step::FoldIntegers => "2 + 3 + a = 5 + a",
            Step::CombineLikeTerms => "2a + 3a = 5a",
            Step::FlattenAdd => "(a + b) + c = a + b + c",
            Step::FlattenMul => "(a * b) * c = a * b * c",
            Step::AddZero => "a + 0 = a",
            Step::MultiplyOne => "a * 1 = a",
            Step::FoldIntegerFactors => "2 * 3 * a = 6a",
            Step::FoldNegation => "-(2) = -2",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {}", self, self.description())
    }
}
