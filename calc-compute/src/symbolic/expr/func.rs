//! The closed set of builtin functions that can appear in an expression.

use std::{fmt, str::FromStr};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Generates the [`Func`] enum, along with its name table.
macro_rules! funcs {
    ($($variant:ident => $name:literal: $doc:literal),* $(,)?) => {
        /// A builtin function that takes a single argument.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        pub enum Func {
            $(
                #[doc = $doc]
                $variant,
            )*
        }

        impl Func {
            /// Every builtin function, in declaration order.
            pub const ALL: &'static [Func] = &[$(Func::$variant),*];

            /// Returns the name of the function, as it is written in an expression.
            pub fn name(self) -> &'static str {
                match self {
                    $(Func::$variant => $name,)*
                }
            }
        }
    };
}

funcs! {
    Sin => "sin": "Sine.",
    Cos => "cos": "Cosine.",
    Tan => "tan": "Tangent.",
    Asin => "asin": "Inverse sine.",
    Acos => "acos": "Inverse cosine.",
    Atan => "atan": "Inverse tangent.",
    Sinh => "sinh": "Hyperbolic sine.",
    Cosh => "cosh": "Hyperbolic cosine.",
    Tanh => "tanh": "Hyperbolic tangent.",
    Sqrt => "sqrt": "Square root.",
    Cbrt => "cbrt": "Cube root.",
    Ln => "ln": "Natural logarithm.",
    Log => "log": "Base 10 logarithm.",
    Exp => "exp": "Natural exponential, `e^x`.",
    Abs => "abs": "Absolute value.",
    Floor => "floor": "Largest integer less than or equal to the argument.",
    Ceil => "ceil": "Smallest integer greater than or equal to the argument.",
}

impl Func {
    /// Returns the number of arguments the function takes.
    pub fn arity(self) -> usize {
        1
    }

    /// Returns true if the function takes an angle as its argument.
    pub fn takes_angle(self) -> bool {
        matches!(self, Func::Sin | Func::Cos | Func::Tan)
    }

    /// Returns true if the function returns an angle.
    pub fn returns_angle(self) -> bool {
        matches!(self, Func::Asin | Func::Acos | Func::Atan)
    }

    /// Returns the names of all builtin functions that are spelled similarly to the given name.
    pub fn similar_to(name: &str) -> Vec<&'static str> {
        Func::ALL
            .iter()
            .map(|func| func.name())
            .filter(|candidate| levenshtein::levenshtein(candidate, name) < 2)
            .collect()
    }

    /// Applies the function to a value, without any angle conversion.
    pub fn apply(self, n: f64) -> f64 {
        match self {
            Func::Sin => n.sin(),
            Func::Cos => n.cos(),
            Func::Tan => n.tan(),
            Func::Asin => n.asin(),
            Func::Acos => n.acos(),
            Func::Atan => n.atan(),
            Func::Sinh => n.sinh(),
            Func::Cosh => n.cosh(),
            Func::Tanh => n.tanh(),
            Func::Sqrt => n.sqrt(),
            Func::Cbrt => n.cbrt(),
            Func::Ln => n.ln(),
            Func::Log => n.log10(),
            Func::Exp => n.exp(),
            Func::Abs => n.abs(),
            Func::Floor => n.floor(),
            Func::Ceil => n.ceil(),
        }
    }
}

impl FromStr for Func {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Func::ALL
            .iter()
            .copied()
            .find(|func| func.name() == s)
            .ok_or(())
    }
}

impl fmt::Display for Func {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
