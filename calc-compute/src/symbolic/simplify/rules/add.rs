//! Simplification rules for expressions involving addition, including combining like terms.

use crate::primitive::int;
use crate::symbolic::{expr::{Expr, Primary}, simplify::rules::do_add};
use rug::Integer;

/// `2+3+x = 5+x`
///
/// All integer literal terms are added together. The sum takes the place of the first integer
/// term; the other integer terms are removed.
pub fn fold_integers(expr: &Expr) -> Option<Expr> {
    do_add(expr, |terms| {
        if terms.iter().filter(|term| term.is_integer()).count() < 2 {
            return None;
        }

        let sum = terms.iter()
            .filter_map(Expr::as_integer)
            .fold(int(0), |sum, n| sum + n);
        let mut sum = Some(sum);
        let new_terms = terms.iter()
            .filter_map(|term| {
                if term.is_integer() {
                    // only the first integer term receives the sum
                    sum.take().map(|sum| Expr::Primary(Primary::Integer(sum)))
                } else {
                    Some(term.clone())
                }
            })
            .collect::<Vec<_>>();

        Some(Expr::Add(new_terms).downgrade())
    })
}

/// Utility function to extract the integer coefficient and the symbolic part of a term.
///
/// - `3*a` -> `(3, a)`
/// - `4*a*b` -> `(4, a*b)`
/// - `-a` -> `(-1, a)`
/// - `a` -> `(1, a)`
fn split_coefficient(term: &Expr) -> (Integer, Expr) {
    match term {
        Expr::Mul(factors) if factors.len() >= 2 => match factors[0].as_integer() {
            Some(coeff) => (coeff.clone(), Expr::Mul(factors[1..].to_vec()).downgrade()),
            None => (int(1), term.clone()),
        },
        Expr::Neg(operand) => {
            let (coeff, part) = split_coefficient(operand);
            (-coeff, part)
        },
        _ => (int(1), term.clone()),
    }
}

/// Builds the term `coeff * part`.
fn with_coefficient(coeff: Integer, part: Expr) -> Expr {
    if coeff == 0 {
        Expr::integer(0)
    } else if coeff == 1 {
        part
    } else {
        let coeff = Expr::Primary(Primary::Integer(coeff));
        match part {
            Expr::Mul(mut factors) => {
                factors.insert(0, coeff);
                Expr::Mul(factors)
            },
            part => Expr::Mul(vec![coeff, part]),
        }
    }
}

/// Combines like terms.
///
/// `a+a = 2a`
/// `2a+3a = 5a`
/// `ab+4ab = 5ab`
/// `a-a = 0`
/// etc.
///
/// Numeric literal terms are left alone. The combined term takes the place of the first term of
/// its group, and the relative order of every other term is kept.
pub fn combine_like_terms(expr: &Expr) -> Option<Expr> {
    /// A like-terms group: the shared symbolic part, the summed coefficient, the index of the
    /// first term in the group, and the number of terms in the group.
    struct Group {
        part: Expr,
        coeff: Integer,
        first: usize,
        len: usize,
    }

    do_add(expr, |terms| {
        let mut groups: Vec<Group> = Vec::new();
        let mut group_of = vec![None; terms.len()];

        // this is O(n^2) worst case, due to scanning the groups for each term
        for (idx, term) in terms.iter().enumerate() {
            if matches!(term, Expr::Primary(Primary::Integer(_) | Primary::Float(_))) {
                continue;
            }

            let (coeff, part) = split_coefficient(term);

            // parts must be structurally identical
            match groups.iter_mut().position(|group| group.part == part) {
                Some(group_idx) => {
                    let group = &mut groups[group_idx];
                    group.coeff += coeff;
                    group.len += 1;
                    group_of[idx] = Some(group_idx);
                },
                None => {
                    group_of[idx] = Some(groups.len());
                    groups.push(Group { part, coeff, first: idx, len: 1 });
                },
            }
        }

        if groups.iter().all(|group| group.len == 1) {
            return None;
        }

        let mut parts = groups.into_iter().map(Some).collect::<Vec<_>>();
        let new_terms = terms.iter()
            .zip(group_of)
            .enumerate()
            .filter_map(|(idx, (term, group_idx))| {
                let Some(group_idx) = group_idx else {
                    return Some(term.clone());
                };

                let (len, first) = parts[group_idx].as_ref().map(|group| (group.len, group.first))?;
                if len == 1 {
                    Some(term.clone())
                } else if first == idx {
                    parts[group_idx]
                        .take()
                        .map(|group| with_coefficient(group.coeff, group.part))
                } else {
                    // merged into the first term of the group
                    None
                }
            })
            .collect::<Vec<_>>();

        Some(Expr::Add(new_terms).downgrade())
    })
}

/// `(a+b)+c = a+b+c`
pub fn flatten_add(expr: &Expr) -> Option<Expr> {
    do_add(expr, |terms| {
        if !terms.iter().any(|term| matches!(term, Expr::Add(_))) {
            return None;
        }

        let mut new_terms = Vec::new();
        for term in terms {
            match term {
                Expr::Add(inner) => new_terms.extend(inner.iter().cloned()),
                term => new_terms.push(term.clone()),
            }
        }

        Some(Expr::Add(new_terms).downgrade())
    })
}

/// `0+a = a`
/// `a+0 = a`
pub fn add_zero(expr: &Expr) -> Option<Expr> {
    do_add(expr, |terms| {
        let new_terms = terms.iter()
            // keep all non-zero terms
            .filter(|term| !term.is_integer_value(0))
            .cloned()
            .collect::<Vec<_>>();

        if new_terms.len() == terms.len() {
            None
        } else {
            Some(Expr::Add(new_terms).downgrade())
        }
    })
}
