//! Text rendering of terms and polynomials, with powers written as
//! superscript digits: `3x²+2x-5`.

use std::fmt::{Display, Formatter, Write};

use super::{variable::Variable, Coefficient, Polynomial, Power, Term};

const SUPERSCRIPT_DIGITS: [char; 10] = ['⁰', '¹', '²', '³', '⁴', '⁵', '⁶', '⁷', '⁸', '⁹'];

/// Superscript version of an ASCII digit.
pub fn superscript(digit: char) -> Option<char> {
    digit
        .to_digit(10)
        .map(|d| SUPERSCRIPT_DIGITS[d as usize])
}

/// ASCII version of a superscript digit.
pub fn from_superscript(c: char) -> Option<char> {
    SUPERSCRIPT_DIGITS
        .iter()
        .position(|&s| s == c)
        .and_then(|d| char::from_digit(d as u32, 10))
}

/// Of the formatter options, only precision is honored, and it applies to the
/// coefficient.
impl<V, C, P> Display for Term<V, C, P>
where
    V: Variable,
    C: Coefficient,
    P: Power,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.is_constant() || !self.is_unit() {
            match f.precision() {
                Some(precision) => write!(f, "{:.*}", precision, self.coefficient)?,
                None => write!(f, "{}", self.coefficient)?,
            }
        }

        if !self.is_constant() {
            f.write_char(V::SYMBOL)?;
            if !self.power.is_one() {
                for digit in self.power.to_string().chars().filter_map(superscript) {
                    f.write_char(digit)?;
                }
            }
        }

        Ok(())
    }
}

/// The zero polynomial is written as the empty string. Precision goes to every
/// coefficient, other formatter options are ignored.
impl<V, C, P> Display for Polynomial<V, C, P>
where
    V: Variable,
    C: Coefficient,
    P: Power,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (idx, term) in self.terms().enumerate() {
            // Negative coefficients carry their own sign.
            if idx > 0 && term.coefficient > C::zero() {
                f.write_char('+')?;
            }
            Display::fmt(term, f)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use num_traits::Zero;

    use super::*;
    use crate::polynomial::variable::X;

    type SmallPoly = Polynomial<X, f64, u32>;

    fn t(coefficient: f64, power: u32) -> Term<X, f64, u32> {
        Term::new(coefficient, power)
    }

    #[derive(Debug)]
    struct Z;

    impl Variable for Z {
        const SYMBOL: char = 'z';
    }

    #[test]
    fn superscript_tables() {
        for d in '0'..='9' {
            let s = superscript(d).unwrap();
            assert_eq!(from_superscript(s), Some(d));
        }
        assert_eq!(superscript('a'), None);
        assert_eq!(from_superscript('2'), None);
    }

    #[test]
    fn term_rendering() {
        assert_eq!(t(3.0, 2).to_string(), "3x²");
        assert_eq!(t(1.0, 2).to_string(), "x²");
        assert_eq!(t(1.0, 1).to_string(), "x");
        assert_eq!(t(1.0, 0).to_string(), "1");
        assert_eq!(t(-1.0, 1).to_string(), "-1x");
        assert_eq!(t(2.5, 0).to_string(), "2.5");
        assert_eq!(t(-0.5, 10).to_string(), "-0.5x¹⁰");
        assert_eq!(t(7.0, 1234567890).to_string(), "7x¹²³⁴⁵⁶⁷⁸⁹⁰");
    }

    #[test]
    fn polynomial_rendering() {
        let p = SmallPoly::from_terms([t(2.0, 1), t(-5.0, 0), t(3.0, 2)]);
        assert_eq!(p.to_string(), "3x²+2x-5");

        let p = SmallPoly::from_terms([t(-1.0, 3), t(1.0, 0)]);
        assert_eq!(p.to_string(), "-1x³+1");

        assert_eq!(SmallPoly::zero().to_string(), "");
    }

    #[test]
    fn precision_reaches_coefficients() {
        let p = SmallPoly::from_terms([t(1.0 / 3.0, 1), t(2.0, 0)]);
        assert_eq!(format!("{:.2}", p), "0.33x+2.00");
        assert_eq!(format!("{:.1}", t(-2.0, 3)), "-2.0x³");
    }

    #[test]
    fn other_flags_are_ignored() {
        let p = SmallPoly::from_terms([t(3.0, 2), t(2.0, 1), t(-5.0, 0)]);
        assert_eq!(format!("{:>12}", p), "3x²+2x-5");
        assert_eq!(format!("{:+}", p), "3x²+2x-5");
        assert_eq!(format!("{:08.1}", p), "3.0x²+2.0x-5.0");
        assert_eq!(format!("{:<6}", t(7.0, 0)), "7");
    }

    #[test]
    fn other_variable() {
        let p = Polynomial::<Z, f64, u8>::from_terms([Term::new(1.0, 2), Term::new(4.0, 1)]);
        assert_eq!(p.to_string(), "z²+4z");
    }
}
