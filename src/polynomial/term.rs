use std::marker::PhantomData;

use super::{pow_by_squaring, variable::Variable, Coefficient, Polynomial, Power};
use crate::error::DomainError;

/// A single `coefficient * variable^power` monomial.
#[derive(Debug)]
pub struct Term<V, C, P> {
    pub(super) coefficient: C,
    pub(super) power: P,
    _variable: PhantomData<V>,
}

impl<V, C, P> Term<V, C, P>
where
    C: Coefficient,
    P: Power,
{
    pub fn new(coefficient: C, power: P) -> Self {
        Term {
            coefficient,
            power,
            _variable: PhantomData,
        }
    }

    pub fn new_constant(coefficient: C) -> Self {
        Self::new(coefficient, P::zero())
    }

    pub fn get_coefficient(&self) -> C {
        self.coefficient
    }

    pub fn get_power(&self) -> P {
        self.power
    }

    pub fn is_constant(&self) -> bool {
        self.power.is_zero()
    }

    pub(super) fn is_zero(&self) -> bool {
        self.coefficient.is_zero()
    }

    pub(super) fn is_unit(&self) -> bool {
        self.coefficient.is_one()
    }

    /// Sums two terms of the same power.
    pub fn checked_add(self, rhs: Self) -> Result<Self, DomainError<P>> {
        if self.power != rhs.power {
            return Err(DomainError::ExponentMismatch {
                lhs: self.power,
                rhs: rhs.power,
            });
        }

        Ok(Self::new(self.coefficient + rhs.coefficient, self.power))
    }

    /// Subtracts two terms of the same power.
    pub fn checked_sub(self, rhs: Self) -> Result<Self, DomainError<P>> {
        self.checked_add(-rhs)
    }

    /// Divides by another term, as long as the result is still a term with
    /// non-negative power.
    pub fn checked_div(self, rhs: Self) -> Result<Self, DomainError<P>> {
        if self.power < rhs.power {
            return Err(DomainError::DivisorPowerTooLarge {
                dividend: self.power,
                divisor: rhs.power,
            });
        }

        Ok(Self::new(
            self.coefficient / rhs.coefficient,
            self.power - rhs.power,
        ))
    }

    /// Multiplies two terms, failing if the summed power doesn't fit `P`.
    pub fn checked_mul(self, rhs: Self) -> Result<Self, DomainError<P>> {
        let power = self
            .power
            .checked_add(&rhs.power)
            .ok_or(DomainError::PowerOverflow {
                lhs: self.power,
                rhs: rhs.power,
            })?;

        Ok(Self::new(self.coefficient * rhs.coefficient, power))
    }

    /// Raises the term to `exp`, failing if the multiplied power doesn't fit
    /// `P`.
    pub fn checked_pow(self, exp: P) -> Result<Self, DomainError<P>> {
        let power = self
            .power
            .checked_mul(&exp)
            .ok_or(DomainError::PowerOverflow {
                lhs: self.power,
                rhs: exp,
            })?;

        Ok(Self::new(pow_by_squaring(self.coefficient, exp), power))
    }
}

// Hand written so that the variable marker needs none of these traits.
impl<V, C: Clone, P: Clone> Clone for Term<V, C, P> {
    fn clone(&self) -> Self {
        Self {
            coefficient: self.coefficient.clone(),
            power: self.power.clone(),
            _variable: PhantomData,
        }
    }
}

impl<V, C: Copy, P: Copy> Copy for Term<V, C, P> {}

impl<V, C, P> PartialEq for Term<V, C, P>
where
    C: PartialEq,
    P: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.coefficient == other.coefficient && self.power == other.power
    }
}

impl<V, C, P> std::ops::Neg for Term<V, C, P>
where
    C: Coefficient,
    P: Power,
{
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.coefficient, self.power)
    }
}

/// # Panics
///
/// If the summed power overflows `P`. See [`Term::checked_mul`].
impl<V, C, P> std::ops::Mul for Term<V, C, P>
where
    C: Coefficient,
    P: Power,
{
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        match self.checked_mul(rhs) {
            Ok(term) => term,
            Err(err) => panic!("term product: {}", err),
        }
    }
}

impl<V, C, P> std::ops::MulAssign for Term<V, C, P>
where
    C: Coefficient,
    P: Power,
{
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<V, C, P> std::ops::Mul<C> for Term<V, C, P>
where
    C: Coefficient,
    P: Power,
{
    type Output = Self;

    fn mul(self, rhs: C) -> Self {
        Self::new(self.coefficient * rhs, self.power)
    }
}

impl<V, C, P> std::ops::Div<C> for Term<V, C, P>
where
    C: Coefficient,
    P: Power,
{
    type Output = Self;

    fn div(self, rhs: C) -> Self {
        Self::new(self.coefficient / rhs, self.power)
    }
}

/// # Panics
///
/// If the multiplied power overflows `P`. See [`Term::checked_pow`].
impl<V, C, P> num_traits::Pow<P> for Term<V, C, P>
where
    C: Coefficient,
    P: Power,
{
    type Output = Self;

    fn pow(self, rhs: P) -> Self {
        match self.checked_pow(rhs) {
            Ok(term) => term,
            Err(err) => panic!("term power: {}", err),
        }
    }
}

macro_rules! scalar_times_term {
    ($($scalar:ty),*) => {$(
        impl<V, P: Power> std::ops::Mul<Term<V, $scalar, P>> for $scalar {
            type Output = Term<V, $scalar, P>;

            fn mul(self, rhs: Term<V, $scalar, P>) -> Self::Output {
                rhs * self
            }
        }
    )*};
}

scalar_times_term!(f32, f64);

// Terms of different powers don't combine into a term, but they always do
// into a polynomial.
impl<V, C, P> std::ops::Add for Term<V, C, P>
where
    V: Variable,
    C: Coefficient,
    P: Power,
{
    type Output = Polynomial<V, C, P>;

    fn add(self, rhs: Self) -> Polynomial<V, C, P> {
        Polynomial::from_terms([self, rhs])
    }
}

impl<V, C, P> std::ops::Sub for Term<V, C, P>
where
    V: Variable,
    C: Coefficient,
    P: Power,
{
    type Output = Polynomial<V, C, P>;

    fn sub(self, rhs: Self) -> Polynomial<V, C, P> {
        Polynomial::from_terms([self, -rhs])
    }
}

#[cfg(test)]
mod tests {
    use num_traits::Pow;

    use super::*;
    use crate::polynomial::variable::X;

    type SmallTerm = Term<X, f64, u32>;

    #[test]
    fn same_power_arithmetic() {
        let a = SmallTerm::new(3.0, 2);
        let b = SmallTerm::new(1.5, 2);

        assert_eq!(a.checked_add(b), Ok(SmallTerm::new(4.5, 2)));
        assert_eq!(a.checked_sub(b), Ok(SmallTerm::new(1.5, 2)));
        assert_eq!(-a, SmallTerm::new(-3.0, 2));
    }

    #[test]
    fn different_power_sum_is_a_domain_error() {
        let a = SmallTerm::new(3.0, 2);
        let b = SmallTerm::new(1.0, 1);

        assert_eq!(
            a.checked_add(b),
            Err(DomainError::ExponentMismatch { lhs: 2, rhs: 1 })
        );
        assert_eq!(
            b.checked_sub(a),
            Err(DomainError::ExponentMismatch { lhs: 1, rhs: 2 })
        );
    }

    #[test]
    fn multiplication_adds_powers() {
        let a = SmallTerm::new(3.0, 2);
        let b = SmallTerm::new(-2.0, 5);

        assert_eq!(a * b, SmallTerm::new(-6.0, 7));
        assert_eq!(a * 0.5, SmallTerm::new(1.5, 2));

        let mut c = a;
        c *= b;
        assert_eq!(c, SmallTerm::new(-6.0, 7));
    }

    #[test]
    fn division() {
        let a = SmallTerm::new(6.0, 5);
        let b = SmallTerm::new(2.0, 3);

        assert_eq!(a.checked_div(b), Ok(SmallTerm::new(3.0, 2)));
        assert_eq!(a.checked_div(a), Ok(SmallTerm::new(1.0, 0)));
        assert_eq!(
            b.checked_div(a),
            Err(DomainError::DivisorPowerTooLarge {
                dividend: 3,
                divisor: 5
            })
        );
        assert_eq!(a / 4.0, SmallTerm::new(1.5, 5));
    }

    #[test]
    fn scalar_on_either_side() {
        let a = SmallTerm::new(3.0, 2);

        assert_eq!(0.5f64 * a, a * 0.5);
        assert_eq!(-2.0f64 * a, SmallTerm::new(-6.0, 2));
        assert_eq!(2.0f32 * Term::<X, f32, u8>::new(1.5, 4), Term::new(3.0, 4));
    }

    #[test]
    fn power() {
        let a = SmallTerm::new(-2.0, 3);

        assert_eq!(a.pow(0), SmallTerm::new(1.0, 0));
        assert_eq!(a.pow(1), a);
        assert_eq!(a.pow(5), SmallTerm::new(-32.0, 15));
        assert_eq!(a.checked_pow(5), Ok(SmallTerm::new(-32.0, 15)));
    }

    #[test]
    fn power_overflow_is_a_domain_error() {
        let a = Term::<X, f64, u8>::new(2.0, 100);

        assert_eq!(a.checked_pow(2), Ok(Term::new(4.0, 200)));
        assert_eq!(
            a.checked_pow(3),
            Err(DomainError::PowerOverflow { lhs: 100, rhs: 3 })
        );

        let b = Term::<X, f64, u8>::new(1.0, 128);
        assert_eq!(a.checked_mul(a), Ok(Term::new(4.0, 200)));
        assert_eq!(
            b.checked_mul(b),
            Err(DomainError::PowerOverflow { lhs: 128, rhs: 128 })
        );
        assert_eq!(
            Term::<X, f64, u8>::new(1.0, 255).checked_mul(Term::new_constant(3.0)),
            Ok(Term::new(3.0, 255))
        );
    }

    #[test]
    #[should_panic(expected = "does not fit the power type")]
    fn overflowing_power_operator_panics() {
        let _ = Term::<X, f64, u8>::new(1.0, 100).pow(3);
    }

    #[test]
    fn terms_sum_into_polynomials() {
        let a = SmallTerm::new(3.0, 2);
        let b = SmallTerm::new(1.0, 1);

        let p = a + b;
        assert_eq!(p.len(), 2);
        assert_eq!(p.coefficient(2), 3.0);
        assert_eq!(p.coefficient(1), 1.0);

        assert!((a - a).is_empty());
        assert_eq!((a + a).coefficient(2), 6.0);
    }
}
