use super::{pow_by_squaring, variable::Variable, Coefficient, Polynomial, Power, Term};
use crate::error::DomainError;

impl<V, C, P> Polynomial<V, C, P>
where
    V: Variable,
    C: Coefficient,
    P: Power,
{
    /// Value of the polynomial at `x`.
    pub fn eval(&self, x: C) -> C {
        self.terms().fold(C::zero(), |acc, t| {
            acc + t.coefficient * pow_by_squaring(x, t.power)
        })
    }
}

impl<V, C, P> Polynomial<V, C, P>
where
    V: Variable,
    C: Coefficient + From<P>,
    P: Power,
{
    pub fn derivative(&self) -> Self {
        Self::from_terms(self.terms().filter(|t| !t.power.is_zero()).map(|t| {
            Term::new(t.coefficient * <C as From<P>>::from(t.power), t.power - P::one())
        }))
    }

    /// The antiderivative whose constant term is zero, unless some power
    /// can't be raised by one within `P`.
    pub fn checked_integral(&self) -> Result<Self, DomainError<P>> {
        self.terms()
            .map(|t| {
                t.power
                    .checked_add(&P::one())
                    .map(|power| Term::new(t.coefficient / <C as From<P>>::from(power), power))
                    .ok_or(DomainError::PowerOverflow {
                        lhs: t.power,
                        rhs: P::one(),
                    })
            })
            .collect()
    }

    /// Same as [`Self::checked_integral`].
    ///
    /// # Panics
    ///
    /// If the polynomial has a term of power `P::max_value()`.
    pub fn integral(&self) -> Self {
        match self.checked_integral() {
            Ok(integral) => integral,
            Err(err) => panic!("integral: {}", err),
        }
    }
}
