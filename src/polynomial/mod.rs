pub mod calculus;
pub mod display;
pub mod parser;
pub mod term;
pub mod variable;

use std::{
    cmp::Reverse,
    collections::{btree_map::Entry, BTreeMap},
};

use num_traits::{One, Zero};

pub use term::Term;
use variable::{Variable, X};

use crate::error::DomainError;

pub trait Coefficient:
    core::fmt::Debug + core::fmt::Display + std::str::FromStr + num_traits::Float
{
}

impl Coefficient for f32 {}
impl Coefficient for f64 {}

pub trait Power:
    core::fmt::Debug
    + core::fmt::Display
    + std::str::FromStr
    + std::hash::Hash
    + num_traits::PrimInt
    + num_traits::Unsigned
{
}

impl Power for u8 {}
impl Power for u16 {}
impl Power for u32 {}
impl Power for u64 {}
impl Power for usize {}

/// Raises a coefficient to an unsigned integer power.
pub(crate) fn pow_by_squaring<C: Coefficient, P: Power>(mut base: C, mut exp: P) -> C {
    let two = P::one() + P::one();
    let mut ret = C::one();

    while !exp.is_zero() {
        if exp % two == P::one() {
            ret = ret * base;
        }
        exp = exp / two;
        if !exp.is_zero() {
            base = base * base;
        }
    }

    ret
}

type TermMap<V, C, P> = BTreeMap<Reverse<P>, Term<V, C, P>>;

#[derive(Debug)]
pub struct Polynomial<V = X, C = f64, P = u32> {
    // Keyed by power, so terms are sorted in decreasing order of power. No
    // stored term has zero coefficient.
    terms: TermMap<V, C, P>,
}

impl<V, C, P> Polynomial<V, C, P>
where
    V: Variable,
    C: Coefficient,
    P: Power,
{
    pub fn new_constant(value: C) -> Self {
        Self::from_terms([Term::new_constant(value)])
    }

    pub fn new_monomial_term(coefficient: C, power: P) -> Self {
        Self::from_terms([Term::new(coefficient, power)])
    }

    /// Builds the canonical polynomial out of any sequence of terms, summing
    /// the ones of same power.
    pub fn from_terms(terms: impl IntoIterator<Item = Term<V, C, P>>) -> Self {
        let mut ret = Self::zero();
        Self::reduce(&mut ret.terms, terms, C::one());
        ret
    }

    /// Terms in decreasing order of power.
    pub fn terms(&self) -> impl DoubleEndedIterator<Item = &Term<V, C, P>> + ExactSizeIterator {
        self.terms.values()
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn leading_term(&self) -> Option<&Term<V, C, P>> {
        self.terms.values().next()
    }

    /// The highest power with non-zero coefficient, `None` for the zero
    /// polynomial.
    pub fn degree(&self) -> Option<P> {
        self.leading_term().map(|t| t.power)
    }

    pub fn coefficient(&self, power: P) -> C {
        self.terms
            .get(&Reverse(power))
            .map_or_else(C::zero, |t| t.coefficient)
    }

    /// Folds every incoming term, multiplied by `scale`, into the map, merging
    /// terms of equal power and dropping the ones that become zero. All the
    /// arithmetic goes through here.
    fn reduce(
        terms: &mut TermMap<V, C, P>,
        incoming: impl IntoIterator<Item = Term<V, C, P>>,
        scale: C,
    ) {
        for term in incoming {
            let coefficient = term.coefficient * scale;
            let power = term.power;

            match terms.entry(Reverse(power)) {
                Entry::Occupied(mut e) => {
                    let existing = e.get_mut();
                    debug_assert!(existing.power == power);
                    existing.coefficient = existing.coefficient + coefficient;
                    if existing.is_zero() {
                        e.remove();
                    }
                }
                Entry::Vacant(e) => {
                    if !coefficient.is_zero() {
                        e.insert(Term::new(coefficient, power));
                    }
                }
            }
        }
    }

    fn scaled(&self, factor: C) -> Self {
        let mut terms = TermMap::new();
        Self::reduce(&mut terms, self.terms.values().copied(), factor);
        Self { terms }
    }

    /// Product of two polynomials, failing if some power of the product
    /// doesn't fit `P`.
    pub fn checked_mul(&self, rhs: &Self) -> Result<Self, DomainError<P>> {
        let mut terms = TermMap::new();
        for t in rhs.terms.values() {
            let products = self
                .terms
                .values()
                .map(|s| s.checked_mul(*t))
                .collect::<Result<Vec<_>, _>>()?;
            Self::reduce(&mut terms, products, C::one());
        }

        Ok(Polynomial { terms })
    }

    /// Repeated multiplication, starting from the constant 1. So anything to
    /// the power 0 is 1, including the zero polynomial.
    pub fn checked_pow(&self, exp: P) -> Result<Self, DomainError<P>> {
        let mut ret = Self::one();
        let mut i = P::zero();
        while i < exp {
            ret = ret.checked_mul(self)?;
            i = i + P::one();
        }

        Ok(ret)
    }
}

impl<V, C: Clone, P: Clone> Clone for Polynomial<V, C, P> {
    fn clone(&self) -> Self {
        Self {
            terms: self.terms.clone(),
        }
    }
}

impl<V, C, P> PartialEq for Polynomial<V, C, P>
where
    C: PartialEq,
    P: PartialEq,
{
    fn eq(&self, rhs: &Self) -> bool {
        self.terms == rhs.terms
    }
}

impl<V, C, P> Default for Polynomial<V, C, P>
where
    V: Variable,
    C: Coefficient,
    P: Power,
{
    fn default() -> Self {
        Self::zero()
    }
}

impl<V, C, P> From<Term<V, C, P>> for Polynomial<V, C, P>
where
    V: Variable,
    C: Coefficient,
    P: Power,
{
    fn from(term: Term<V, C, P>) -> Self {
        Self::from_terms([term])
    }
}

impl<V, C, P> FromIterator<Term<V, C, P>> for Polynomial<V, C, P>
where
    V: Variable,
    C: Coefficient,
    P: Power,
{
    fn from_iter<T: IntoIterator<Item = Term<V, C, P>>>(iter: T) -> Self {
        Self::from_terms(iter)
    }
}

impl<V, C, P> num_traits::Zero for Polynomial<V, C, P>
where
    V: Variable,
    C: Coefficient,
    P: Power,
{
    fn zero() -> Self {
        Polynomial {
            terms: TermMap::new(),
        }
    }

    fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }
}

impl<V, C, P> num_traits::One for Polynomial<V, C, P>
where
    V: Variable,
    C: Coefficient,
    P: Power,
{
    fn one() -> Self {
        Self::new_constant(C::one())
    }
}

impl<'a, V, C, P> std::ops::AddAssign<&'a Polynomial<V, C, P>> for Polynomial<V, C, P>
where
    V: Variable,
    C: Coefficient,
    P: Power,
{
    fn add_assign(&mut self, rhs: &'a Polynomial<V, C, P>) {
        Self::reduce(
            &mut self.terms,
            rhs.terms.values().copied(),
            C::one(),
        );
    }
}

impl<'a, V, C, P> std::ops::SubAssign<&'a Polynomial<V, C, P>> for Polynomial<V, C, P>
where
    V: Variable,
    C: Coefficient,
    P: Power,
{
    fn sub_assign(&mut self, rhs: &'a Polynomial<V, C, P>) {
        Self::reduce(
            &mut self.terms,
            rhs.terms.values().copied(),
            -C::one(),
        );
    }
}

impl<'a, V, C, P> std::ops::MulAssign<&'a Polynomial<V, C, P>> for Polynomial<V, C, P>
where
    V: Variable,
    C: Coefficient,
    P: Power,
{
    fn mul_assign(&mut self, rhs: &'a Polynomial<V, C, P>) {
        *self = &*self * rhs;
    }
}

impl<'a, 'b, V, C, P> std::ops::Add<&'b Polynomial<V, C, P>> for &'a Polynomial<V, C, P>
where
    V: Variable,
    C: Coefficient,
    P: Power,
{
    type Output = Polynomial<V, C, P>;

    fn add(self, rhs: &'b Polynomial<V, C, P>) -> Self::Output {
        let mut ret = self.clone();
        ret += rhs;
        ret
    }
}

impl<'a, 'b, V, C, P> std::ops::Sub<&'b Polynomial<V, C, P>> for &'a Polynomial<V, C, P>
where
    V: Variable,
    C: Coefficient,
    P: Power,
{
    type Output = Polynomial<V, C, P>;

    fn sub(self, rhs: &'b Polynomial<V, C, P>) -> Self::Output {
        let mut ret = self.clone();
        ret -= rhs;
        ret
    }
}

/// # Panics
///
/// If a power of the product overflows `P`. See [`Polynomial::checked_mul`].
impl<'a, 'b, V, C, P> std::ops::Mul<&'b Polynomial<V, C, P>> for &'a Polynomial<V, C, P>
where
    V: Variable,
    C: Coefficient,
    P: Power,
{
    type Output = Polynomial<V, C, P>;

    fn mul(self, rhs: &'b Polynomial<V, C, P>) -> Self::Output {
        match self.checked_mul(rhs) {
            Ok(product) => product,
            Err(err) => panic!("polynomial product: {}", err),
        }
    }
}

/// Implements the by-value flavors of a binary operator in terms of the
/// by-reference one.
macro_rules! forward_by_value {
    ($imp:ident, $method:ident, $assign_imp:ident, $assign_method:ident) => {
        impl<V, C, P> std::ops::$imp for Polynomial<V, C, P>
        where
            V: Variable,
            C: Coefficient,
            P: Power,
        {
            type Output = Polynomial<V, C, P>;

            fn $method(self, rhs: Polynomial<V, C, P>) -> Self::Output {
                std::ops::$imp::$method(&self, &rhs)
            }
        }

        impl<'a, V, C, P> std::ops::$imp<&'a Polynomial<V, C, P>> for Polynomial<V, C, P>
        where
            V: Variable,
            C: Coefficient,
            P: Power,
        {
            type Output = Polynomial<V, C, P>;

            fn $method(self, rhs: &'a Polynomial<V, C, P>) -> Self::Output {
                std::ops::$imp::$method(&self, rhs)
            }
        }

        impl<'a, V, C, P> std::ops::$imp<Polynomial<V, C, P>> for &'a Polynomial<V, C, P>
        where
            V: Variable,
            C: Coefficient,
            P: Power,
        {
            type Output = Polynomial<V, C, P>;

            fn $method(self, rhs: Polynomial<V, C, P>) -> Self::Output {
                std::ops::$imp::$method(self, &rhs)
            }
        }

        impl<V, C, P> std::ops::$assign_imp for Polynomial<V, C, P>
        where
            V: Variable,
            C: Coefficient,
            P: Power,
        {
            fn $assign_method(&mut self, rhs: Polynomial<V, C, P>) {
                std::ops::$assign_imp::$assign_method(self, &rhs);
            }
        }
    };
}

forward_by_value!(Add, add, AddAssign, add_assign);
forward_by_value!(Sub, sub, SubAssign, sub_assign);
forward_by_value!(Mul, mul, MulAssign, mul_assign);

impl<'a, V, C, P> std::ops::Neg for &'a Polynomial<V, C, P>
where
    V: Variable,
    C: Coefficient,
    P: Power,
{
    type Output = Polynomial<V, C, P>;

    fn neg(self) -> Self::Output {
        self.scaled(-C::one())
    }
}

impl<V, C, P> std::ops::Neg for Polynomial<V, C, P>
where
    V: Variable,
    C: Coefficient,
    P: Power,
{
    type Output = Self;

    fn neg(self) -> Self {
        -&self
    }
}

impl<'a, V, C, P> std::ops::Mul<C> for &'a Polynomial<V, C, P>
where
    V: Variable,
    C: Coefficient,
    P: Power,
{
    type Output = Polynomial<V, C, P>;

    fn mul(self, rhs: C) -> Self::Output {
        self.scaled(rhs)
    }
}

impl<V, C, P> std::ops::Mul<C> for Polynomial<V, C, P>
where
    V: Variable,
    C: Coefficient,
    P: Power,
{
    type Output = Self;

    fn mul(self, rhs: C) -> Self {
        self.scaled(rhs)
    }
}

impl<'a, V, C, P> std::ops::Div<C> for &'a Polynomial<V, C, P>
where
    V: Variable,
    C: Coefficient,
    P: Power,
{
    type Output = Polynomial<V, C, P>;

    fn div(self, rhs: C) -> Self::Output {
        self.scaled(C::one() / rhs)
    }
}

impl<V, C, P> std::ops::Div<C> for Polynomial<V, C, P>
where
    V: Variable,
    C: Coefficient,
    P: Power,
{
    type Output = Self;

    fn div(self, rhs: C) -> Self {
        self.scaled(C::one() / rhs)
    }
}

impl<V, C, P> std::ops::MulAssign<C> for Polynomial<V, C, P>
where
    V: Variable,
    C: Coefficient,
    P: Power,
{
    fn mul_assign(&mut self, rhs: C) {
        *self = self.scaled(rhs);
    }
}

impl<V, C, P> std::ops::DivAssign<C> for Polynomial<V, C, P>
where
    V: Variable,
    C: Coefficient,
    P: Power,
{
    fn div_assign(&mut self, rhs: C) {
        *self = self.scaled(C::one() / rhs);
    }
}

macro_rules! scalar_times_polynomial {
    ($($scalar:ty),*) => {$(
        impl<V: Variable, P: Power> std::ops::Mul<Polynomial<V, $scalar, P>> for $scalar {
            type Output = Polynomial<V, $scalar, P>;

            fn mul(self, rhs: Polynomial<V, $scalar, P>) -> Self::Output {
                rhs.scaled(self)
            }
        }

        impl<'a, V: Variable, P: Power> std::ops::Mul<&'a Polynomial<V, $scalar, P>> for $scalar {
            type Output = Polynomial<V, $scalar, P>;

            fn mul(self, rhs: &'a Polynomial<V, $scalar, P>) -> Self::Output {
                rhs.scaled(self)
            }
        }
    )*};
}

scalar_times_polynomial!(f32, f64);

/// # Panics
///
/// If a power of the result overflows `P`. See [`Polynomial::checked_pow`].
impl<'a, V, C, P> num_traits::pow::Pow<P> for &'a Polynomial<V, C, P>
where
    V: Variable,
    C: Coefficient,
    P: Power,
{
    type Output = Polynomial<V, C, P>;

    fn pow(self, rhs: P) -> Self::Output {
        match self.checked_pow(rhs) {
            Ok(power) => power,
            Err(err) => panic!("polynomial power: {}", err),
        }
    }
}

impl<V, C, P> num_traits::pow::Pow<P> for Polynomial<V, C, P>
where
    V: Variable,
    C: Coefficient,
    P: Power,
{
    type Output = Self;

    fn pow(self, rhs: P) -> Self {
        num_traits::pow::Pow::pow(&self, rhs)
    }
}
