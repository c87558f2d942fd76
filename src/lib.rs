pub mod error;
pub mod polynomial;

pub use error::{DomainError, InvalidPolynomialError, ParseErrorKind};
pub use polynomial::{
    variable::{Variable, X},
    Coefficient, Polynomial, Power, Term,
};
