use thiserror::Error;

/// Returned by the parser when the text does not describe a polynomial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid polynomial at position {position}: {kind}")]
pub struct InvalidPolynomialError {
    /// Zero-based character offset where parsing stopped.
    pub position: usize,
    pub kind: ParseErrorKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    #[error("sign is not followed by a number or the variable")]
    DanglingSign,

    #[error("expected an exponent after '^'")]
    MissingExponent,

    #[error("exponent does not fit the power type")]
    ExponentOutOfRange,

    #[error("unexpected character {0:?}")]
    UnexpectedCharacter(char),

    #[error("malformed coefficient")]
    MalformedCoefficient,
}

/// Precondition violations of term-level arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DomainError<P> {
    #[error("cannot combine terms of powers {lhs} and {rhs}")]
    ExponentMismatch { lhs: P, rhs: P },

    #[error("divisor power {divisor} exceeds dividend power {dividend}")]
    DivisorPowerTooLarge { dividend: P, divisor: P },

    #[error("power {lhs} combined with {rhs} does not fit the power type")]
    PowerOverflow { lhs: P, rhs: P },
}
