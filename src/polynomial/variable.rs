/// Compile-time choice of the variable symbol a polynomial is written in.
pub trait Variable: core::fmt::Debug {
    const SYMBOL: char;

    /// ASCII-case-insensitive match against the symbol.
    fn matches(c: char) -> bool {
        c.eq_ignore_ascii_case(&Self::SYMBOL)
    }
}

/// The variable `x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct X;

impl Variable for X {
    const SYMBOL: char = 'x';
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct T;

    impl Variable for T {
        const SYMBOL: char = 't';
    }

    #[test]
    fn symbol_matches_either_case() {
        assert!(X::matches('x'));
        assert!(X::matches('X'));
        assert!(!X::matches('y'));

        assert!(T::matches('T'));
        assert!(!T::matches('x'));
    }
}
