use core::fmt;

/// Everything that can go wrong with a [`Bigint`][crate::Bigint].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// Division or remainder with a zero divisor.
    DivisionByZero,
    /// Decimal digit requested past the number's digit count.
    DigitOutOfRange { index: usize, digits: usize },
}

/// [`Error`] or success.
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Error::DivisionByZero => f.write_str("divisor must be non-zero"),
            Error::DigitOutOfRange { index, digits } => write!(
                f,
                "digit index {} out of range for a number with {} digits",
                index, digits
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
