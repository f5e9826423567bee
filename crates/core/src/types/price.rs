//! Unit price of a catalog product.
//!
//! Prices are decimal in memory and `REAL` on disk. Binding goes through the
//! `sqlx` encode impl below; reads convert with [`Price::from_f64`].

use core::fmt;
use core::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Price`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    /// The input is not a decimal number.
    #[error("invalid price '{0}': expected a decimal number such as 9.99")]
    Invalid(String),
    /// The value has no finite decimal representation.
    #[error("price is not representable as a decimal")]
    OutOfRange,
}

/// A product price in the shop's single currency.
///
/// No range is enforced here. The form bounds ([`Price::FORM_MINIMUM`],
/// [`Price::FORM_MAXIMUM`], whole cents) are front-end rules; the catalog
/// stores whatever it is given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// Smallest price accepted by the entry forms (0.01).
    pub const FORM_MINIMUM: Self = Self(Decimal::from_parts(1, 0, 0, false, 2));

    /// Significant digits a `REAL` column round-trips exactly.
    pub const REAL_DIGITS: u32 = 15;

    /// Largest price accepted by the entry forms (9999999999999.99, fifteen
    /// significant digits).
    pub const FORM_MAXIMUM: Self = Self(Decimal::from_parts(2_764_472_319, 232_830, 0, false, 2));

    /// Create a price from an amount in cents (e.g. `999` is 9.99).
    #[must_use]
    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents, 2))
    }

    /// Convert a stored floating point value, keeping the
    /// [`Price::REAL_DIGITS`] significant digits the column holds exactly.
    ///
    /// # Errors
    ///
    /// Returns `PriceError::OutOfRange` for NaN, infinities and values outside
    /// the decimal range.
    pub fn from_f64(value: f64) -> Result<Self, PriceError> {
        Decimal::from_f64(value)
            .and_then(|d| {
                if d.is_zero() {
                    Some(d)
                } else {
                    d.round_sf(Self::REAL_DIGITS)
                }
            })
            .map(|d| Self(d.normalize()))
            .ok_or(PriceError::OutOfRange)
    }

    /// The value as stored in the `REAL` column.
    ///
    /// # Errors
    ///
    /// Returns `PriceError::OutOfRange` if the amount cannot be represented.
    pub fn to_f64(self) -> Result<f64, PriceError> {
        self.0.to_f64().ok_or(PriceError::OutOfRange)
    }

    /// Whether the price satisfies the entry-form minimum.
    #[must_use]
    pub fn meets_form_minimum(self) -> bool {
        self >= Self::FORM_MINIMUM
    }

    /// Whether the price satisfies the entry-form maximum.
    #[must_use]
    pub fn within_form_maximum(self) -> bool {
        self <= Self::FORM_MAXIMUM
    }

    /// Whether the price is a whole number of cents (trailing zeros ignored).
    #[must_use]
    pub fn has_cent_precision(self) -> bool {
        self.0.normalize().scale() <= 2
    }
}

impl fmt::Display for Price {
    /// Two decimal places, or every stored digit when there are more.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.has_cent_precision() {
            write!(f, "{:.2}", self.0)
        } else {
            write!(f, "{}", self.0.normalize())
        }
    }
}

impl FromStr for Price {
    type Err = PriceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Decimal::from_str(trimmed)
            .map(Self)
            .map_err(|_| PriceError::Invalid(trimmed.to_owned()))
    }
}

#[cfg(feature = "sqlite")]
impl sqlx::Type<sqlx::Sqlite> for Price {
    fn type_info() -> sqlx::sqlite::SqliteTypeInfo {
        <f64 as sqlx::Type<sqlx::Sqlite>>::type_info()
    }

    fn compatible(ty: &sqlx::sqlite::SqliteTypeInfo) -> bool {
        <f64 as sqlx::Type<sqlx::Sqlite>>::compatible(ty)
    }
}

#[cfg(feature = "sqlite")]
impl<'q> sqlx::Encode<'q, sqlx::Sqlite> for Price {
    fn encode_by_ref(
        &self,
        buf: &mut <sqlx::Sqlite as sqlx::Database>::ArgumentBuffer<'q>,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        let raw = self.to_f64()?;
        <f64 as sqlx::Encode<'q, sqlx::Sqlite>>::encode_by_ref(&raw, buf)
    }
}
