//! Precision classes and the type-level mapping from `f32`/`f64` onto them.

use std::fmt::{self, Debug, Display};
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{ErrorInfo, FprecError};

/// Binary interchange format of a floating-point value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrecisionClass {
    /// binary32: 1 sign bit, 8 exponent bits, 23 fraction bits.
    Single,
    /// binary64: 1 sign bit, 11 exponent bits, 52 fraction bits.
    Double,
}

impl PrecisionClass {
    /// Total storage width in bits.
    pub const fn storage_bits(self) -> u32 {
        match self {
            PrecisionClass::Single => 32,
            PrecisionClass::Double => 64,
        }
    }

    /// Width of the biased exponent field.
    pub const fn exponent_bits(self) -> u32 {
        match self {
            PrecisionClass::Single => 8,
            PrecisionClass::Double => 11,
        }
    }

    /// Width of the fraction field (the significand without its implicit bit).
    pub const fn fraction_bits(self) -> u32 {
        match self {
            PrecisionClass::Single => 23,
            PrecisionClass::Double => 52,
        }
    }

    /// Exponent bias subtracted from the stored exponent.
    pub const fn bias(self) -> i32 {
        (1 << (self.exponent_bits() - 1)) - 1
    }

    /// All-ones exponent reserved for infinities and NaNs.
    pub const fn max_exponent(self) -> u32 {
        (1 << self.exponent_bits()) - 1
    }

    pub(crate) const fn fraction_mask(self) -> u64 {
        (1u64 << self.fraction_bits()) - 1
    }

    pub(crate) const fn storage_mask(self) -> u64 {
        match self {
            PrecisionClass::Single => u32::MAX as u64,
            PrecisionClass::Double => u64::MAX,
        }
    }

    /// Lower-case name used in configuration files and CLI flags.
    pub const fn name(self) -> &'static str {
        match self {
            PrecisionClass::Single => "single",
            PrecisionClass::Double => "double",
        }
    }
}

impl Display for PrecisionClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PrecisionClass {
    type Err = FprecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "single" | "f32" | "float" => Ok(PrecisionClass::Single),
            "double" | "f64" => Ok(PrecisionClass::Double),
            other => Err(FprecError::Config(
                ErrorInfo::new("unknown_precision", "unrecognised precision class")
                    .with_context("value", other)
                    .with_hint("expected `single` or `double`"),
            )),
        }
    }
}

/// A floating-point value tagged with its precision class.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "class", content = "value", rename_all = "lowercase")]
pub enum FloatValue {
    /// Single precision value.
    Single(f32),
    /// Double precision value.
    Double(f64),
}

impl FloatValue {
    /// Precision class of the stored value.
    pub fn class(&self) -> PrecisionClass {
        match self {
            FloatValue::Single(_) => PrecisionClass::Single,
            FloatValue::Double(_) => PrecisionClass::Double,
        }
    }

    /// Raw storage bits, zero-extended to 64 bits.
    pub fn to_bits(&self) -> u64 {
        match self {
            FloatValue::Single(value) => u64::from(value.to_bits()),
            FloatValue::Double(value) => value.to_bits(),
        }
    }

    /// Rebuilds a value from raw bits, truncating to the class storage width.
    pub fn from_bits(bits: u64, class: PrecisionClass) -> Self {
        match class {
            PrecisionClass::Single => FloatValue::Single(f32::from_bits(bits as u32)),
            PrecisionClass::Double => FloatValue::Double(f64::from_bits(bits)),
        }
    }

    /// Converts a decimal-parsed `f64` into the requested class (rounding for Single).
    pub fn from_f64(value: f64, class: PrecisionClass) -> Self {
        match class {
            PrecisionClass::Single => FloatValue::Single(value as f32),
            PrecisionClass::Double => FloatValue::Double(value),
        }
    }

    /// Widens the value to `f64` (exact for both classes).
    pub fn to_f64(&self) -> f64 {
        match self {
            FloatValue::Single(value) => f64::from(*value),
            FloatValue::Double(value) => *value,
        }
    }
}

impl From<f32> for FloatValue {
    fn from(value: f32) -> Self {
        FloatValue::Single(value)
    }
}

impl From<f64> for FloatValue {
    fn from(value: f64) -> Self {
        FloatValue::Double(value)
    }
}

/// Native floating-point types with a fixed [`PrecisionClass`].
///
/// Arithmetic through this trait is the plain IEEE operation of the type: no
/// fused or reassociated forms are introduced.
pub trait IeeeFloat:
    Copy
    + Default
    + PartialEq
    + PartialOrd
    + Debug
    + Display
    + Send
    + Sync
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    /// Precision class of the type.
    const CLASS: PrecisionClass;
    /// Additive identity.
    const ZERO: Self;
    /// Multiplicative identity.
    const ONE: Self;

    /// Raw storage bits, zero-extended to 64 bits.
    fn to_raw_bits(self) -> u64;
    /// Rebuilds a value from raw bits, ignoring bits above the storage width.
    fn from_raw_bits(bits: u64) -> Self;
    /// Rounds an `f64` to this type.
    fn from_f64(value: f64) -> Self;
    /// Widens to `f64`.
    fn to_f64(self) -> f64;
    /// Correctly rounded square root.
    fn sqrt(self) -> Self;
    /// Tags the value with its precision class.
    fn into_value(self) -> FloatValue;
}

macro_rules! impl_ieee_float {
    ($f:ident, $bits:ty, $class:ident) => {
        impl IeeeFloat for $f {
            const CLASS: PrecisionClass = PrecisionClass::$class;
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;

            #[inline]
            fn to_raw_bits(self) -> u64 {
                self.to_bits() as u64
            }

            #[inline]
            fn from_raw_bits(bits: u64) -> Self {
                $f::from_bits(bits as $bits)
            }

            #[inline]
            fn from_f64(value: f64) -> Self {
                value as $f
            }

            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }

            #[inline]
            fn sqrt(self) -> Self {
                $f::sqrt(self)
            }

            #[inline]
            fn into_value(self) -> FloatValue {
                FloatValue::$class(self)
            }
        }
    };
}

impl_ieee_float!(f32, u32, Single);
impl_ieee_float!(f64, u64, Double);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_constants() {
        assert_eq!(PrecisionClass::Single.bias(), 127);
        assert_eq!(PrecisionClass::Double.bias(), 1023);
        assert_eq!(PrecisionClass::Single.max_exponent(), 255);
        assert_eq!(PrecisionClass::Double.max_exponent(), 2047);
        for class in [PrecisionClass::Single, PrecisionClass::Double] {
            assert_eq!(
                1 + class.exponent_bits() + class.fraction_bits(),
                class.storage_bits()
            );
        }
    }

    #[test]
    fn parses_class_names() {
        assert_eq!("Single".parse::<PrecisionClass>().unwrap(), PrecisionClass::Single);
        assert_eq!("f64".parse::<PrecisionClass>().unwrap(), PrecisionClass::Double);
        let err = "quad".parse::<PrecisionClass>().unwrap_err();
        assert_eq!(err.info().code, "unknown_precision");
    }
}
