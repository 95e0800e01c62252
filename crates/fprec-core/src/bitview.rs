//! Bit-exact decomposition and rendering of IEEE-754 values.
//!
//! A [`FieldView`] is derived from the raw storage bits of a value on every
//! call and never cached. Rendering uses base-2 scientific notation with the
//! fraction listed bit by bit:
//!
//! ```text
//! +1.10000000000000000000000*10^  1    (3.0f32)
//! ```
//!
//! Zeros, infinities and NaNs render as `(zero)`, `(inf)` and `(nan)`.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use crate::errors::{ErrorInfo, FprecError};
use crate::precision::{FloatValue, IeeeFloat, PrecisionClass};

/// Sign, biased exponent and fraction fields of a floating-point value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldView {
    /// Precision class defining the field widths.
    pub class: PrecisionClass,
    /// `true` when the sign bit is set.
    pub sign: bool,
    /// Stored (biased) exponent.
    pub exponent: u32,
    /// Stored fraction bits.
    pub fraction: u64,
}

/// Coarse category of a decomposed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    /// Positive or negative zero.
    Zero,
    /// Positive or negative infinity.
    Infinity,
    /// Any quiet or signalling NaN.
    Nan,
    /// Every other value, subnormals included.
    Normal,
}

impl FieldView {
    /// Decomposes a native value; the precision class follows from the type.
    pub fn of<F: IeeeFloat>(value: F) -> Self {
        split(value.to_raw_bits(), F::CLASS)
    }

    /// Decomposes a raw bit pattern of the given class.
    pub fn from_bits(bits: u64, class: PrecisionClass) -> Result<Self, FprecError> {
        if bits & !class.storage_mask() != 0 {
            return Err(FprecError::Precision(
                ErrorInfo::new(
                    "precision_overflow",
                    "bit pattern is wider than the precision class",
                )
                .with_context("class", class.name())
                .with_context("bits", format!("{bits:#x}")),
            ));
        }
        Ok(split(bits, class))
    }

    /// Reassembles the raw storage bits by concatenating the three fields.
    pub fn to_bits(&self) -> u64 {
        let class = self.class;
        let sign = u64::from(self.sign) << (class.storage_bits() - 1);
        let exponent = u64::from(self.exponent) << class.fraction_bits();
        sign | exponent | (self.fraction & class.fraction_mask())
    }

    /// Rebuilds the value the view was taken from.
    pub fn to_value(&self) -> FloatValue {
        FloatValue::from_bits(self.to_bits(), self.class)
    }

    /// Exponent with the class bias removed.
    pub fn unbiased_exponent(&self) -> i32 {
        self.exponent as i32 - self.class.bias()
    }

    /// Zero exponent with a nonzero fraction.
    pub fn is_subnormal(&self) -> bool {
        self.exponent == 0 && self.fraction != 0
    }

    /// Shorthand for [`classify`].
    pub fn classify(&self) -> Classification {
        classify(self)
    }
}

impl Display for FieldView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self, self.classify()))
    }
}

fn split(bits: u64, class: PrecisionClass) -> FieldView {
    let fraction_bits = class.fraction_bits();
    let exponent_mask = u64::from(class.max_exponent());
    FieldView {
        class,
        sign: (bits >> (class.storage_bits() - 1)) & 1 == 1,
        exponent: ((bits >> fraction_bits) & exponent_mask) as u32,
        fraction: bits & class.fraction_mask(),
    }
}

/// Reinterprets the storage bits of `value` as `{sign, exponent, fraction}`.
///
/// Fails only when `value` is not stored in `class`.
pub fn decompose(value: FloatValue, class: PrecisionClass) -> Result<FieldView, FprecError> {
    if value.class() != class {
        return Err(FprecError::Precision(
            ErrorInfo::new(
                "precision_mismatch",
                "value storage width does not match the requested precision class",
            )
            .with_context("requested", class.name())
            .with_context("actual", value.class().name()),
        ));
    }
    Ok(split(value.to_bits(), class))
}

/// Classifies a view from its exponent and fraction fields.
pub fn classify(view: &FieldView) -> Classification {
    let max = view.class.max_exponent();
    match (view.exponent, view.fraction) {
        (0, 0) => Classification::Zero,
        (exponent, 0) if exponent == max => Classification::Infinity,
        (exponent, _) if exponent == max => Classification::Nan,
        _ => Classification::Normal,
    }
}

/// Formats a view as `<sign>1.<fraction bits>*10^<exponent>`.
///
/// Subnormals take the same path as normals, so they print a leading `1.`
/// and an exponent of `-bias`.
pub fn render(view: &FieldView, classification: Classification) -> String {
    match classification {
        Classification::Zero => "(zero)".to_string(),
        Classification::Infinity => "(inf)".to_string(),
        Classification::Nan => "(nan)".to_string(),
        Classification::Normal => format!(
            "{}1.{:0width$b}*10^{:>3}",
            if view.sign { '-' } else { '+' },
            view.fraction,
            view.unbiased_exponent(),
            width = view.class.fraction_bits() as usize,
        ),
    }
}

/// Decomposes, classifies and renders a native value in one call.
pub fn describe<F: IeeeFloat>(value: F) -> String {
    FieldView::of(value).to_string()
}
