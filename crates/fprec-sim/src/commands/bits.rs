use std::error::Error;

use clap::Args;
use fprec_core::{FieldView, FloatValue, PrecisionClass};
use fprec_lab::serde::to_canonical_json_bytes;
use serde::Serialize;

#[derive(Args, Debug)]
pub struct BitsArgs {
    /// Decimal value to decompose (rounded to the requested precision).
    #[arg(long, allow_hyphen_values = true, required_unless_present = "bits")]
    pub value: Option<f64>,
    /// Raw storage bits in hexadecimal, e.g. `0x3fc00000`.
    #[arg(long, conflicts_with = "value")]
    pub bits: Option<String>,
    /// Precision class: `single` or `double`.
    #[arg(long, default_value = "single")]
    pub precision: PrecisionClass,
    /// Print only the rendered text instead of JSON.
    #[arg(long)]
    pub plain: bool,
}

#[derive(Debug, Serialize)]
struct BitsReport {
    view: FieldView,
    classification: fprec_core::Classification,
    subnormal: bool,
    rendered: String,
}

fn parse_hex(text: &str) -> Result<u64, Box<dyn Error>> {
    let digits = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .unwrap_or(text);
    Ok(u64::from_str_radix(digits, 16)?)
}

pub fn run(args: &BitsArgs) -> Result<(), Box<dyn Error>> {
    let view = match (&args.bits, args.value) {
        (Some(bits), _) => FieldView::from_bits(parse_hex(bits)?, args.precision)?,
        (None, Some(value)) => {
            let value = FloatValue::from_f64(value, args.precision);
            fprec_core::decompose(value, args.precision)?
        }
        (None, None) => return Err("either --value or --bits is required".into()),
    };
    let classification = view.classify();
    let rendered = fprec_core::render(&view, classification);
    if args.plain {
        println!("{rendered}");
        return Ok(());
    }
    let report = BitsReport {
        view,
        classification,
        subnormal: view.is_subnormal(),
        rendered,
    };
    println!("{}", String::from_utf8(to_canonical_json_bytes(&report)?)?);
    Ok(())
}
