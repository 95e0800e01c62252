use std::error::Error;
use std::process::Command;

use clap::Args;
use fprec_core::PrecisionClass;
use fprec_lab::serde::to_canonical_json_bytes;
use serde::Serialize;

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Emit extended metadata including git, toolchain and float layout information.
    #[arg(long)]
    pub long: bool,
}

#[derive(Debug, Serialize)]
struct LayoutInfo {
    class: PrecisionClass,
    exponent_bits: u32,
    fraction_bits: u32,
    bias: i32,
}

#[derive(Debug, Serialize)]
struct VersionInfo {
    version: String,
    git_commit: String,
    rustc: String,
    layouts: Vec<LayoutInfo>,
}

pub fn run(args: &VersionArgs) -> Result<(), Box<dyn Error>> {
    if !args.long {
        println!("{}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }
    let info = gather_info();
    let json = to_canonical_json_bytes(&info)?;
    println!("{}", String::from_utf8(json)?);
    Ok(())
}

fn command_output(program: &str, args: &[&str]) -> Option<String> {
    Command::new(program)
        .args(args)
        .output()
        .ok()
        .filter(|out| out.status.success())
        .map(|out| String::from_utf8_lossy(&out.stdout).trim().to_string())
}

fn gather_info() -> VersionInfo {
    let layouts = [PrecisionClass::Single, PrecisionClass::Double]
        .into_iter()
        .map(|class| LayoutInfo {
            class,
            exponent_bits: class.exponent_bits(),
            fraction_bits: class.fraction_bits(),
            bias: class.bias(),
        })
        .collect();
    VersionInfo {
        version: env!("CARGO_PKG_VERSION").into(),
        git_commit: command_output("git", &["rev-parse", "HEAD"])
            .unwrap_or_else(|| "unknown".into()),
        rustc: command_output("rustc", &["--version"])
            .unwrap_or_else(|| "rustc unavailable".into()),
        layouts,
    }
}
