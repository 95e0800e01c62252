//! Two-body inverse-square orbit stepped with semi-implicit Euler.

use fprec_core::{IeeeFloat, PrecisionClass};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::OrbitConfig;

#[derive(Debug, Clone, Copy)]
struct Body<F> {
    m: F,
    px: F,
    py: F,
    vx: F,
    vy: F,
}

/// Positions of both bodies at one sampled step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrbitSample {
    /// Step index (1-based).
    pub step: u64,
    /// First body position.
    pub first: [f64; 2],
    /// Second body position.
    pub second: [f64; 2],
}

/// Outcome of the orbit integration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrbitReport {
    /// Working precision.
    pub precision: PrecisionClass,
    /// Step size in the working precision.
    pub dt: f64,
    /// Sampled positions, ending with the final step.
    pub samples: Vec<OrbitSample>,
    /// Kinetic plus potential energy before the first step.
    pub initial_energy: f64,
    /// Kinetic plus potential energy after the last step.
    pub final_energy: f64,
    /// `final_energy - initial_energy`.
    pub energy_drift: f64,
}

fn energy<F: IeeeFloat>(a: &Body<F>, b: &Body<F>, gravity: f64) -> f64 {
    let kinetic = |body: &Body<F>| {
        let (vx, vy) = (body.vx.to_f64(), body.vy.to_f64());
        0.5 * body.m.to_f64() * (vx * vx + vy * vy)
    };
    let dx = a.px.to_f64() - b.px.to_f64();
    let dy = a.py.to_f64() - b.py.to_f64();
    let r = (dx * dx + dy * dy).sqrt();
    kinetic(a) + kinetic(b) - gravity * a.m.to_f64() * b.m.to_f64() / r
}

/// Force on `a` exerted by `b`.
fn force<F: IeeeFloat>(a: &Body<F>, b: &Body<F>, gravity: F) -> (F, F) {
    let dx = a.px - b.px;
    let dy = a.py - b.py;
    let r = (dx * dx + dy * dy).sqrt();
    let r3 = r * r * r;
    let mmg = a.m * b.m * gravity;
    (-mmg * dx / r3, -mmg * dy / r3)
}

fn kick_drift<F: IeeeFloat>(body: &mut Body<F>, fx: F, fy: F, dt: F) {
    body.vx = body.vx + fx * dt / body.m;
    body.vy = body.vy + fy * dt / body.m;
    body.px = body.px + body.vx * dt;
    body.py = body.py + body.vy * dt;
}

fn position<F: IeeeFloat>(body: &Body<F>) -> [f64; 2] {
    [body.px.to_f64(), body.py.to_f64()]
}

/// Steps two unit masses released at `(±1, 0)` with velocities `(0, ±1)`.
pub fn run_orbit<F: IeeeFloat>(config: &OrbitConfig) -> OrbitReport {
    let precision = F::CLASS;
    info!(steps = config.steps, %precision, "running orbit integration");
    let one = F::ONE;
    let zero = F::ZERO;
    let gravity = F::from_f64(config.gravity);
    let dt = F::from_f64(config.time_limit / config.steps as f64);
    let mut first = Body {
        m: one,
        px: one,
        py: zero,
        vx: zero,
        vy: one,
    };
    let mut second = Body {
        m: one,
        px: -one,
        py: zero,
        vx: zero,
        vy: -one,
    };
    let initial_energy = energy(&first, &second, config.gravity);

    let mut samples = Vec::new();
    for step in 1..=config.steps {
        let (fx, fy) = force(&first, &second, gravity);
        kick_drift(&mut first, fx, fy, dt);
        kick_drift(&mut second, -fx, -fy, dt);
        let due = config.sample_every != 0 && step % config.sample_every == 0;
        if due || step == config.steps {
            samples.push(OrbitSample {
                step,
                first: position(&first),
                second: position(&second),
            });
        }
    }

    let final_energy = energy(&first, &second, config.gravity);
    OrbitReport {
        precision,
        dt: dt.to_f64(),
        samples,
        initial_energy,
        final_energy,
        energy_drift: final_energy - initial_energy,
    }
}

/// Dispatches [`run_orbit`] on the configured precision.
pub fn run_orbit_configured(config: &OrbitConfig) -> OrbitReport {
    match config.precision {
        PrecisionClass::Single => run_orbit::<f32>(config),
        PrecisionClass::Double => run_orbit::<f64>(config),
    }
}
