use anyhow::Result;
use plotty::{Vector, logging, vector_print};
use tracing::info;

/// Pen rest position, in millimeters from the page origin.
const HOME: Vector = Vector::new(10., 10.);

/// Relative pen moves tracing a 40 mm square.
const ROUTE: [Vector; 4] = [
    Vector::new(40., 0.),
    Vector::new(0., 40.),
    Vector::new(-40., 0.),
    Vector::new(0., -40.),
];

const STEP_MM: f32 = 0.5;

fn main() -> Result<()> {
    logging::init()?;

    let mut pen = HOME;
    vector_print!(pen);

    for offset in ROUTE {
        let target = pen + offset;
        let travel = (target - pen).length();
        if travel <= 0. {
            continue;
        }

        let step = offset * (STEP_MM / travel);
        info!(travel_mm = travel, steps = (travel / STEP_MM) as u32, "segment");
        vector_print!(step);

        pen = target;
        vector_print!(pen);
    }

    let drift = pen - HOME;
    info!(drift_mm = drift.length(), "route closed");

    Ok(())
}
