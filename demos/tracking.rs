use drawille::PixelColor;
use ghtrack::draw::{Chart, Series};
use ghtrack::{simulate, FilterProp, FilterState, GhFilter, LinearMotion, SimProp};
use tracing::info;

fn run_tracking_demo() -> Result<(), ghtrack::Error> {
    let prop = SimProp {
        motion: LinearMotion {
            x0: 160.0,
            velocity: 1.0,
        },
        dt: 1.0,
        steps: 60,
        noise_std: 3.0,
    };
    let sim = simulate(&prop)?;

    let filter = GhFilter::new(
        FilterProp {
            g: 0.4,
            h: 0.05,
            dt: prop.dt,
        },
        FilterState {
            x_est: 160.0,
            dx_est: 0.0,
        },
    )?;
    let output = filter.run(&sim.observations)?;

    info!(
        steps = prop.steps,
        final_estimate = output.estimates[output.estimates.len() - 1],
        final_truth = sim.trajectory[sim.trajectory.len() - 1],
        "tracking run complete"
    );

    let chart = Chart::default();
    println!(
        "{}",
        chart.render(&[
            Series {
                label: "truth",
                color: PixelColor::Blue,
                start: 0,
                values: &sim.trajectory,
            },
            Series {
                label: "observed",
                color: PixelColor::Red,
                start: 1,
                values: &sim.observations,
            },
            Series {
                label: "predicted",
                color: PixelColor::Yellow,
                start: 1,
                values: &output.predictions,
            },
            Series {
                label: "estimated",
                color: PixelColor::Green,
                start: 0,
                values: &output.estimates,
            },
        ])
    );

    Ok(())
}

fn main() -> Result<(), ghtrack::Error> {
    tracing_subscriber::fmt::init();
    run_tracking_demo()
}
