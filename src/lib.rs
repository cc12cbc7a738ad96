#![deny(missing_docs)]

//! # ghtrack
//!
//! A one-dimensional g-h (alpha-beta) tracking filter together with the
//! synthetic signal generator needed to exercise it. The crate is split
//! into a pure computational core and a display layer that consumes it:
//!
//! - The [model] module holds the deterministic motion model that produces
//!   the noiseless trajectory.
//! - The [sim] module drives the motion model and perturbs it with
//!   independent Gaussian noise draws, yielding the observation sequence.
//!   The random source is injectable so that tests are deterministic.
//! - The [filter] module holds the estimator: a single mutable
//!   position/rate belief, corrected once per observation by a predict and
//!   an update step. The position gain `g` sets how fast the position snaps
//!   to the measurement, the rate gain `h` sets how fast the rate belief
//!   follows, and the two are deliberately decoupled.
//! - The [draw] module renders the resulting sequences as labeled line
//!   series against a shared time axis on a terminal canvas. It is strictly
//!   a consumer of the core and the core never calls into it.
//!
//! Everything is sequential and synchronous. One filtering pass owns its
//! state exclusively, so independent signals can be filtered from
//! independent threads without coordination.
//!
//! ## Example
//!
//! ```
//! use ghtrack::{simulate_with_rng, FilterProp, FilterState, GhFilter, LinearMotion, SimProp};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let prop = SimProp {
//!     motion: LinearMotion { x0: 160.0, velocity: 1.0 },
//!     dt: 1.0,
//!     steps: 30,
//!     noise_std: 3.0,
//! };
//! let sim = simulate_with_rng(&prop, &mut StdRng::seed_from_u64(42))?;
//!
//! let filter = GhFilter::new(
//!     FilterProp { g: 0.4, h: 0.1, dt: prop.dt },
//!     FilterState { x_est: 160.0, dx_est: 0.0 },
//! )?;
//! let output = filter.run(&sim.observations)?;
//!
//! assert_eq!(output.predictions.len(), sim.observations.len());
//! assert_eq!(output.estimates.len(), sim.observations.len() + 1);
//! # Ok::<(), ghtrack::Error>(())
//! ```

/// Terminal rendering of time-indexed series.
pub mod draw;

/// Error kinds of the generator and the filter.
pub mod error;
pub use crate::error::Error;

/// The g-h estimator.
pub mod filter;
pub use crate::filter::FilterOutput;
pub use crate::filter::FilterProp;
pub use crate::filter::FilterState;
pub use crate::filter::GhFilter;
pub use crate::filter::Step;

/// Deterministic motion models.
pub mod model;
pub use crate::model::LinearMotion;

/// Synthetic signal generation.
pub mod sim;
pub use crate::sim::simulate;
pub use crate::sim::simulate_with_rng;
pub use crate::sim::SimProp;
pub use crate::sim::Simulation;
