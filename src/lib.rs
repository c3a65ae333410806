//! Geocentric position and velocity of the Moon from the ELP2000 lunar theory.
//!
//! The theory is a set of 36 trigonometric series read from the files `ELP1`..`ELP36`. Once
//! loaded into a [`CoefficientStore`], the state at any ephemeris time is a pure function of the
//! store.
//!
//! ```rust, no_run
//! use camino::Utf8Path;
//! use elp2000::CoefficientStore;
//!
//! let store = CoefficientStore::load(Utf8Path::new("data/elp2000")).unwrap();
//! let state = store.get_state(0.0);
//! println!("x = {:.3} km, vx = {:.6} km/s", state.position.x, state.velocity.x);
//! ```
pub mod coefficients;
pub mod constants;
pub mod conversion;
pub mod data_source;
pub mod dispatch;
pub mod elp2000;
pub mod elp_errors;
pub mod fundamental_args;
pub mod lunar_state;
pub mod series;
pub mod time;

pub use coefficients::CoefficientStore;
pub use data_source::ElpDataSource;
pub use elp2000::Elp2000;
pub use elp_errors::{ElpError, TableDefect};
pub use lunar_state::{MoonState, SphericalState};
