//! # Elp2000: lazily loaded lunar theory
//!
//! [`Elp2000`] is the entry point for callers that load the tables once and then evaluate the
//! Moon's position many times, possibly from several threads.
//!
//! The coefficient store is published through a [`OnceCell`](once_cell::sync::OnceCell):
//! - the 36 tables are parsed into a complete [`CoefficientStore`] before anything is published,
//! - a failed load leaves the facade empty, so evaluation keeps reporting
//!   [`ElpError::NotLoaded`],
//! - once published, the store never changes. Further loads are rejected with
//!   [`ElpError::AlreadyLoaded`].
//!
//! ## Typical usage
//!
//! ```rust, no_run
//! use elp2000::{data_source::ElpDataSource, elp2000::Elp2000};
//!
//! let elp = Elp2000::new();
//! elp.load_from(&ElpDataSource::Environment).unwrap();
//!
//! // ephemeris seconds past J2000
//! let state = elp.get_state(0.0).unwrap();
//! println!("Moon distance: {:.3} km", state.distance());
//! ```
//!
//! ## See also
//! ------------
//! * [`CoefficientStore`] – The tables themselves, usable without the facade.
//! * [`ElpDataSource`] – Where the table files are looked up.
use camino::Utf8Path;
use hifitime::Epoch;
use log::{info, warn};
use once_cell::sync::OnceCell;

use crate::{
    coefficients::CoefficientStore,
    constants::EphemerisSeconds,
    data_source::ElpDataSource,
    elp_errors::ElpError,
    lunar_state::{MoonState, SphericalState},
};

#[derive(Debug, Default)]
pub struct Elp2000 {
    store: OnceCell<CoefficientStore>,
}

impl Elp2000 {
    /// An empty facade. Nothing is read until [`Elp2000::load`] is called.
    pub fn new() -> Self {
        Elp2000 {
            store: OnceCell::new(),
        }
    }

    /// A facade wrapping an already built store.
    pub fn with_store(store: CoefficientStore) -> Self {
        Elp2000 {
            store: OnceCell::with_value(store),
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.store.get().is_some()
    }

    /// The published store.
    ///
    /// Return
    /// ----------
    /// * The store, or [`ElpError::NotLoaded`] before a successful load.
    pub fn store(&self) -> Result<&CoefficientStore, ElpError> {
        self.store.get().ok_or(ElpError::NotLoaded)
    }

    /// Load the 36 table files from `directory` and publish them.
    ///
    /// Arguments
    /// -----------------
    /// * `directory`: directory containing the files `ELP1`..`ELP36`
    ///
    /// Return
    /// ----------
    /// * The published store.
    /// * [`ElpError::AlreadyLoaded`] if a store is already published, whether by an earlier call
    ///   or by a concurrent one that finished first.
    /// * [`ElpError::MalformedTable`] if a file is missing or holds a malformed line. Nothing is
    ///   published in that case.
    ///
    /// See also
    /// ------------
    /// * [`CoefficientStore::load`] – The underlying loader.
    pub fn load(&self, directory: &Utf8Path) -> Result<&CoefficientStore, ElpError> {
        if self.is_loaded() {
            warn!("ELP2000 tables already loaded, ignoring load from {directory}");
            return Err(ElpError::AlreadyLoaded);
        }

        let store = CoefficientStore::load(directory)?;

        match self.store.try_insert(store) {
            Ok(store) => {
                info!("ELP2000 tables published ({} terms)", store.total_terms());
                Ok(store)
            }
            Err(_) => {
                warn!("ELP2000 tables were published concurrently, dropping load from {directory}");
                Err(ElpError::AlreadyLoaded)
            }
        }
    }

    /// Resolve a data source into a directory, then [`load`](Elp2000::load) it.
    pub fn load_from(&self, source: &ElpDataSource) -> Result<&CoefficientStore, ElpError> {
        let directory = source.resolve()?;
        self.load(&directory)
    }

    /// Geocentric state of the Moon at an ephemeris time (seconds past J2000).
    ///
    /// Return
    /// ----------
    /// * Position (km) and velocity (km/s), or [`ElpError::NotLoaded`].
    pub fn get_state(&self, et: EphemerisSeconds) -> Result<MoonState, ElpError> {
        Ok(self.store()?.get_state(et))
    }

    pub fn state_at(&self, epoch: &Epoch) -> Result<MoonState, ElpError> {
        Ok(self.store()?.state_at(epoch))
    }

    /// Ecliptic longitude, latitude (radians) and distance (km), with rates per Julian century.
    pub fn spherical_state(&self, et: EphemerisSeconds) -> Result<SphericalState, ElpError> {
        Ok(self.store()?.spherical_state(et))
    }
}
