#![doc = include_str!("../README.md")]
#![allow(dead_code)]

pub mod fixtures;
pub mod geo;
pub mod profile;
pub mod restriction;
pub mod route;
pub mod store;
pub mod util;

pub use route::*;

/// Top-level error uniting every module's failure modes. Each module
/// error converts in through the `impl_err!` macro at its definition.
#[derive(Debug)]
pub enum Error {
    Geo(geo::GeoError),
    Profile(profile::ProfileError),
    Route(route::RouteError),
    Store(store::StoreError),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Geo(geo) => write!(f, "{}", geo),
            Error::Profile(profile) => write!(f, "{}", profile),
            Error::Route(route) => write!(f, "{}", route),
            Error::Store(store) => write!(f, "{}", store),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
