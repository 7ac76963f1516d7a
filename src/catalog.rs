//! Catalog building: walk the audio tree, read tags, link lyrics, write JSON.

mod build;
mod links;
mod model;
mod scan;
mod tags;

pub use build::build_catalog;

#[cfg(test)]
mod fixtures;
