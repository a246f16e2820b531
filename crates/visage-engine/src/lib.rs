//! Visage engine crate.
//!
//! Deterministic avatar synthesis: an identity record is hashed into a
//! fixed-length fingerprint, and the fingerprint alone drives every
//! downstream decision (background color, pattern generator, ornament,
//! badge alpha). The same record always produces the same pixels.
//!
//! The sole public entry point is [`composer::compose`]; everything else
//! is exposed so hosts and tests can exercise the pieces directly.

pub mod composer;
pub mod coords;
pub mod error;
pub mod fingerprint;
pub mod generators;
pub mod identity;
pub mod logging;
pub mod paint;
pub mod palette;
pub mod raster;
pub mod texture;

pub use composer::{MIN_IMAGE_SIZE, Resources, compose};
pub use error::ComposeError;
pub use fingerprint::{FINGERPRINT_LEN, Fingerprint, fingerprint};
pub use identity::{IdentityRecord, NameDecomposition};
pub use raster::RasterSurface;
pub use texture::GrainTexture;
