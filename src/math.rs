//! Float helpers for unit rescaling.
//! If the `libm` feature is enabled, this just exports the required function.
//! If the `std` feature is enabled, this converts the syntax from the std variety: `f.round()` into
//! the `libm` equiv. `round(f)`.

#[cfg(feature = "libm")]
pub(crate) use libm::round;

#[cfg(feature = "std")]
pub(crate) fn round(f: f64) -> f64 {
    f.round()
}
