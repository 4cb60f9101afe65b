// Our Real scalar type:
#[cfg(feature = "f32")]
pub type Real = f32;
#[cfg(feature = "f64")]
pub type Real = f64;

/// Tolerance used when comparing generated geometry.
#[cfg(feature = "f32")]
pub const EPSILON: Real = 1e-4;
/// Tolerance used when comparing generated geometry.
#[cfg(feature = "f64")]
pub const EPSILON: Real = 1e-8;

// Sqrt 3
/// √3, the horizontal stretch of both ground axes in the isometric view
#[cfg(feature = "f32")]
pub const SQRT_3: Real = 1.732_050_8;
/// √3, the horizontal stretch of both ground axes in the isometric view
#[cfg(feature = "f64")]
pub const SQRT_3: Real = 1.732_050_807_568_877_2;

/// The golden ratio (φ), used for icosahedron vertex placement
#[cfg(feature = "f32")]
pub const PHI: Real = 1.618_034;
/// The golden ratio (φ), used for icosahedron vertex placement
#[cfg(feature = "f64")]
pub const PHI: Real = 1.618_033_988_749_895;
