//! Numerische Bausteine: Fresnel-Integrale, adaptive Quadratur und der
//! geschlossene Klothoiden-Löser.

pub mod euler_spiral;
pub mod fresnel;
pub mod quadrature;

pub use euler_spiral::EulerSpiral;
pub use fresnel::fresnel;
pub use quadrature::adaptive_simpson;
