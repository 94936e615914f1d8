pub mod noise_pass;
pub mod params;

pub use noise_pass::{NoisePass, NOISE_WGSL};
pub use params::NoiseUniforms;
