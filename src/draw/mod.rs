pub mod geometry;
pub mod teardrop;
