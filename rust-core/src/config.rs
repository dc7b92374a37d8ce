// Constants

// Tolerances
pub const LATTICE_TOLERANCE: f64 = 1e-10; // For comparisons of cell parameters and matrices
pub const NIGGLI_EPSILON: f64 = 1e-5; // Relative to V^(2/3), Grosse-Kunstleve et al. (2004)

// Limits
pub const NIGGLI_ITERATION_LIMIT: usize = 100;
pub const MAX_LATTICE_POINT_GROUP_ORDER: usize = 24; // Order of 432, the largest rotation group of a lattice

// Defaults
pub const DEFAULT_MAX_OBLIQUITY: f64 = 3.0; // Degrees
