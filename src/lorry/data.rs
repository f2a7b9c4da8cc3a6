//! Fixed problem instance shipped with the binary.

/// Number of lorries the bricks are split across.
pub const LORRY_COUNT: usize = 3;

/// Weights of the 30 brick groups to load.
pub const BRICK_WEIGHTS: [f64; 30] = [
    3.287, 37.856, 14.348, 12.265, 54.674, 7.858, 82.594, 20.718, 37.189, 72.407, 40.745, 48.012,
    32.788, 12.917, 32.394, 89.51, 43.721, 4.681, 75.317, 41.391, 53.623, 56.557, 95.49, 50.968,
    18.41, 52.727, 80.214, 54.678, 92.533, 70.1,
];
