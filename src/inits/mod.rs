pub(crate) mod precomputed;
pub(crate) mod randomuniform;
