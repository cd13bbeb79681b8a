pub mod model;
pub mod normalize;

#[cfg(test)]
mod normalize_test;
