/// Alias to a scalar floating type.
pub type Float = f64;
