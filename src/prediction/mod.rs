pub mod format;
pub mod formatter;
pub mod model;
pub mod rank;

#[cfg(test)]
mod tests;
