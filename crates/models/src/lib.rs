pub mod errors;
pub mod db;
pub mod soda;

#[cfg(test)]
mod tests;
