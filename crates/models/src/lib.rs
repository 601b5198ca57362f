pub mod errors;
pub mod db;
pub mod movie;
pub mod user;

#[cfg(test)]
mod tests;
