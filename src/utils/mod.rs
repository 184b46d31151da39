pub mod database;
pub mod extract;
pub mod validation;

#[cfg(test)]
pub mod testing;
