pub mod config;
pub mod experiment;
pub mod puzzle;
pub mod search;
pub mod stat;

#[cfg(test)]
mod test_utils;
