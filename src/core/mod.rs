pub mod agent;
pub mod composer;
pub mod runtime;
pub mod scheduler;

#[cfg(test)]
mod tests;
