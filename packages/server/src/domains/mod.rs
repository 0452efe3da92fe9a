// Business domains
pub mod presence;
