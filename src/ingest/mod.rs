pub mod dbt;
pub mod file;
