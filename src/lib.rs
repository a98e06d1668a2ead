pub mod configs;
pub mod dbs;
pub mod services;
pub mod utils;
