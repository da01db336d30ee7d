pub mod logger;
pub mod site_config;
