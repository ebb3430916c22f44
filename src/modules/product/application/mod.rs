pub mod ports;
pub mod product_use_cases;
pub mod service;
