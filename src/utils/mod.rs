#[macro_use]
pub mod macros;
#[macro_use]
pub mod logger;
pub mod commitment;
