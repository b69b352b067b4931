pub mod logger;

pub use logger::LoggerGuard;
