pub mod fixture;
pub mod paths;

pub use fixture::Fixture;
pub use paths::ConfigPaths;
