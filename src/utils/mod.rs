mod error;
mod topology;

pub use error::Error;
pub use topology::Topology;
