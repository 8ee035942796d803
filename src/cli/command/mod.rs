pub mod pad;
pub mod patch;
pub mod poles;

pub use pad::pad;
pub use patch::patch;
pub use poles::poles;
