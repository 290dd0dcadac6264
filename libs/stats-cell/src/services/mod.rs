pub mod normalize;
pub mod platform;
pub mod r6data;

pub use platform::map_platform;
pub use r6data::R6DataClient;
