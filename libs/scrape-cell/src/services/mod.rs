pub mod extract;
pub mod site;

pub use site::SiteClient;
