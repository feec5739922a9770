pub mod profile;
pub mod theme;

pub use profile::view_profile;
