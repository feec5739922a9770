// Service abstractions the screen talks to instead of the raw ApiClient

pub mod profile;

pub use profile::{ProfileApiAdapter, ProfileService};
