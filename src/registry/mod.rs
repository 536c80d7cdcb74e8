pub mod activities_registry;

pub use activities_registry::{ActivityRegistry, RegistryError};
