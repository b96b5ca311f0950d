//! Configuration and path management for matricula

pub mod messages;
pub mod paths;
pub mod settings;

pub use messages::MessageCatalog;
pub use paths::MatriculaPaths;
pub use settings::Settings;
