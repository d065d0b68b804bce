pub mod content;
pub mod io;
pub mod models;

// Re-export key types for easier usage
pub use content::*;
pub use io::*;
pub use models::*;
