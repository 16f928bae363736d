pub mod error;
pub mod feature_flags;
pub mod session;

// Dashboard domain
pub mod dashboard;
pub mod profile;
pub mod records;
pub mod relative_time;

pub use error::*;
pub use feature_flags::*;
pub use session::*;

pub use dashboard::*;
pub use profile::*;
pub use records::*;
pub use relative_time::*;
