// Standalone components (no primitives)
pub mod badge;
pub mod button;
pub mod card;
pub mod input;
pub mod sheet;
pub mod skeleton;

// Primitive wrappers
pub mod avatar;
pub mod progress;
pub mod separator;
pub mod tooltip;

// Depends on button and separator styles
pub mod sidebar;

pub use avatar::*;
pub use badge::*;
pub use button::*;
pub use card::*;
pub use input::*;
pub use progress::*;
pub use separator::*;
pub use sheet::*;
pub use sidebar::*;
pub use skeleton::*;
pub use tooltip::*;
