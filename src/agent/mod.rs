mod descriptor;
pub use descriptor::*;

mod builder;
pub use builder::*;

mod presets;
pub use presets::*;

mod error;
pub use error::*;
