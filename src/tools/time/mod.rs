mod clock;
pub use clock::*;

mod current_time;
pub use current_time::*;

mod error;
pub use error::*;
