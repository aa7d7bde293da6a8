mod tool;
pub use tool::*;

mod tool_dyn;
pub use tool_dyn::*;

mod declaration;
pub use declaration::*;

mod tool_output;
pub use tool_output::*;

mod tools_vec;

mod time;
pub use time::*;

mod news;
pub use news::*;

mod error;
pub use error::*;
