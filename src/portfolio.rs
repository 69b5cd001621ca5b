pub mod bookkeeping;
pub mod csv_common;
pub mod io;
pub mod model;
pub mod render;

pub use self::bookkeeping::*;
pub use self::model::gains::*;
pub use self::model::holding::*;
pub use self::model::journal::*;
