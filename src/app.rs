pub mod approot;
pub mod outfmt;

pub use self::approot::{run_acb_app_for_files, Options};

// Version is of the format 0.YY.MM[.i], or 0.year.month.optional_minor_increment
// This allows for a more immediate reference for when the last time the app
// was updated.
pub const ACB_APP_VERSION: &str = "0.26.10";
