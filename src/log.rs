use std::sync::Mutex;

use lazy_static::lazy_static;

lazy_static! {
    static ref VERBOSE: Mutex<bool> = Mutex::new(false);
}

pub fn set_verbose(verb: bool) {
    if let Ok(mut var) = VERBOSE.lock() {
        *var = verb;
    }
}

pub fn get_verbose() -> bool {
    VERBOSE.lock().map(|v| *v).unwrap_or(false)
}

// Prints a line to stdout only when verbose output is on.
#[macro_export]
macro_rules! verboseln {
    ($($arg:tt)*) => {{
        if $crate::log::get_verbose() {
            println!($($arg)*);
        }
    }};
}

// Writes a line to a WriteHandle (or any io::Write), ignoring write failures.
// There is nowhere left to report an error about failing to report an error.
#[macro_export]
macro_rules! write_errln {
    ($w:expr, $($arg:tt)*) => {{
        use std::io::Write as _;
        let _ = writeln!($w, $($arg)*);
    }};
}

#[cfg(test)]
mod tests {
    use crate::util::rw::WriteHandle;

    #[test]
    fn test_verboseln() {
        verboseln!("something {}", 1);
    }

    #[test]
    fn test_write_errln() {
        let (mut h, buff) = WriteHandle::string_buff_write_handle();
        write_errln!(h, "Warning: {}", "bad row");
        write_errln!(h, "{e}", e = 2);
        assert_eq!(buff.borrow().as_str(), "Warning: bad row\n2\n");
    }
}
