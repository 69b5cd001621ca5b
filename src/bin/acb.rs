use std::io::Write;

fn main() {
    if acb_journal::cmd::command_main().is_err() {
        let _ = std::io::stdout().flush();
        let _ = std::io::stderr().flush();
        std::process::exit(1);
    }
}
