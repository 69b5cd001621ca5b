use std::{ffi::OsStr, fs, path::{Path, PathBuf}};

// Creates the directory as well, so concurrent tests never share one.
fn create_test_temp_dir() -> PathBuf {
    let tmpdir = std::env::temp_dir();

    let make_file_path = |val| {
        let fname = format!("acb-journal-test-{}-{}", std::process::id(), val);
        tmpdir.join(fname)
    };

    for val in 1..1000000 {
        let path = make_file_path(val);
        if fs::create_dir(&path).is_ok() {
            return path;
        }
    }
    panic!("Could not create a temp directory that does not already exist");
}

/// A fresh directory under the system temp dir, removed when dropped.
pub struct TestDir {
    pub path: PathBuf,
}

impl TestDir {
    pub fn new() -> TestDir {
        TestDir { path: create_test_temp_dir() }
    }

    /// Copies a file from tests/data into this directory.
    pub fn add_data_file(&self, name: &str) -> PathBuf {
        self.add_data_file_as(name, OsStr::new(name))
    }

    /// Copies a file from tests/data into this directory, under `dst_name`.
    pub fn add_data_file_as(&self, name: &str, dst_name: &OsStr) -> PathBuf {
        let src = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/data").join(name);
        let dst = self.path.join(dst_name);
        fs::copy(&src, &dst)
            .unwrap_or_else(|e| panic!("Failed to copy {:?}: {}", src, e));
        dst
    }

    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let dst = self.path.join(name);
        fs::write(&dst, contents).unwrap();
        dst
    }
}

fn cleanup_test_dir(path: &PathBuf) {
    if path.exists() {
        let skip_env_var = "SKIP_TEMP_DIR_CLEANUP_ON_FAIL";
        let skip_del_on_fail = acb_journal::util::sys::env_var_non_empty(skip_env_var);

        if std::thread::panicking() && skip_del_on_fail {
            println!("cleanup_test_dir: panicking. Skipping remove of {}",
                     path.display());
        } else {
            println!("cleanup_test_dir: removing {}. To skip cleanup, set {}",
                     path.display(), skip_env_var);
            let _ = fs::remove_dir_all(path);
        }
    } else {
        println!("cleanup_test_dir: {} did not exist", path.display());
    }
}

impl Drop for TestDir {
    fn drop(&mut self) {
        cleanup_test_dir(&self.path);
    }
}
