// Lets a fuzz target be built as a plain binary that replays inputs.
//
// Each argument is either a single test case or a directory of them, e.g., a
// corpus or an `artifacts` directory written by `cargo fuzz`.

use std::{
    error::Error,
    ffi::c_int,
    path::{Path, PathBuf},
    {env, fs, ptr},
};

extern "C" {
    // Initializer provided by libfuzzer-sys for creating an
    // appropriate panic hook.
    fn LLVMFuzzerInitialize(
        argc: *const isize,
        argv: *const *const *const u8,
    ) -> c_int;

    // This is a magic function defined by libfuzzer-sys; use for replay.
    #[allow(improper_ctypes)]
    fn rust_fuzzer_test_input(input: &[u8]) -> i32;
}

/// Returns the test case paths named by `arg`.
fn testcases(arg: &Path) -> Result<Vec<PathBuf>, Box<dyn Error>> {
    if !arg.is_dir() {
        return Ok(vec![arg.to_path_buf()]);
    }
    let mut paths = vec![];
    for entry in fs::read_dir(arg)? {
        let path = entry?.path();
        if path.is_file() {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}

#[allow(unused)]
pub fn main() -> Result<(), Box<dyn Error>> {
    unsafe {
        let _ = LLVMFuzzerInitialize(ptr::null(), ptr::null());
    }
    let mut count = 0usize;
    for arg in env::args_os().skip(1) {
        for path in testcases(Path::new(&arg))? {
            let content = fs::read(&path)?;
            unsafe {
                let _ = rust_fuzzer_test_input(&content);
            }
            count += 1;
        }
    }
    println!("Replayed {count} test cases without failure.");
    if count == 0 {
        println!("Pass test case files or corpus directories to replay.");
    }
    Ok(())
}

#[macro_export]
macro_rules! maybe_define_main {
    () => {
        #[cfg(not(fuzzing))]
        fn main() {
            let _ = $crate::shim::main();
        }
    };
}
