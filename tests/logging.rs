// tests/logging.rs
mod common;

use t20_insights::log::{ init_file, init_stderr };

#[test]
fn second_subscriber_is_refused_without_failing() {
    init_stderr(false);
    init_stderr(true);

    let path = common::tmp_dir("logging").join("nested").join("debug.log");
    init_file(&path).unwrap();
    assert!(path.exists());
}
