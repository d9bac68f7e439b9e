//! End-to-end marker lifecycle through the public API.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use pidmarker_core::{
    MarkerOptions, MarkerStatus, PathError, PidError, PidMarker, ProcessEnvironment, inspect,
};

/// Environment with a fixed directory and pid that records termination requests.
struct FixedEnv {
    dir: PathBuf,
    pid: u32,
    terminations: AtomicUsize,
    timeline: Mutex<Vec<&'static str>>,
}

impl FixedEnv {
    fn new(dir: &Path, pid: u32) -> Arc<Self> {
        Arc::new(Self {
            dir: dir.to_path_buf(),
            pid,
            terminations: AtomicUsize::new(0),
            timeline: Mutex::new(Vec::new()),
        })
    }

    fn record(&self, step: &'static str) {
        self.timeline.lock().unwrap().push(step);
    }
}

impl ProcessEnvironment for FixedEnv {
    fn current_pid(&self) -> u32 {
        self.pid
    }

    fn program_name(&self) -> Result<String, PathError> {
        Ok("fixture".to_string())
    }

    fn default_marker_directory(&self) -> Result<PathBuf, PathError> {
        Ok(self.dir.clone())
    }

    fn terminate(&self, _code: i32) {
        self.terminations.fetch_add(1, Ordering::SeqCst);
        self.record("terminate");
    }
}

#[test]
fn explicit_path_and_pid() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("app.pid");

    let options = MarkerOptions::full_path(&path, 4242).with_exit_on_write_error(false);
    let mut marker = PidMarker::open(options).unwrap();

    assert_eq!(marker.path(), path);
    assert_eq!(marker.pid(), 4242);
    assert_eq!(fs::read_to_string(&path).unwrap(), "4242");
    assert!(marker.verify());

    marker.close();
    assert!(!path.exists());
}

#[test]
fn full_path_string_is_used_verbatim() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("custom.name");
    let env = FixedEnv::new(&tmp.path().join("unused"), 17);

    let marker = PidMarker::builder(MarkerOptions::path_or_program(path.to_str().unwrap()))
        .environment(env)
        .open()
        .unwrap();

    assert_eq!(marker.path(), path);
    assert_eq!(marker.pid(), 17);
}

#[test]
fn bare_program_name_joins_default_dir() {
    let tmp = tempfile::tempdir().unwrap();
    let env = FixedEnv::new(tmp.path(), 17);

    let marker = PidMarker::builder(MarkerOptions::path_or_program("daemon"))
        .environment(env)
        .open()
        .unwrap();

    assert_eq!(marker.path(), tmp.path().join("daemon.pid"));
}

#[test]
fn default_options_use_program_name() {
    let tmp = tempfile::tempdir().unwrap();
    let env = FixedEnv::new(tmp.path(), 17);

    let marker = PidMarker::builder(MarkerOptions::new())
        .environment(env)
        .open()
        .unwrap();

    assert_eq!(marker.path(), tmp.path().join("fixture.pid"));
    assert_eq!(fs::read_to_string(marker.path()).unwrap(), "17");
}

#[test]
fn inspect_tracks_lifecycle() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("inspect.pid");

    let options =
        MarkerOptions::full_path(&path, std::process::id()).with_exit_on_write_error(false);
    let mut marker = PidMarker::open(options).unwrap();
    assert_eq!(inspect(&path), MarkerStatus::Running(std::process::id()));

    marker.close();
    assert_eq!(inspect(&path), MarkerStatus::Missing);
}

#[test]
fn unwritable_dir_without_exit_policy() {
    let tmp = tempfile::tempdir().unwrap();
    let env = FixedEnv::new(&tmp.path().join("missing"), 17);

    let result = PidMarker::builder(MarkerOptions::program("daemon").with_exit_on_write_error(false))
        .environment(Arc::clone(&env) as Arc<dyn ProcessEnvironment>)
        .open();

    assert!(matches!(result, Err(PidError::Verification { pid: 17, .. })));
    assert_eq!(env.terminations.load(Ordering::SeqCst), 0);
}

#[test]
fn unwritable_dir_with_exit_policy_notifies_before_terminating() {
    let tmp = tempfile::tempdir().unwrap();
    let env = FixedEnv::new(&tmp.path().join("missing"), 17);
    let events = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&events);
    let observed_env = Arc::clone(&env);

    let result = PidMarker::builder(MarkerOptions::program("daemon"))
        .environment(Arc::clone(&env) as Arc<dyn ProcessEnvironment>)
        .on_write_error(move |event| {
            observed_env.record("observer");
            sink.lock().unwrap().push(event.clone());
        })
        .open();

    assert!(result.is_err());
    assert_eq!(env.terminations.load(Ordering::SeqCst), 1);
    assert_eq!(*env.timeline.lock().unwrap(), vec!["observer", "terminate"]);

    let events = events.lock().unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].path, tmp.path().join("missing").join("daemon.pid"));
    assert_eq!(events[0].pid, 17);
}

#[test]
fn close_after_external_removal() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("gone.pid");
    let options = MarkerOptions::full_path(&path, 5).with_exit_on_write_error(false);
    let mut marker = PidMarker::open(options).unwrap();

    fs::remove_file(&path).unwrap();
    assert!(!marker.verify());

    marker.close();
    marker.close();
    assert!(!path.exists());
}
