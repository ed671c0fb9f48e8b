
pub use fake_locator::FakeLocator;
pub use fake_process_runner::FakeProcessRunner;
pub use recording_pause::RecordingPause;
