mod debug;
mod quiz;
mod timer_tasks;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use debug::DebugPanel;
pub use quiz::QuizView;
