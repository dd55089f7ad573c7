#![forbid(unsafe_code)]

pub mod error;
pub mod evaluator;
pub mod generator;
pub mod model;
pub mod settings;
pub mod time;

pub use error::Error;
pub use evaluator::{Evaluation, evaluate, evaluate_response};
pub use generator::ProblemGenerator;
pub use settings::{QuizSettings, SettingsError};
pub use time::Clock;
