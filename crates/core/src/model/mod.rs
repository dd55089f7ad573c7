mod answer;
mod feedback;
mod operator;
mod problem;

pub use answer::{ANSWER_SCALE, Answer, AnswerError};
pub use feedback::Feedback;
pub use operator::Operator;
pub use problem::{MAX_OPERAND, Problem, ProblemError};
