pub mod trivia_flow;

pub use trivia_flow::{
    CategoriesPayload, CategoryPayload, CreatedPayload, DeletedPayload, QuestionListPayload,
    QuizPayload, TriviaFlow,
};
