pub mod paginator;
pub mod quiz_selector;
pub mod request_body;
pub mod search_filter;

pub use paginator::{paginate, parse_page, DEFAULT_PAGE, PAGE_SIZE};
pub use quiz_selector::{next_question, QuizRequest, Selection};
pub use request_body::parse_json_body;
pub use search_filter::{normalize_term, search};
