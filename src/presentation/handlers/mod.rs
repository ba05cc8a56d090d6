mod health;
mod root;
mod tasks;

pub use health::{SERVICE_NAME, TASK_ENDPOINTS, health_handler};
pub use root::root_handler;
pub use tasks::{
    detect_topics_handler, extract_keywords_handler, sentiment_handler, structure_data_handler,
    summarize_handler, translate_handler,
};
