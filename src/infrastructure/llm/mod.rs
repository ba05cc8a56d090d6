mod mock_deriver;
mod openai_deriver;

pub use mock_deriver::{FailingDeriver, MockDeriver};
pub use openai_deriver::OpenAiDeriver;
