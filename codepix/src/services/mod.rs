mod assistant;

pub use assistant::CodeAssistant;
