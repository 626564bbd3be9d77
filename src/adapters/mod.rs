// Adapters layer: concrete implementations of the domain ports.

pub mod console;
pub mod openai;

pub use console::ConsoleTerminal;
pub use openai::OpenAiClient;
