pub mod client;
pub mod errors;
pub mod persona;
pub mod prompt;

pub use client::{CommentaryGenerator, OpenAiGenerator};
pub use errors::GenerationError;
pub use persona::{InvalidPersona, Persona, PersonaConfig};
pub use prompt::{ChatMessage, CommentaryRequest, Role};

#[cfg(test)]
pub use client::MockCommentaryGenerator;
