//! Blocking user prompts.
//!
//! The admin panel reports every outcome with a modal alert and asks before
//! deleting. Implementations decide how those surface.

pub trait Prompter: Send + Sync {
    /// Show a message the user must acknowledge.
    fn alert(&self, message: &str);

    /// Ask a yes/no question. `true` means the user accepted.
    fn confirm(&self, message: &str) -> bool;
}
