//! Prompt collaborator.
//!
//! Interactive front ends implement [`Prompter`] to turn options into
//! answers. The choice lists here are shared by every prompter so the CLI and
//! any other front end offer the same packages.

use super::error::InitResult;
use async_trait::async_trait;
use pl_protocol::answers::{Answers, InitOptions};

/// Editions offered by interactive prompts: `(package id, label)`.
pub const EDITIONS: &[(&str, &str)] = &[
    ("@pattern-lab/edition-node", "edition-node (Mustache, Node)"),
    ("@pattern-lab/edition-node-gulp", "edition-node-gulp (Mustache, Gulp)"),
    ("@pattern-lab/edition-twig", "edition-twig (Twig, PHP)"),
];

/// Starterkits offered by interactive prompts: `(package id, label)`.
pub const STARTERKITS: &[(&str, &str)] = &[
    ("@pattern-lab/starterkit-mustache-demo", "starterkit-mustache-demo"),
    ("@pattern-lab/starterkit-mustache-base", "starterkit-mustache-base"),
    ("@pattern-lab/starterkit-handlebars-demo", "starterkit-handlebars-demo"),
    ("@pattern-lab/starterkit-twig-demo", "starterkit-twig-demo"),
    ("starterkit-mustache-bootstrap", "starterkit-mustache-bootstrap"),
    ("starterkit-mustache-foundation", "starterkit-mustache-foundation"),
    ("starterkit-mustache-materialdesign", "starterkit-mustache-materialdesign"),
    ("starterkit-mustache-acidtest", "starterkit-mustache-acidtest"),
];

/// Collects answers for a run that was started without a project directory.
#[async_trait]
pub trait Prompter: Send + Sync {
    /// May suspend indefinitely waiting for the user.
    async fn ask(&self, options: &InitOptions) -> InitResult<Answers>;
}

/// Non-interactive prompter: answers are the options as given.
///
/// Missing values fall back to the defaults applied during validation.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultsPrompter;

#[async_trait]
impl Prompter for DefaultsPrompter {
    async fn ask(&self, options: &InitOptions) -> InitResult<Answers> {
        Ok(Answers::from(options.clone()))
    }
}
