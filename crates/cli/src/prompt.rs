//! Interactive answers using dialoguer.

use async_trait::async_trait;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Select};
use pl_core::init::{InitError, InitResult, Prompter, DEFAULT_PROJECT_DIR, EDITIONS, STARTERKITS};
use pl_protocol::answers::{Answers, InitOptions};
use std::path::PathBuf;

/// Asks for the project directory, edition and starterkit on the terminal.
///
/// Answering "no" to the final confirmation starts over. Pressing Esc on a
/// package list stops asking and falls back to the defaults.
#[derive(Debug, Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Prompter for DialoguerPrompter {
    async fn ask(&self, options: &InitOptions) -> InitResult<Answers> {
        let options = options.clone();
        tokio::task::spawn_blocking(move || ask_blocking(&options))
            .await
            .map_err(|e| InitError::Prompt(e.to_string()))?
    }
}

fn ask_blocking(options: &InitOptions) -> InitResult<Answers> {
    let theme = ColorfulTheme::default();

    loop {
        let project_dir: String = Input::with_theme(&theme)
            .with_prompt("Please specify a directory for your PatternLab project")
            .default(DEFAULT_PROJECT_DIR.to_string())
            .interact_text()
            .map_err(prompt_error)?;

        let Some(edition) = select_package(
            &theme,
            "Which edition do you want to use?",
            EDITIONS,
            options.edition.as_deref(),
        )?
        else {
            return Ok(Answers::default());
        };

        let Some(starterkit) = select_package(
            &theme,
            "Which starterkit do you want to use?",
            STARTERKITS,
            options.starterkit.as_deref(),
        )?
        else {
            return Ok(Answers::default());
        };

        let happy = Confirm::with_theme(&theme)
            .with_prompt("Are you happy with your choices?")
            .default(true)
            .interact()
            .map_err(prompt_error)?;

        if happy {
            return Ok(Answers {
                project_dir: Some(PathBuf::from(project_dir)),
                edition,
                starterkit,
            });
        }
    }
}

/// Pick one of `choices` or "None".
///
/// Returns `None` when the user pressed Esc, `Some(None)` for "None".
fn select_package(
    theme: &ColorfulTheme,
    prompt: &str,
    choices: &[(&str, &str)],
    preselected: Option<&str>,
) -> InitResult<Option<Option<String>>> {
    let mut labels: Vec<&str> = choices.iter().map(|(_, label)| *label).collect();
    labels.push("None");

    let selection = Select::with_theme(theme)
        .with_prompt(prompt)
        .items(&labels)
        .default(default_index(choices, preselected))
        .interact_opt()
        .map_err(prompt_error)?;

    Ok(selection.map(|index| package_at(choices, index)))
}

/// Position of `preselected` in `choices`, or the first entry.
fn default_index(choices: &[(&str, &str)], preselected: Option<&str>) -> usize {
    preselected
        .and_then(|id| choices.iter().position(|(choice, _)| *choice == id))
        .unwrap_or(0)
}

/// Package id for a list index; the index past the end is "None".
fn package_at(choices: &[(&str, &str)], index: usize) -> Option<String> {
    choices.get(index).map(|(id, _)| id.to_string())
}

fn prompt_error(err: dialoguer::Error) -> InitError {
    InitError::Prompt(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_index() {
        assert_eq!(default_index(EDITIONS, None), 0);
        assert_eq!(default_index(EDITIONS, Some("@pattern-lab/edition-twig")), 2);
        assert_eq!(default_index(STARTERKITS, Some("not-listed")), 0);
    }

    #[test]
    fn test_package_at() {
        assert_eq!(
            package_at(EDITIONS, 0).as_deref(),
            Some("@pattern-lab/edition-node")
        );
        assert_eq!(package_at(EDITIONS, EDITIONS.len()), None);
    }
}
