//! Interactive answers via dialoguer.

use std::io::ErrorKind;

use dialoguer::{Confirm, Error as DialoguerError, Input, Select};

use crate::domain::identity::{is_valid_scope, name_problems};
use crate::domain::{AppError, LanguageVariant};
use crate::ports::Prompter;

#[derive(Debug, Clone, Copy, Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

fn prompt_error(what: &str, err: DialoguerError) -> Result<Option<String>, AppError> {
    match err {
        DialoguerError::IO(err) if err.kind() == ErrorKind::Interrupted => Ok(None),
        err => Err(AppError::Prompt(format!("Failed to read {}: {}", what, err))),
    }
}

impl Prompter for DialoguerPrompter {
    fn package_name(&self) -> Result<Option<String>, AppError> {
        let result = Input::<String>::new()
            .with_prompt("What package name do you want?")
            .validate_with(|value: &String| -> Result<(), String> {
                let problems = name_problems(value);
                if problems.is_empty() {
                    Ok(())
                } else {
                    Err(format!(
                        "Cannot create a project called \"{}\" because of npm naming restrictions: {}",
                        value,
                        problems.join("; ")
                    ))
                }
            })
            .interact_text();

        match result {
            Ok(value) => Ok(Some(value)),
            Err(err) => prompt_error("package name", err),
        }
    }

    fn scope(&self) -> Result<Option<String>, AppError> {
        let result = Input::<String>::new()
            .with_prompt("What is your GitHub username or organization?")
            .validate_with(|value: &String| -> Result<(), &str> {
                if is_valid_scope(value) {
                    Ok(())
                } else {
                    Err("Use a GitHub user or organization name (letters, digits, '-' or '_')")
                }
            })
            .interact_text();

        match result {
            Ok(value) => Ok(Some(value)),
            Err(err) => prompt_error("scope", err),
        }
    }

    fn language_variant(&self) -> Result<Option<LanguageVariant>, AppError> {
        let items: Vec<&str> =
            LanguageVariant::ALL.iter().map(|variant| variant.display_name()).collect();
        let selection = Select::new()
            .with_prompt("Which JavaScript flavour do you want to write?")
            .items(&items)
            .default(1)
            .interact_opt()
            .map_err(|err| AppError::Prompt(format!("Failed to select language: {}", err)))?;

        Ok(selection.map(|index| LanguageVariant::ALL[index]))
    }

    fn will_use_in_browser(&self) -> Result<Option<bool>, AppError> {
        Confirm::new()
            .with_prompt("Will this package be used in a browser?")
            .default(false)
            .interact_opt()
            .map_err(|err| AppError::Prompt(format!("Failed to read browser choice: {}", err)))
    }
}
