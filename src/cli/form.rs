use anyhow::Result;
use colored::*;
use std::io::{self, Write};

use crate::config::Config;
use crate::recommend::{self, SOFTWARE_TYPE_CHOICES, SoftwareType};

use super::render;

/// `None` for empty or all-whitespace input, otherwise the trimmed string.
pub(crate) fn normalize_credential(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Trimmed description; empty is permitted and forwarded as-is.
pub(crate) fn normalize_description(raw: &str) -> String {
    raw.trim().to_string()
}

/// The interactive form. One loop iteration is one submission cycle:
/// collect credential, description, and software type, confirm, fetch,
/// display. Without a credential the remaining sections never render.
pub(crate) async fn run_form(config: &Config, verbose: bool) -> Result<()> {
    print_banner();

    loop {
        let configured = normalize_credential(&config.llm.api_key);
        let Some(credential) = prompt_credential(configured.as_deref())? else {
            println!(
                "{}",
                "No API key entered. Run 'stackgenius --setup' to save one.".yellow()
            );
            return Ok(());
        };

        let description = prompt_description()?;
        let software_type = prompt_software_type()?;

        if prompt_submit()? {
            match recommend::submit(config, &credential, software_type, &description, verbose)
                .await
            {
                Ok(recommendation) => render::render_recommendation(&recommendation),
                Err(err) => render::render_error(&err),
            }
        } else {
            println!("Submission cancelled.");
        }

        if !prompt_run_again()? {
            break;
        }
        println!();
    }

    Ok(())
}

fn print_banner() {
    println!("{}", "StackGenius".bold().magenta());
    println!(
        "{}",
        "Empower Your Projects with StackGenius: Discover Your Ideal Tech Stack!".dimmed()
    );
    println!();
}

fn prompt_credential(existing: Option<&str>) -> Result<Option<String>> {
    print!(
        "🔑 Google Generative AI API key{}: ",
        existing
            .map(|_| " (leave blank to use configured key)")
            .unwrap_or("")
    );
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    match normalize_credential(&input) {
        Some(key) => Ok(Some(key)),
        None => Ok(existing.map(str::to_string)),
    }
}

fn prompt_description() -> Result<String> {
    print!("📝 Project description (optional): ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(normalize_description(&input))
}

fn prompt_software_type() -> Result<SoftwareType> {
    println!("\n📦 Software Type:\n");
    for (idx, choice) in SOFTWARE_TYPE_CHOICES.iter().enumerate() {
        println!("  {}. {}", idx + 1, choice.label());
    }

    loop {
        print!(
            "\nSelect software type (1-{}, default 1): ",
            SOFTWARE_TYPE_CHOICES.len()
        );
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        let trimmed = input.trim();

        if trimmed.is_empty() {
            return Ok(SOFTWARE_TYPE_CHOICES[0]);
        }

        match trimmed.parse::<usize>() {
            Ok(num) if (1..=SOFTWARE_TYPE_CHOICES.len()).contains(&num) => {
                return Ok(SOFTWARE_TYPE_CHOICES[num - 1]);
            }
            _ => println!(
                "❌ Please enter a number between 1 and {}.",
                SOFTWARE_TYPE_CHOICES.len()
            ),
        }
    }
}

fn prompt_submit() -> Result<bool> {
    print!("\nSubmit? [Y/n]: ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    let answer = input.trim().to_lowercase();
    Ok(!matches!(answer.as_str(), "n" | "no"))
}

fn prompt_run_again() -> Result<bool> {
    print!("\nGenerate another recommendation? [y/N]: ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    let answer = input.trim().to_lowercase();
    Ok(matches!(answer.as_str(), "y" | "yes"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credential_is_absent_for_empty_and_whitespace_input() {
        assert_eq!(normalize_credential(""), None);
        assert_eq!(normalize_credential("   "), None);
        assert_eq!(normalize_credential("\t\n"), None);
    }

    #[test]
    fn credential_is_trimmed() {
        assert_eq!(
            normalize_credential("  abc123\n"),
            Some("abc123".to_string())
        );
    }

    #[test]
    fn description_is_trimmed_and_may_be_empty() {
        assert_eq!(normalize_description("  A todo app \n"), "A todo app");
        assert_eq!(normalize_description("   "), "");
    }
}
