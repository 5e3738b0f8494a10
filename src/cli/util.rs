use anyhow::Result;
use std::io::{self, IsTerminal, Read, Write};

/// Description text piped into stdin, if any. `None` on a terminal or for
/// whitespace-only input.
pub(crate) fn read_piped_stdin() -> Result<Option<String>> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        return Ok(None);
    }

    let mut buffer = String::new();
    stdin.lock().read_to_string(&mut buffer)?;

    if buffer.trim().is_empty() {
        Ok(None)
    } else {
        Ok(Some(buffer))
    }
}

pub(crate) fn prompt_string_with_default(prompt: &str, default: &str) -> Result<String> {
    print!("{prompt} (default: {default}): ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    let trimmed = input.trim();

    if trimmed.is_empty() {
        Ok(default.to_string())
    } else {
        Ok(trimmed.to_string())
    }
}

pub(crate) fn prompt_u32_with_default(prompt: &str, default: u32) -> Result<u32> {
    loop {
        print!("{prompt} (default: {default}): ");
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        let trimmed = input.trim();

        if trimmed.is_empty() {
            return Ok(default);
        }

        match trimmed.parse::<u32>() {
            Ok(value) if value > 0 => return Ok(value),
            Ok(_) => println!("❌ Value must be greater than zero."),
            Err(_) => println!("❌ Please enter a valid number."),
        }
    }
}

pub(crate) fn prompt_u64_with_default(prompt: &str, default: u64) -> Result<u64> {
    loop {
        print!("{prompt} (default: {default}): ");
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        let trimmed = input.trim();

        if trimmed.is_empty() {
            return Ok(default);
        }

        match trimmed.parse::<u64>() {
            Ok(value) if value > 0 => return Ok(value),
            Ok(_) => println!("❌ Value must be greater than zero."),
            Err(_) => println!("❌ Please enter a valid number."),
        }
    }
}

/// Show only a short prefix of the key in summaries.
pub(crate) fn mask_api_key(key: &str) -> String {
    if key.is_empty() {
        return "(not set)".to_string();
    }

    let visible: String = key.chars().take(6).collect();
    format!("{visible}***")
}
