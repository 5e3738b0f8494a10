use anyhow::Result;
use std::io::{self, Write};

use crate::config::Config;

use super::util::{mask_api_key, prompt_string_with_default, prompt_u32_with_default, prompt_u64_with_default};

pub(crate) async fn run_setup() -> Result<()> {
    println!("🚀 Welcome to StackGenius Setup!");
    println!("Let's configure your Google Generative AI access.\n");

    let api_key = prompt_api_key()?;

    let mut config = Config::builder().build()?;
    let default_model = config.model.name.clone();
    let default_max_output = config.model.max_output_tokens;
    let default_timeout = config.llm.timeout_secs;

    config.llm.api_key = api_key;
    config.llm.timeout_secs =
        prompt_u64_with_default("⏱️  Enter request timeout in seconds", default_timeout)?;
    config.model.name = prompt_string_with_default("🤖 Enter Gemini model ID", &default_model)?;
    config.model.max_output_tokens =
        prompt_u32_with_default("🔢 Enter max output tokens", default_max_output)?;

    config.validate()?;
    config.save()?;

    println!(
        "\n✅ Configuration saved to {}",
        Config::config_path()?.display()
    );
    println!("📋 Your configuration:");
    println!("   API Key: {}", mask_api_key(&config.llm.api_key));
    println!("   Timeout: {}s", config.llm.timeout_secs);
    println!("   Model: {}", config.model.name);
    println!("   Max Output Tokens: {}", config.model.max_output_tokens);
    println!("\n🎉 Setup complete! You can now use 'stackgenius' like:");
    println!("   stackgenius                                   # interactive form");
    println!("   stackgenius -t web_app 'A todo app'           # one-shot recommendation");
    println!("   echo 'A todo app' | stackgenius -t web_app    # description from stdin");

    Ok(())
}

fn prompt_api_key() -> Result<String> {
    loop {
        print!("🔑 Enter your Google Generative AI API key: ");
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        let key = input.trim();

        if key.is_empty() {
            println!("❌ API key cannot be empty. Please try again.");
            continue;
        }

        return Ok(key.to_string());
    }
}
