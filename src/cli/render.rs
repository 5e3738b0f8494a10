use colored::*;
use serde_json::Value;

use crate::errors::RecommendError;
use crate::recommend::TechStackRecommendation;

/// Print each section of the recommendation as a titled block, sections in
/// arrival order, attributes in mapping order.
pub(crate) fn render_recommendation(recommendation: &TechStackRecommendation) {
    println!("\n{}", "Recommended Tech Stack".bold().green());

    for (section_name, details) in recommendation {
        let (title, lines) = section_block(section_name, details);
        println!("\n{}", title.bold().cyan());
        for line in lines {
            println!("  {}", line);
        }
    }
    println!();
}

pub(crate) fn render_error(err: &RecommendError) {
    println!("{}", err.to_string().red());
}

/// Title plus body lines for one section. A section that is not an object
/// renders its value on a single line.
fn section_block(name: &str, details: &Value) -> (String, Vec<String>) {
    let title = name.replace('_', " ");
    let lines = match details {
        Value::Object(attributes) => attributes
            .iter()
            .map(|(key, value)| attribute_line(key, value))
            .collect(),
        other => vec![format_attribute_value(other)],
    };
    (title, lines)
}

fn attribute_line(key: &str, value: &Value) -> String {
    format!("{}: {}", capitalize(key), format_attribute_value(value))
}

/// First character uppercased, the rest lowercased.
fn capitalize(key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

fn format_attribute_value(value: &Value) -> String {
    match value {
        Value::Null => "None".to_string(),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
