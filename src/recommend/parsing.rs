/// Pull the first complete JSON object out of model output. Tolerates code
/// fences and surrounding prose; braces inside string literals do not count
/// toward nesting depth.
pub(crate) fn extract_json_object(input: &str) -> Option<String> {
    let start = input.find('{')?;

    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;
    for (idx, ch) in input[start..].char_indices() {
        if in_string {
            match ch {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match ch {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(input[start..=start + idx].to_string());
                }
            }
            _ => {}
        }
    }

    None
}
