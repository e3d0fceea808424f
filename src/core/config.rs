use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Model identifiers clients may request, in the order they are
    /// reported by the models endpoint
    pub models: Vec<String>,
    pub openai_api_hostname: String,
    pub openai_api_key: String,
    pub upload_dir: String,
}

/// Split a comma separated model list, dropping empty entries
fn parse_model_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|model| !model.is_empty())
        .map(str::to_string)
        .collect()
}

impl Default for AppConfig {
    fn default() -> Self {
        let storage_path = env::var("CONFAB_STORAGE_PATH").unwrap_or("./".to_string());
        let upload_dir = format!("{}/uploads", storage_path);
        let models = env::var("CONFAB_MODELS")
            .map(|raw| parse_model_list(&raw))
            .unwrap_or_else(|_| vec!["gpt-4.1-mini".to_string(), "gpt-4o".to_string()]);
        let openai_api_hostname =
            env::var("CONFAB_LLM_HOST").unwrap_or_else(|_| "https://api.openai.com".to_string());
        let openai_api_key =
            env::var("OPENAI_API_KEY").unwrap_or_else(|_| "thiswontworkforopenai".to_string());

        Self {
            models,
            openai_api_hostname,
            openai_api_key,
            upload_dir,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_model_list() {
        assert_eq!(
            parse_model_list("model_a,model_b,model_c"),
            vec!["model_a", "model_b", "model_c"]
        );
    }

    #[test]
    fn test_parse_model_list_trims_whitespace() {
        assert_eq!(
            parse_model_list(" gpt-4o , gpt-4.1-mini "),
            vec!["gpt-4o", "gpt-4.1-mini"]
        );
    }

    #[test]
    fn test_parse_model_list_drops_empty_entries() {
        assert_eq!(parse_model_list("gpt-4o,,"), vec!["gpt-4o"]);
    }
}
