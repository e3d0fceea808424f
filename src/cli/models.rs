use anyhow::Result;

use crate::core::AppConfig;
use crate::llm::ModelRegistry;

pub fn run() -> Result<()> {
    let config = AppConfig::default();
    let registry = ModelRegistry::new(&config);

    for model in registry.list() {
        println!("{}", model);
    }

    Ok(())
}
