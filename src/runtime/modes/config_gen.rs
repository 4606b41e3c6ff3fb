//! Config generation mode

use std::path::Path;

use anyhow::{Result, bail};

use crate::config::StaticConfig;

/// 写出示例配置文件；目标已存在且未指定 `force` 时拒绝覆盖
pub fn run_config_gen(output: &str, force: bool) -> Result<()> {
    if Path::new(output).exists() && !force {
        bail!("{} already exists (use --force to overwrite)", output);
    }

    let sample = StaticConfig::generate_sample_config();
    let config: StaticConfig = toml::from_str(&sample)?;
    config.save_to_file(output)?;

    println!("Sample configuration written to {}", output);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refuses_to_overwrite() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        let path_str = path.to_str().unwrap();

        run_config_gen(path_str, false).unwrap();
        assert!(run_config_gen(path_str, false).is_err());
        assert!(run_config_gen(path_str, true).is_ok());

        let written = StaticConfig::load(path_str).unwrap();
        assert_eq!(written.database.database_name, "verso");
    }
}
