use serde::Serialize;
use serde::de::DeserializeOwned;

pub trait ConfigSerializer<TConfig> {
    fn serialize(&self, config: &TConfig) -> Result<String, String>;
    fn deserialize(&self, content: &str) -> Result<TConfig, String>;
}

#[derive(Default)]
pub struct YamlConfigSerializer;

impl<TConfig> ConfigSerializer<TConfig> for YamlConfigSerializer
where
    TConfig: DeserializeOwned + Serialize,
{
    fn serialize(&self, config: &TConfig) -> Result<String, String> {
        serde_yaml_ng::to_string(config).map_err(|e| format!("Cannot write YAML config: {}", e))
    }

    fn deserialize(&self, content: &str) -> Result<TConfig, String> {
        serde_yaml_ng::from_str(content).map_err(|e| match e.location() {
            Some(at) => format!("Bad YAML config at line {}: {}", at.line(), e),
            None => format!("Bad YAML config: {}", e),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Sample {
        speed: u32,
    }

    #[test]
    fn test_error_points_at_line() {
        let result: Result<Sample, String> = YamlConfigSerializer.deserialize("\nspeed: fast\n");
        let message = result.unwrap_err();
        assert!(message.starts_with("Bad YAML config at line"), "{}", message);
    }

    #[test]
    fn test_written_yaml_reads_back() {
        let yaml = YamlConfigSerializer.serialize(&Sample { speed: 7 }).unwrap();
        assert_eq!(yaml.trim(), "speed: 7");
        let sample: Sample = YamlConfigSerializer.deserialize(&yaml).unwrap();
        assert_eq!(sample, Sample { speed: 7 });
    }
}
