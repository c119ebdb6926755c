use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use utoipa::ToSchema;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown commentator '{0}'")]
pub struct InvalidPersona(pub String);

/// The commentators a request may ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Persona {
    Ravi,
    Harsha,
    Jatin,
}

/// Static prompt configuration for one commentator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PersonaConfig {
    pub persona: Persona,
    pub version: u32,
    pub temperature: f32,
    pub system_prompt: &'static str,
}

static PERSONAS: [PersonaConfig; 3] = [
    PersonaConfig {
        persona: Persona::Ravi,
        version: 1,
        temperature: 0.9,
        system_prompt: include_str!("../../prompts/ravi.md"),
    },
    PersonaConfig {
        persona: Persona::Harsha,
        version: 1,
        temperature: 0.7,
        system_prompt: include_str!("../../prompts/harsha.md"),
    },
    PersonaConfig {
        persona: Persona::Jatin,
        version: 1,
        temperature: 0.7,
        system_prompt: include_str!("../../prompts/jatin.md"),
    },
];

impl Persona {
    pub const ALL: [Persona; 3] = [Persona::Ravi, Persona::Harsha, Persona::Jatin];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Ravi => "ravi",
            Self::Harsha => "harsha",
            Self::Jatin => "jatin",
        }
    }

    pub fn config(&self) -> &'static PersonaConfig {
        match self {
            Self::Ravi => &PERSONAS[0],
            Self::Harsha => &PERSONAS[1],
            Self::Jatin => &PERSONAS[2],
        }
    }
}

impl FromStr for Persona {
    type Err = InvalidPersona;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|persona| persona.name() == s)
            .ok_or_else(|| InvalidPersona(s.to_string()))
    }
}

impl fmt::Display for Persona {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_names() {
        assert_eq!("ravi".parse::<Persona>(), Ok(Persona::Ravi));
        assert_eq!("harsha".parse::<Persona>(), Ok(Persona::Harsha));
        assert_eq!("jatin".parse::<Persona>(), Ok(Persona::Jatin));
    }

    #[test]
    fn test_parse_rejects_unknown_and_case_variants() {
        assert_eq!(
            "wasim".parse::<Persona>(),
            Err(InvalidPersona("wasim".to_string()))
        );
        assert!("Ravi".parse::<Persona>().is_err());
        assert!("".parse::<Persona>().is_err());
    }

    #[test]
    fn test_temperatures() {
        assert_eq!(Persona::Ravi.config().temperature, 0.9);
        assert_eq!(Persona::Harsha.config().temperature, 0.7);
        assert_eq!(Persona::Jatin.config().temperature, 0.7);
    }

    #[test]
    fn test_config_table_matches_persona() {
        for persona in Persona::ALL {
            let config = persona.config();
            assert_eq!(config.persona, persona);
            assert!(config.version >= 1);
            assert!(!config.system_prompt.trim().is_empty());
        }
        assert!(Persona::Ravi.config().system_prompt.contains("Ravi Shastri"));
        assert!(Persona::Harsha.config().system_prompt.contains("Harsha Bhogle"));
        assert!(Persona::Jatin.config().system_prompt.contains("Jatin Sapru"));
    }
}
