use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::error::Error;

/// The models a [`Client`](crate::Client) may talk to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Model {
    /// The conversational model.
    #[default]
    Chat,
    /// The model that reasons before answering.
    Reasoner,
}

impl Model {
    /// Every supported model.
    pub const ALL: [Model; 2] = [Model::Chat, Model::Reasoner];

    /// Returns the identifier sent to the service.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Model::Chat => "deepseek-chat",
            Model::Reasoner => "deepseek-reasoner",
        }
    }
}

impl Display for Model {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Model {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Model::ALL
            .into_iter()
            .find(|model| model.as_str() == s)
            .ok_or_else(|| Error::InvalidModel(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!("deepseek-chat".parse::<Model>().unwrap(), Model::Chat);
        assert_eq!(
            "deepseek-reasoner".parse::<Model>().unwrap(),
            Model::Reasoner
        );
        for bad in ["", "deepseek", "DeepSeek-Chat", "gpt-4o"] {
            assert!(matches!(
                bad.parse::<Model>(),
                Err(Error::InvalidModel(id)) if id == bad
            ));
        }
    }
}
