/// Runtime configuration token.
///
/// The verbatim string is the materialization cache key. It is also read as a
/// list of feature tokens separated by commas or whitespace, e.g.
/// `"shaders, depth_shadows"`. Unknown tokens stay part of the key but set no
/// flag.

use std::fmt;
use bitflags::bitflags;

bitflags! {
    /// Hardware/feature capabilities named by a configuration
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ConfigurationFlags: u32 {
        /// Programmable shaders are available (resolve vertex/fragment programs)
        const SHADERS = 1 << 0;
        /// Depth shadow maps are active
        const DEPTH_SHADOWS = 1 << 1;
        /// Hardware culling modes are honoured
        const HW_CULLING = 1 << 2;
    }
}

impl ConfigurationFlags {
    fn from_token(token: &str) -> Option<Self> {
        match token {
            "shaders" => Some(Self::SHADERS),
            "depth_shadows" => Some(Self::DEPTH_SHADOWS),
            "hw_culling" => Some(Self::HW_CULLING),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Configuration {
    name: String,
    flags: ConfigurationFlags,
}

impl Configuration {
    pub fn parse(name: &str) -> Self {
        let flags = name
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty())
            .filter_map(|token| ConfigurationFlags::from_token(&token.to_ascii_lowercase()))
            .fold(ConfigurationFlags::empty(), |acc, flag| acc | flag);

        Self {
            name: name.to_string(),
            flags,
        }
    }

    /// The verbatim configuration string (cache key)
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn flags(&self) -> ConfigurationFlags {
        self.flags
    }

    pub fn has(&self, flag: ConfigurationFlags) -> bool {
        self.flags.contains(flag)
    }
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
#[path = "configuration_tests.rs"]
mod tests;
