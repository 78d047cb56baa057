//! Runtime interpreter configuration.
//!
//! Settings can be built in code or loaded from a small JSON document, e.g.
//! one kept in device flash next to other settings:
//!
//! ```rust
//! use libcli::config::Config;
//! use libcli::registry::MatchMode;
//!
//! let config = Config::from_json(r#"{"echo":true,"prompt":"$> ","match_mode":"exact"}"#).unwrap();
//! assert!(config.echo);
//! assert_eq!(config.prompt, Some("$> "));
//! assert_eq!(config.match_mode, MatchMode::Exact);
//! assert!(!config.help);
//! ```
//!
//! [`Config::from_json`] borrows the prompt straight from the document and
//! therefore rejects prompts containing JSON escapes. Prompts with control
//! characters, such as the usual `"\n\r$> "`, are loaded with
//! [`Config::from_json_escaped`], which decodes them into a caller buffer.

use serde::{Deserialize, Serialize};
use serde_json_core::str::{EscapedStr, EscapedStringFragment};

use crate::error::Error;
use crate::registry::MatchMode;

/// Interpreter settings.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Config<'a> {
    /// Echo accepted input bytes back to the sink, and emit a line break
    /// before a matched command runs.
    pub echo: bool,
    /// Written to the sink after every dispatched line.
    pub prompt: Option<&'a str>,
    /// How typed names are compared against call names.
    pub match_mode: MatchMode,
    /// Enable the built-in `help` listing and the `-h` / `--help` flags.
    pub help: bool,
}

/// Wire form of [`Config`]; the prompt is kept escaped until decoded.
#[derive(Default, Deserialize)]
#[serde(default)]
struct RawConfig<'a> {
    echo: bool,
    #[serde(borrow)]
    prompt: Option<EscapedStr<'a>>,
    match_mode: MatchMode,
    help: bool,
}

impl<'a> RawConfig<'a> {
    fn parse(json: &'a str) -> Result<Self, Error> {
        serde_json_core::from_str(json)
            .map(|(raw, _)| raw)
            .map_err(|_| Error::InvalidConfig)
    }

    fn with_prompt(self, prompt: Option<&'a str>) -> Config<'a> {
        Config {
            echo: self.echo,
            prompt,
            match_mode: self.match_mode,
            help: self.help,
        }
    }
}

impl<'a> Config<'a> {
    /// Parse a configuration from JSON. Missing fields keep their defaults.
    ///
    /// # Returns
    ///
    /// * `Ok(config)` - The prompt, if any, borrows `json`
    /// * `Err(Error::InvalidConfig)` - Malformed document, unknown match
    ///   mode, or a prompt containing escape sequences
    pub fn from_json(json: &'a str) -> Result<Self, Error> {
        let raw = RawConfig::parse(json)?;
        let prompt = match raw.prompt {
            Some(EscapedStr(text)) if text.contains('\\') => return Err(Error::InvalidConfig),
            prompt => prompt.map(|EscapedStr(text)| text),
        };
        Ok(raw.with_prompt(prompt))
    }

    /// Parse a configuration from JSON, decoding escape sequences in the
    /// prompt into `buf`.
    ///
    /// # Arguments
    ///
    /// * `json` - The configuration document
    /// * `buf` - Storage for the decoded prompt; it must outlive the config
    ///
    /// # Returns
    ///
    /// * `Ok(config)` - The prompt, if any, borrows `buf`
    /// * `Err(Error::InvalidConfig)` - Malformed document or escape
    ///   sequence, or `buf` too small for the decoded prompt
    ///
    /// # Examples
    ///
    /// ```rust
    /// use libcli::config::Config;
    ///
    /// let mut buf = [0u8; 16];
    /// let config = Config::from_json_escaped(r#"{"prompt":"\n\r$> "}"#, &mut buf).unwrap();
    /// assert_eq!(config.prompt, Some("\n\r$> "));
    /// ```
    pub fn from_json_escaped(json: &str, buf: &'a mut [u8]) -> Result<Self, Error> {
        let raw = RawConfig::parse(json)?;
        let prompt = match raw.prompt {
            Some(escaped) => Some(unescape(escaped, buf)?),
            None => None,
        };
        Ok(Config {
            echo: raw.echo,
            prompt,
            match_mode: raw.match_mode,
            help: raw.help,
        })
    }

    /// Serialize the configuration into `buf`, returning the JSON text.
    ///
    /// Control characters in the prompt are written as JSON escapes; read
    /// such documents back with [`from_json_escaped`](Self::from_json_escaped).
    pub fn to_json<'b>(&self, buf: &'b mut [u8]) -> Result<&'b str, Error> {
        let len = serde_json_core::to_slice(self, buf).map_err(|_| Error::InvalidConfig)?;
        core::str::from_utf8(&buf[..len]).map_err(|_| Error::InvalidConfig)
    }
}

fn unescape<'b>(escaped: EscapedStr<'_>, buf: &'b mut [u8]) -> Result<&'b str, Error> {
    let mut len = 0;
    for fragment in escaped.fragments() {
        let mut utf8 = [0u8; 4];
        let bytes = match fragment.map_err(|_| Error::InvalidConfig)? {
            EscapedStringFragment::NotEscaped(text) => text.as_bytes(),
            EscapedStringFragment::Escaped(c) => c.encode_utf8(&mut utf8).as_bytes(),
        };
        buf.get_mut(len..len + bytes.len())
            .ok_or(Error::InvalidConfig)?
            .copy_from_slice(bytes);
        len += bytes.len();
    }
    core::str::from_utf8(&buf[..len]).map_err(|_| Error::InvalidConfig)
}
