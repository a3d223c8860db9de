use nom::{
    bytes::complete::{is_not, tag_no_case, take_while, take_while1},
    character::complete::char,
    combinator::{eof, opt},
    multi::many0,
    sequence::preceded,
    Parser,
};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UrlError {
    #[error("not a jdbc url: {0}")]
    NotJdbc(String),
    #[error("malformed jdbc url at offset {offset}: {url}")]
    Malformed { url: String, offset: usize },
}

/// `jdbc:<subprotocol>:<target>[;key=value]*`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JdbcUrl {
    pub subprotocol: String,
    pub target: String,
    /// Properties in declaration order, a bare key has an empty value
    pub properties: Vec<(String, String)>,
}

type IResult<'a, O> = nom::IResult<&'a str, O>;

fn is_subprotocol_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.'
}

fn parse_property(input: &str) -> IResult<'_, (&str, &str)> {
    let (remaining, (key, value)) = (
        is_not("=;"),
        opt(preceded(char('='), take_while(|c: char| c != ';'))),
    )
        .parse(input)?;
    Ok((remaining, (key.trim(), value.unwrap_or("").trim())))
}

fn parse_url(input: &str) -> IResult<'_, (&str, &str, Vec<(&str, &str)>)> {
    let (remaining, (_, subprotocol, _, target, properties, _, _)) = (
        tag_no_case("jdbc:"),
        take_while1(is_subprotocol_char),
        char(':'),
        is_not(";"),
        many0(preceded(char(';'), parse_property)),
        opt(char(';')),
        eof,
    )
        .parse(input)?;
    Ok((remaining, (subprotocol, target, properties)))
}

impl JdbcUrl {
    pub fn parse(url: &str) -> Result<Self, UrlError> {
        let url = url.trim();
        match parse_url(url) {
            Ok((_, (subprotocol, target, properties))) => Ok(JdbcUrl {
                subprotocol: subprotocol.to_ascii_lowercase(),
                target: target.to_string(),
                properties: properties
                    .into_iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
            }),
            Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => {
                let offset = url.len() - e.input.len();
                if offset == 0 {
                    Err(UrlError::NotJdbc(url.to_string()))
                } else {
                    Err(UrlError::Malformed {
                        url: url.to_string(),
                        offset,
                    })
                }
            }
            Err(nom::Err::Incomplete(_)) => Err(UrlError::Malformed {
                url: url.to_string(),
                offset: url.len(),
            }),
        }
    }

    /// Property lookup, keys compare case-insensitively.
    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }
}

impl FromStr for JdbcUrl {
    type Err = UrlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        JdbcUrl::parse(s)
    }
}

impl fmt::Display for JdbcUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "jdbc:{}:{}", self.subprotocol, self.target)?;
        for (k, v) in &self.properties {
            if v.is_empty() {
                write!(f, ";{}", k)?;
            } else {
                write!(f, ";{}={}", k, v)?;
            }
        }
        Ok(())
    }
}

/// Subprotocol of `url`, or `None` when it is not a jdbc url.
pub fn subprotocol_of(url: &str) -> Option<String> {
    JdbcUrl::parse(url).ok().map(|u| u.subprotocol)
}
