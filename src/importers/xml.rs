// ABOUTME: Path-tracking XML walker shared by the GPX and TCX decoders
// ABOUTME: Emits open, text, and close nodes with the local-name path from the document root
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::error::Error as StdError;
use std::str::{self, FromStr};

use afterrun_core::errors::{AppError, AppResult};
use chrono::{DateTime, NaiveDateTime, Utc};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

/// One step of the document walk
///
/// `path` holds the local names (namespace prefixes stripped) from the root
/// element down to and including the current element.
#[derive(Debug)]
pub enum XmlNode<'a> {
    /// Element start, with its attributes by local name
    Open {
        /// Element path
        path: &'a [String],
        /// Attributes of the element
        attributes: &'a Attributes,
    },
    /// Non-empty character data directly inside the last path element
    Text {
        /// Element path
        path: &'a [String],
        /// Unescaped, trimmed text
        text: &'a str,
    },
    /// Element end
    Close {
        /// Element path, still including the closed element
        path: &'a [String],
    },
}

/// Attributes of one element keyed by local name
#[derive(Debug, Default)]
pub struct Attributes(Vec<(String, String)>);

impl Attributes {
    /// Value of the attribute with this local name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    fn read(start: &BytesStart<'_>) -> AppResult<Self> {
        let mut attributes = Vec::new();
        for attribute in start.attributes() {
            let attribute = attribute
                .map_err(|e| AppError::parse(format!("malformed attribute: {e}")).with_source(e))?;
            let key = String::from_utf8_lossy(attribute.key.local_name().as_ref()).into_owned();
            let value = attribute
                .unescape_value()
                .map_err(|e| AppError::parse(format!("malformed attribute value: {e}")).with_source(e))?
                .into_owned();
            attributes.push((key, value));
        }
        Ok(Self(attributes))
    }
}

/// Whether the element path ends with the given local names
#[must_use]
pub fn path_ends_with(path: &[String], suffix: &[&str]) -> bool {
    path.len() >= suffix.len()
        && path[path.len() - suffix.len()..]
            .iter()
            .zip(suffix)
            .all(|(element, expected)| element == expected)
}

/// Walk a whole document, checking the root element and balance
///
/// # Errors
///
/// Returns `ParseError` for non-UTF-8 input, malformed XML, a root element
/// other than `root`, a truncated document, or any error from `visit`
pub fn walk<F>(bytes: &[u8], root: &str, mut visit: F) -> AppResult<()>
where
    F: FnMut(XmlNode<'_>) -> AppResult<()>,
{
    let source = str::from_utf8(bytes)
        .map_err(|e| AppError::parse(format!("document is not valid UTF-8: {e}")).with_source(e))?;
    let mut reader = Reader::from_str(source);
    reader.config_mut().trim_text(true);

    let mut path: Vec<String> = Vec::new();
    let mut seen_root = false;

    loop {
        let event = reader.read_event().map_err(|e| {
            AppError::parse(format!(
                "malformed XML at byte {}: {e}",
                reader.buffer_position()
            ))
            .with_source(e)
        })?;

        match event {
            Event::Start(start) => {
                open_element(&start, root, &mut path, &mut seen_root, &mut visit)?;
            }
            Event::Empty(start) => {
                open_element(&start, root, &mut path, &mut seen_root, &mut visit)?;
                close_element(&mut path, &mut visit)?;
            }
            Event::End(_) => close_element(&mut path, &mut visit)?,
            Event::Text(text) => {
                let text = text
                    .unescape()
                    .map_err(|e| AppError::parse(format!("malformed text: {e}")).with_source(e))?;
                emit_text(&path, &text, &mut visit)?;
            }
            Event::CData(data) => {
                let raw = data.into_inner();
                let text = str::from_utf8(&raw)
                    .map_err(|e| AppError::parse(format!("malformed CDATA: {e}")).with_source(e))?;
                emit_text(&path, text, &mut visit)?;
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !path.is_empty() {
        return Err(AppError::parse(format!(
            "document ended inside <{}>",
            path.join("/")
        )));
    }
    if !seen_root {
        return Err(AppError::parse(format!("missing <{root}> root element")));
    }
    Ok(())
}

fn open_element<F>(
    start: &BytesStart<'_>,
    root: &str,
    path: &mut Vec<String>,
    seen_root: &mut bool,
    visit: &mut F,
) -> AppResult<()>
where
    F: FnMut(XmlNode<'_>) -> AppResult<()>,
{
    let name = String::from_utf8_lossy(start.local_name().as_ref()).into_owned();
    if path.is_empty() {
        if *seen_root || name != root {
            return Err(AppError::parse(format!(
                "expected a single <{root}> root element, found <{name}>"
            )));
        }
        *seen_root = true;
    }
    let attributes = Attributes::read(start)?;
    path.push(name);
    visit(XmlNode::Open {
        path: path.as_slice(),
        attributes: &attributes,
    })
}

fn close_element<F>(path: &mut Vec<String>, visit: &mut F) -> AppResult<()>
where
    F: FnMut(XmlNode<'_>) -> AppResult<()>,
{
    visit(XmlNode::Close {
        path: path.as_slice(),
    })?;
    path.pop();
    Ok(())
}

fn emit_text<F>(path: &[String], text: &str, visit: &mut F) -> AppResult<()>
where
    F: FnMut(XmlNode<'_>) -> AppResult<()>,
{
    let text = text.trim();
    if path.is_empty() || text.is_empty() {
        return Ok(());
    }
    visit(XmlNode::Text { path, text })
}

/// Parse a numeric field value
///
/// # Errors
///
/// Returns `ParseError` naming the field when the text does not parse
pub fn parse_number<T>(field: &str, text: &str) -> AppResult<T>
where
    T: FromStr,
    T::Err: StdError + Send + Sync + 'static,
{
    text.trim().parse().map_err(|e: T::Err| {
        AppError::parse(format!("invalid <{field}> value '{text}': {e}")).with_source(e)
    })
}

/// Parse a finite floating-point field value
///
/// # Errors
///
/// Returns `ParseError` naming the field when the text does not parse or
/// is `NaN` or infinite
pub fn parse_measure(field: &str, text: &str) -> AppResult<f64> {
    let value: f64 = parse_number(field, text)?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(AppError::parse(format!("non-finite <{field}> value '{text}'")))
    }
}

/// Parse a finite, non-negative time or distance field value
///
/// # Errors
///
/// Returns `ParseError` naming the field when the value is not finite or is
/// below zero
pub fn parse_non_negative(field: &str, text: &str) -> AppResult<f64> {
    let value = parse_measure(field, text)?;
    if value < 0.0 {
        return Err(AppError::parse(format!("negative <{field}> value '{text}'")));
    }
    Ok(value)
}

/// Parse a timestamp field value
///
/// Accepts RFC 3339 and offset-less ISO 8601 timestamps; the latter are
/// read as UTC.
///
/// # Errors
///
/// Returns `ParseError` naming the field when the text is not a timestamp
pub fn parse_timestamp(field: &str, text: &str) -> AppResult<DateTime<Utc>> {
    let text = text.trim();
    DateTime::parse_from_rfc3339(text)
        .map(|timestamp| timestamp.with_timezone(&Utc))
        .or_else(|_| {
            NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f")
                .map(|naive| naive.and_utc())
        })
        .map_err(|e| {
            AppError::parse(format!("invalid <{field}> timestamp '{text}': {e}")).with_source(e)
        })
}
