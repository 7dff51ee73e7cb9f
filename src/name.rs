use std::fmt;
use std::str::FromStr;

use bytes::{BufMut, BytesMut};

use crate::error::CodecError;

/// Longest label the wire format can carry in its 6 length bits.
pub const MAX_LABEL_LEN: usize = 63;

/// A domain name as an ordered sequence of labels.
///
/// `"abc.example.com"` holds three labels. The root name has no labels and
/// displays as `"."`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Name {
    labels: Vec<String>,
}

impl Name {
    pub fn root() -> Self {
        Name { labels: Vec::new() }
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Encode as length-prefixed labels followed by a zero terminator.
    ///
    /// Compression pointers are never emitted: encoding the same name twice
    /// in one message produces two full label sequences.
    pub fn encode(&self, buf: &mut BytesMut) -> Result<(), CodecError> {
        for label in &self.labels {
            let len = label.len();
            if len > MAX_LABEL_LEN {
                return Err(CodecError::LabelTooLong(len));
            }
            buf.put_u8(len as u8);
            buf.put_slice(label.as_bytes());
        }
        buf.put_u8(0);
        Ok(())
    }

    /// Decode a name starting at `offset`, following compression pointers.
    ///
    /// Returns the name and the offset at which the containing record
    /// continues: right after the zero terminator, or right after the first
    /// 2-byte pointer when the name is compressed. Pointer targets must sit
    /// strictly before the pointer itself, and the hop count is capped at
    /// the message length, so a self-referential or cyclic chain fails with
    /// `CompressionLoop` instead of looping.
    pub fn decode(buf: &[u8], offset: usize) -> Result<(Self, usize), CodecError> {
        let mut labels = Vec::new();
        let mut pos = offset;
        // Caller-visible resume offset, fixed at the first pointer.
        let mut resume = None;
        let mut hops = 0;

        loop {
            let &len = buf.get(pos).ok_or(CodecError::TruncatedInput(pos))?;

            match len & 0xC0 {
                0x00 => {
                    pos += 1;
                    if len == 0 {
                        break;
                    }

                    let end = pos + len as usize;
                    let raw = buf
                        .get(pos..end)
                        .ok_or(CodecError::TruncatedInput(buf.len()))?;
                    let label = std::str::from_utf8(raw)
                        .map_err(|_| CodecError::InvalidLabel(pos))?;
                    labels.push(label.to_string());
                    pos = end;
                }
                0xC0 => {
                    let &lo = buf
                        .get(pos + 1)
                        .ok_or(CodecError::TruncatedInput(pos + 1))?;
                    let target = u16::from_be_bytes([len & 0x3F, lo]) as usize;

                    // A pointer may only refer backwards; a well-formed
                    // message also cannot need more hops than it has bytes.
                    if target >= pos {
                        return Err(CodecError::CompressionLoop(pos));
                    }
                    hops += 1;
                    if hops > buf.len() {
                        return Err(CodecError::CompressionLoop(pos));
                    }

                    if resume.is_none() {
                        resume = Some(pos + 2);
                    }
                    pos = target;
                }
                _ => {
                    return Err(CodecError::InvalidLabelLength {
                        byte: len,
                        offset: pos,
                    })
                }
            }
        }

        Ok((Name { labels }, resume.unwrap_or(pos)))
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.labels.is_empty() {
            return f.write_str(".");
        }
        f.write_str(&self.labels.join("."))
    }
}

impl FromStr for Name {
    type Err = CodecError;

    /// Parse a dotted name. Empty labels (leading, trailing, or doubled
    /// dots) are skipped, so `"."` parses to the root name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut labels = Vec::new();
        for label in s.split('.') {
            if label.is_empty() {
                continue;
            }
            if label.len() > MAX_LABEL_LEN {
                return Err(CodecError::LabelTooLong(label.len()));
            }
            labels.push(label.to_string());
        }
        Ok(Name { labels })
    }
}
