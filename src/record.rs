use std::net::{Ipv4Addr, Ipv6Addr};

use bytes::{BufMut, BytesMut};

use crate::error::CodecError;
use crate::name::Name;

/// Question section entry: QNAME + QTYPE (2 bytes) + QCLASS (2 bytes).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub name: Name,
    pub qtype: u16,
    pub qclass: u16,
}

impl Question {
    /// Decode a question starting at `offset`.
    ///
    /// Returns the question and the offset of the byte after it.
    pub fn decode(buf: &[u8], offset: usize) -> Result<(Self, usize), CodecError> {
        let (name, offset) = Name::decode(buf, offset)?;

        if offset + 4 > buf.len() {
            return Err(CodecError::TruncatedInput(buf.len()));
        }
        let qtype = u16::from_be_bytes([buf[offset], buf[offset + 1]]);
        let qclass = u16::from_be_bytes([buf[offset + 2], buf[offset + 3]]);

        Ok((
            Question {
                name,
                qtype,
                qclass,
            },
            offset + 4,
        ))
    }

    pub fn encode(&self, buf: &mut BytesMut) -> Result<(), CodecError> {
        self.name.encode(buf)?;
        buf.put_u16(self.qtype);
        buf.put_u16(self.qclass);
        Ok(())
    }
}

/// Resource record: NAME + TYPE + CLASS + TTL (4 bytes) + RDLENGTH
/// (2 bytes) + RDATA.
///
/// RDLENGTH is not stored; it is computed from the RDATA length when
/// encoding, so the two can never disagree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    pub name: Name,
    pub rtype: u16,
    pub rclass: u16,
    pub ttl: u32,
    pub rdata: Vec<u8>,
}

impl Answer {
    pub const TYPE_A: u16 = 1;
    pub const TYPE_AAAA: u16 = 28;
    pub const CLASS_IN: u16 = 1;

    pub fn new(name: Name, rtype: u16, rclass: u16, ttl: u32, rdata: Vec<u8>) -> Self {
        Answer {
            name,
            rtype,
            rclass,
            ttl,
            rdata,
        }
    }

    /// An A record carrying an IPv4 address.
    pub fn a_record(name: Name, ttl: u32, addr: Ipv4Addr) -> Self {
        Self::new(
            name,
            Self::TYPE_A,
            Self::CLASS_IN,
            ttl,
            addr.octets().to_vec(),
        )
    }

    /// An AAAA record carrying an IPv6 address.
    pub fn aaaa_record(name: Name, ttl: u32, addr: Ipv6Addr) -> Self {
        Self::new(
            name,
            Self::TYPE_AAAA,
            Self::CLASS_IN,
            ttl,
            addr.octets().to_vec(),
        )
    }

    /// Decode a resource record starting at `offset`.
    ///
    /// The serving path never reads answers off the wire, but the format is
    /// symmetric with encode and decoding keeps the codec testable.
    pub fn decode(buf: &[u8], offset: usize) -> Result<(Self, usize), CodecError> {
        let (name, offset) = Name::decode(buf, offset)?;

        if offset + 10 > buf.len() {
            return Err(CodecError::TruncatedInput(buf.len()));
        }
        let rtype = u16::from_be_bytes([buf[offset], buf[offset + 1]]);
        let rclass = u16::from_be_bytes([buf[offset + 2], buf[offset + 3]]);
        let ttl = u32::from_be_bytes([
            buf[offset + 4],
            buf[offset + 5],
            buf[offset + 6],
            buf[offset + 7],
        ]);
        let rdlength = u16::from_be_bytes([buf[offset + 8], buf[offset + 9]]);

        let data = offset + 10;
        let end = data + rdlength as usize;
        if end > buf.len() {
            return Err(CodecError::TruncatedInput(buf.len()));
        }
        let rdata = buf[data..end].to_vec();

        Ok((
            Answer {
                name,
                rtype,
                rclass,
                ttl,
                rdata,
            },
            end,
        ))
    }

    pub fn encode(&self, buf: &mut BytesMut) -> Result<(), CodecError> {
        debug_assert!(self.rdata.len() <= usize::from(u16::MAX));

        self.name.encode(buf)?;
        buf.put_u16(self.rtype);
        buf.put_u16(self.rclass);
        buf.put_u32(self.ttl);
        buf.put_u16(self.rdata.len() as u16);
        buf.put_slice(&self.rdata);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(s: &str) -> Name {
        s.parse().unwrap()
    }

    #[test]
    fn test_question_roundtrip() {
        let question = Question {
            name: name("example.com"),
            qtype: Answer::TYPE_A,
            qclass: Answer::CLASS_IN,
        };

        let mut buf = BytesMut::new();
        question.encode(&mut buf).unwrap();
        let (parsed, next) = Question::decode(&buf, 0).unwrap();

        assert_eq!(parsed, question);
        assert_eq!(next, buf.len());
    }

    #[test]
    fn test_question_truncated_after_name() {
        // Root name at offset 0, then only 3 of the 4 TYPE/CLASS bytes.
        let raw = [0, 0x00, 0x01, 0x00];
        assert_eq!(
            Question::decode(&raw, 0),
            Err(CodecError::TruncatedInput(4))
        );
    }

    #[test]
    fn test_a_record_fields() {
        let answer = Answer::a_record(name("example.com"), 60, Ipv4Addr::new(8, 8, 8, 8));

        assert_eq!(answer.rtype, Answer::TYPE_A);
        assert_eq!(answer.rclass, Answer::CLASS_IN);
        assert_eq!(answer.ttl, 60);
        assert_eq!(answer.rdata, vec![8, 8, 8, 8]);
    }

    #[test]
    fn test_answer_wire_layout() {
        let answer = Answer::a_record(name("ab"), 0x01020304, Ipv4Addr::new(1, 2, 3, 4));

        let mut buf = BytesMut::new();
        answer.encode(&mut buf).unwrap();

        assert_eq!(
            buf.to_vec(),
            vec![
                2, b'a', b'b', 0, // name
                0x00, 0x01, // TYPE_A
                0x00, 0x01, // CLASS_IN
                0x01, 0x02, 0x03, 0x04, // TTL
                0x00, 0x04, // RDLENGTH, computed
                1, 2, 3, 4, // RDATA
            ]
        );
    }

    #[test]
    fn test_answer_roundtrip() {
        let answer = Answer::a_record(name("example.com"), 300, Ipv4Addr::new(192, 168, 1, 1));

        let mut buf = BytesMut::new();
        answer.encode(&mut buf).unwrap();
        let (parsed, next) = Answer::decode(&buf, 0).unwrap();

        assert_eq!(parsed, answer);
        assert_eq!(next, buf.len());
    }

    #[test]
    fn test_aaaa_record_roundtrip() {
        let answer = Answer::aaaa_record(name("v6.example.com"), 30, Ipv6Addr::LOCALHOST);
        assert_eq!(answer.rdata.len(), 16);

        let mut buf = BytesMut::new();
        answer.encode(&mut buf).unwrap();
        let (parsed, _) = Answer::decode(&buf, 0).unwrap();
        assert_eq!(parsed, answer);
    }

    #[test]
    fn test_answer_truncated_fixed_fields() {
        // Root name, then only 9 of the 10 fixed bytes.
        let mut raw = vec![0u8];
        raw.extend_from_slice(&[0u8; 9]);
        assert_eq!(
            Answer::decode(&raw, 0),
            Err(CodecError::TruncatedInput(10))
        );
    }

    #[test]
    fn test_answer_truncated_rdata() {
        // RDLENGTH claims 4 bytes but only 2 follow.
        let raw = [
            0, // root name
            0x00, 0x01, 0x00, 0x01, // type, class
            0x00, 0x00, 0x00, 0x3C, // ttl
            0x00, 0x04, // rdlength
            0xDE, 0xAD,
        ];
        assert_eq!(
            Answer::decode(&raw, 0),
            Err(CodecError::TruncatedInput(13))
        );
    }
}
