use bytes::{Bytes, BytesMut};

use crate::error::CodecError;
use crate::header::{Header, HEADER_LEN};
use crate::record::{Answer, Question};

/// A whole DNS message: header plus question and answer sections.
///
/// One message belongs to one request/response exchange: decode builds it
/// from an inbound datagram, the reply path builds a fresh one per reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub header: Header,
    pub questions: Vec<Question>,
    pub answers: Vec<Answer>,
}

impl Message {
    /// Assemble a message, checking that the header counts match the
    /// supplied sections. A mismatch is a programming error in the caller,
    /// surfaced here rather than silently corrected.
    pub fn new(
        header: Header,
        questions: Vec<Question>,
        answers: Vec<Answer>,
    ) -> Result<Self, CodecError> {
        if usize::from(header.qdcount) != questions.len() {
            return Err(CodecError::CountMismatch {
                declared: header.qdcount,
                supplied: questions.len(),
            });
        }
        if usize::from(header.ancount) != answers.len() {
            return Err(CodecError::CountMismatch {
                declared: header.ancount,
                supplied: answers.len(),
            });
        }

        Ok(Message {
            header,
            questions,
            answers,
        })
    }

    /// Decode a datagram: header, then QDCOUNT questions in sequence.
    ///
    /// The first failing sub-decode aborts the whole message; there is no
    /// partial recovery. Sections beyond the questions are not read, and
    /// the header counts are kept exactly as received.
    pub fn decode(buf: &[u8]) -> Result<Self, CodecError> {
        let header = Header::decode(buf)?;

        let mut questions = Vec::new();
        let mut offset = HEADER_LEN;
        for _ in 0..header.qdcount {
            let (question, next) = Question::decode(buf, offset)?;
            questions.push(question);
            offset = next;
        }

        Ok(Message {
            header,
            questions,
            answers: Vec::new(),
        })
    }

    /// Encode as header, then all questions, then all answers, in input
    /// order. Counts matching the sections is a precondition; build the
    /// message with [`Message::new`] to have it checked.
    pub fn encode(&self) -> Result<Bytes, CodecError> {
        debug_assert_eq!(usize::from(self.header.qdcount), self.questions.len());
        debug_assert_eq!(usize::from(self.header.ancount), self.answers.len());

        let mut buf = BytesMut::with_capacity(512);
        self.header.encode(&mut buf);
        for question in &self.questions {
            question.encode(&mut buf)?;
        }
        for answer in &self.answers {
            answer.encode(&mut buf)?;
        }
        Ok(buf.freeze())
    }
}
