use std::net::Ipv4Addr;

use crate::error::CodecError;
use crate::header::Header;
use crate::message::Message;
use crate::record::Answer;

/// Code for a standard query; anything else is answered Not Implemented.
const OPCODE_QUERY: u8 = 0;
const RCODE_NO_ERROR: u8 = 0;
const RCODE_NOT_IMPLEMENTED: u8 = 4;

/// Build the reply to a decoded query.
///
/// The questions are echoed back and each one is answered with a single A
/// record pointing at `answer_addr`. The header echoes ID, OPCODE and RD,
/// forces QR, and reports Not Implemented for non-query opcodes.
pub fn build_reply(
    request: &Message,
    answer_addr: Ipv4Addr,
    ttl: u32,
) -> Result<Message, CodecError> {
    let answers: Vec<Answer> = request
        .questions
        .iter()
        .map(|question| Answer::a_record(question.name.clone(), ttl, answer_addr))
        .collect();

    let header = Header {
        id: request.header.id,
        qr: true,
        opcode: request.header.opcode,
        aa: false,
        tc: false,
        rd: request.header.rd,
        ra: false,
        z: 0,
        rcode: if request.header.opcode == OPCODE_QUERY {
            RCODE_NO_ERROR
        } else {
            RCODE_NOT_IMPLEMENTED
        },
        qdcount: request.header.qdcount,
        ancount: answers.len() as u16,
        nscount: 0,
        arcount: 0,
    };

    Message::new(header, request.questions.clone(), answers)
}
