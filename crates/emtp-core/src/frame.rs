//! Wire frame parsing and encoding
//!
//! EMTP frame format:
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │ Byte 0:    Type tag ('r' = routed, 's' = direct, else other) │
//! │ Bytes 1..: Address descriptor (JSON list of string|int|null) │
//! │ 1 byte:    NUL separator (0x00, required for every tag)      │
//! │ Rest:      Payload, opaque to the router                     │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! For routed frames the descriptor is the destination; for direct frames it
//! is the source that stamped the frame. Unknown tags keep their descriptor
//! slot undecoded but still require the separator, so a byte string with no
//! NUL at all is malformed no matter what its tag is.

use crate::{Address, Error, Result, SEPARATOR, TAG_DIRECT, TAG_ROUTED};
use bytes::{BufMut, Bytes, BytesMut};

/// Frame classification, decided by the type tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameKind {
    /// Deliver the payload to the client registered at `destination`
    Routed { destination: Address },
    /// Already at its terminus; `source` is logged, never resolved
    Direct { source: Address },
    /// Tag outside the known set
    Unrecognized { tag: u8 },
}

/// A parsed wire frame. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub kind: FrameKind,
    pub payload: Bytes,
}

impl Frame {
    /// Create a routed frame addressed to `destination`
    pub fn routed(destination: Address, payload: impl Into<Bytes>) -> Self {
        Self {
            kind: FrameKind::Routed { destination },
            payload: payload.into(),
        }
    }

    /// Create a direct frame stamped with `source`
    pub fn direct(source: Address, payload: impl Into<Bytes>) -> Self {
        Self {
            kind: FrameKind::Direct { source },
            payload: payload.into(),
        }
    }

    /// Parse a frame from raw bytes
    ///
    /// Pure function of the input; no partial frame is produced on failure.
    pub fn parse(raw: &[u8]) -> Result<Self> {
        let (&tag, rest) = raw.split_first().ok_or(Error::EmptyFrame)?;

        let sep = rest
            .iter()
            .position(|&b| b == SEPARATOR)
            .ok_or(Error::MissingSeparator)?;
        let descriptor = &rest[..sep];
        let payload = Bytes::copy_from_slice(&rest[sep + 1..]);

        let kind = match tag {
            TAG_ROUTED => FrameKind::Routed {
                destination: Address::from_descriptor(descriptor)?,
            },
            TAG_DIRECT => FrameKind::Direct {
                source: Address::from_descriptor(descriptor)?,
            },
            other => FrameKind::Unrecognized { tag: other },
        };

        Ok(Self { kind, payload })
    }

    /// Encode the frame to its exact wire form
    pub fn encode(&self) -> Result<Bytes> {
        let (tag, descriptor) = match &self.kind {
            FrameKind::Routed { destination } => (TAG_ROUTED, destination.to_descriptor()?),
            FrameKind::Direct { source } => (TAG_DIRECT, source.to_descriptor()?),
            FrameKind::Unrecognized { tag } => (*tag, Vec::new()),
        };

        let mut buf = BytesMut::with_capacity(1 + descriptor.len() + 1 + self.payload.len());
        buf.put_u8(tag);
        buf.extend_from_slice(&descriptor);
        buf.put_u8(SEPARATOR);
        buf.extend_from_slice(&self.payload);
        Ok(buf.freeze())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Component;

    fn local_example() -> Address {
        Address::new(vec!["local".into(), Component::Null, "example".into()]).unwrap()
    }

    #[test]
    fn test_parse_routed() {
        let frame = Frame::parse(b"r[\"local\",null,\"example\"]\x00Jam and cookies").unwrap();

        assert_eq!(
            frame.kind,
            FrameKind::Routed {
                destination: local_example()
            }
        );
        assert_eq!(frame.payload.as_ref(), b"Jam and cookies");
    }

    #[test]
    fn test_parse_direct() {
        let frame = Frame::parse(b"s[\"local\",null,\"example\"]\x00hi").unwrap();

        assert_eq!(
            frame.kind,
            FrameKind::Direct {
                source: local_example()
            }
        );
        assert_eq!(frame.payload.as_ref(), b"hi");
    }

    #[test]
    fn test_parse_unknown_tag_keeps_tag() {
        let frame = Frame::parse(b"x[\"local\",null,\"example\"]\x00hi").unwrap();

        assert_eq!(frame.kind, FrameKind::Unrecognized { tag: b'x' });
        assert_eq!(frame.payload.as_ref(), b"hi");
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(matches!(Frame::parse(b""), Err(Error::EmptyFrame)));
    }

    #[test]
    fn test_parse_requires_separator_for_any_tag() {
        assert!(matches!(
            Frame::parse(b"qwerty"),
            Err(Error::MissingSeparator)
        ));
        assert!(matches!(
            Frame::parse(b"r[\"local\"]no separator here"),
            Err(Error::MissingSeparator)
        ));
    }

    #[test]
    fn test_parse_rejects_bad_destination() {
        assert!(Frame::parse(b"rnot-json\x00payload").is_err());
        assert!(Frame::parse(b"r[]\x00payload").is_err());
    }

    #[test]
    fn test_empty_payload_is_valid() {
        let frame = Frame::parse(b"r[1,2,3]\x00").unwrap();
        assert!(frame.payload.is_empty());
    }

    #[test]
    fn test_encode_exact_wire_form() {
        let frame = Frame::routed(local_example(), &b"Jam and cookies"[..]);
        let encoded = frame.encode().unwrap();

        assert_eq!(
            encoded.as_ref(),
            b"r[\"local\",null,\"example\"]\x00Jam and cookies".as_slice()
        );
    }

    #[test]
    fn test_encode_parse_round_trip() {
        let direct = Frame::direct(local_example(), &b"pong"[..]);
        let parsed = Frame::parse(&direct.encode().unwrap()).unwrap();

        assert_eq!(parsed, direct);
    }

    #[test]
    fn test_unrecognized_encode_parse_round_trip() {
        let frame = Frame {
            kind: FrameKind::Unrecognized { tag: b'x' },
            payload: Bytes::from_static(b"opaque"),
        };

        let parsed = Frame::parse(&frame.encode().unwrap()).unwrap();

        assert_eq!(parsed, frame);
    }

    #[test]
    fn test_payload_may_contain_nul() {
        // only the first separator terminates the descriptor
        let frame = Frame::parse(b"r[1]\x00a\x00b").unwrap();
        assert_eq!(frame.payload.as_ref(), b"a\x00b");
    }
}
