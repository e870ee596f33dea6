use nom::{IResult, Parser};

pub mod error;

use error::Error;

/// Cursor over a DER-encoded byte buffer.
///
/// The PKCS#1 key structures are flat SEQUENCEs of INTEGERs, so the reader
/// walks the buffer field by field instead of building a TLV tree. Tag bytes
/// are consumed but not validated. Value slices borrow from the underlying
/// buffer. Every advance is bounds checked, so a buffer shorter than its
/// announced lengths fails with an error instead of reading out of range.
#[derive(Debug, Clone)]
pub struct Reader<'a> {
    input: &'a [u8],
}

impl<'a> Reader<'a> {
    pub fn new(input: &'a [u8]) -> Self {
        Reader { input }
    }

    /// Consumes a tag byte and the length field and returns the announced
    /// length of the element body. The body itself stays in the buffer, so
    /// the enclosed elements can be read next.
    pub fn read_sequence_header(&mut self) -> Result<usize, Error> {
        let (input, _tag) = parse_byte(self.input)?;
        let (input, length) = parse_length(input)?;
        self.input = input;
        Ok(length)
    }

    /// Consumes a whole element (tag, length and value) and returns the raw
    /// value bytes. The value of a DER INTEGER may carry a leading zero to
    /// keep the sign bit clear. It is kept as is here.
    pub fn read_integer(&mut self) -> Result<&'a [u8], Error> {
        let (input, _tag) = parse_byte(self.input)?;
        let (input, length) = parse_length(input)?;
        let (input, value) = take_bytes(input, length)?;
        self.input = input;
        Ok(value)
    }

    pub fn remaining(&self) -> usize {
        self.input.len()
    }
}

fn parse_byte(input: &[u8]) -> IResult<&[u8], u8> {
    nom::number::be_u8().parse(input)
}

fn take_bytes(input: &[u8], count: usize) -> IResult<&[u8], &[u8]> {
    nom::bytes::complete::take(count).parse(input)
}

fn parse_length(input: &[u8]) -> Result<(&[u8], usize), Error> {
    let (input, n) = parse_byte(input)?;
    if n & 0x80 == 0x80 {
        // long form
        // First 1 bit is a marker for long form.
        // Other bits represent bytes length of the length field.
        let count = n & 0x7f;
        // 0 is the BER indefinite form, which DER forbids. 2 bytes cover
        // every RSA key size this crate handles (up to 65535 byte values).
        if count == 0 || count > 2 {
            return Err(Error::UnsupportedLengthOfLength(count));
        }
        let (input, bs) = take_bytes(input, count as usize)?;
        let length = bs.iter().enumerate().fold(0usize, |n, (i, &b)| {
            n + 256_usize.pow((bs.len() - i - 1) as u32) * b as usize
        });
        return Ok((input, length));
    }
    // short form: 0-127
    Ok((input, n as usize))
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use crate::error::Error;
    use crate::{Reader, parse_length};

    #[rstest(input, expected,
        case(vec![0x02], 0x02),
        case(vec![0x02, 0x01], 0x02),
        case(vec![0x30, 0x01], 0x30),
        case(vec![0x7f], 0x7f),
        case(vec![0x81, 0x80], 0x80),
        case(vec![0x81, 0xa3, 0xff], 0xa3),
        case(vec![0x82, 0x02, 0x10], 256 * 0x02 + 0x10),
        case(vec![0x82, 0xff, 0xff], 256 * 0xff + 0xff),
    )]
    fn test_parse_length(input: Vec<u8>, expected: usize) {
        let actual = parse_length(&input).unwrap();

        assert_eq!(expected, actual.1);
    }

    #[rstest(input, expected,
        case(vec![0x80], Error::UnsupportedLengthOfLength(0)),
        case(vec![0x83, 0x01, 0x00, 0x00], Error::UnsupportedLengthOfLength(3)),
        case(vec![0x84, 0x00, 0x01, 0x00, 0x00, 0x00], Error::UnsupportedLengthOfLength(4)),
        case(vec![0xff], Error::UnsupportedLengthOfLength(0x7f)),
    )]
    fn test_parse_length_with_unsupported_length_of_length(input: Vec<u8>, expected: Error) {
        let actual = parse_length(&input).unwrap_err();

        assert_eq!(expected, actual);
    }

    #[rstest(input,
        case(vec![]),
        case(vec![0x82]),
        case(vec![0x82, 0x01]),
    )]
    fn test_parse_length_with_truncated_input(input: Vec<u8>) {
        let actual = parse_length(&input);

        assert!(matches!(
            actual,
            Err(Error::Parser(_)) | Err(Error::ParserIncomplete(_))
        ));
    }

    // SEQUENCE { INTEGER 7, INTEGER 8, INTEGER 9 }
    const SEQUENCE_OF_THREE_INTEGERS: [u8; 11] = [
        0x30, 0x09, 0x02, 0x01, 0x07, 0x02, 0x01, 0x08, 0x02, 0x01, 0x09,
    ];

    #[test]
    fn test_read_sequence_header() {
        let mut reader = Reader::new(&SEQUENCE_OF_THREE_INTEGERS);

        let length = reader.read_sequence_header().unwrap();

        assert_eq!(9, length);
        assert_eq!(9, reader.remaining());
    }

    #[test]
    fn test_read_sequence_header_with_long_form_length() {
        let mut input = vec![0x30, 0x82, 0x01, 0x00];
        input.extend(vec![0x00; 256]);
        let mut reader = Reader::new(&input);

        let length = reader.read_sequence_header().unwrap();

        assert_eq!(256, length);
        assert_eq!(256, reader.remaining());
    }

    #[test]
    fn test_read_integers_in_order() {
        let mut reader = Reader::new(&SEQUENCE_OF_THREE_INTEGERS);
        reader.read_sequence_header().unwrap();

        assert_eq!(&[0x07], reader.read_integer().unwrap());
        assert_eq!(&[0x08], reader.read_integer().unwrap());
        assert_eq!(&[0x09], reader.read_integer().unwrap());
        assert_eq!(0, reader.remaining());
    }

    #[test]
    fn test_read_integer_keeps_sign_padding_byte() {
        let input = vec![
            0x02, 0x09, 0x00, 0x80, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01,
        ];
        let mut reader = Reader::new(&input);

        let value = reader.read_integer().unwrap();

        assert_eq!(&input[2..], value);
    }

    #[test]
    fn test_read_integer_with_long_form_length() {
        // 1-byte long form, 128 content bytes (a 1024 bit modulus)
        let mut input = vec![0x02, 0x81, 0x80];
        input.extend(vec![0xab; 128]);
        let mut reader = Reader::new(&input);

        let value = reader.read_integer().unwrap();

        assert_eq!(128, value.len());
        assert!(value.iter().all(|&b| b == 0xab));
        assert_eq!(0, reader.remaining());
    }

    #[test]
    fn test_read_does_not_validate_tags() {
        // 0x04 is OCTET STRING, but the position is trusted
        let input = vec![0x04, 0x01, 0xff];
        let mut reader = Reader::new(&input);

        assert_eq!(&[0xff], reader.read_integer().unwrap());
    }

    #[test]
    fn test_read_integer_with_truncated_value() {
        // 5 content bytes announced, 1 present
        let input = vec![0x02, 0x05, 0x01];
        let mut reader = Reader::new(&input);

        assert!(reader.read_integer().is_err());
        // the cursor does not advance on a failed read
        assert_eq!(3, reader.remaining());
    }

    #[test]
    fn test_read_with_empty_input() {
        let mut reader = Reader::new(&[]);

        assert!(reader.read_sequence_header().is_err());
        assert!(reader.read_integer().is_err());
    }
}
