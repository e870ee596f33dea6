//! Decoder trait for the conversion pipeline.
//!
//! Every stage of the PEM-to-JWK pipeline is a decoding step: PEM text
//! decodes into a `Pem` block, and the block's base64 body decodes into
//! the DER bytes that the key-material types parse. The `Decoder` trait
//! gives all of these steps one shape, so a stage is always
//! `source.decode()?` regardless of which pair of representations it
//! connects.
//!
//! # Design Pattern
//!
//! Two traits cooperate:
//!
//! 1. `Decoder<T, D>` - carries the conversion itself
//! 2. `DecodableFrom<T>` - marker restricting which `D` a `T` may decode into
//!
//! A `decode` call only type-checks when the destination has declared
//! itself decodable from the source, so an unsupported pairing is a
//! compile error rather than a runtime surprise.
//!
//! # Implementation Guide
//!
//! Connecting a new pair of types takes both impls:
//!
//! ```no_run
//! use kagi::decoder::{Decoder, DecodableFrom};
//!
//! struct SourceType(Vec<u8>);
//! struct DestType(String);
//!
//! #[derive(Debug)]
//! struct MyError;
//!
//! // 1. Declare the destination decodable from the source
//! impl DecodableFrom<SourceType> for DestType {}
//!
//! // 2. Implement the decoder on the source type
//! impl Decoder<SourceType, DestType> for SourceType {
//!     type Error = MyError;
//!
//!     fn decode(&self) -> Result<DestType, Self::Error> {
//!         Ok(DestType(String::from_utf8_lossy(&self.0).to_string()))
//!     }
//! }
//! ```
//!
//! # Example
//!
//! The `pem` crate decodes PEM text into `Pem` blocks this way:
//!
//! ```ignore
//! use kagi::decoder::Decoder;
//! use pem::Pem;
//!
//! let text = "-----BEGIN RSA PUBLIC KEY-----\n...\n-----END RSA PUBLIC KEY-----";
//! let pem: Pem = text.decode().unwrap();
//! ```

/// Converts a source representation `T` into a destination `D`.
///
/// Implemented on the source type. The destination must carry a matching
/// [`DecodableFrom<T>`] impl; that bound is what keeps arbitrary pairings
/// out.
///
/// A source may decode into several destinations (a `Pem` block yields
/// either its raw DER payload or fully parsed key material), so call
/// sites annotate the destination type where the compiler cannot infer
/// it.
///
/// # Examples
///
/// Implementing a decoder:
///
/// ```no_run
/// use kagi::decoder::{Decoder, DecodableFrom};
///
/// struct MyType(String);
///
/// #[derive(Debug)]
/// struct MyError;
///
/// impl DecodableFrom<Vec<u8>> for MyType {}
///
/// impl Decoder<Vec<u8>, MyType> for Vec<u8> {
///     type Error = MyError;
///
///     fn decode(&self) -> Result<MyType, Self::Error> {
///         // Parse self (Vec<u8>) and construct MyType
///         Ok(MyType(String::from_utf8_lossy(self).to_string()))
///     }
/// }
/// ```
///
/// Using one, with the destination annotated:
///
/// ```ignore
/// use kagi::decoder::Decoder;
/// use pem::Pem;
///
/// let text = String::from("-----BEGIN RSA PUBLIC KEY-----...");
/// let pem: Pem = text.decode().unwrap();
/// let der: Vec<u8> = pem.decode().unwrap();
/// ```
pub trait Decoder<T, D: DecodableFrom<T>> {
    /// The error type returned when decoding fails.
    type Error;

    /// Decodes `self` into type `D`.
    ///
    /// # Errors
    ///
    /// Returns the implementor's error value for malformed input; no
    /// decoding step panics on bad bytes.
    fn decode(&self) -> Result<D, Self::Error>;
}

/// Marker declaring that `D` can be decoded out of a `T`.
///
/// No methods; the impl itself is the statement. The `D:
/// DecodableFrom<T>` bound on [`Decoder`] consults these impls, so the
/// set of legal conversions is fixed at compile time by which markers
/// exist.
///
/// ```no_run
/// use kagi::decoder::DecodableFrom;
///
/// struct MySourceType;
/// struct MyDestType;
///
/// // Allow MyDestType to be decoded from MySourceType
/// impl DecodableFrom<MySourceType> for MyDestType {}
/// ```
pub trait DecodableFrom<T> {}
