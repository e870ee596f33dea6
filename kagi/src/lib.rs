//! # kagi
//!
//! Core trait for decoding in the kagi key conversion toolkit.
//!
//! This crate holds the `Decoder` trait that every pipeline stage in kagi
//! implements.
//!
//! ## Overview
//!
//! The conversion pattern flows like this:
//! ```text
//! PEM text → Pem → Vec<u8> (DER) → KeyMaterial → Jwk
//! ```
//!
//! Each step uses the `Decoder` trait to convert from one representation to
//! the next. The pipeline is one-directional: kagi reads PEM and emits JWK,
//! it never writes PEM back.
//!
//! ## Type Safety
//!
//! A marker trait (`DecodableFrom`) pins down which destination types a
//! source may decode into, so a conversion nobody implemented is rejected
//! at compile time instead of failing at runtime.
//!
//! ## Example
//!
//! The following example demonstrates the decoding pattern. Note that specific
//! implementations are provided by the `pem`, `pkcs1`, and `jwk` crates:
//!
//! ```ignore
//! use kagi::decoder::Decoder;
//! use pem::Pem;
//! use pkcs1::KeyMaterial;
//!
//! // Decode PEM text to a Pem block
//! let text = std::fs::read_to_string("key.pem").unwrap();
//! let pem: Pem = text.decode().unwrap();
//!
//! // Decode the Pem block to RSA key material
//! let key: KeyMaterial = pem.decode().unwrap();
//! ```

#![forbid(unsafe_code)]

pub mod decoder;
