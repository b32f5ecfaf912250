//! Album artwork reassembly
//!
//! The receiver sends artwork either as a URL or as a stream of binary
//! fragments framed by START / MIDDLE / END flags. [`ArtworkAssembler`] owns
//! the accumulation buffer between START and END and hands the finished bytes
//! to an [`ArtworkDecoder`].
//!
//! ```text
//! START ──► buffer = [] ──► append ─┐
//! MIDDLE ─────────────────► append ─┤ (no-op without a buffer)
//! END ────────────────────► append ─┴─► decode(buffer) ──► artwork
//! ```

use std::io::Read;
use std::sync::Arc;

use bytes::{Bytes, BytesMut};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::DecoderConfig;
use crate::message::{JacketArt, PacketFlag};
use crate::{Result, StateError};

/// Encoded image format, detected from the leading bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ImageFormat {
    Jpeg,
    Png,
    Bmp,
    Gif,
}

impl ImageFormat {
    /// Detect the format from magic bytes
    pub fn sniff(data: &[u8]) -> Option<ImageFormat> {
        if data.starts_with(&[0xFF, 0xD8, 0xFF]) {
            Some(ImageFormat::Jpeg)
        } else if data.starts_with(&[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]) {
            Some(ImageFormat::Png)
        } else if data.starts_with(b"BM") {
            Some(ImageFormat::Bmp)
        } else if data.starts_with(b"GIF87a") || data.starts_with(b"GIF89a") {
            Some(ImageFormat::Gif)
        } else {
            None
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ImageFormat::Jpeg => "image/jpeg",
            ImageFormat::Png => "image/png",
            ImageFormat::Bmp => "image/bmp",
            ImageFormat::Gif => "image/gif",
        }
    }
}

/// Artwork of the current track
///
/// Replaced as a whole whenever new artwork arrives, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Artwork {
    pub format: ImageFormat,
    /// Encoded image bytes
    pub data: Bytes,
    /// Source URL when the artwork was delivered by reference
    pub url: Option<String>,
}

impl Artwork {
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Turns artwork bytes or references into [`Artwork`]
///
/// Implement this to plug in a real image decoder or a caching fetcher.
pub trait ArtworkDecoder: Send + Sync {
    /// Decode a fully reassembled fragment stream
    fn decode(&self, data: &[u8]) -> Result<Artwork>;

    /// Resolve artwork delivered by URL
    fn load_url(&self, url: &str) -> Result<Artwork>;
}

/// Default decoder: detects the format and keeps the encoded bytes
///
/// URLs are fetched with a blocking HTTP GET.
#[derive(Debug, Clone)]
pub struct RawArtworkDecoder {
    agent: ureq::Agent,
    max_bytes: usize,
}

impl RawArtworkDecoder {
    pub fn new(config: &DecoderConfig) -> Self {
        Self {
            agent: ureq::AgentBuilder::new()
                .timeout(config.fetch_timeout)
                .build(),
            max_bytes: config.max_artwork_bytes,
        }
    }

    fn sniff(data: &[u8]) -> Result<ImageFormat> {
        ImageFormat::sniff(data).ok_or_else(|| {
            StateError::ArtworkDecode(format!(
                "Unrecognised image format ({} bytes)",
                data.len()
            ))
        })
    }
}

impl Default for RawArtworkDecoder {
    fn default() -> Self {
        Self::new(&DecoderConfig::default())
    }
}

impl ArtworkDecoder for RawArtworkDecoder {
    fn decode(&self, data: &[u8]) -> Result<Artwork> {
        if data.len() > self.max_bytes {
            return Err(StateError::ArtworkDecode(format!(
                "Artwork of {} bytes exceeds limit of {} bytes",
                data.len(),
                self.max_bytes
            )));
        }

        let format = Self::sniff(data)?;
        Ok(Artwork {
            format,
            data: Bytes::copy_from_slice(data),
            url: None,
        })
    }

    fn load_url(&self, url: &str) -> Result<Artwork> {
        let response = self
            .agent
            .get(url)
            .call()
            .map_err(|e| StateError::ArtworkFetch(e.to_string()))?;

        // One byte past the limit tells an oversized body from an exact fit
        let mut body = Vec::new();
        response
            .into_reader()
            .take(self.max_bytes as u64 + 1)
            .read_to_end(&mut body)
            .map_err(|e| StateError::ArtworkFetch(e.to_string()))?;

        if body.len() > self.max_bytes {
            return Err(StateError::ArtworkFetch(format!(
                "Artwork at {} exceeds limit of {} bytes",
                url, self.max_bytes
            )));
        }

        let format = Self::sniff(&body)?;
        Ok(Artwork {
            format,
            data: Bytes::from(body),
            url: Some(url.to_string()),
        })
    }
}

/// Result of feeding one artwork message to the assembler
#[derive(Debug, Clone, PartialEq)]
pub enum AssemblyOutcome {
    /// New artwork is ready; `None` when decoding or fetching failed
    Complete(Option<Artwork>),
    /// Fragment accepted, stream not finished
    Pending,
    /// Nothing to do (orphan fragment, no image)
    Ignored,
}

/// Reassembly state machine for fragmented artwork
pub struct ArtworkAssembler {
    buffer: Option<BytesMut>,
    decoder: Arc<dyn ArtworkDecoder>,
}

impl ArtworkAssembler {
    pub fn new(decoder: Arc<dyn ArtworkDecoder>) -> Self {
        Self {
            buffer: None,
            decoder,
        }
    }

    /// Whether a fragment stream is in progress
    pub fn is_assembling(&self) -> bool {
        self.buffer.is_some()
    }

    /// Bytes accumulated so far
    pub fn buffered_len(&self) -> usize {
        self.buffer.as_ref().map_or(0, |b| b.len())
    }

    /// Start a new stream, discarding any incomplete one
    pub fn begin(&mut self) {
        if let Some(stale) = self.buffer.replace(BytesMut::new()) {
            debug!(
                "Discarding incomplete artwork stream of {} bytes",
                stale.len()
            );
        }
    }

    /// Append a fragment; returns false when no stream is in progress
    pub fn append(&mut self, data: &[u8]) -> bool {
        match self.buffer.as_mut() {
            Some(buffer) => {
                buffer.extend_from_slice(data);
                true
            }
            None => {
                debug!("Artwork fragment of {} bytes without START, dropped", data.len());
                false
            }
        }
    }

    /// Finish the stream and decode it; `None` when no stream is in progress
    pub fn finish(&mut self) -> Option<Option<Artwork>> {
        let buffer = self.buffer.take()?.freeze();
        match self.decoder.decode(&buffer) {
            Ok(artwork) => {
                info!("Artwork assembled: {:?}, {} bytes", artwork.format, artwork.len());
                Some(Some(artwork))
            }
            Err(e) => {
                warn!("Failed to decode artwork: {}", e);
                Some(None)
            }
        }
    }

    /// Feed one artwork message through the state machine
    pub fn process(&mut self, art: &JacketArt) -> AssemblyOutcome {
        match art {
            JacketArt::Url(url) => {
                info!("Loading artwork from {}", url);
                match self.decoder.load_url(url) {
                    Ok(artwork) => AssemblyOutcome::Complete(Some(artwork)),
                    Err(e) => {
                        warn!("Failed to load artwork from {}: {}", url, e);
                        AssemblyOutcome::Complete(None)
                    }
                }
            }
            JacketArt::Fragment {
                image_type,
                flag,
                data,
            } => {
                if *flag == PacketFlag::Start {
                    info!("Artwork stream started ({:?})", image_type);
                    self.begin();
                }
                if !data.is_empty() {
                    self.append(data);
                }
                if *flag == PacketFlag::End {
                    return match self.finish() {
                        Some(artwork) => AssemblyOutcome::Complete(artwork),
                        None => {
                            debug!("Artwork END without START, ignored");
                            AssemblyOutcome::Ignored
                        }
                    };
                }
                if self.is_assembling() {
                    AssemblyOutcome::Pending
                } else {
                    AssemblyOutcome::Ignored
                }
            }
            JacketArt::Unavailable => {
                info!("Receiver reports no artwork");
                AssemblyOutcome::Ignored
            }
            JacketArt::Resolved(artwork) => AssemblyOutcome::Complete(artwork.clone()),
        }
    }
}

impl std::fmt::Debug for ArtworkAssembler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArtworkAssembler")
            .field("buffered", &self.buffered_len())
            .field("assembling", &self.is_assembling())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::ImageType;
    use parking_lot::Mutex;

    const JPEG_HEADER: [u8; 3] = [0xFF, 0xD8, 0xFF];

    /// Records every decoded buffer
    #[derive(Default)]
    struct RecordingDecoder {
        decoded: Mutex<Vec<Vec<u8>>>,
    }

    impl ArtworkDecoder for RecordingDecoder {
        fn decode(&self, data: &[u8]) -> Result<Artwork> {
            self.decoded.lock().push(data.to_vec());
            Ok(Artwork {
                format: ImageFormat::Jpeg,
                data: Bytes::copy_from_slice(data),
                url: None,
            })
        }

        fn load_url(&self, url: &str) -> Result<Artwork> {
            Err(StateError::ArtworkFetch(format!("offline: {}", url)))
        }
    }

    fn fragment(flag: PacketFlag, data: &[u8]) -> JacketArt {
        JacketArt::fragment(ImageType::Jpeg, flag, data.to_vec())
    }

    #[test]
    fn test_sniff_formats() {
        assert_eq!(ImageFormat::sniff(&JPEG_HEADER), Some(ImageFormat::Jpeg));
        assert_eq!(
            ImageFormat::sniff(b"\x89PNG\r\n\x1a\nrest"),
            Some(ImageFormat::Png)
        );
        assert_eq!(ImageFormat::sniff(b"BM...."), Some(ImageFormat::Bmp));
        assert_eq!(ImageFormat::sniff(b"GIF89a"), Some(ImageFormat::Gif));
        assert_eq!(ImageFormat::sniff(b"text"), None);
    }

    #[test]
    fn test_stream_assembles_in_order() {
        let decoder = Arc::new(RecordingDecoder::default());
        let mut assembler = ArtworkAssembler::new(decoder.clone());

        assert_eq!(assembler.process(&fragment(PacketFlag::Start, b"ab")), AssemblyOutcome::Pending);
        assert_eq!(assembler.process(&fragment(PacketFlag::Middle, b"cd")), AssemblyOutcome::Pending);
        let outcome = assembler.process(&fragment(PacketFlag::End, b"ef"));

        match outcome {
            AssemblyOutcome::Complete(Some(artwork)) => assert_eq!(&artwork.data[..], b"abcdef"),
            other => panic!("unexpected outcome {:?}", other),
        }
        assert!(!assembler.is_assembling());
        assert_eq!(decoder.decoded.lock().len(), 1);
    }

    #[test]
    fn test_orphan_fragments_are_ignored() {
        let decoder = Arc::new(RecordingDecoder::default());
        let mut assembler = ArtworkAssembler::new(decoder.clone());

        assert_eq!(assembler.process(&fragment(PacketFlag::Middle, b"xx")), AssemblyOutcome::Ignored);
        assert_eq!(assembler.process(&fragment(PacketFlag::End, b"yy")), AssemblyOutcome::Ignored);
        assert!(decoder.decoded.lock().is_empty());
    }

    #[test]
    fn test_second_start_discards_partial_stream() {
        let decoder = Arc::new(RecordingDecoder::default());
        let mut assembler = ArtworkAssembler::new(decoder.clone());

        assembler.process(&fragment(PacketFlag::Start, b"old"));
        assembler.process(&fragment(PacketFlag::Start, b"new"));
        assembler.process(&fragment(PacketFlag::End, b"!"));

        assert_eq!(decoder.decoded.lock().as_slice(), &[b"new!".to_vec()]);
    }

    #[test]
    fn test_failed_url_completes_empty() {
        let mut assembler = ArtworkAssembler::new(Arc::new(RecordingDecoder::default()));
        let outcome = assembler.process(&JacketArt::Url("http://receiver/art.jpg".to_string()));
        assert_eq!(outcome, AssemblyOutcome::Complete(None));
    }

    #[test]
    fn test_unavailable_is_ignored() {
        let mut assembler = ArtworkAssembler::new(Arc::new(RecordingDecoder::default()));
        assert_eq!(assembler.process(&JacketArt::Unavailable), AssemblyOutcome::Ignored);
    }

    #[test]
    fn test_raw_decoder_rejects_unknown_bytes() {
        let decoder = RawArtworkDecoder::default();
        assert!(matches!(
            decoder.decode(b"not an image"),
            Err(StateError::ArtworkDecode(_))
        ));

        let artwork = decoder.decode(&JPEG_HEADER).unwrap();
        assert_eq!(artwork.format, ImageFormat::Jpeg);
        assert_eq!(artwork.format.mime_type(), "image/jpeg");
    }

    #[test]
    fn test_raw_decoder_enforces_limit() {
        let decoder =
            RawArtworkDecoder::new(&DecoderConfig::default().with_max_artwork_bytes(2));
        assert!(decoder.decode(&JPEG_HEADER).is_err());
    }
}
