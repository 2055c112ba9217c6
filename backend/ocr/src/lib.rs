//! OCR provider bindings for document verification.
//!
//! One capability — extract text from an image — behind two transport
//! bindings: a local engine shelled out on-device, or the HTTP proxy the
//! gateway exposes. The binding is chosen once at process start; the rest
//! of the system only ever sees `dyn TextExtractor`.

pub mod error;
pub mod extractor;
pub mod local;
pub mod probe;
pub mod remote;

pub use error::OcrError;
pub use extractor::TextExtractor;
pub use local::TesseractExtractor;
pub use probe::select_extractor;
pub use remote::RemoteExtractor;
