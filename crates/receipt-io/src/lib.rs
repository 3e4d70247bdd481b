//! # receipt-io: File System Layer for Receipts
//!
//! This crate reads baskets from an input directory and writes receipts to
//! an output directory. It knows nothing about tax or parsing.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Receipts Data Flow                               │
//! │                                                                         │
//! │  input/basket1, input/basket2, ...                                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   receipt-io (THIS CRATE)                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐                       ┌───────────────┐    │   │
//! │  │   │ BasketSource  │                       │  ReceiptSink  │    │   │
//! │  │   │ (source.rs)   │                       │  (sink.rs)    │    │   │
//! │  │   │               │                       │               │    │   │
//! │  │   │ sorted files  │                       │ output0       │    │   │
//! │  │   │ → RawBasket   │                       │ output1 ...   │    │   │
//! │  │   └───────┬───────┘                       └───────▲───────┘    │   │
//! │  └───────────┼───────────────────────────────────────┼────────────┘   │
//! │              ▼                                       │                 │
//! │      receipt-core::BasketPipeline ──► receipt strings ┘                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use receipt_io::{BasketSource, ReceiptSink};
//!
//! let baskets = BasketSource::new("./input").read_baskets()?;
//! let receipts = BasketPipeline::default().process(&baskets)?;
//! ReceiptSink::new("./output").write_all(&receipts)?;
//! ```

pub mod error;
pub mod sink;
pub mod source;

pub use error::{IoError, IoResult};
pub use sink::ReceiptSink;
pub use source::{BasketSource, RawBasket};
