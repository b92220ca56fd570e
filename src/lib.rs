//! atmark - terminal text styling and layout.
//!
//! Text is styled with in-band `@BF@` tokens (background and foreground
//! palette nibbles, or `X` to leave a channel alone). On top of that the
//! crate measures, slices, wraps, justifies and frames such text without
//! ever counting the tokens as columns.
//!
//! ```
//! use atmark::{fill, render, WrapOptions};
//!
//! let text = fill("AAAA BBBB CCCC DDDD", &WrapOptions::new(9)).unwrap();
//! assert_eq!(text, "AAAA BBBB\nCCCC DDDD");
//! assert_eq!(render("plain").unwrap(), "plain");
//! ```

pub mod border;
pub mod config;
pub mod error;
pub mod frame;
pub mod header;
pub mod markup;
pub mod message;
pub mod palette;
pub mod wrap;

pub use border::{BorderSpec, BorderStyle};
pub use config::Config;
pub use error::{Error, Result};
pub use frame::{border_line, named_border_line, render_box, render_named_box, BoxOptions, Padding};
pub use header::{header, write_header, HeaderOptions};
pub use markup::{plain_length, render, slice, Channel, Markup, Measure, Style};
pub use message::{format_message, format_message_with, write_message, Level, MessageStyle};
pub use palette::Color;
pub use wrap::{fill, wrap, Align, WrapOptions};
