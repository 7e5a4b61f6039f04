//! CSS transformer for the `csslit` rewriter.
//!
//! Consumes a static CSS buffer, parses it and prints it back, minified by
//! default. Source maps are never produced here: position mapping is handled
//! by the text-splice layer of the rewriter.
//!
//! ## Example
//! ```
//! use swc_core::common::{BytePos, Span};
//!
//! let input = ".example { background: #ff0; }";
//!
//! // Note: `Span` usually comes from the literal's position in the source file
//! let span = Span::new(
//!     BytePos(1),
//!     BytePos(1 + input.len() as u32),
//! );
//! let mut errors = Vec::new();
//!
//! let result = csslit_css::transform_css(input, span, &mut errors, &Default::default());
//!
//! if let Some(transformed_css) = result {
//!     assert_eq!(".example{background:#ff0}", transformed_css);
//! }
//! ```

mod css;

pub use css::*;
