#![doc = include_str!("../README.md")]
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    clippy::branches_sharing_code,
    clippy::map_unwrap_or,
    clippy::match_wildcard_for_single_variants,
    clippy::missing_errors_doc,
    clippy::must_use_candidate,
    clippy::needless_for_each,
    clippy::redundant_closure_for_method_calls,
    clippy::semicolon_if_nothing_returned,
    clippy::unreadable_literal,
    clippy::unwrap_used,
    clippy::expect_used,
    deprecated_in_future,
    ellipsis_inclusive_range_patterns,
    future_incompatible,
    missing_copy_implementations,
    missing_debug_implementations,
    // missing_docs,
    nonstandard_style,
    rust_2018_compatibility,
    rust_2018_idioms,
    rust_2021_compatibility,
    rustdoc::bare_urls,
    rustdoc::broken_intra_doc_links,
    rustdoc::invalid_html_tags,
    rustdoc::invalid_rust_codeblocks,
    rustdoc::private_intra_doc_links,
    single_use_lifetimes,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unused,
    variant_size_differences
)]

use crate::color::Channel;

pub mod color;
pub mod config;
pub mod num;
pub mod random;
pub mod wheel;

pub use config::Config;

/// Results that can be returned from this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can be returned from this crate.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An argument was outside the domain of the operation.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// A channel value does not fit in 8 bits.
    #[error("{channel} channel value {value} is out of range 0..=255")]
    OutOfRangeChannel {
        /// The offending channel.
        channel: Channel,
        /// The value that was passed for it.
        value: u32,
    },
}

pub mod prelude {
    //! Most commonly used exports.

    pub use crate::{
        color::{pack_rgb, unpack_rgb, Channel, Color},
        config::{ChannelPolicy, Config},
        num::Radians,
        random::{do_randomly, Random, Sequence},
        wheel::{angle_color, angle_color_with, random_angle_color, random_angle_color_with},
        Error, Result,
    };
}
