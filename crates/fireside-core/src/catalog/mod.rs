//! Static content tables for the Fireside demo
//!
//! Album metadata, keyword options, slogans, gradient palettes and player
//! asset bundles. All of it is fixed product data; nothing here talks to
//! the network or the filesystem.

pub mod albums;
pub mod assets;
pub mod gradients;
pub mod keywords;
pub mod slogans;

pub use albums::{stack_items, AlbumInfo, CAPTURE_ALBUMS, SHOWCASE_ALBUMS};
pub use assets::{bundle_for, AssetBundle, TrackInfo, DEFAULT_BUNDLE, MOCK_TAGS};
pub use gradients::{gradient_for_key, GradientSpec, BORDER_GRADIENTS};
pub use keywords::{album_for_keyword, KeywordOption, KEYWORD_OPTIONS};
pub use slogans::{random_slogan, SLOGANS};
