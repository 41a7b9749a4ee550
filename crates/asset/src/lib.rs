//! Runtime image asset loading.
//! Resolves a request to a file, reads it and decodes it through an
//! injected [`ImageCodec`] into an RGBA8 [`ImageAsset`].

pub mod codec;
pub mod image_asset;
pub mod loader;
pub mod request;

pub use codec::{CodecError, ImageCodec, ImageCrateCodec};
pub use image_asset::ImageAsset;
pub use loader::AssetImageLoader;
pub use request::{LoadRequest, PathMode, RequestError};
pub use spriteload_core::{LoadError, LoadResult, MissingFileReport};
