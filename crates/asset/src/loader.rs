//! Resolve, read and decode image files at runtime.
//!
//! The loader never logs. Whether a [`LoadError`] is shown to the user is
//! up to the caller; `NotFound` carries the request's report policy.

use std::{fs, io, num::NonZeroUsize, thread};

use spriteload_core::{LoadError, LoadResult};

use crate::{
    codec::{ImageCodec, ImageCrateCodec},
    image_asset::ImageAsset,
    request::LoadRequest,
};

/// Stateless image loader over an injected codec.
#[derive(Clone, Debug, Default)]
pub struct AssetImageLoader<C = ImageCrateCodec> {
    codec: C,
}

impl AssetImageLoader<ImageCrateCodec> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: ImageCodec> AssetImageLoader<C> {
    pub fn with_codec(codec: C) -> Self {
        Self { codec }
    }

    pub fn load(&self, request: &LoadRequest) -> LoadResult<ImageAsset> {
        let path = request.resolve();

        if !path.is_file() {
            return Err(LoadError::NotFound {
                path,
                report: request.missing_file_report(),
            });
        }

        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            // Removed between the check and the read.
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(LoadError::NotFound {
                    path,
                    report: request.missing_file_report(),
                });
            }
            Err(e) => {
                return Err(LoadError::DecodeFailed {
                    path,
                    reason: format!("read failed: {e}"),
                });
            }
        };

        self.codec
            .decode(&bytes)
            .map_err(|e| LoadError::DecodeFailed {
                path,
                reason: e.reason().to_owned(),
            })
    }

    /// Load independent requests on at most `available_parallelism` scoped
    /// threads. Results keep request order.
    pub fn load_many(&self, requests: &[LoadRequest]) -> Vec<LoadResult<ImageAsset>>
    where
        C: Sync,
    {
        if requests.is_empty() {
            return Vec::new();
        }
        let workers = thread::available_parallelism()
            .map(NonZeroUsize::get)
            .unwrap_or(1);
        let chunk_size = requests.len().div_ceil(workers);

        let load_chunk = |chunk: &[LoadRequest]| -> Vec<LoadResult<ImageAsset>> {
            chunk.iter().map(|req| self.load(req)).collect()
        };

        thread::scope(|s| {
            let handles: Vec<_> = requests
                .chunks(chunk_size)
                .map(|chunk| {
                    // Fall back to the calling thread if the OS refuses a new one.
                    thread::Builder::new()
                        .spawn_scoped(s, move || load_chunk(chunk))
                        .map_err(|_| chunk)
                })
                .collect();

            let mut results = Vec::with_capacity(requests.len());
            for handle in handles {
                match handle {
                    Ok(h) => match h.join() {
                        Ok(chunk_results) => results.extend(chunk_results),
                        Err(panic) => std::panic::resume_unwind(panic),
                    },
                    Err(chunk) => results.extend(load_chunk(chunk)),
                }
            }
            results
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::path::Path;

    use spriteload_core::MissingFileReport;
    use tempfile::tempdir;

    use crate::codec::CodecError;

    fn write_png(path: &Path, width: u32, height: u32) {
        image::RgbaImage::from_pixel(width, height, image::Rgba([200, 100, 50, 255]))
            .save(path)
            .expect("write png fixture");
    }

    #[test]
    fn loads_64x64_png() {
        let dir = tempdir().expect("failed to create temp directory");
        let path = dir.path().join("sprite.png");
        write_png(&path, 64, 64);

        let req = LoadRequest::absolute(&path);
        let asset = AssetImageLoader::new().load(&req).expect("load sprite");
        assert_eq!(asset.width(), 64);
        assert_eq!(asset.height(), 64);
        assert_eq!(asset.pixels().len(), 64 * 64 * 4);
    }

    #[test]
    fn loads_relative_to_base() {
        let dir = tempdir().expect("failed to create temp directory");
        write_png(&dir.path().join("ui.png"), 12, 7);

        let base = dir.path().join("");
        let req = LoadRequest::relative(base, "ui.png").unwrap();
        let asset = AssetImageLoader::new().load(&req).expect("load ui");
        assert_eq!((asset.width(), asset.height()), (12, 7));
    }

    #[test]
    fn missing_file_is_not_found_with_policy() {
        let dir = tempdir().expect("failed to create temp directory");
        let path = dir.path().join("missing.png");

        let loud = LoadRequest::absolute(&path);
        match AssetImageLoader::new().load(&loud) {
            Err(LoadError::NotFound { path: p, report }) => {
                assert_eq!(p, path);
                assert_eq!(report, MissingFileReport::Error);
            }
            other => panic!("expected NotFound, got {other:?}"),
        }

        let quiet = loud.clone().missing_file_is_error(false);
        match AssetImageLoader::new().load(&quiet) {
            Err(LoadError::NotFound { report, .. }) => {
                assert_eq!(report, MissingFileReport::Silent)
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn empty_path_and_directory_are_not_found() {
        let loader = AssetImageLoader::new();
        assert!(loader.load(&LoadRequest::absolute("")).unwrap_err().is_not_found());

        let dir = tempdir().expect("failed to create temp directory");
        let req = LoadRequest::relative(dir.path(), "").unwrap();
        assert!(loader.load(&req).unwrap_err().is_not_found());
    }

    #[test]
    fn empty_and_garbage_files_fail_decode() {
        let dir = tempdir().expect("failed to create temp directory");
        let empty = dir.path().join("empty.png");
        let garbage = dir.path().join("garbage.png");
        fs::write(&empty, b"").unwrap();
        fs::write(&garbage, [0x13u8, 0x37, 0x00, 0xff, 0x42, 0x42]).unwrap();

        let loader = AssetImageLoader::new();
        for path in [&empty, &garbage] {
            let err = loader
                .load(&LoadRequest::absolute(path))
                .unwrap_err();
            assert!(err.is_decode_failed(), "{err}");
            assert_eq!(err.path(), path.as_path());
        }
    }

    #[test]
    fn repeated_loads_are_identical() {
        let dir = tempdir().expect("failed to create temp directory");
        let path = dir.path().join("sprite.png");
        write_png(&path, 9, 4);

        let loader = AssetImageLoader::new();
        let req = LoadRequest::absolute(&path);
        let first = loader.load(&req).unwrap();
        let second = loader.load(&req).unwrap();
        assert_eq!(first, second);
    }

    struct FixedCodec;

    impl ImageCodec for FixedCodec {
        fn decode(&self, bytes: &[u8]) -> Result<ImageAsset, CodecError> {
            match bytes {
                b"ok" => ImageAsset::new_rgba8(2, 2, vec![0; 16]),
                _ => Err(CodecError::new("unsupported")),
            }
        }
    }

    #[test]
    fn codec_is_injected() {
        let dir = tempdir().expect("failed to create temp directory");
        let good = dir.path().join("good.bin");
        let bad = dir.path().join("bad.bin");
        fs::write(&good, b"ok").unwrap();
        fs::write(&bad, b"nope").unwrap();

        let loader = AssetImageLoader::with_codec(FixedCodec);
        let asset = loader
            .load(&LoadRequest::absolute(&good))
            .unwrap();
        assert_eq!(asset.width(), 2);

        match loader.load(&LoadRequest::absolute(&bad)) {
            Err(LoadError::DecodeFailed { reason, .. }) => assert_eq!(reason, "unsupported"),
            other => panic!("expected DecodeFailed, got {other:?}"),
        }
    }

    #[test]
    fn load_many_keeps_order() {
        let dir = tempdir().expect("failed to create temp directory");
        write_png(&dir.path().join("a.png"), 4, 4);
        write_png(&dir.path().join("c.png"), 8, 2);

        let requests: Vec<_> = ["a.png", "b.png", "c.png"]
            .into_iter()
            .map(|name| LoadRequest::relative(dir.path(), name).unwrap())
            .collect();

        let results = AssetImageLoader::new().load_many(&requests);
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].as_ref().unwrap().width(), 4);
        assert!(results[1].as_ref().unwrap_err().is_not_found());
        assert_eq!(results[2].as_ref().unwrap().height(), 2);
    }

    #[test]
    fn load_many_handles_more_requests_than_cores() {
        let dir = tempdir().expect("failed to create temp directory");
        write_png(&dir.path().join("last.png"), 3, 3);

        let cores = thread::available_parallelism().map(NonZeroUsize::get).unwrap_or(1);
        let mut requests: Vec<_> = (0..cores * 4 + 1)
            .map(|i| LoadRequest::relative(dir.path(), format!("missing-{i}.png")).unwrap())
            .collect();
        requests.push(LoadRequest::relative(dir.path(), "last.png").unwrap());

        let results = AssetImageLoader::new().load_many(&requests);
        assert_eq!(results.len(), requests.len());
        let (last, missing) = results.split_last().unwrap();
        assert!(missing.iter().all(|r| r.as_ref().unwrap_err().is_not_found()));
        for (i, result) in missing.iter().enumerate() {
            let expected = dir.path().join(format!("missing-{i}.png"));
            assert_eq!(result.as_ref().unwrap_err().path(), expected.as_path());
        }
        assert_eq!(last.as_ref().unwrap().width(), 3);
    }

    #[test]
    fn load_many_empty_batch() {
        assert!(AssetImageLoader::new().load_many(&[]).is_empty());
    }
}
