//! Asynchronous cover loading.
//!
//! Each request decodes on its own worker thread and reports back over a
//! channel; results are drained once per frame on the UI thread. Events
//! may arrive in any order relative to each other and to user input;
//! each one only touches the entry it was keyed to, so ordering never
//! matters. A failed decode flips its entry to `Failed` and the spine
//! and detail panel keep the flat-tone fallback.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{Receiver, Sender, channel};
use std::thread;

use egui::{ColorImage, Context, TextureHandle, TextureOptions};

/// Load state of one item's cover.
pub enum CoverStatus {
    /// A worker thread is decoding.
    Loading,
    /// Decoded and uploaded.
    Ready(TextureHandle),
    /// Missing file or decode error; the fallback visual stays.
    Failed,
}

struct CoverEvent {
    item: usize,
    result: Result<ColorImage, String>,
}

/// Spawns decode workers and tracks per-item cover state.
pub struct CoverLoader {
    tx: Sender<CoverEvent>,
    rx: Receiver<CoverEvent>,
    statuses: HashMap<usize, CoverStatus>,
}

impl Default for CoverLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl CoverLoader {
    /// Create a loader with no requests in flight.
    pub fn new() -> Self {
        let (tx, rx) = channel();
        Self {
            tx,
            rx,
            statuses: HashMap::new(),
        }
    }

    /// Begin loading `path` for `item`, unless already requested.
    pub fn request(&mut self, item: usize, path: PathBuf) {
        if self.statuses.contains_key(&item) {
            return;
        }
        self.statuses.insert(item, CoverStatus::Loading);

        let tx = self.tx.clone();
        thread::spawn(move || {
            let result = decode_cover(&path);
            // The receiver only disappears on shutdown; nothing to do then.
            let _ = tx.send(CoverEvent { item, result });
        });
    }

    /// Record that `item` has no cover at all, so callers can treat
    /// "absent" and "failed" uniformly.
    pub fn mark_missing(&mut self, item: usize) {
        self.statuses.entry(item).or_insert(CoverStatus::Failed);
    }

    /// Drain finished decodes and upload ready images as textures.
    pub fn poll(&mut self, ctx: &Context) {
        while let Ok(event) = self.rx.try_recv() {
            let status = match event.result {
                Ok(img) => CoverStatus::Ready(ctx.load_texture(
                    format!("cover-{}", event.item),
                    img,
                    TextureOptions::LINEAR,
                )),
                Err(err) => {
                    log::debug!("cover for item {} unavailable: {}", event.item, err);
                    CoverStatus::Failed
                }
            };
            self.statuses.insert(event.item, status);
        }
    }

    /// Current status for `item`, if a request or mark was made.
    pub fn status(&self, item: usize) -> Option<&CoverStatus> {
        self.statuses.get(&item)
    }

    /// Ready texture for `item`, if the cover loaded.
    pub fn texture(&self, item: usize) -> Option<&TextureHandle> {
        match self.statuses.get(&item) {
            Some(CoverStatus::Ready(texture)) => Some(texture),
            _ => None,
        }
    }
}

fn decode_cover(path: &Path) -> Result<ColorImage, String> {
    let bytes = std::fs::read(path)
        .map_err(|e| format!("failed to read {}: {}", path.display(), e))?;
    let decoded = image::load_from_memory(&bytes)
        .map_err(|e| format!("failed to decode {}: {}", path.display(), e))?
        .to_rgba8();
    let (width, height) = decoded.dimensions();
    Ok(ColorImage::from_rgba_unmultiplied(
        [width as usize, height as usize],
        decoded.as_raw(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    #[test]
    fn test_decode_missing_file() {
        let result = decode_cover(Path::new("/nonexistent/cover.png"));
        assert!(result.is_err());
    }

    #[test]
    fn test_decode_invalid_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("not-an-image.png");
        std::fs::write(&path, b"definitely not a png").unwrap();
        assert!(decode_cover(&path).is_err());
    }

    #[test]
    fn test_failed_load_only_flips_its_own_entry() {
        let ctx = Context::default();
        let mut loader = CoverLoader::new();
        loader.mark_missing(0);
        loader.request(1, PathBuf::from("/nonexistent/cover.png"));

        let deadline = Instant::now() + Duration::from_secs(5);
        loop {
            loader.poll(&ctx);
            match loader.status(1) {
                Some(CoverStatus::Failed) => break,
                _ if Instant::now() > deadline => panic!("decode result never arrived"),
                _ => thread::sleep(Duration::from_millis(10)),
            }
        }

        assert!(matches!(loader.status(0), Some(CoverStatus::Failed)));
        assert!(loader.texture(0).is_none());
        assert!(loader.texture(1).is_none());
    }

    #[test]
    fn test_request_is_idempotent() {
        let mut loader = CoverLoader::new();
        loader.mark_missing(0);
        // A later request must not overwrite the recorded state.
        loader.request(0, PathBuf::from("/nonexistent/cover.png"));
        assert!(matches!(loader.status(0), Some(CoverStatus::Failed)));
    }
}
