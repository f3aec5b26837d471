//! Folio Web Platform
//!
//! Runs the portfolio page in a browser. [`WebPlatform`] implements the
//! `folio_platform` traits on top of `web-sys`:
//!
//! - timers through `setTimeout` / `clearTimeout`
//! - anchor geometry through `getElementById` + `getBoundingClientRect`
//! - the viewport snapshot from `scrollY`, `innerHeight` and the body's
//!   `scrollHeight`
//! - `scroll` / `resize` listeners that are removed when their subscription
//!   is dropped
//!
//! The exported `run()` entry point mounts the page into `#folio-root` (or
//! the body) and repaints it whenever its state changes.
//!
//! Everything here only exists on `wasm32`.

#[cfg(target_arch = "wasm32")]
mod entry;
#[cfg(target_arch = "wasm32")]
mod platform;

#[cfg(target_arch = "wasm32")]
pub use entry::run;
#[cfg(target_arch = "wasm32")]
pub use platform::WebPlatform;
