//! Error Types
//!
//! This module defines the error types used throughout the crate.
//!
//! # Overview
//!
//! The main error type [`VitrineError`] covers the failure modes of a
//! showcase's lifetime:
//! - Render surface / GPU initialization failures
//! - Catalog and settings configuration errors
//! - Window system and event loop errors
//!
//! A pointer ray that strikes nothing is *not* an error: hit-testing returns
//! `None` for that case. Repeated teardown steps are absorbed silently.
//!
//! # Usage
//!
//! All fallible public APIs return [`Result<T>`], an alias for
//! `std::result::Result<T, VitrineError>`.
//!
//! ```rust,ignore
//! use vitrine::errors::Result;
//!
//! fn load() -> Result<vitrine::Catalog> {
//!     vitrine::Catalog::from_json_str("[]")
//! }
//! ```

use thiserror::Error;

/// The main error type for the showcase.
#[derive(Error, Debug)]
pub enum VitrineError {
    // ========================================================================
    // Surface & Rendering Errors
    // ========================================================================
    /// No drawable surface could be created for the mount point.
    #[error("Render surface unavailable: {0}")]
    SurfaceUnavailable(String),

    /// Failed to request a compatible GPU adapter.
    #[error("Failed to request WGPU adapter: {0}")]
    AdapterRequestFailed(String),

    /// Failed to create the GPU device.
    #[error("Failed to create WGPU device: {0}")]
    DeviceCreateFailed(#[from] wgpu::RequestDeviceError),

    /// Window system error.
    #[error("Window system error: {0}")]
    WindowError(#[from] raw_window_handle::HandleError),

    /// Event loop error (winit).
    #[error("Event loop error: {0}")]
    EventLoopError(#[from] winit::error::EventLoopError),

    /// The viewport has no drawable area.
    #[error("Invalid viewport size {width}x{height}")]
    InvalidViewport {
        /// Width in physical pixels
        width: u32,
        /// Height in physical pixels
        height: u32,
    },

    // ========================================================================
    // Configuration Errors
    // ========================================================================
    /// The item catalog is malformed (duplicate id, bad color, non-finite transform...).
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Settings could not be applied.
    #[error("Settings error: {0}")]
    Settings(String),

    // ========================================================================
    // I/O & Parsing Errors
    // ========================================================================
    /// File I/O error.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON parse error.
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl From<wgpu::CreateSurfaceError> for VitrineError {
    fn from(err: wgpu::CreateSurfaceError) -> Self {
        VitrineError::SurfaceUnavailable(err.to_string())
    }
}

impl From<wgpu::RequestAdapterError> for VitrineError {
    fn from(err: wgpu::RequestAdapterError) -> Self {
        VitrineError::AdapterRequestFailed(err.to_string())
    }
}

/// Alias for `Result<T, VitrineError>`.
pub type Result<T> = std::result::Result<T, VitrineError>;
