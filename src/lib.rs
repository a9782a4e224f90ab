// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Interactive 3D viewport with an orbital / first-person camera, built
//! on wgpu.
//!
//! Spinview embeds a real-time rendering surface in a desktop window and
//! drives a virtual camera from mouse and wheel input. Three drag modes
//! are supported: orbit (left button), first-person look (right button),
//! and pan (both buttons), plus proportional wheel zoom.
//!
//! # Key entry points
//!
//! - [`camera::CameraController`] - the gesture-driven camera state machine
//! - [`engine::ViewportEngine`] - wgpu surface, camera, and demo scene
//! - [`options::Options`] - runtime configuration (camera, display)
//! - [`Viewer`] - standalone winit window (`viewer` feature)
//!
//! # Architecture
//!
//! The camera controller is a pure state-transition engine with no GPU or
//! windowing dependency: pointer and wheel events mutate an owned pose,
//! and the renderer asks it for view/projection matrices once per frame.
//! The surrounding engine owns the wgpu context and a static colored-cube
//! scene; the viewer folds winit events into platform-agnostic
//! [`input::InputEvent`] values and repaints only when a handler requests
//! it.

pub mod camera;
pub mod engine;
pub mod error;
pub mod gpu;
pub mod input;
pub mod options;
pub mod renderer;
#[cfg(feature = "viewer")]
pub mod viewer;

pub use camera::CameraController;
pub use engine::ViewportEngine;
pub use error::SpinviewError;
pub use input::{ButtonMask, InputEvent};
pub use options::Options;
#[cfg(feature = "viewer")]
pub use viewer::Viewer;
