//! Application layer orchestrating the wizard.
//!
//! `PaymentSession` owns the flow state and the outbound sender; the console
//! views drive it and render whatever it says. `AmbientAudio` manages the
//! autoplay-with-fallback lifecycle of the background track.

pub mod audio;
pub mod session;
